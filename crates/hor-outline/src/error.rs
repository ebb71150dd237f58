//! Outline error types.

use std::path::PathBuf;

/// Authoring error found while validating an outline.
///
/// Every variant is fatal to a build; the CLI may downgrade
/// [`ValidationError::UnresolvedReference`] according to the site's broken
/// link policy.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A doc leaf names a page that is not in the content store.
    #[error("Unresolved page reference '{id}' in {path}")]
    UnresolvedReference {
        /// Missing page id.
        id: String,
        /// Label path of the group holding the reference.
        path: String,
    },
    /// A section or group has no items.
    #[error("Group '{label}' has no items")]
    EmptyGroup {
        /// Section name or group label.
        label: String,
    },
    /// Two top-level sections share a name.
    #[error("Duplicate section name '{name}'")]
    DuplicateSection {
        /// Repeated section name.
        name: String,
    },
    /// A group or link has a blank label.
    #[error("Missing label in {path}")]
    EmptyLabel {
        /// Label path of the parent.
        path: String,
    },
    /// A link leaf whose href is not an absolute http(s) URL.
    #[error("Link '{label}' has invalid href '{href}'")]
    InvalidHref {
        /// Link label.
        label: String,
        /// Offending href.
        href: String,
    },
}

impl ValidationError {
    /// True for errors governed by the broken link policy.
    pub fn is_broken_link(&self) -> bool {
        matches!(self, Self::UnresolvedReference { .. })
    }
}

/// Error reading or decoding a sidebars file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Sidebars file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Malformed JSON.
    #[error("Invalid sidebars JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Malformed YAML.
    #[error("Invalid sidebars YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Extension is not `.json`, `.yaml` or `.yml`.
    #[error("Unsupported sidebars format: {} (expected .json, .yaml or .yml)", .0.display())]
    UnsupportedFormat(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_reference_message() {
        let err = ValidationError::UnresolvedReference {
            id: "missing-page".to_owned(),
            path: "A".to_owned(),
        };

        assert_eq!(
            err.to_string(),
            "Unresolved page reference 'missing-page' in A"
        );
        assert!(err.is_broken_link());
    }

    #[test]
    fn test_structural_errors_are_not_broken_links() {
        let err = ValidationError::EmptyGroup {
            label: "Foo".to_owned(),
        };

        assert_eq!(err.to_string(), "Group 'Foo' has no items");
        assert!(!err.is_broken_link());
    }

    #[test]
    fn test_unsupported_format_message() {
        let err = ParseError::UnsupportedFormat(PathBuf::from("sidebars.js"));

        assert!(err.to_string().contains("sidebars.js"));
    }
}
