//! YAML front matter parsing for content pages.

use serde::Deserialize;

/// Fields read from a page's front matter. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub(crate) struct FrontMatter {
    pub id: Option<String>,
    pub title: Option<String>,
    pub sidebar_label: Option<String>,
    pub description: Option<String>,
}

/// Split a document into its front matter block and body.
///
/// Front matter is a block delimited by `---` lines at the very start of the
/// file. Returns `(None, content)` when the document has none.
pub(crate) fn split(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return (None, content);
    };

    // Closing fence may be the first line (empty front matter).
    if let Some(body) = rest.strip_prefix("---") {
        return (Some(""), body.trim_start_matches(['\r', '\n']));
    }

    match rest.find("\n---") {
        Some(end) => {
            let yaml = &rest[..end];
            let after = &rest[end + 4..];
            (Some(yaml), after.trim_start_matches(['\r', '\n']))
        }
        None => (None, content),
    }
}

/// Parse front matter YAML.
///
/// Empty front matter yields the default (all fields unset).
pub(crate) fn parse(yaml: &str) -> Result<FrontMatter, serde_yaml::Error> {
    if yaml.trim().is_empty() {
        return Ok(FrontMatter::default());
    }
    serde_yaml::from_str(yaml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_without_front_matter() {
        let (fm, body) = split("# Intro\n\nText");
        assert!(fm.is_none());
        assert_eq!(body, "# Intro\n\nText");
    }

    #[test]
    fn test_split_with_front_matter() {
        let content = "---\nid: intro\ntitle: Introduction\n---\n# Heading\n";
        let (fm, body) = split(content);
        assert_eq!(fm, Some("id: intro\ntitle: Introduction"));
        assert_eq!(body, "# Heading\n");
    }

    #[test]
    fn test_split_empty_front_matter() {
        let (fm, body) = split("---\n---\nBody");
        assert_eq!(fm, Some(""));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_unterminated_is_body() {
        let content = "---\ntitle: Oops\n# Heading";
        let (fm, body) = split(content);
        assert!(fm.is_none());
        assert_eq!(body, content);
    }

    #[test]
    fn test_split_crlf() {
        let content = "---\r\ntitle: Win\r\n---\r\nBody";
        let (fm, body) = split(content);
        assert_eq!(fm.map(str::trim), Some("title: Win"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_parse_fields() {
        let fm = parse("id: why\ntitle: \"Why React?\"\nsidebar_label: Why\nslug: /why").unwrap();
        assert_eq!(fm.id.as_deref(), Some("why"));
        assert_eq!(fm.title.as_deref(), Some("Why React?"));
        assert_eq!(fm.sidebar_label.as_deref(), Some("Why"));
        assert!(fm.description.is_none());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse("  \n").unwrap(), FrontMatter::default());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        assert!(parse("title: [unclosed").is_err());
    }
}
