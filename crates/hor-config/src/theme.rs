//! Navbar, footer, homepage and code-highlighting settings.
//!
//! These sections are passed through to the rendering engine untouched
//! after validation.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, require_http_url, require_non_empty};

/// Horizontal placement of a navbar item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarPosition {
    #[default]
    Left,
    Right,
}

/// Navbar logo image.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Logo {
    /// Alt text.
    pub alt: String,
    /// Image URL or site-relative path.
    pub src: String,
}

/// A single entry in the navbar.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NavbarItem {
    /// Link to a content page by id.
    Doc {
        doc_id: String,
        label: String,
        #[serde(default)]
        position: NavbarPosition,
        /// Path prefix that marks the item active (e.g. `docs`).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        active_base_path: Option<String>,
    },
    /// External (`href`) or site-relative (`to`) link.
    Link {
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        href: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<String>,
        #[serde(default)]
        position: NavbarPosition,
    },
}

impl NavbarItem {
    /// Display label.
    pub fn label(&self) -> &str {
        match self {
            Self::Doc { label, .. } | Self::Link { label, .. } => label,
        }
    }

    /// Content page id, for `doc` items.
    pub fn doc_id(&self) -> Option<&str> {
        match self {
            Self::Doc { doc_id, .. } => Some(doc_id),
            Self::Link { .. } => None,
        }
    }
}

/// Navbar configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Title shown next to the logo. Falls back to the site title when empty.
    pub title: Option<String>,
    pub logo: Option<Logo>,
    /// Ordered navbar entries.
    pub items: Vec<NavbarItem>,
}

/// A link inside a footer group. Exactly one of `href`/`to` must be set.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FooterLink {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

/// Titled column of footer links.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct FooterGroup {
    pub title: String,
    #[serde(default)]
    pub items: Vec<FooterLink>,
}

/// Footer color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    #[default]
    Dark,
    Light,
}

/// Footer configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FooterConfig {
    pub style: FooterStyle,
    /// Ordered link groups.
    pub links: Vec<FooterGroup>,
    /// Copyright HTML. `{year}` is left for the engine to substitute.
    pub copyright: Option<String>,
}

/// One feature column on the homepage.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Feature {
    pub title: String,
    pub items: Vec<String>,
}

/// Homepage hero and feature data.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HomepageConfig {
    /// `<meta description>` for the landing page.
    #[serde(default)]
    pub description: Option<String>,
    /// Target of the call-to-action button.
    #[serde(default = "default_start_url")]
    pub start_url: String,
    /// Call-to-action label.
    #[serde(default = "default_start_label")]
    pub start_label: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

fn default_start_url() -> String {
    "/docs/".to_owned()
}

fn default_start_label() -> String {
    "Start Learning".to_owned()
}

/// Syntax highlighting theme names.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct PrismConfig {
    pub theme: String,
    pub dark_theme: String,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            theme: "github".to_owned(),
            dark_theme: "dracula".to_owned(),
        }
    }
}

/// Check that a link has exactly one target and that `href` is absolute.
fn validate_link_target(
    href: Option<&str>,
    to: Option<&str>,
    field: &str,
) -> Result<(), ConfigError> {
    match (href, to) {
        (Some(href), None) => require_http_url(href, &format!("{field}.href")),
        (None, Some(to)) => require_non_empty(to, &format!("{field}.to")),
        (Some(_), Some(_)) => Err(ConfigError::Validation(format!(
            "{field} cannot set both href and to"
        ))),
        (None, None) => Err(ConfigError::Validation(format!(
            "{field} requires href or to"
        ))),
    }
}

impl NavbarConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (i, item) in self.items.iter().enumerate() {
            let field = format!("navbar.items[{i}]");
            require_non_empty(item.label(), &format!("{field}.label"))?;
            match item {
                NavbarItem::Doc { doc_id, .. } => {
                    require_non_empty(doc_id, &format!("{field}.doc_id"))?;
                }
                NavbarItem::Link { href, to, .. } => {
                    validate_link_target(href.as_deref(), to.as_deref(), &field)?;
                }
            }
        }
        Ok(())
    }
}

impl FooterConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (i, group) in self.links.iter().enumerate() {
            require_non_empty(&group.title, &format!("footer.links[{i}].title"))?;
            for (j, link) in group.items.iter().enumerate() {
                let field = format!("footer.links[{i}].items[{j}]");
                require_non_empty(&link.label, &format!("{field}.label"))?;
                validate_link_target(link.href.as_deref(), link.to.as_deref(), &field)?;
            }
        }
        Ok(())
    }
}

impl HomepageConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.start_url, "homepage.start_url")?;
        for (i, feature) in self.features.iter().enumerate() {
            require_non_empty(&feature.title, &format!("homepage.features[{i}].title"))?;
            if feature.items.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "homepage.features[{i}] ({}) must list at least one item",
                    feature.title
                )));
            }
        }
        Ok(())
    }
}
