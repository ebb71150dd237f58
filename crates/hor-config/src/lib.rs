//! Site configuration for the course documentation site.
//!
//! Parses `hor.toml` with serde and provides auto-discovery of the config
//! file in parent directories. The loaded [`Config`] is built once at
//! startup and passed by reference to everything that needs it; nothing
//! mutates it afterwards.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `url`
//! - `docs.edit_url`
//! - `analytics.tracking_id`

mod expand;
mod theme;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use theme::{
    Feature, FooterConfig, FooterGroup, FooterLink, FooterStyle, HomepageConfig, Logo,
    NavbarConfig, NavbarItem, NavbarPosition, PrismConfig,
};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override sidebars file.
    pub sidebar_path: Option<PathBuf>,
    /// Override base URL.
    pub base_url: Option<String>,
    /// Override broken link policy.
    pub on_broken_links: Option<BrokenLinkPolicy>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "hor.toml";

/// What to do when a sidebar or navbar item names a page that does not exist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkPolicy {
    /// Fail the build.
    #[default]
    Throw,
    /// Log a warning and continue.
    Warn,
    /// Continue silently.
    Ignore,
}

/// Site configuration.
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Site title (also used as the homepage heading).
    pub title: String,
    /// One-line tagline under the title.
    pub tagline: String,
    /// Canonical site URL.
    pub url: String,
    /// Path prefix the site is served under. Starts and ends with `/`.
    pub base_url: String,
    pub favicon: Option<String>,
    /// GitHub organization or user that owns the site.
    pub organization: Option<String>,
    /// GitHub project name.
    pub project: Option<String>,
    /// Policy for references to missing pages.
    pub on_broken_links: BrokenLinkPolicy,
    pub i18n: I18nConfig,
    /// Documentation paths (relative strings from TOML).
    #[serde(skip_serializing)]
    docs: DocsConfigRaw,
    pub navbar: NavbarConfig,
    pub footer: FooterConfig,
    /// Analytics section (optional).
    pub analytics: Option<AnalyticsConfig>,
    /// Homepage data (optional).
    pub homepage: Option<HomepageConfig>,
    pub prism: PrismConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip_deserializing, rename(serialize = "docs"))]
    pub docs_resolved: DocsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Locale configuration.
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale used for `<html lang>` and the default route.
    pub default_locale: String,
    /// All locales the site is built for.
    pub locales: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".to_owned(),
            locales: vec!["en".to_owned()],
        }
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
    sidebar_path: Option<String>,
    edit_url: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug, Default, Serialize)]
pub struct DocsConfig {
    /// Directory holding the content pages.
    pub source_dir: PathBuf,
    /// Sidebars file (`.yaml`, `.yml` or `.json`).
    pub sidebar_path: PathBuf,
    /// Base URL for "edit this page" links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
}

/// Analytics configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct AnalyticsConfig {
    /// Tracking identifier (e.g. `G-XXXXXXX`).
    pub tracking_id: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`analytics.tracking_id`").
        field: String,
        /// Error message (e.g., "${`TRACKING_ID`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
pub(crate) fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `hor.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values. The result is
    /// validated once more after overrides.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            tracing::debug!(path = %discovered.display(), "Discovered config file");
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse configuration from a TOML string, resolving paths against `base`.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, env expansion or validation fails.
    pub fn from_toml_str(content: &str, base: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        config.resolve_paths(base);
        config.validate()?;
        Ok(config)
    }

    /// Title to show in the navbar.
    pub fn navbar_title(&self) -> &str {
        self.navbar.title.as_deref().unwrap_or(&self.title)
    }

    /// Analytics tracking id, if configured.
    pub fn analytics_id(&self) -> Option<&str> {
        self.analytics.as_ref().map(|a| a.tracking_id.as_str())
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(sidebar_path) = &settings.sidebar_path {
            self.docs_resolved.sidebar_path.clone_from(sidebar_path);
        }
        if let Some(base_url) = &settings.base_url {
            self.base_url.clone_from(base_url);
        }
        if let Some(policy) = settings.on_broken_links {
            self.on_broken_links = policy;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            title: "Documentation".to_owned(),
            tagline: String::new(),
            url: "http://localhost:3000".to_owned(),
            base_url: "/".to_owned(),
            favicon: None,
            organization: None,
            project: None,
            on_broken_links: BrokenLinkPolicy::default(),
            i18n: I18nConfig::default(),
            docs: DocsConfigRaw::default(),
            navbar: NavbarConfig::default(),
            footer: FooterConfig::default(),
            analytics: None,
            homepage: None,
            prism: PrismConfig::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
                sidebar_path: base.join("sidebars.yaml"),
                edit_url: None,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::from_toml_str(&content, config_dir)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_i18n()?;
        if let Some(ref edit_url) = self.docs_resolved.edit_url {
            require_http_url(edit_url, "docs.edit_url")?;
        }
        if let Some(ref analytics) = self.analytics {
            require_non_empty(&analytics.tracking_id, "analytics.tracking_id")?;
        }
        self.navbar.validate()?;
        self.footer.validate()?;
        if let Some(ref homepage) = self.homepage {
            homepage.validate()?;
        }
        Ok(())
    }

    /// Validate top-level site metadata.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.title, "title")?;
        require_non_empty(&self.url, "url")?;
        require_http_url(&self.url, "url")?;
        require_non_empty(&self.base_url, "base_url")?;

        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "base_url must start and end with /".to_owned(),
            ));
        }

        Ok(())
    }

    /// Validate locale configuration.
    fn validate_i18n(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.i18n.default_locale, "i18n.default_locale")?;

        if !self.i18n.locales.contains(&self.i18n.default_locale) {
            return Err(ConfigError::Validation(format!(
                "i18n.default_locale '{}' must be listed in i18n.locales",
                self.i18n.default_locale
            )));
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.url = expand::expand_env(&self.url, "url")?;
        expand::expand_opt(&mut self.docs.edit_url, "docs.edit_url")?;

        if let Some(ref mut analytics) = self.analytics {
            analytics.tracking_id =
                expand::expand_env(&analytics.tracking_id, "analytics.tracking_id")?;
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
            sidebar_path: resolve(self.docs.sidebar_path.as_deref(), "sidebars.yaml"),
            edit_url: self.docs.edit_url.clone(),
        };
    }
}
