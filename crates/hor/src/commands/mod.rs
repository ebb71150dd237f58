//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod config;
pub(crate) mod nav;
pub(crate) mod outline;

use std::path::PathBuf;

use clap::Args;
use hor_config::{BrokenLinkPolicy, CliSettings, Config};
use hor_content::{ContentStore, FsContentStore};
use hor_outline::{Outline, Sidebars};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use config::ConfigArgs;
pub(crate) use nav::NavArgs;
pub(crate) use outline::OutlineArgs;

/// Arguments shared by every command that loads the site.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover hor.toml).
    #[arg(short, long, env = "HOR_CONFIG")]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Sidebars file, `.yaml`, `.yml` or `.json` (overrides config).
    #[arg(long)]
    sidebars: Option<PathBuf>,

    /// Base URL the site is served under (overrides config).
    #[arg(long)]
    base_url: Option<String>,
}

/// Configuration, content pages and sidebars, loaded in that order.
pub(crate) struct Site {
    pub config: Config,
    pub store: FsContentStore,
    pub sidebars: Sidebars,
}

impl SiteArgs {
    /// Load and validate the configuration only.
    pub(crate) fn load_config(
        &self,
        on_broken_links: Option<BrokenLinkPolicy>,
    ) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            sidebar_path: self.sidebars.clone(),
            base_url: self.base_url.clone(),
            on_broken_links,
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }

    /// Load configuration, scan content and parse sidebars.
    pub(crate) fn load_site(
        &self,
        on_broken_links: Option<BrokenLinkPolicy>,
    ) -> Result<Site, CliError> {
        let config = self.load_config(on_broken_links)?;
        let store = FsContentStore::open(&config.docs_resolved.source_dir)?;
        let sidebars = Sidebars::load(&config.docs_resolved.sidebar_path)?;
        tracing::info!(
            pages = store.pages().len(),
            sidebars = sidebars.len(),
            "Loaded site"
        );
        Ok(Site {
            config,
            store,
            sidebars,
        })
    }
}

/// Pick one sidebar by name, or all of them in file order.
pub(crate) fn select_sidebars<'a>(
    sidebars: &'a Sidebars,
    name: Option<&str>,
) -> Result<Vec<(&'a str, &'a Outline)>, CliError> {
    match name {
        Some(name) => sidebars
            .iter()
            .find(|(n, _)| *n == name)
            .map(|pair| vec![pair])
            .ok_or_else(|| CliError::Validation(format!("Unknown sidebar '{name}'"))),
        None => Ok(sidebars.iter().collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_sidebars() {
        let sidebars =
            Sidebars::from_yaml_str("main:\n  A: [a]\nextra:\n  B: [b]\n").unwrap();

        let all = select_sidebars(&sidebars, None).unwrap();
        let one = select_sidebars(&sidebars, Some("extra")).unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].0, "extra");
        assert!(matches!(
            select_sidebars(&sidebars, Some("nope")),
            Err(CliError::Validation(_))
        ));
    }
}
