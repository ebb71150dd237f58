//! `hor nav` command implementation.

use clap::Args;
use hor_outline::Navigation;

use super::{SiteArgs, select_sidebars};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Only print this sidebar.
    #[arg(long)]
    sidebar: Option<String>,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// Prints one navigation object per selected sidebar as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or the sidebar does not exist.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.load_site(None)?;
        let base_url = &site.config.base_url;

        let navigation: Vec<Navigation> = select_sidebars(&site.sidebars, self.sidebar.as_deref())?
            .into_iter()
            .map(|(name, outline)| Navigation::build(name, outline, &site.store, base_url))
            .collect();

        output.print(&serde_json::to_string_pretty(&navigation)?)?;
        Ok(())
    }
}
