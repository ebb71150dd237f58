//! `hor config` command implementation.

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the config command.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    #[command(flatten)]
    site: SiteArgs,
}

impl ConfigArgs {
    /// Execute the config command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.site.load_config(None)?;

        if let Some(path) = &config.config_path {
            output.info(&format!("Config file: {}", path.display()));
        } else {
            output.info("Config file: none (using defaults)");
        }

        output.print(&serde_json::to_string_pretty(&config)?)?;
        Ok(())
    }
}
