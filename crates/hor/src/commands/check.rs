//! `hor check` command implementation.

use clap::{Args, ValueEnum};
use hor_config::{BrokenLinkPolicy, Config};
use hor_content::ContentStore;
use hor_outline::{Sidebars, ValidationError};

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Broken link policy as accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Throw,
    Warn,
    Ignore,
}

impl From<PolicyArg> for BrokenLinkPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Throw => Self::Throw,
            PolicyArg::Warn => Self::Warn,
            PolicyArg::Ignore => Self::Ignore,
        }
    }
}

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// How to treat references to missing pages (overrides config).
    #[arg(long, value_enum)]
    on_broken_links: Option<PolicyArg>,
}

/// Problems split by severity after applying the broken link policy.
#[derive(Debug, Default, PartialEq, Eq)]
struct Report {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Report {
    fn add(&mut self, scope: &str, err: &ValidationError, policy: BrokenLinkPolicy) {
        let msg = format!("{scope}: {err}");
        if !err.is_broken_link() {
            self.errors.push(msg);
            return;
        }
        match policy {
            BrokenLinkPolicy::Throw => self.errors.push(msg),
            BrokenLinkPolicy::Warn => self.warnings.push(msg),
            BrokenLinkPolicy::Ignore => tracing::debug!(%msg, "Ignoring broken link"),
        }
    }
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or any fatal problem is found.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.load_site(self.on_broken_links.map(Into::into))?;

        output.info(&format!(
            "Source directory: {}",
            site.config.docs_resolved.source_dir.display()
        ));
        output.info(&format!(
            "Sidebars: {}",
            site.config.docs_resolved.sidebar_path.display()
        ));

        let report = check_site(&site.config, &site.store, &site.sidebars);

        for warning in &report.warnings {
            tracing::warn!("{warning}");
            output.warning(&format!("Warning: {warning}"));
        }
        for error in &report.errors {
            output.error(error);
        }

        if !report.errors.is_empty() {
            return Err(CliError::Validation(format!(
                "{} problem(s) found",
                report.errors.len()
            )));
        }

        output.success(&format!(
            "Checked {} sidebar(s) against {} page(s)",
            site.sidebars.len(),
            site.store.pages().len()
        ));
        Ok(())
    }
}

/// Validate every sidebar and the navbar doc links.
fn check_site<S>(config: &Config, store: &S, sidebars: &Sidebars) -> Report
where
    S: ContentStore + ?Sized,
{
    let policy = config.on_broken_links;
    let mut report = Report::default();

    for (name, outline) in sidebars.iter() {
        for err in outline.validate_all(store) {
            report.add(name, &err, policy);
        }
    }

    for item in &config.navbar.items {
        if let Some(id) = item.doc_id()
            && !store.exists(id)
        {
            let err = ValidationError::UnresolvedReference {
                id: id.to_owned(),
                path: item.label().to_owned(),
            };
            report.add("navbar", &err, policy);
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use hor_content::MockContentStore;
    use pretty_assertions::assert_eq;

    use super::*;

    const SIDEBARS: &str = "
someSidebar:
  Fundamentals:
    - Intro
    - missing-page
  Empty: []
";

    fn config(policy: &str) -> Config {
        let toml = format!(
            r#"
title = "Hands on React"
url = "https://handsonreact.com"
on_broken_links = "{policy}"

[[navbar.items]]
type = "doc"
doc_id = "Nowhere"
label = "Docs"
"#
        );
        Config::from_toml_str(&toml, Path::new("/site")).unwrap()
    }

    fn run(policy: &str) -> Report {
        let store = MockContentStore::new().with_ids(["Intro"]);
        let sidebars = Sidebars::from_yaml_str(SIDEBARS).unwrap();
        check_site(&config(policy), &store, &sidebars)
    }

    #[test]
    fn test_throw_policy_fails_on_broken_links() {
        let report = run("throw");

        assert_eq!(
            report.errors,
            vec![
                "someSidebar: Unresolved page reference 'missing-page' in Fundamentals",
                "someSidebar: Group 'Empty' has no items",
                "navbar: Unresolved page reference 'Nowhere' in Docs",
            ]
        );
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_warn_policy_downgrades_broken_links_only() {
        let report = run("warn");

        assert_eq!(report.errors, vec!["someSidebar: Group 'Empty' has no items"]);
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn test_ignore_policy_drops_broken_links() {
        let report = run("ignore");

        assert_eq!(report.errors.len(), 1);
        assert!(report.warnings.is_empty());
    }
}
