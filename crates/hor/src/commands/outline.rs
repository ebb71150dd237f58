//! `hor outline` command implementation.

use clap::Args;
use hor_outline::{Leaf, Outline};
use serde::Serialize;

use super::{SiteArgs, select_sidebars};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the outline command.
#[derive(Args)]
pub(crate) struct OutlineArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Only print this sidebar.
    #[arg(long)]
    sidebar: Option<String>,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

/// One flattened entry in JSON output.
#[derive(Serialize)]
struct EntryJson<'a> {
    sidebar: &'a str,
    path: String,
    leaf: &'a Leaf,
}

impl OutlineArgs {
    /// Execute the outline command.
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails or the sidebar does not exist.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.load_site(None)?;
        let selected = select_sidebars(&site.sidebars, self.sidebar.as_deref())?;

        if self.json {
            let entries: Vec<_> = selected
                .iter()
                .flat_map(|&(name, outline)| entries(name, outline))
                .collect();
            output.print(&serde_json::to_string_pretty(&entries)?)?;
            return Ok(());
        }

        for (name, outline) in selected {
            output.heading(name)?;
            for line in text_lines(outline) {
                output.print(&line)?;
            }
        }
        Ok(())
    }
}

fn entries<'a>(sidebar: &'a str, outline: &'a Outline) -> impl Iterator<Item = EntryJson<'a>> {
    outline.flatten().map(move |entry| EntryJson {
        sidebar,
        path: entry.path(),
        leaf: entry.leaf,
    })
}

/// `path -> leaf` lines, indented by depth.
fn text_lines(outline: &Outline) -> Vec<String> {
    outline
        .flatten()
        .map(|entry| {
            let indent = "  ".repeat(entry.depth() + 1);
            format!("{indent}{} -> {}", entry.path(), entry.leaf)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use hor_outline::Node;
    use pretty_assertions::assert_eq;

    use super::*;

    fn outline() -> Outline {
        Outline::new().with_section(
            "Fundamentals",
            vec![
                "Intro".into(),
                Node::group(
                    "Labs",
                    vec![
                        "Lab1".into(),
                        Node::link("Starter Files", "https://github.com/x/starter"),
                    ],
                ),
            ],
        )
    }

    #[test]
    fn test_text_lines() {
        assert_eq!(
            text_lines(&outline()),
            vec![
                "  Fundamentals -> Intro",
                "    Fundamentals/Labs -> Lab1",
                "    Fundamentals/Labs -> Starter Files <https://github.com/x/starter>",
            ]
        );
    }

    #[test]
    fn test_json_entries() {
        let outline = outline();
        let json = serde_json::to_value(entries("main", &outline).collect::<Vec<_>>()).unwrap();

        assert_eq!(json[0]["sidebar"], "main");
        assert_eq!(json[1]["path"], "Fundamentals/Labs");
        assert_eq!(json[1]["leaf"]["type"], "doc");
        assert_eq!(json[1]["leaf"]["id"], "Lab1");
        assert_eq!(json[2]["leaf"]["href"], "https://github.com/x/starter");
    }
}
