//! Content file discovery by filesystem walking.
//!
//! This module separates the discovery phase (finding files) from the building
//! phase (reading front matter and titles). The Scanner only identifies files
//! that are content pages, returning lightweight references for
//! `FsContentStore` to process.

use std::fs;
use std::path::{Path, PathBuf};

/// Extensions treated as content pages.
const PAGE_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Reference to a content page's source file.
#[derive(Debug, Clone)]
pub(crate) struct SourceRef {
    /// Default page id derived from the relative path (e.g. "labs/js/Introduction").
    pub default_id: String,
    /// Path relative to the docs directory.
    pub rel_path: PathBuf,
    /// Absolute path to the file.
    pub abs_path: PathBuf,
}

/// Discovers content files by walking the docs directory.
///
/// Entries whose names start with `.` or `_` are skipped, so partials and
/// snippet directories (`_snippets/`, `_shared.mdx`) never become pages.
pub(crate) struct Scanner {
    source_dir: PathBuf,
}

impl Scanner {
    /// Create a new Scanner rooted at `source_dir`.
    pub fn new(source_dir: &Path) -> Self {
        Self {
            source_dir: source_dir.to_path_buf(),
        }
    }

    /// Scan the filesystem and return source references sorted by id.
    ///
    /// # Errors
    ///
    /// Returns the I/O error and the offending directory if a directory
    /// cannot be read.
    pub fn scan(&self) -> Result<Vec<SourceRef>, (std::io::Error, PathBuf)> {
        let mut refs = Vec::new();
        self.scan_directory(&self.source_dir, Path::new(""), &mut refs)?;
        refs.sort_by(|a, b| a.default_id.cmp(&b.default_id));
        Ok(refs)
    }

    fn scan_directory(
        &self,
        dir_path: &Path,
        rel_prefix: &Path,
        refs: &mut Vec<SourceRef>,
    ) -> Result<(), (std::io::Error, PathBuf)> {
        let entries = fs::read_dir(dir_path).map_err(|e| (e, dir_path.to_path_buf()))?;

        for entry in entries {
            let entry = entry.map_err(|e| (e, dir_path.to_path_buf()))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') || name.starts_with('_') {
                continue;
            }

            let path = entry.path();
            let rel_path = rel_prefix.join(&name);
            let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());

            if is_dir {
                self.scan_directory(&path, &rel_path, refs)?;
            } else if is_page(&path) {
                refs.push(SourceRef {
                    default_id: rel_path_to_id(&rel_path),
                    rel_path,
                    abs_path: path,
                });
            } else {
                tracing::trace!(path = %rel_path.display(), "Skipping non-page file");
            }
        }

        Ok(())
    }
}

fn is_page(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| PAGE_EXTENSIONS.contains(&e))
}

/// Convert a relative file path to a page id.
///
/// Examples:
/// - `intro.md` -> `"intro"`
/// - `labs/js/Introduction.md` -> `"labs/js/Introduction"`
/// - `13.1-ReactHookForm.mdx` -> `"13.1-ReactHookForm"`
pub(crate) fn rel_path_to_id(rel_path: &Path) -> String {
    let without_ext = rel_path.with_extension("");
    without_ext
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Replace the last segment of `default_id` with a front matter id.
pub(crate) fn apply_id_override(default_id: &str, override_id: &str) -> String {
    match default_id.rsplit_once('/') {
        Some((dir, _)) => format!("{dir}/{override_id}"),
        None => override_id.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn test_rel_path_to_id() {
        assert_eq!(rel_path_to_id(Path::new("intro.md")), "intro");
        assert_eq!(
            rel_path_to_id(Path::new("labs/js/Introduction.md")),
            "labs/js/Introduction"
        );
        assert_eq!(
            rel_path_to_id(Path::new("13.1-ReactHookForm.mdx")),
            "13.1-ReactHookForm"
        );
        assert_eq!(
            rel_path_to_id(Path::new("gatsby/labs/03a-Utility-First-Styling.md")),
            "gatsby/labs/03a-Utility-First-Styling"
        );
    }

    #[test]
    fn test_apply_id_override() {
        assert_eq!(apply_id_override("intro", "welcome"), "welcome");
        assert_eq!(
            apply_id_override("labs/js/setup", "CreatingNewProject"),
            "labs/js/CreatingNewProject"
        );
    }

    #[test]
    fn test_scan_finds_md_and_mdx() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join("Hooks.md"), "# Hooks").unwrap();
        fs::write(temp_dir.path().join("Props.mdx"), "# Props").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

        let refs = Scanner::new(temp_dir.path()).scan().unwrap();

        let ids: Vec<_> = refs.iter().map(|r| r.default_id.as_str()).collect();
        assert_eq!(ids, vec!["Hooks", "Props"]);
    }

    #[test]
    fn test_scan_nested_directories() {
        let temp_dir = create_test_dir();
        let js = temp_dir.path().join("labs").join("js");
        fs::create_dir_all(&js).unwrap();
        fs::write(js.join("Introduction.md"), "# Intro").unwrap();

        let refs = Scanner::new(temp_dir.path()).scan().unwrap();

        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].default_id, "labs/js/Introduction");
        assert_eq!(refs[0].rel_path, PathBuf::from("labs/js/Introduction.md"));
        assert!(refs[0].abs_path.ends_with("labs/js/Introduction.md"));
    }

    #[test]
    fn test_scan_skips_hidden_and_underscore() {
        let temp_dir = create_test_dir();
        fs::write(temp_dir.path().join(".hidden.md"), "# Hidden").unwrap();
        fs::write(temp_dir.path().join("_partial.mdx"), "partial").unwrap();
        let snippets = temp_dir.path().join("_snippets");
        fs::create_dir(&snippets).unwrap();
        fs::write(snippets.join("form.md"), "# Form").unwrap();
        fs::write(temp_dir.path().join("visible.md"), "# Visible").unwrap();

        let refs = Scanner::new(temp_dir.path()).scan().unwrap();

        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].default_id, "visible");
    }

    #[test]
    fn test_scan_ignores_snippet_sources() {
        let temp_dir = create_test_dir();
        let snippets = temp_dir.path().join("snippets");
        fs::create_dir(&snippets).unwrap();
        fs::write(snippets.join("bootstrap-form.jsx"), "<div />").unwrap();

        let refs = Scanner::new(temp_dir.path()).scan().unwrap();

        assert!(refs.is_empty());
    }

    #[test]
    fn test_scan_missing_dir_is_error() {
        let result = Scanner::new(Path::new("/nonexistent/docs")).scan();

        let (err, path) = result.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        assert_eq!(path, PathBuf::from("/nonexistent/docs"));
    }
}
