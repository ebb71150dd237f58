//! Filesystem content store.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::front_matter;
use crate::scanner::{Scanner, SourceRef, apply_id_override};
use crate::store::{ContentError, ContentErrorKind, ContentPage, ContentStore};

/// Level-one ATX heading on a single line.
static H1_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[ \t]+(.+?)[ \t]*#*[ \t]*$").expect("valid H1 regex"));

/// Content store backed by a docs directory.
///
/// The directory is scanned once in [`FsContentStore::open`]; the store is
/// immutable afterwards.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use hor_content::{ContentStore, FsContentStore};
///
/// let store = FsContentStore::open(Path::new("docs"))?;
/// for page in store.pages() {
///     println!("{}: {}", page.id, page.title);
/// }
/// ```
#[derive(Debug)]
pub struct FsContentStore {
    source_dir: PathBuf,
    pages: Vec<ContentPage>,
    index: HashMap<String, usize>,
}

impl FsContentStore {
    /// Scan `source_dir` and build the store.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError`] if the directory cannot be read, a page has
    /// malformed front matter, or two files resolve to the same page id.
    pub fn open(source_dir: &Path) -> Result<Self, ContentError> {
        let refs = Scanner::new(source_dir)
            .scan()
            .map_err(|(err, path)| ContentError::io(err, path))?;

        let mut pages = Vec::with_capacity(refs.len());
        let mut index = HashMap::with_capacity(refs.len());

        for source in &refs {
            let page = build_page(source)?;
            if index.contains_key(&page.id) {
                return Err(ContentError::new(ContentErrorKind::DuplicateId)
                    .with_detail(page.id)
                    .with_path(&source.abs_path));
            }
            index.insert(page.id.clone(), pages.len());
            pages.push(page);
        }

        // Front matter ids may break the scanner's ordering.
        pages.sort_by(|a, b| a.id.cmp(&b.id));
        for (i, page) in pages.iter().enumerate() {
            index.insert(page.id.clone(), i);
        }

        tracing::debug!(
            source_dir = %source_dir.display(),
            page_count = pages.len(),
            "Content scan completed"
        );

        Ok(Self {
            source_dir: source_dir.to_path_buf(),
            pages,
            index,
        })
    }

    /// Docs directory this store was built from.
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }
}

impl ContentStore for FsContentStore {
    fn pages(&self) -> &[ContentPage] {
        &self.pages
    }

    fn get(&self, id: &str) -> Option<&ContentPage> {
        self.index.get(id).map(|&i| &self.pages[i])
    }
}

/// Read one source file into a [`ContentPage`].
fn build_page(source: &SourceRef) -> Result<ContentPage, ContentError> {
    let content =
        fs::read_to_string(&source.abs_path).map_err(|e| ContentError::io(e, &source.abs_path))?;
    let (yaml, body) = front_matter::split(&content);

    let fm = match yaml {
        Some(yaml) => front_matter::parse(yaml).map_err(|e| {
            ContentError::new(ContentErrorKind::InvalidFrontMatter)
                .with_path(&source.abs_path)
                .with_source(e)
        })?,
        None => front_matter::FrontMatter::default(),
    };

    let id = match fm.id.as_deref() {
        Some(custom) if custom.is_empty() || custom.contains('/') => {
            return Err(ContentError::new(ContentErrorKind::InvalidFrontMatter)
                .with_detail(format!("id '{custom}' must be non-empty and contain no '/'"))
                .with_path(&source.abs_path));
        }
        Some(custom) => apply_id_override(&source.default_id, custom),
        None => source.default_id.clone(),
    };

    let title = fm
        .title
        .or_else(|| extract_h1(body))
        .unwrap_or_else(|| derive_title_from_filename(&source.rel_path));

    Ok(ContentPage {
        id,
        title,
        sidebar_label: fm.sidebar_label,
        description: fm.description,
        source_path: Some(source.rel_path.clone()),
    })
}

/// Extract title from the first H1 heading outside fenced code blocks.
fn extract_h1(body: &str) -> Option<String> {
    let mut fence: Option<&str> = None;
    for line in body.lines() {
        let trimmed = line.trim_start();
        let marker = ["```", "~~~"]
            .into_iter()
            .find(|m| trimmed.starts_with(m));
        match (fence, marker) {
            (None, Some(m)) => fence = Some(m),
            (Some(open), Some(m)) if open == m => fence = None,
            (Some(_), _) => {}
            (None, None) => {
                if let Some(caps) = H1_REGEX.captures(line) {
                    return Some(caps[1].trim().to_owned());
                }
            }
        }
    }
    None
}

/// Generate title from a file path's filename.
fn derive_title_from_filename(rel_path: &Path) -> String {
    rel_path
        .file_stem()
        .map(|s| titlecase_from_slug(&s.to_string_lossy()))
        .unwrap_or_default()
}

/// Convert a slug (kebab-case or `snake_case`) to title case.
///
/// Replaces `-` and `_` with spaces, then capitalizes the first letter of each word.
fn titlecase_from_slug(slug: &str) -> String {
    let mut result = String::with_capacity(slug.len());
    for word in slug.split(['-', '_', ' ']).filter(|w| !w.is_empty()) {
        if !result.is_empty() {
            result.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_open_builds_pages_sorted_by_id() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "Props.md", "# Props\n");
        write(temp_dir.path(), "Hooks.md", "# Hooks\n");
        write(temp_dir.path(), "labs/js/Introduction.md", "# Lab intro\n");

        let store = FsContentStore::open(temp_dir.path()).unwrap();

        let ids: Vec<_> = store.pages().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["Hooks", "Props", "labs/js/Introduction"]);
        assert!(store.exists("labs/js/Introduction"));
        assert!(!store.exists("labs/js/Missing"));
    }

    #[test]
    fn test_title_precedence() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(
            temp_dir.path(),
            "front.md",
            "---\ntitle: From Front Matter\n---\n# From Heading\n",
        );
        write(temp_dir.path(), "heading.md", "Intro text\n\n# From Heading #\n");
        write(temp_dir.path(), "setup-guide.md", "No heading here.\n");

        let store = FsContentStore::open(temp_dir.path()).unwrap();

        assert_eq!(store.get("front").unwrap().title, "From Front Matter");
        assert_eq!(store.get("heading").unwrap().title, "From Heading");
        assert_eq!(store.get("setup-guide").unwrap().title, "Setup Guide");
    }

    #[test]
    fn test_front_matter_id_override() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(
            temp_dir.path(),
            "labs/ts/setup.md",
            "---\nid: CreatingNewProject\nsidebar_label: New Project\n---\n# Creating a New Project\n",
        );

        let store = FsContentStore::open(temp_dir.path()).unwrap();

        let page = store.get("labs/ts/CreatingNewProject").unwrap();
        assert_eq!(page.nav_label(), "New Project");
        assert_eq!(page.source_path, Some(PathBuf::from("labs/ts/setup.md")));
        assert!(!store.exists("labs/ts/setup"));
    }

    #[test]
    fn test_front_matter_id_with_slash_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "intro.md", "---\nid: a/b\n---\n");

        let err = FsContentStore::open(temp_dir.path()).unwrap_err();

        assert_eq!(err.kind, ContentErrorKind::InvalidFrontMatter);
        assert!(err.to_string().contains("a/b"));
    }

    #[test]
    fn test_malformed_front_matter_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "broken.md", "---\ntitle: [oops\n---\n");

        let err = FsContentStore::open(temp_dir.path()).unwrap_err();

        assert_eq!(err.kind, ContentErrorKind::InvalidFrontMatter);
        assert!(err.path.unwrap().ends_with("broken.md"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "intro.md", "# Intro\n");
        write(temp_dir.path(), "intro.mdx", "# Intro again\n");

        let err = FsContentStore::open(temp_dir.path()).unwrap_err();

        assert_eq!(err.kind, ContentErrorKind::DuplicateId);
        assert_eq!(err.detail.as_deref(), Some("intro"));
    }

    #[test]
    fn test_front_matter_id_collides_with_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(temp_dir.path(), "Hooks.md", "# Hooks\n");
        write(temp_dir.path(), "other.md", "---\nid: Hooks\n---\n");

        let err = FsContentStore::open(temp_dir.path()).unwrap_err();

        assert_eq!(err.kind, ContentErrorKind::DuplicateId);
    }

    #[test]
    fn test_missing_source_dir() {
        let err = FsContentStore::open(Path::new("/nonexistent/docs")).unwrap_err();

        assert_eq!(err.kind, ContentErrorKind::NotFound);
    }

    #[test]
    fn test_extract_h1_skips_fenced_code() {
        let body = "Install it:\n\n```bash\n# install dependencies\nnpm install\n```\n";
        assert_eq!(extract_h1(body), None);

        let body = "~~~sh\n# comment\n~~~\n\n# Setup\n";
        assert_eq!(extract_h1(body), Some("Setup".to_owned()));
    }

    #[test]
    fn test_extract_h1_bare_hash_is_not_heading() {
        assert_eq!(extract_h1("#\n\nSome paragraph\n"), None);
        assert_eq!(extract_h1("#\n# Real Title\n"), Some("Real Title".to_owned()));
    }

    #[test]
    fn test_fenced_comment_does_not_become_title() {
        let temp_dir = tempfile::tempdir().unwrap();
        write(
            temp_dir.path(),
            "Setup.md",
            "Install it:\n\n```bash\n# install dependencies\nnpm install\n```\n",
        );

        let store = FsContentStore::open(temp_dir.path()).unwrap();

        assert_eq!(store.get("Setup").unwrap().title, "Setup");
    }

    #[test]
    fn test_titlecase_from_slug() {
        assert_eq!(titlecase_from_slug("setup-guide"), "Setup Guide");
        assert_eq!(titlecase_from_slug("my_page"), "My Page");
        assert_eq!(titlecase_from_slug("HTTP-GET"), "HTTP GET");
    }

    #[test]
    fn test_fs_content_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FsContentStore>();
    }
}
