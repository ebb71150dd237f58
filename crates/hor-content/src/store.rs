//! Content store trait and error types.
//!
//! # Page Id Convention
//!
//! Page ids are the source path relative to the docs directory, without the
//! extension, using `/` separators:
//! - `intro.md` -> `"intro"`
//! - `labs/js/Introduction.md` -> `"labs/js/Introduction"`
//!
//! A front matter `id:` replaces the last segment (`labs/ts/setup.md` with
//! `id: first-steps` -> `"labs/ts/first-steps"`).

use std::path::PathBuf;

/// A content page known to the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentPage {
    /// Page id referenced from the outline.
    pub id: String,
    /// Display title (front matter `title` > first H1 > file name).
    pub title: String,
    /// Label override for sidebar entries (front matter `sidebar_label`).
    pub sidebar_label: Option<String>,
    /// Short description from front matter.
    pub description: Option<String>,
    /// Source path relative to the docs directory. `None` for in-memory pages.
    pub source_path: Option<PathBuf>,
}

impl ContentPage {
    /// Create a page with an id and title and nothing else.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            sidebar_label: None,
            description: None,
            source_path: None,
        }
    }

    /// Label to use in navigation.
    pub fn nav_label(&self) -> &str {
        self.sidebar_label.as_deref().unwrap_or(&self.title)
    }
}

/// Semantic error categories.
#[derive(Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentErrorKind {
    /// Docs directory does not exist.
    NotFound,
    /// Reading a file or directory failed.
    Io,
    /// Two source files produce the same page id.
    DuplicateId,
    /// Front matter is not valid YAML or sets an invalid `id`.
    InvalidFrontMatter,
}

/// Content error with semantic kind, path context and optional source.
#[derive(Debug)]
pub struct ContentError {
    /// Semantic error category.
    pub kind: ContentErrorKind,
    /// Path context (if applicable).
    pub path: Option<PathBuf>,
    /// Extra detail (e.g. the duplicated id).
    pub detail: Option<String>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ContentError {
    /// Create a new content error.
    #[must_use]
    pub fn new(kind: ContentErrorKind) -> Self {
        Self {
            kind,
            path: None,
            detail: None,
            source: None,
        }
    }

    /// Attach path context.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Attach a detail message.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attach the underlying error source.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a content error from an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ContentErrorKind::NotFound,
            _ => ContentErrorKind::Io,
        };
        Self::new(kind).with_path(path).with_source(err)
    }
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Format: "Kind: detail: source (path: /foo/bar)"
        let kind_str = match self.kind {
            ContentErrorKind::NotFound => "Not found",
            ContentErrorKind::Io => "I/O error",
            ContentErrorKind::DuplicateId => "Duplicate page id",
            ContentErrorKind::InvalidFrontMatter => "Invalid front matter",
        };

        write!(f, "{kind_str}")?;

        if let Some(detail) = &self.detail {
            write!(f, ": {detail}")?;
        }

        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }

        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }

        Ok(())
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Read-only view of the content pages available to the outline.
pub trait ContentStore: Send + Sync {
    /// All pages, ordered by id.
    fn pages(&self) -> &[ContentPage];

    /// Look up a page by id.
    fn get(&self, id: &str) -> Option<&ContentPage>;

    /// Check whether a page with this id exists.
    fn exists(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}
