//! In-memory content store for testing.
//!
//! Provides [`MockContentStore`] for unit testing without filesystem access.

use crate::store::{ContentPage, ContentStore};

/// Mock content store for testing.
///
/// Use the builder methods to configure the mock with test pages.
///
/// # Example
///
/// ```ignore
/// use hor_content::{ContentStore, MockContentStore};
///
/// let store = MockContentStore::new()
///     .with_page("Hooks", "Hooks")
///     .with_ids(["Lab1", "Lab2"]);
///
/// assert!(store.exists("Lab2"));
/// ```
#[derive(Debug, Default)]
pub struct MockContentStore {
    /// Kept sorted by id.
    pages: Vec<ContentPage>,
}

impl MockContentStore {
    /// Create a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page with the given id and title.
    ///
    /// Re-adding an id replaces the earlier page.
    #[must_use]
    pub fn with_page(self, id: impl Into<String>, title: impl Into<String>) -> Self {
        self.with_content_page(ContentPage::new(id, title))
    }

    /// Add a fully specified page.
    #[must_use]
    pub fn with_content_page(mut self, page: ContentPage) -> Self {
        match self.position(&page.id) {
            Ok(i) => self.pages[i] = page,
            Err(i) => self.pages.insert(i, page),
        }
        self
    }

    /// Add pages whose titles equal their ids.
    #[must_use]
    pub fn with_ids<I, S>(self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ids.into_iter().fold(self, |store, id| {
            let id = id.into();
            let title = id.clone();
            store.with_page(id, title)
        })
    }

    fn position(&self, id: &str) -> Result<usize, usize> {
        self.pages.binary_search_by(|p| p.id.as_str().cmp(id))
    }
}

impl ContentStore for MockContentStore {
    fn pages(&self) -> &[ContentPage] {
        &self.pages
    }

    fn get(&self, id: &str) -> Option<&ContentPage> {
        self.position(id).ok().map(|i| &self.pages[i])
    }
}
