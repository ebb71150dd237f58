//! Content page discovery for the course documentation site.
//!
//! This crate provides a [`ContentStore`] trait answering one question for
//! the outline: which content page ids exist, and what are they called.
//!
//! # Architecture
//!
//! The crate provides:
//! - [`ContentStore`] trait with `pages()`, `get()` and `exists()` methods
//! - [`FsContentStore`] which scans a docs directory once at open time
//! - [`MockContentStore`] for testing (behind `mock` feature flag)
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use hor_content::{ContentStore, FsContentStore};
//!
//! let store = FsContentStore::open(Path::new("docs"))?;
//! assert!(store.exists("labs/js/Introduction"));
//! ```

mod front_matter;
mod fs;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod scanner;
mod store;

pub use fs::FsContentStore;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockContentStore;
pub use store::{ContentError, ContentErrorKind, ContentPage, ContentStore};
