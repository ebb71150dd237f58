//! Sidebar outline for the course documentation site.
//!
//! This crate provides:
//! - [`Outline`]: the table of contents as an ordered tree of [`Section`]s,
//!   [`Group`]s and [`Leaf`] references
//! - [`Sidebars`]: a sidebars file holding one or more named outlines
//! - Validation against a [`ContentStore`](hor_content::ContentStore)
//! - Order-preserving flattening for breadcrumbs and search indexing
//! - Navigation tree and previous/next pagination for the rendering engine
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use hor_content::FsContentStore;
//! use hor_outline::Sidebars;
//!
//! let store = FsContentStore::open(Path::new("docs"))?;
//! let sidebars = Sidebars::load(Path::new("sidebars.yaml"))?;
//!
//! for (name, outline) in sidebars.iter() {
//!     outline.validate(&store)?;
//!     for entry in outline.flatten() {
//!         println!("{name}: {} -> {}", entry.path(), entry.leaf);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod flatten;
mod model;
mod navigation;
mod parse;
mod validate;

pub use error::{ParseError, ValidationError};
pub use flatten::{FlatEntry, Flatten};
pub use model::{Group, Leaf, Node, Outline, Section, Sidebars};
pub use navigation::{NavItem, NavKind, Navigation, PageLinks, PageRef, doc_route};
