//! Outline validation against a content store.
//!
//! Checks, in depth-first authored order:
//! - section names are unique
//! - every section and group has at least one item
//! - every section, group and link has a non-blank label, and so does a doc
//!   label override when present
//! - every link href is an absolute http(s) URL
//! - every doc id names a page in the store

use std::collections::HashSet;
use std::ops::ControlFlow;

use hor_content::ContentStore;

use crate::error::ValidationError;
use crate::model::{Leaf, Node, Outline};

impl Outline {
    /// Validate the outline, returning the first problem found.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] in traversal order.
    pub fn validate<S>(&self, store: &S) -> Result<(), ValidationError>
    where
        S: ContentStore + ?Sized,
    {
        let mut first = None;
        let _ = walk(self, store, &mut |err| {
            first = Some(err);
            ControlFlow::Break(())
        });
        first.map_or(Ok(()), Err)
    }

    /// Validate the outline, collecting every problem.
    pub fn validate_all<S>(&self, store: &S) -> Vec<ValidationError>
    where
        S: ContentStore + ?Sized,
    {
        let mut errors = Vec::new();
        let _ = walk(self, store, &mut |err| {
            errors.push(err);
            ControlFlow::Continue(())
        });
        errors
    }
}

type Sink<'s> = dyn FnMut(ValidationError) -> ControlFlow<()> + 's;

fn walk<S>(outline: &Outline, store: &S, sink: &mut Sink<'_>) -> ControlFlow<()>
where
    S: ContentStore + ?Sized,
{
    let sections = outline.sections();
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for section in sections {
        let name = section.name.as_str();
        // Reported once, at the second occurrence.
        if !seen.insert(name) && reported.insert(name) {
            sink(ValidationError::DuplicateSection {
                name: name.to_owned(),
            })?;
        }
    }

    for (i, section) in sections.iter().enumerate() {
        if section.name.trim().is_empty() {
            sink(ValidationError::EmptyLabel {
                path: format!("section #{}", i + 1),
            })?;
        }
        let mut trail = vec![section.name.as_str()];
        walk_items(&section.name, &section.items, &mut trail, store, sink)?;
    }

    ControlFlow::Continue(())
}

fn walk_items<'a, S>(
    label: &str,
    items: &'a [Node],
    trail: &mut Vec<&'a str>,
    store: &S,
    sink: &mut Sink<'_>,
) -> ControlFlow<()>
where
    S: ContentStore + ?Sized,
{
    if items.is_empty() {
        sink(ValidationError::EmptyGroup {
            label: label.to_owned(),
        })?;
    }

    for item in items {
        match item {
            Node::Leaf(Leaf::Doc { id, label }) => {
                if label.as_deref().is_some_and(|l| l.trim().is_empty()) {
                    sink(ValidationError::EmptyLabel {
                        path: trail.join("/"),
                    })?;
                }
                if !store.exists(id) {
                    sink(ValidationError::UnresolvedReference {
                        id: id.clone(),
                        path: trail.join("/"),
                    })?;
                }
            }
            Node::Leaf(Leaf::Link { label, href }) => {
                if label.trim().is_empty() {
                    sink(ValidationError::EmptyLabel {
                        path: trail.join("/"),
                    })?;
                }
                if !is_http_url(href) {
                    sink(ValidationError::InvalidHref {
                        label: label.clone(),
                        href: href.clone(),
                    })?;
                }
            }
            Node::Group(group) => {
                if group.label.trim().is_empty() {
                    sink(ValidationError::EmptyLabel {
                        path: trail.join("/"),
                    })?;
                }
                trail.push(&group.label);
                let flow = walk_items(&group.label, &group.items, trail, store, sink);
                trail.pop();
                flow?;
            }
        }
    }

    ControlFlow::Continue(())
}

fn is_http_url(href: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| href.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
}
