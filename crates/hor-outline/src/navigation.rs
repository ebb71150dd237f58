//! Navigation artifacts for the rendering engine.
//!
//! Turns an [`Outline`] into:
//! - a [`NavItem`] tree for the sidebar UI
//! - [`PageLinks`] for every doc occurrence: breadcrumbs plus previous/next
//!
//! Pagination follows flatten order and skips external links. A page listed
//! in several places gets one [`PageLinks`] per occurrence; lookups by id
//! return the first.

use hor_content::ContentStore;
use serde::Serialize;

use crate::flatten::FlatEntry;
use crate::model::{Leaf, Node, Outline};

/// URL of a doc page under the site's base URL.
///
/// `base_url` is expected to start and end with `/`.
pub fn doc_route(base_url: &str, id: &str) -> String {
    format!("{base_url}docs/{id}")
}

/// Kind of sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NavKind {
    Doc,
    Link,
    Category,
}

/// Navigation item with children for the sidebar tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    #[serde(rename = "type")]
    pub kind: NavKind,
    /// Display label.
    pub label: String,
    /// Page id, for doc items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Doc route or external URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Initial collapsed state of a group. Sections have none and are always open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

/// Neighbouring page in pagination.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageRef {
    pub id: String,
    pub title: String,
    pub path: String,
}

/// Breadcrumbs and previous/next links for one doc occurrence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    pub id: String,
    pub path: String,
    /// Section name followed by enclosing group labels.
    pub breadcrumbs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<PageRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageRef>,
}

/// Everything the engine needs to render one sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Navigation {
    pub sidebar: String,
    pub items: Vec<NavItem>,
    pub pages: Vec<PageLinks>,
}

impl Navigation {
    /// Build the tree and pagination for a named outline.
    pub fn build<S>(sidebar: &str, outline: &Outline, store: &S, base_url: &str) -> Self
    where
        S: ContentStore + ?Sized,
    {
        let items = outline.build_navigation(store, base_url);
        let pages = outline.pagination(store, base_url);
        tracing::debug!(sidebar, pages = pages.len(), "Built navigation");
        Self {
            sidebar: sidebar.to_owned(),
            items,
            pages,
        }
    }

    /// Links for the first occurrence of a page.
    pub fn page(&self, id: &str) -> Option<&PageLinks> {
        self.pages.iter().find(|p| p.id == id)
    }
}

impl Outline {
    /// Sidebar tree: one category per section, children in authored order.
    ///
    /// Doc labels come from the leaf's label, then the page's sidebar label
    /// or title, then the id. Unknown ids are not an error here.
    pub fn build_navigation<S>(&self, store: &S, base_url: &str) -> Vec<NavItem>
    where
        S: ContentStore + ?Sized,
    {
        self.sections()
            .iter()
            .map(|section| NavItem {
                kind: NavKind::Category,
                label: section.name.clone(),
                id: None,
                href: None,
                collapsed: None,
                children: nav_items(&section.items, store, base_url),
            })
            .collect()
    }

    /// Previous/next links for every doc occurrence, in flatten order.
    pub fn pagination<S>(&self, store: &S, base_url: &str) -> Vec<PageLinks>
    where
        S: ContentStore + ?Sized,
    {
        let docs: Vec<(FlatEntry<'_>, PageRef)> = self
            .flatten()
            .filter_map(|entry| {
                let Leaf::Doc { id, label } = entry.leaf else {
                    return None;
                };
                let page = PageRef {
                    id: id.clone(),
                    title: doc_label(id, label.as_deref(), store),
                    path: doc_route(base_url, id),
                };
                Some((entry, page))
            })
            .collect();

        docs.iter()
            .enumerate()
            .map(|(i, (entry, page))| PageLinks {
                id: page.id.clone(),
                path: page.path.clone(),
                breadcrumbs: entry.trail.iter().map(|&s| s.to_owned()).collect(),
                previous: i.checked_sub(1).map(|p| docs[p].1.clone()),
                next: docs.get(i + 1).map(|(_, n)| n.clone()),
            })
            .collect()
    }

    /// Label trail of the first occurrence of a page.
    pub fn breadcrumbs(&self, id: &str) -> Option<Vec<&str>> {
        self.flatten()
            .find(|entry| entry.leaf.doc_id() == Some(id))
            .map(|entry| entry.trail)
    }
}

fn nav_items<S>(nodes: &[Node], store: &S, base_url: &str) -> Vec<NavItem>
where
    S: ContentStore + ?Sized,
{
    nodes
        .iter()
        .map(|node| match node {
            Node::Leaf(Leaf::Doc { id, label }) => NavItem {
                kind: NavKind::Doc,
                label: doc_label(id, label.as_deref(), store),
                id: Some(id.clone()),
                href: Some(doc_route(base_url, id)),
                collapsed: None,
                children: Vec::new(),
            },
            Node::Leaf(Leaf::Link { label, href }) => NavItem {
                kind: NavKind::Link,
                label: label.clone(),
                id: None,
                href: Some(href.clone()),
                collapsed: None,
                children: Vec::new(),
            },
            Node::Group(group) => NavItem {
                kind: NavKind::Category,
                label: group.label.clone(),
                id: None,
                href: None,
                collapsed: Some(group.collapsed),
                children: nav_items(&group.items, store, base_url),
            },
        })
        .collect()
}

fn doc_label<S>(id: &str, label: Option<&str>, store: &S) -> String
where
    S: ContentStore + ?Sized,
{
    label
        .or_else(|| store.get(id).map(|page| page.nav_label()))
        .unwrap_or(id)
        .to_owned()
}
