//! Outline tree types.
//!
//! The outline is a literal tree: sections own their items, groups own
//! their children, and leaves point at content pages by id or at external
//! URLs. Item order is display order and is never changed.

use std::fmt;

use serde::Serialize;

use crate::flatten::Flatten;

/// Reference to one content page or one external link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Leaf {
    /// Content page by id, with an optional label override.
    Doc {
        id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    /// External hyperlink.
    Link { label: String, href: String },
}

impl Leaf {
    /// Content page id, for doc leaves.
    pub fn doc_id(&self) -> Option<&str> {
        match self {
            Self::Doc { id, .. } => Some(id),
            Self::Link { .. } => None,
        }
    }
}

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doc { id, .. } => f.write_str(id),
            Self::Link { label, href } => write!(f, "{label} <{href}>"),
        }
    }
}

/// Labeled, ordered collection of nodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Group {
    pub label: String,
    pub items: Vec<Node>,
    /// Whether the group starts collapsed in the sidebar.
    pub collapsed: bool,
}

/// Outline tree node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Leaf(Leaf),
    Group(Group),
}

impl Node {
    /// Doc leaf without a label override.
    pub fn doc(id: impl Into<String>) -> Self {
        Self::Leaf(Leaf::Doc {
            id: id.into(),
            label: None,
        })
    }

    /// External link leaf.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Leaf(Leaf::Link {
            label: label.into(),
            href: href.into(),
        })
    }

    /// Collapsed group.
    pub fn group(label: impl Into<String>, items: Vec<Node>) -> Self {
        Self::Group(Group {
            label: label.into(),
            items,
            collapsed: true,
        })
    }
}

impl From<&str> for Node {
    fn from(id: &str) -> Self {
        Self::doc(id)
    }
}

/// Top-level named section of an outline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: String,
    pub items: Vec<Node>,
}

/// Outline root: ordered sections keyed by name.
///
/// Section names should be unique; [`Outline::validate`] reports duplicates
/// so that programmatically built outlines get the same checks as parsed
/// ones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Outline {
    sections: Vec<Section>,
}

impl Outline {
    /// Create an empty outline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section.
    #[must_use]
    pub fn with_section(mut self, name: impl Into<String>, items: Vec<Node>) -> Self {
        self.sections.push(Section {
            name: name.into(),
            items,
        });
        self
    }

    pub(crate) fn from_sections(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Sections in authored order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// First section with the given name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Depth-first, left-to-right traversal of every leaf with its label path.
    ///
    /// The iterator borrows the outline; calling this again restarts from
    /// the beginning and yields the same sequence.
    pub fn flatten(&self) -> Flatten<'_> {
        Flatten::new(&self.sections)
    }

    /// Ids of every doc leaf, in flatten order (duplicates kept).
    pub fn doc_ids(&self) -> impl Iterator<Item = &str> {
        self.flatten().filter_map(|entry| entry.leaf.doc_id())
    }
}

/// A sidebars file: ordered, uniquely named outlines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sidebars {
    sidebars: Vec<(String, Outline)>,
}

impl Serialize for Sidebars {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.sidebars.iter().map(|(k, v)| (k, v)))
    }
}

impl Sidebars {
    pub(crate) fn from_pairs(sidebars: Vec<(String, Outline)>) -> Self {
        Self { sidebars }
    }

    /// Outline by sidebar name.
    pub fn get(&self, name: &str) -> Option<&Outline> {
        self.sidebars
            .iter()
            .find_map(|(n, outline)| (n == name).then_some(outline))
    }

    /// Sidebar names in authored order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sidebars.iter().map(|(n, _)| n.as_str())
    }

    /// `(name, outline)` pairs in authored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Outline)> {
        self.sidebars.iter().map(|(n, o)| (n.as_str(), o))
    }

    pub fn len(&self) -> usize {
        self.sidebars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sidebars.is_empty()
    }
}
