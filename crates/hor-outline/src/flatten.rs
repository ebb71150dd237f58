//! Order-preserving outline traversal.

use std::iter::FusedIterator;
use std::slice;

use crate::model::{Leaf, Node, Section};

/// A leaf paired with the labels of every group above it.
///
/// The trail starts with the section name, so a leaf directly under
/// `Fundamentals` has path `"Fundamentals"` and one inside its `Labs` group
/// has path `"Fundamentals/Labs"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatEntry<'a> {
    /// Section name followed by nested group labels.
    pub trail: Vec<&'a str>,
    pub leaf: &'a Leaf,
}

impl FlatEntry<'_> {
    /// Trail joined with `/`.
    pub fn path(&self) -> String {
        self.trail.join("/")
    }

    /// Nesting depth below the section (0 for direct section items).
    pub fn depth(&self) -> usize {
        self.trail.len().saturating_sub(1)
    }
}

/// Lazy depth-first iterator over an outline's leaves.
///
/// Created by [`Outline::flatten`](crate::Outline::flatten).
#[derive(Clone, Debug)]
pub struct Flatten<'a> {
    sections: slice::Iter<'a, Section>,
    /// One iterator per open section or group; `trail` has a label per frame.
    stack: Vec<slice::Iter<'a, Node>>,
    trail: Vec<&'a str>,
}

impl<'a> Flatten<'a> {
    pub(crate) fn new(sections: &'a [Section]) -> Self {
        Self {
            sections: sections.iter(),
            stack: Vec::new(),
            trail: Vec::new(),
        }
    }
}

impl<'a> Iterator for Flatten<'a> {
    type Item = FlatEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(frame) = self.stack.last_mut() else {
                let section = self.sections.next()?;
                self.trail.push(&section.name);
                self.stack.push(section.items.iter());
                continue;
            };

            match frame.next() {
                Some(Node::Leaf(leaf)) => {
                    return Some(FlatEntry {
                        trail: self.trail.clone(),
                        leaf,
                    });
                }
                Some(Node::Group(group)) => {
                    self.trail.push(&group.label);
                    self.stack.push(group.items.iter());
                }
                None => {
                    self.stack.pop();
                    self.trail.pop();
                }
            }
        }
    }
}

impl FusedIterator for Flatten<'_> {}
