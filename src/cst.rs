//! Concrete syntax tree (CST) for regular expression patterns.
//!
//! The tree mirrors the surface syntax of the pattern: each construct is a
//! [`Node`] whose [`Span`](crate::Span) covers exactly the text it was
//! parsed from, and punctuation such as `(?:` or `|` appears as
//! [`NodeKind::Token`] leaves. Concatenating the text of every leaf, left to
//! right, gives back the original pattern.
//!
//! ```
//! use ecma_regex_cst::{NodeKind, parse};
//!
//! let pattern = parse("a|b").unwrap();
//! let disjunction = &pattern.children()[0];
//! assert_eq!(disjunction.kind(), &NodeKind::Disjunction);
//! assert_eq!(disjunction.alternatives().len(), 2);
//!
//! let text: String = pattern
//!     .leaves()
//!     .map(|leaf| pattern.text(leaf))
//!     .collect();
//! assert_eq!(text, "a|b");
//! ```

#[cfg(feature = "ascii-tree")]
mod ascii_tree;
pub(crate) mod builder;
pub mod kind;
pub mod node;

pub use self::{
    kind::{Lookaround, NodeKind},
    node::{Descendants, Node},
};

/// A capturing group found in a [`Pattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureGroup<'a> {
    /// 1-based index, in order of the group's opening parenthesis.
    pub index: usize,
    /// Name of the group, if it is a named group.
    pub name: Option<&'a str>,
    /// The group node.
    pub node: &'a Node,
}

/// The result of parsing a pattern.
///
/// Owns the pattern text and the root node, which has kind
/// [`NodeKind::Pattern`]. Dereferences to the root node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    root: Node,
    capture_count: usize,
}

impl Pattern {
    #[must_use]
    pub(crate) fn new(source: &str, root: Node, capture_count: usize) -> Self {
        Self {
            source: source.to_owned(),
            root,
            capture_count,
        }
    }

    /// Returns the text the pattern was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the root node.
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of capturing groups, named or not.
    #[must_use]
    pub fn capture_count(&self) -> usize {
        self.capture_count
    }

    /// Returns the source text covered by `node`.
    ///
    /// `node` must belong to this pattern.
    #[must_use]
    pub fn text(&self, node: &Node) -> &str {
        node.text(&self.source)
    }

    /// Returns the capturing groups ordered by index.
    #[must_use]
    pub fn capture_groups(&self) -> Vec<CaptureGroup<'_>> {
        // Pre-order visits groups in the order of their opening parenthesis,
        // which is also the order in which indexes are assigned.
        self.root
            .descendants()
            .filter_map(|node| {
                let index = node.kind().capture_index()?;
                let name = node
                    .child(&NodeKind::GroupName)
                    .map(|name| self.text(name));
                Some(CaptureGroup { index, name, node })
            })
            .collect()
    }

    /// Returns the index of the group called `name`.
    #[must_use]
    pub fn capture_index(&self, name: &str) -> Option<usize> {
        self.capture_groups()
            .into_iter()
            .find(|group| group.name == Some(name))
            .map(|group| group.index)
    }
}

impl std::ops::Deref for Pattern {
    type Target = Node;

    fn deref(&self) -> &Self::Target {
        &self.root
    }
}
