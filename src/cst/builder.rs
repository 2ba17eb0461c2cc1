//! Helpers that stamp nodes with their spans while they are being built.

use super::{super::Span, Node, NodeKind};

/// Creates a childless node covering `start..end`.
#[must_use]
pub(crate) fn leaf(kind: NodeKind, start: usize, end: usize) -> Node {
    Node::new(kind, Span::new(start, end), Vec::new())
}

/// Accumulates the children of a node whose end is not known yet.
#[derive(Debug)]
pub(crate) struct NodeBuilder {
    kind: NodeKind,
    start: usize,
    children: Vec<Node>,
}

impl NodeBuilder {
    #[must_use]
    pub(crate) fn new(kind: NodeKind, start: usize) -> Self {
        Self {
            kind,
            start,
            children: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, node: Node) {
        debug_assert_eq!(
            self.children
                .last()
                .map_or(self.start, |last| last.span().end()),
            node.span().start(),
            "children of a {} must be contiguous",
            self.kind.name()
        );
        self.children.push(node);
    }

    /// Appends a punctuation leaf covering `start..end`.
    pub(crate) fn token(&mut self, start: usize, end: usize) {
        self.push(leaf(NodeKind::Token, start, end));
    }

    pub(crate) fn set_kind(&mut self, kind: NodeKind) {
        self.kind = kind;
    }

    #[must_use]
    pub(crate) fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Builds the node, which ends at `end`.
    #[must_use]
    pub(crate) fn finish(self, end: usize) -> Node {
        debug_assert!(
            self.children
                .last()
                .is_none_or(|last| last.span().end() == end),
            "children of a {} must cover its span",
            self.kind.name()
        );
        Node::new(self.kind, Span::new(self.start, end), self.children)
    }
}
