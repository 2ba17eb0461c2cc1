use super::{super::Span, NodeKind};

/// A node in the concrete syntax tree.
///
/// The spans of a node's children are contiguous, don't overlap, and
/// together cover the node's own span.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Node {
    kind: NodeKind,
    span: Span,
    children: Vec<Node>,
}

impl Node {
    #[must_use]
    pub(crate) fn new(kind: NodeKind, span: Span, children: Vec<Node>) -> Self {
        Self {
            kind,
            span,
            children,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }

    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the slice of `source` covered by this node.
    ///
    /// `source` must be the text the node was parsed from.
    #[must_use]
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.span.range()]
    }

    /// Returns the first child of the given kind.
    #[must_use]
    pub fn child(&self, kind: &NodeKind) -> Option<&Node> {
        self.children.iter().find(|child| child.kind == *kind)
    }

    /// Iterates over this node and all its descendants in pre-order.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// Iterates over the leaves under this node, left to right.
    pub fn leaves(&self) -> impl Iterator<Item = &Node> {
        self.descendants().filter(|node| node.is_leaf())
    }

    /// Returns the nested `Pattern` of a group or lookaround assertion.
    #[must_use]
    pub fn body(&self) -> Option<&Node> {
        self.child(&NodeKind::Pattern)
    }

    /// Pairs every atom of a `Term` with the quantifier that follows it.
    /// Line feed tokens are skipped.
    ///
    /// Returns an empty vector for nodes that are not terms.
    #[must_use]
    pub fn items(&self) -> Vec<(&Node, Option<&Node>)> {
        if self.kind != NodeKind::Term {
            return Vec::new();
        }

        let mut items: Vec<(&Node, Option<&Node>)> = Vec::new();
        for child in self.children.iter().filter(|child| child.kind != NodeKind::Token) {
            match items.last_mut() {
                Some((_, quantifier @ None)) if child.kind.is_quantifier() => {
                    *quantifier = Some(child);
                }
                _ => items.push((child, None)),
            }
        }
        items
    }

    /// Returns the alternatives of a `Disjunction`, `None` standing for an
    /// empty alternative.
    ///
    /// Returns an empty vector for nodes that are not disjunctions.
    #[must_use]
    pub fn alternatives(&self) -> Vec<Option<&Node>> {
        if self.kind != NodeKind::Disjunction {
            return Vec::new();
        }

        let mut alternatives = vec![None];
        for child in &self.children {
            if child.kind == NodeKind::Token {
                alternatives.push(None);
            } else if let Some(last) = alternatives.last_mut() {
                *last = Some(child);
            }
        }
        alternatives
    }
}

/// Pre-order iterator returned by [`Node::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
