/*! Functions that return an ASCII representation of the CST.*/

use ::ascii_tree::Tree::{self, Leaf};
use ::ascii_tree::write_tree;

use super::{Node, NodeKind, Pattern};

/// Returns the label of a node: its kind name plus any attribute that is
/// not visible in its text.
fn label(node: &Node) -> String {
    let name = node.kind().name();
    match node.kind() {
        NodeKind::LookaroundAssertion(lookaround) => format!("{name} {lookaround:?}"),
        NodeKind::CharacterClass { negated: true } => format!("{name} negated"),
        NodeKind::AnonymousCapturingGroup { index } | NodeKind::NamedCapturingGroup { index } => {
            format!("{name} #{index}")
        }
        NodeKind::CountQuantifier { min, max, .. } => match max {
            Some(max) => format!("{name} {min}..={max}"),
            None => format!("{name} {min}.."),
        },
        _ => name.to_owned(),
    }
}

fn node_ascii_tree(node: &Node, source: &str) -> Tree {
    if node.is_leaf() && node.kind() != &NodeKind::Pattern {
        Leaf(vec![format!("{} {:?}", label(node), node.text(source))])
    } else {
        Tree::Node(
            label(node),
            node.children()
                .iter()
                .map(|child| node_ascii_tree(child, source))
                .collect(),
        )
    }
}

impl Pattern {
    /// Returns a representation of the CST as an ASCII tree.
    #[must_use]
    pub fn ascii_tree(&self) -> Tree {
        node_ascii_tree(self.root(), self.source())
    }

    /// Renders the CST as an ASCII tree, one node per line.
    #[must_use]
    pub fn ascii_tree_string(&self) -> String {
        let mut buf = String::new();
        // Writing into a `String` never fails.
        let _ = write_tree(&mut buf, &self.ascii_tree());
        buf
    }
}
