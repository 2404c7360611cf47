//! Textual renderings of a [`BinaryTree`].

use std::collections::{HashMap, VecDeque};

use generational_arena::Index;
use itertools::Itertools;
use termtree::Tree;

use crate::domain::arena::BinaryTree;
use crate::domain::value::NodeValue;

pub const EMPTY_TREE: &str = "Empty tree";
pub const NULL_LABEL: &str = "null";

/// Level rows including `None` for every absent child of a real node.
///
/// Children of absent nodes are not expanded, so the last row holds the
/// missing children of the deepest real nodes.
pub fn padded_levels(tree: &BinaryTree) -> Vec<Vec<Option<NodeValue>>> {
    let mut rows = Vec::new();
    let mut queue: VecDeque<Option<Index>> = tree.root().map(Some).into_iter().collect();

    while !queue.is_empty() {
        let mut row = Vec::with_capacity(queue.len());
        for _ in 0..queue.len() {
            let slot = queue.pop_front().flatten().and_then(|idx| tree.node(idx));
            match slot {
                Some(node) => {
                    row.push(Some(node.value));
                    queue.push_back(node.left);
                    queue.push_back(node.right);
                }
                None => row.push(None),
            }
        }
        rows.push(row);
    }
    rows
}

/// One line per level, values separated by a space.
pub fn render_levels(tree: &BinaryTree) -> String {
    if tree.is_empty() {
        return EMPTY_TREE.to_string();
    }
    padded_levels(tree)
        .iter()
        .map(|row| {
            row.iter()
                .map(|slot| slot.map_or_else(|| NULL_LABEL.to_string(), |v| v.to_string()))
                .join(" ")
        })
        .join("\n")
}

/// Deepest tree still drawn as an outline. Each outline row carries a prefix
/// as long as its depth and nested `Tree` values drop recursively, so deeper
/// trees are rendered by levels instead.
pub const OUTLINE_DEPTH_LIMIT: usize = 512;

/// Outline view. A lone child is shown next to a `null` sibling so left and
/// right stay distinguishable.
///
/// Subtrees are assembled bottom-up in post-order, so building does not
/// recurse. Callers check [`OUTLINE_DEPTH_LIMIT`] before rendering the result.
pub fn to_tree_string(tree: &BinaryTree) -> Tree<String> {
    let Some(root) = tree.root() else {
        return Tree::new(EMPTY_TREE.to_string());
    };

    let mut finished: HashMap<Index, Tree<String>> = HashMap::new();
    for (idx, node) in tree.iter_postorder() {
        let mut out = Tree::new(node.value.to_string());
        if !node.is_leaf() {
            for child in [node.left, node.right] {
                out.push(
                    child
                        .and_then(|child| finished.remove(&child))
                        .unwrap_or_else(|| Tree::new(NULL_LABEL.to_string())),
                );
            }
        }
        finished.insert(idx, out);
    }

    finished
        .remove(&root)
        .unwrap_or_else(|| Tree::new(EMPTY_TREE.to_string()))
}
