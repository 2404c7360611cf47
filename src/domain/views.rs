//! Depth-first orders and breadth-first views over a [`BinaryTree`].
//!
//! Every function is read-only and total: an empty tree yields an empty result.

use std::collections::{BTreeMap, VecDeque};

use tracing::instrument;

use crate::domain::arena::BinaryTree;
use crate::domain::value::NodeValue;

/// Left, node, right.
#[instrument(level = "debug", skip_all)]
pub fn inorder(tree: &BinaryTree) -> Vec<NodeValue> {
    tree.iter_inorder().map(|(_, n)| n.value).collect()
}

/// Node, left, right.
#[instrument(level = "debug", skip_all)]
pub fn preorder(tree: &BinaryTree) -> Vec<NodeValue> {
    tree.iter_preorder().map(|(_, n)| n.value).collect()
}

/// Left, right, node.
#[instrument(level = "debug", skip_all)]
pub fn postorder(tree: &BinaryTree) -> Vec<NodeValue> {
    tree.iter_postorder().map(|(_, n)| n.value).collect()
}

/// Node values grouped per depth, left to right.
pub fn levels(tree: &BinaryTree) -> Vec<Vec<NodeValue>> {
    tree.iter_levels()
        .map(|level| level.into_iter().map(|n| n.value).collect())
        .collect()
}

/// First node of every level.
#[instrument(level = "debug", skip_all)]
pub fn left_view(tree: &BinaryTree) -> Vec<NodeValue> {
    tree.iter_levels()
        .filter_map(|level| level.first().map(|n| n.value))
        .collect()
}

/// Last node of every level.
#[instrument(level = "debug", skip_all)]
pub fn right_view(tree: &BinaryTree) -> Vec<NodeValue> {
    tree.iter_levels()
        .filter_map(|level| level.last().map(|n| n.value))
        .collect()
}

/// Levels 0, 2, 4, ... each as its own row.
#[instrument(level = "debug", skip_all)]
pub fn alternate_levels(tree: &BinaryTree) -> Vec<Vec<NodeValue>> {
    levels(tree).into_iter().step_by(2).collect()
}

/// Shallowest node per horizontal distance, ordered by distance.
#[instrument(level = "debug", skip_all)]
pub fn top_view(tree: &BinaryTree) -> Vec<NodeValue> {
    let mut seen = BTreeMap::new();
    for (distance, value) in horizontal_distances(tree) {
        seen.entry(distance).or_insert(value);
    }
    seen.into_values().collect()
}

/// Deepest node per horizontal distance; within a level the rightmost wins.
#[instrument(level = "debug", skip_all)]
pub fn bottom_view(tree: &BinaryTree) -> Vec<NodeValue> {
    let mut seen = BTreeMap::new();
    for (distance, value) in horizontal_distances(tree) {
        seen.insert(distance, value);
    }
    seen.into_values().collect()
}

/// Breadth-first walk yielding (horizontal distance, value); root is 0,
/// left child is parent - 1, right child is parent + 1.
fn horizontal_distances(tree: &BinaryTree) -> Vec<(i64, NodeValue)> {
    let mut out = Vec::with_capacity(tree.len());
    let mut queue: VecDeque<_> = tree.root().map(|r| (r, 0_i64)).into_iter().collect();
    while let Some((idx, distance)) = queue.pop_front() {
        let Some(node) = tree.node(idx) else { continue };
        out.push((distance, node.value));
        if let Some(left) = node.left {
            queue.push_back((left, distance - 1));
        }
        if let Some(right) = node.right {
            queue.push_back((right, distance + 1));
        }
    }
    out
}
