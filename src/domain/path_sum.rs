//! Maximum peak path sum.
//!
//! A peak path climbs from some node up to a single peak and then descends
//! into at most one subtree on the other side. Negative branches are dropped
//! rather than subtracted, so an all-negative tree degrades to its largest
//! single node.

use std::collections::HashMap;

use generational_arena::Index;
use tracing::{debug, instrument, trace};

use crate::domain::arena::BinaryTree;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::value::NodeValue;

/// The winning path and its sum. `path` reads left to right: the left branch
/// bottom-up, the peak, then the right branch top-down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeakPath {
    pub sum: i64,
    pub path: Vec<NodeValue>,
}

/// Best single-branch extension downward from a node.
#[derive(Debug, Clone, Copy)]
struct Branch {
    sum: i64,
    /// Child continuing the branch, if any
    next: Option<Index>,
}

#[derive(Debug, Default)]
struct PeakTracker {
    branches: HashMap<Index, Branch>,
    best: Option<(i64, Index)>,
}

impl PeakTracker {
    /// Clamped contribution of an optional child.
    fn gain(&self, child: Option<Index>) -> i64 {
        child
            .and_then(|idx| self.branches.get(&idx))
            .map_or(0, |b| b.sum.max(0))
    }

    fn offer(&mut self, peak: Index, sum: i64) {
        if self.best.map_or(true, |(best, _)| sum > best) {
            trace!(sum, "new best peak");
            self.best = Some((sum, peak));
        }
    }

    /// Values along the branch that starts at `start`, top-down.
    fn walk(&self, tree: &BinaryTree, start: Index) -> Vec<NodeValue> {
        let mut out = Vec::new();
        let mut cursor = Some(start);
        while let Some(idx) = cursor {
            let Some(value) = tree.value(idx) else { break };
            out.push(value);
            cursor = self.branches.get(&idx).and_then(|b| b.next);
        }
        out
    }
}

/// Compute the maximum peak path.
///
/// Fails with [`DomainError::EmptyTree`] when there is no root.
#[instrument(level = "debug", skip_all)]
pub fn max_path_sum(tree: &BinaryTree) -> DomainResult<PeakPath> {
    let mut tracker = PeakTracker::default();

    for (idx, node) in tree.iter_postorder() {
        let left = tracker.gain(node.left);
        let right = tracker.gain(node.right);
        let value = node.value.as_i64();

        tracker.offer(idx, left + value + right);

        let branch = if left > right {
            Branch {
                sum: value + left,
                next: node.left,
            }
        } else {
            Branch {
                sum: value + right,
                next: if right > 0 { node.right } else { None },
            }
        };
        tracker.branches.insert(idx, branch);
    }

    let (sum, peak) = tracker.best.ok_or(DomainError::EmptyTree)?;
    let node = tree.node(peak).ok_or(DomainError::NodeNotFound)?;

    let mut path = Vec::new();
    if tracker.gain(node.left) > 0 {
        if let Some(left) = node.left {
            path.extend(tracker.walk(tree, left).into_iter().rev());
        }
    }
    path.push(node.value);
    if tracker.gain(node.right) > 0 {
        if let Some(right) = node.right {
            path.extend(tracker.walk(tree, right));
        }
    }

    debug!(sum, len = path.len(), "max path sum");
    Ok(PeakPath { sum, path })
}
