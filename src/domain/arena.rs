use std::collections::VecDeque;
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::value::NodeValue;

/// Which child slot of a parent a node occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Binary tree node in the arena.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub value: NodeValue,
    /// Index of left child in the arena
    pub left: Option<Index>,
    /// Index of right child in the arena
    pub right: Option<Index>,
}

impl TreeNode {
    fn new(value: NodeValue) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn child(&self, side: Side) -> Option<Index> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Arena-backed binary tree.
///
/// Nodes are only ever attached into an empty slot, so every node has exactly
/// one parent and the structure cannot contain cycles.
#[derive(Debug, Default)]
pub struct BinaryTree {
    arena: Arena<TreeNode>,
    root: Option<Index>,
}

impl BinaryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard every node and start over with a fresh root.
    #[instrument(level = "trace", skip(self))]
    pub fn set_root(&mut self, value: NodeValue) -> Index {
        self.arena.clear();
        let idx = self.arena.insert(TreeNode::new(value));
        self.root = Some(idx);
        idx
    }

    #[instrument(level = "trace", skip(self))]
    pub fn attach(&mut self, parent: Index, side: Side, value: NodeValue) -> DomainResult<Index> {
        let occupied = self
            .arena
            .get(parent)
            .ok_or(DomainError::NodeNotFound)?
            .child(side)
            .is_some();
        if occupied {
            return Err(DomainError::SlotOccupied { side });
        }

        let idx = self.arena.insert(TreeNode::new(value));
        if let Some(node) = self.arena.get_mut(parent) {
            match side {
                Side::Left => node.left = Some(idx),
                Side::Right => node.right = Some(idx),
            }
        }
        Ok(idx)
    }

    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn node(&self, idx: Index) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn value(&self, idx: Index) -> Option<NodeValue> {
        self.arena.get(idx).map(|n| n.value)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels; zero for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        self.iter_levels().count()
    }

    pub fn iter_preorder(&self) -> PreOrderIterator<'_> {
        PreOrderIterator::new(self)
    }

    pub fn iter_inorder(&self) -> InOrderIterator<'_> {
        InOrderIterator::new(self)
    }

    pub fn iter_postorder(&self) -> PostOrderIterator<'_> {
        PostOrderIterator::new(self)
    }

    pub fn iter_levels(&self) -> LevelIterator<'_> {
        LevelIterator::new(self)
    }
}

pub struct PreOrderIterator<'a> {
    tree: &'a BinaryTree,
    stack: Vec<Index>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(tree: &'a BinaryTree) -> Self {
        Self {
            tree,
            stack: tree.root().into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let node = self.tree.node(idx)?;
        // Right first so left is popped first
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some((idx, node))
    }
}

pub struct InOrderIterator<'a> {
    tree: &'a BinaryTree,
    stack: Vec<Index>,
    cursor: Option<Index>,
}

impl<'a> InOrderIterator<'a> {
    fn new(tree: &'a BinaryTree) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            cursor: tree.root(),
        }
    }
}

impl<'a> Iterator for InOrderIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.cursor {
            self.stack.push(idx);
            self.cursor = self.tree.node(idx).and_then(|n| n.left);
        }
        let idx = self.stack.pop()?;
        let node = self.tree.node(idx)?;
        self.cursor = node.right;
        Some((idx, node))
    }
}

pub struct PostOrderIterator<'a> {
    tree: &'a BinaryTree,
    stack: Vec<(Index, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(tree: &'a BinaryTree) -> Self {
        Self {
            tree,
            stack: tree.root().map(|r| (r, false)).into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (Index, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((idx, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.node(idx) {
                if visited {
                    return Some((idx, node));
                }
                self.stack.push((idx, true));
                if let Some(right) = node.right {
                    self.stack.push((right, false));
                }
                if let Some(left) = node.left {
                    self.stack.push((left, false));
                }
            }
        }
        None
    }
}

/// Yields one level at a time, left to right.
pub struct LevelIterator<'a> {
    tree: &'a BinaryTree,
    queue: VecDeque<Index>,
}

impl<'a> LevelIterator<'a> {
    fn new(tree: &'a BinaryTree) -> Self {
        Self {
            tree,
            queue: tree.root().into_iter().collect(),
        }
    }
}

impl<'a> Iterator for LevelIterator<'a> {
    type Item = Vec<&'a TreeNode>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.queue.is_empty() {
            return None;
        }
        let level_size = self.queue.len();
        let mut level = Vec::with_capacity(level_size);
        for _ in 0..level_size {
            let Some(node) = self.queue.pop_front().and_then(|idx| self.tree.node(idx)) else {
                continue;
            };
            self.queue.extend(node.left);
            self.queue.extend(node.right);
            level.push(node);
        }
        Some(level)
    }
}
