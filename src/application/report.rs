//! Printable bundles of traversal and path-sum results.

use std::fmt;

use itertools::Itertools;
use tracing::debug;

use crate::config::DisplayStyle;
use crate::domain::display::{render_levels, to_tree_string, OUTLINE_DEPTH_LIMIT};
use crate::domain::{views, BinaryTree, NodeValue, PeakPath};

/// `[4, 2, 1, 3]`
pub fn format_values(values: &[NodeValue]) -> String {
    format!("[{}]", values.iter().join(", "))
}

/// Render in the requested style. Trees deeper than [`OUTLINE_DEPTH_LIMIT`]
/// always come out as levels.
pub fn render_tree(tree: &BinaryTree, style: DisplayStyle) -> String {
    match style {
        DisplayStyle::Levels => render_levels(tree),
        DisplayStyle::Tree => {
            let height = tree.height();
            if height > OUTLINE_DEPTH_LIMIT {
                debug!(height, "tree too deep for an outline, rendering levels");
                return render_levels(tree);
            }
            to_tree_string(tree).to_string().trim_end().to_string()
        }
    }
}

/// Every depth-first order and breadth-first view of one tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalReport {
    pub inorder: Vec<NodeValue>,
    pub preorder: Vec<NodeValue>,
    pub postorder: Vec<NodeValue>,
    pub right_view: Vec<NodeValue>,
    pub left_view: Vec<NodeValue>,
    pub top_view: Vec<NodeValue>,
    pub bottom_view: Vec<NodeValue>,
    pub alternate_levels: Vec<Vec<NodeValue>>,
}

impl TraversalReport {
    pub fn from_tree(tree: &BinaryTree) -> Self {
        Self {
            inorder: views::inorder(tree),
            preorder: views::preorder(tree),
            postorder: views::postorder(tree),
            right_view: views::right_view(tree),
            left_view: views::left_view(tree),
            top_view: views::top_view(tree),
            bottom_view: views::bottom_view(tree),
            alternate_levels: views::alternate_levels(tree),
        }
    }
}

impl fmt::Display for TraversalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Inorder: {}", format_values(&self.inorder))?;
        writeln!(f, "Preorder: {}", format_values(&self.preorder))?;
        writeln!(f, "Postorder: {}", format_values(&self.postorder))?;
        writeln!(f, "Right View: {}", format_values(&self.right_view))?;
        writeln!(f, "Left View: {}", format_values(&self.left_view))?;
        writeln!(f, "Top View: {}", format_values(&self.top_view))?;
        writeln!(f, "Bottom View: {}", format_values(&self.bottom_view))?;
        write!(f, "Alternate Level View:")?;
        for level in &self.alternate_levels {
            write!(f, "\n{}", level.iter().join(" "))?;
        }
        Ok(())
    }
}

/// Two lines: the sum, then the path.
pub fn format_peak(peak: &PeakPath) -> String {
    format!(
        "Max Path Sum: {}\nPath: {}",
        peak.sum,
        format_values(&peak.path)
    )
}
