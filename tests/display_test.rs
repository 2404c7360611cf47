//! Level and outline renderings

use bintree::application::report::render_tree;
use bintree::config::DisplayStyle;
use bintree::domain::display::{
    padded_levels, render_levels, to_tree_string, EMPTY_TREE, OUTLINE_DEPTH_LIMIT,
};
use bintree::domain::{BinaryTree, NodeValue, ScriptedTokens, Side, TreeBuilder};

fn tree_from(tokens: &[&str]) -> BinaryTree {
    TreeBuilder::default()
        .build(&mut ScriptedTokens::new(tokens.iter()))
        .unwrap()
}

fn left_chain(depth: usize) -> BinaryTree {
    let one = NodeValue::new(1).unwrap();
    let mut tree = BinaryTree::new();
    let mut cursor = tree.set_root(one);
    for _ in 1..depth {
        cursor = tree.attach(cursor, Side::Left, one).unwrap();
    }
    tree
}

#[test]
fn given_single_node_when_rendering_levels_then_shows_null_children() {
    let tree = tree_from(&["5"]);

    assert_eq!(render_levels(&tree), "5\nnull null");
}

#[test]
fn given_uneven_tree_when_rendering_levels_then_stops_after_deepest_nodes_children() {
    let tree = tree_from(&["1", "2", "3", "4", "null", "null", "null", "null", "null"]);

    assert_eq!(render_levels(&tree), "1\n2 3\n4 null null null\nnull null");
}

#[test]
fn given_any_tree_when_padding_levels_then_last_row_is_all_null() {
    let tree = tree_from(&["1", "null", "2", "3", "4"]);

    let rows = padded_levels(&tree);

    assert_eq!(rows.len(), tree.height() + 1);
    assert!(rows.last().unwrap().iter().all(Option::is_none));
    // Children of the missing left node are not expanded
    assert_eq!(rows[2].len(), 2);
}

#[test]
fn given_empty_tree_when_rendering_then_says_so() {
    let tree = tree_from(&["null"]);

    assert_eq!(render_levels(&tree), EMPTY_TREE);
    assert!(padded_levels(&tree).is_empty());
    assert_eq!(render_tree(&tree, DisplayStyle::Tree), EMPTY_TREE);
}

#[test]
fn given_tree_style_when_rendering_then_outlines_with_null_siblings() {
    let tree = tree_from(&["1", "2", "3", "4", "null", "null", "null", "null", "null"]);

    let rendered = render_tree(&tree, DisplayStyle::Tree);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "1");
    assert!(lines[1].ends_with("2"));
    assert!(lines[2].ends_with("4"));
    assert!(lines[3].ends_with("null"));
    assert!(lines[4].ends_with("3"));
}

#[test]
fn given_levels_style_when_rendering_then_matches_render_levels() {
    let tree = tree_from(&["7", "8"]);

    assert_eq!(render_tree(&tree, DisplayStyle::Levels), render_levels(&tree));
}

#[test]
fn given_chain_at_outline_limit_when_rendering_tree_style_then_outlines_every_node() {
    let tree = left_chain(OUTLINE_DEPTH_LIMIT);

    let rendered = render_tree(&tree, DisplayStyle::Tree);
    let lines: Vec<&str> = rendered.lines().collect();

    // every node but the leaf has a null right sibling
    assert_eq!(lines.len(), 2 * OUTLINE_DEPTH_LIMIT - 1);
    assert_eq!(lines[0], "1");
    assert_eq!(
        lines.iter().filter(|line| line.ends_with("null")).count(),
        OUTLINE_DEPTH_LIMIT - 1
    );
}

#[test]
fn given_very_deep_chain_when_rendering_tree_style_then_falls_back_to_levels() {
    let tree = left_chain(200_000);

    let rendered = render_tree(&tree, DisplayStyle::Tree);

    assert_eq!(rendered, render_levels(&tree));
    assert_eq!(rendered.lines().count(), 200_001);
}

#[test]
fn given_deep_chain_when_building_outline_then_nests_without_recursion() {
    let depth = 20_000;
    let tree = left_chain(depth);

    let outline = to_tree_string(&tree);

    let mut level = &outline;
    let mut seen = 1;
    while let Some(next) = level.leaves.first() {
        assert_eq!(level.leaves.len(), 2);
        level = next;
        seen += 1;
    }
    assert_eq!(seen, depth);
    // Nested `Tree` values drop recursively; unwind them one level at a time
    let mut rest = vec![outline];
    while let Some(mut node) = rest.pop() {
        rest.append(&mut node.leaves);
    }
}
