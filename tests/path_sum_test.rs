//! Maximum peak path sum

use rstest::rstest;

use bintree::domain::{
    max_path_sum, views, BinaryTree, DomainError, NodeValue, ScriptedTokens, Side, TreeBuilder,
};

fn tree_from(tokens: &[&str]) -> BinaryTree {
    TreeBuilder::default()
        .build(&mut ScriptedTokens::new(tokens.iter()))
        .unwrap()
}

fn values(values: &[NodeValue]) -> Vec<i32> {
    values.iter().map(|v| v.get()).collect()
}

#[rstest]
#[case::single_node(&["5"], 5, vec![5])]
#[case::through_root(&["1", "2", "3", "4", "null", "null", "null", "null", "null"], 10, vec![4, 2, 1, 3])]
#[case::all_negative(&["-1", "-2", "-3"], -1, vec![-1])]
#[case::best_deep_negative(&["-5", "-2", "-8"], -2, vec![-2])]
#[case::avoids_root(&["-10", "9", "20", "null", "null", "15", "7"], 42, vec![15, 20, 7])]
#[case::drops_negative_child(&["2", "-1", "3"], 5, vec![2, 3])]
#[case::left_chain(&["1", "2", "null", "3", "null"], 6, vec![3, 2, 1])]
#[case::right_chain(&["1", "null", "2", "null", "3"], 6, vec![1, 2, 3])]
#[case::bent_branch(&["1", "2", "null", "null", "3"], 6, vec![3, 2, 1])]
#[case::negative_leaf_not_in_branch(&["4", "-6", "null", "null", "-1"], 4, vec![4])]
fn given_tree_when_computing_max_path_sum_then_returns_best_peak(
    #[case] tokens: &[&str],
    #[case] sum: i64,
    #[case] path: Vec<i32>,
) {
    let tree = tree_from(tokens);

    let peak = max_path_sum(&tree).unwrap();

    assert_eq!(peak.sum, sum);
    assert_eq!(values(&peak.path), path);
}

#[test]
fn given_peak_path_when_summing_values_then_matches_reported_sum() {
    let tree = tree_from(&["5", "4", "8", "11", "null", "13", "4", "7", "2", "null", "null", "null", "1"]);

    let peak = max_path_sum(&tree).unwrap();

    assert_eq!(peak.sum, 48);
    assert_eq!(peak.path.iter().map(|v| v.as_i64()).sum::<i64>(), peak.sum);
}

#[test]
fn given_empty_tree_when_computing_max_path_sum_then_fails_cleanly() {
    let tree = tree_from(&["null"]);

    assert_eq!(max_path_sum(&tree), Err(DomainError::EmptyTree));
}

#[test]
fn given_same_tree_when_computing_twice_then_results_are_identical() {
    let tree = tree_from(&["3", "-4", "6", "2", "9", "null", "-1"]);

    assert_eq!(max_path_sum(&tree).unwrap(), max_path_sum(&tree).unwrap());
}

#[test]
fn given_very_deep_chain_when_traversing_then_no_recursion_limit_is_hit() {
    let depth = 200_000;
    let one = NodeValue::new(1).unwrap();
    let mut tree = BinaryTree::new();
    let mut cursor = tree.set_root(one);
    for _ in 1..depth {
        cursor = tree.attach(cursor, Side::Left, one).unwrap();
    }

    let peak = max_path_sum(&tree).unwrap();

    assert_eq!(peak.sum, depth as i64);
    assert_eq!(peak.path.len(), depth);
    assert_eq!(views::inorder(&tree).len(), depth);
    assert_eq!(views::postorder(&tree).len(), depth);
    assert_eq!(tree.height(), depth);
}
