//! Tests for TreeBuilder

use rstest::rstest;

use bintree::domain::{
    views, BuildEvent, DomainResult, NodeValue, Request, ScriptedTokens, Side, TokenError,
    TokenGrammar, TokenSource, TreeBuilder,
};
use bintree::util::testing;

fn v(value: i64) -> NodeValue {
    NodeValue::new(value).unwrap()
}

fn values(values: &[NodeValue]) -> Vec<i32> {
    values.iter().map(|v| v.get()).collect()
}

/// Records every request and event while replaying a fixed script.
struct RecordingSource {
    tokens: Vec<&'static str>,
    requests: Vec<Request>,
    events: Vec<BuildEvent>,
}

impl RecordingSource {
    fn new(tokens: &[&'static str]) -> Self {
        Self {
            tokens: tokens.iter().rev().copied().collect(),
            requests: Vec::new(),
            events: Vec::new(),
        }
    }
}

impl TokenSource for RecordingSource {
    fn next_token(&mut self, request: &Request) -> DomainResult<Option<String>> {
        self.requests.push(*request);
        Ok(self.tokens.pop().map(str::to_string))
    }

    fn feedback(&mut self, event: &BuildEvent) {
        self.events.push(event.clone());
    }
}

#[rstest]
#[case::null_root(&["null", "1", "2"])]
#[case::quit_root(&["q", "1"])]
#[case::no_input(&[])]
fn given_missing_root_when_building_then_tree_is_empty(#[case] tokens: &[&'static str]) {
    testing::init_test_setup();
    let mut source = RecordingSource::new(tokens);

    let tree = TreeBuilder::default().build(&mut source).unwrap();

    assert!(tree.is_empty());
    assert_eq!(source.requests, vec![Request::Root]);
    assert_eq!(source.events, vec![BuildEvent::RootMissing]);
}

#[test]
fn given_full_script_when_building_then_children_are_requested_breadth_first() {
    let mut source = RecordingSource::new(&["1", "2", "3", "null", "null", "null", "null"]);

    let tree = TreeBuilder::default().build(&mut source).unwrap();

    assert_eq!(tree.len(), 3);
    let child = |parent: i64, side| Request::Child {
        parent: v(parent),
        side,
    };
    assert_eq!(
        source.requests,
        vec![
            Request::Root,
            child(1, Side::Left),
            child(1, Side::Right),
            child(2, Side::Left),
            child(2, Side::Right),
            child(3, Side::Left),
            child(3, Side::Right),
        ]
    );
    assert_eq!(source.events.last(), Some(&BuildEvent::Finished { nodes: 3 }));
}

#[test]
fn given_quit_mid_build_when_building_then_keeps_attached_children_and_stops_asking() {
    let mut source = RecordingSource::new(&["1", "2", "q", "3", "4"]);

    let tree = TreeBuilder::default().build(&mut source).unwrap();

    assert_eq!(values(&views::preorder(&tree)), vec![1, 2]);
    // root, left of 1, right of 1 -- nothing after the quit
    assert_eq!(source.requests.len(), 3);
    assert_eq!(source.tokens, vec!["4", "3"]);
    assert!(source.events.contains(&BuildEvent::Stopped));
}

#[test]
fn given_invalid_tokens_when_building_then_same_request_is_repeated() {
    let mut source = ScriptedTokens::new(["1", "abc", "99999", "2", "null"]);

    let tree = TreeBuilder::default().build(&mut source).unwrap();

    assert_eq!(values(&views::preorder(&tree)), vec![1, 2]);
    let left_of_one = Request::Child {
        parent: v(1),
        side: Side::Left,
    };
    assert_eq!(
        source.rejected(),
        &[
            (left_of_one, TokenError::NotANumber("abc".to_string())),
            (left_of_one, TokenError::OutOfRange(99_999)),
        ]
    );
}

#[test]
fn given_exhausted_source_when_building_then_behaves_like_quit() {
    let mut source = ScriptedTokens::new(["7", "3"]);

    let tree = TreeBuilder::default().build(&mut source).unwrap();

    assert_eq!(values(&views::levels(&tree).concat()), vec![7, 3]);
}

#[test]
fn given_null_children_when_building_then_slots_stay_empty() {
    let mut source = RecordingSource::new(&["1", "null", "2", "null", "null"]);

    let tree = TreeBuilder::default().build(&mut source).unwrap();

    let root = tree.node(tree.root().unwrap()).unwrap();
    assert!(root.left.is_none());
    assert_eq!(tree.value(root.right.unwrap()), Some(v(2)));
    assert_eq!(
        source.events,
        vec![
            BuildEvent::RootAdded(v(1)),
            BuildEvent::Expanding { parent: v(1) },
            BuildEvent::NullChild {
                parent: v(1),
                side: Side::Left
            },
            BuildEvent::Attached {
                parent: v(1),
                side: Side::Right,
                value: v(2)
            },
            BuildEvent::Expanding { parent: v(2) },
            BuildEvent::NullChild {
                parent: v(2),
                side: Side::Left
            },
            BuildEvent::NullChild {
                parent: v(2),
                side: Side::Right
            },
            BuildEvent::Finished { nodes: 2 },
        ]
    );
}

#[test]
fn given_custom_grammar_when_building_then_uses_its_sentinels() {
    let builder = TreeBuilder::new(TokenGrammar::new("none", "STOP"));
    let mut source = ScriptedTokens::new(["4", "None", "5", "null", "stop", "6"]);

    let tree = builder.build(&mut source).unwrap();

    assert_eq!(values(&views::preorder(&tree)), vec![4, 5]);
    assert_eq!(source.rejected().len(), 1);
}

#[test]
fn given_two_builds_when_rebuilding_then_trees_are_independent() {
    let builder = TreeBuilder::default();
    let first = builder.build(&mut ScriptedTokens::new(["1", "2", "3"])).unwrap();
    let second = builder.build(&mut ScriptedTokens::new(["9"])).unwrap();

    assert_eq!(first.len(), 3);
    assert_eq!(second.len(), 1);
    assert_eq!(values(&views::inorder(&second)), vec![9]);
}
