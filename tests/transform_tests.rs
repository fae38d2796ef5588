#![cfg(feature = "transform")]

//! Integration tests for transform chains over an object graph with
//! optional links.

mod common;

use common::{Branch, CallCounter, Leaf, Tree, World, green_tree, green_world};
use nested_function::transform::{Choice, Transform, identity, lift};
use rstest::rstest;

// =============================================================================
// Two Levels
// =============================================================================

#[rstest]
fn two_level_green_leaf_accepts() {
    let branch = Branch::with_leaf(Leaf::green());

    let branch_has_green_leaf = Transform::of(Branch::leaf).predicate(Leaf::is_green);

    assert!(branch_has_green_leaf(&branch));
}

#[rstest]
fn two_level_withered_leaf_rejects() {
    let branch = Branch::with_leaf(Leaf::withered());

    let branch_has_green_leaf = Transform::of(Branch::leaf).predicate(Leaf::is_green);

    assert!(!branch_has_green_leaf(&branch));
}

#[rstest]
fn two_level_missing_leaf_rejects_without_testing() {
    let branch = Branch::bare();
    let tests = CallCounter::new();

    let branch_has_green_leaf = Transform::of(Branch::leaf).predicate(|leaf| {
        tests.tick();
        leaf.is_green()
    });

    assert!(!branch_has_green_leaf(&branch));
    assert_eq!(tests.count(), 0);
}

// =============================================================================
// Three and Four Levels
// =============================================================================

#[rstest]
fn three_level_green_leaf_accepts() {
    let tree = green_tree();

    let tree_has_green_leaf = Transform::of(Tree::branch)
        .chain(Transform::of(Branch::leaf))
        .predicate(Leaf::is_green);

    assert!(tree_has_green_leaf(&tree));
}

#[rstest]
fn three_level_missing_branch_rejects() {
    let mut tree = green_tree();
    tree.set_branch(None);

    let tree_has_green_leaf = Transform::of(Tree::branch)
        .and_then(Branch::leaf)
        .predicate(Leaf::is_green);

    assert!(!tree_has_green_leaf(&tree));
}

#[rstest]
fn three_level_missing_leaf_rejects() {
    let mut tree = green_tree();
    if let Some(branch) = tree.branch_mut() {
        branch.set_leaf(None);
    }

    let tree_has_green_leaf = Transform::of(Tree::branch)
        .and_then(Branch::leaf)
        .predicate(Leaf::is_green);

    assert!(!tree_has_green_leaf(&tree));
}

#[rstest]
fn four_level_world_green_leaf_accepts() {
    let world = green_world();

    let world_has_green_leaf = Transform::of(World::tree)
        .and_then(Tree::branch)
        .and_then(Branch::leaf)
        .predicate(Leaf::is_green);

    assert!(world_has_green_leaf(&world));
}

#[rstest]
fn absent_middle_stage_skips_the_rest_of_the_chain() {
    let world = World::with_tree(Tree::bare());
    let leaf_lookups = CallCounter::new();
    let leaf_tests = CallCounter::new();

    let world_has_green_leaf = Transform::of(World::tree)
        .and_then(Tree::branch)
        .and_then(|branch| {
            leaf_lookups.tick();
            branch.leaf()
        })
        .predicate(|leaf| {
            leaf_tests.tick();
            leaf.is_green()
        });

    assert!(!world_has_green_leaf(&world));
    assert_eq!(leaf_lookups.count(), 0);
    assert_eq!(leaf_tests.count(), 0);
}

#[rstest]
#[case::green(green_tree())]
#[case::withered(Tree::with_branch(Branch::with_leaf(Leaf::withered())))]
#[case::bare_branch(Tree::with_branch(Branch::bare()))]
#[case::bare_tree(Tree::bare())]
fn chain_agrees_with_hand_written_option_navigation(#[case] tree: Tree) {
    let by_hand = tree
        .branch()
        .and_then(Branch::leaf)
        .is_some_and(Leaf::is_green);

    let tree_has_green_leaf = Transform::of(Tree::branch)
        .and_then(Branch::leaf)
        .predicate(Leaf::is_green);

    assert_eq!(tree_has_green_leaf(&tree), by_hand);
}

// =============================================================================
// Collections
// =============================================================================

#[rstest]
fn predicate_filters_a_forest() {
    let forest = vec![
        green_tree(),
        Tree::bare(),
        Tree::with_branch(Branch::with_leaf(Leaf::withered())),
        Tree::with_branch(Branch::bare()),
        green_tree(),
    ];

    let has_green_leaf = Transform::of(Tree::branch)
        .and_then(Branch::leaf)
        .predicate(Leaf::is_green);

    let green: Vec<&Tree> = forest.iter().filter(|&tree| has_green_leaf(tree)).collect();

    assert_eq!(green.len(), 2);
    assert!(green.iter().all(|tree| **tree == green_tree()));
}

#[rstest]
fn choose_renders_a_decision_per_tree() {
    let forest = [
        green_tree(),
        Tree::with_branch(Branch::with_leaf(Leaf::withered())),
        Tree::bare(),
    ];

    let colour = Transform::of(Tree::branch)
        .and_then(Branch::leaf)
        .choose(Leaf::is_green, Choice::when_true("green").when_false("brown"));

    let colours: Vec<&str> = forest.iter().map(&colour).collect();

    assert_eq!(colours, vec!["green", "brown", "brown"]);
}

// =============================================================================
// Value Transforms
// =============================================================================

#[rstest]
fn chained_value_transforms_compose() {
    let doubled_text = Transform::of(|number: i32| Some((number * 2).to_string()));
    let parsed_plus_one = Transform::of(|text: String| text.parse::<i32>().ok().map(|n| n + 1));

    let chained = doubled_text.chain(parsed_plus_one);

    assert_eq!(chained.apply(5), Some(11));
}

#[rstest]
fn lift_and_identity_combine_with_partial_stages() {
    let chained = identity()
        .chain(lift(|text: &'static str| text.trim()))
        .and_then(|text| text.parse::<u8>().ok())
        .map(u32::from);

    assert_eq!(chained.apply(" 12 "), Some(12));
    assert_eq!(chained.apply("300"), None);
}

#[rstest]
fn into_fn_returns_the_chain_as_a_plain_function() {
    let world = green_world();

    let leaf_of = Transform::of(World::tree)
        .and_then(Tree::branch)
        .and_then(Branch::leaf)
        .into_fn();

    assert_eq!(leaf_of(&world), Some(&Leaf::green()));
}
