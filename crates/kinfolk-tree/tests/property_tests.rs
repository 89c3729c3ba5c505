//! Property tests for tree building invariants over random assertion lists

use kinfolk_domain::{NoProfiles, PersonId, Placement, RelationAssertion, RelationFamily, RelationType};
use kinfolk_tree::{FamilyTree, FamilyTreeBuilder, NodeKind, TreeConfig};
use proptest::prelude::*;
use std::collections::HashSet;

const PEOPLE: [&str; 6] = ["U", "A", "B", "C", "D", "E"];

fn any_code() -> impl Strategy<Value = String> {
    let mut codes: Vec<String> = RelationType::ALL.iter().map(|r| r.as_str().to_string()).collect();
    codes.push("godparent".to_string());
    codes.push("step_father".to_string());
    proptest::sample::select(codes)
}

fn any_assertions() -> impl Strategy<Value = Vec<RelationAssertion>> {
    let person = proptest::sample::select(PEOPLE.to_vec());
    proptest::collection::vec((person.clone(), person, any_code()), 0..24).prop_map(|edges| {
        edges
            .into_iter()
            .enumerate()
            .map(|(i, (subject, object, code))| {
                RelationAssertion::new(format!("a{}", i), subject, object, code)
            })
            .collect()
    })
}

fn any_config() -> impl Strategy<Value = TreeConfig> {
    prop_oneof![Just(TreeConfig::default()), Just(TreeConfig::strict())]
}

fn build(assertions: &[RelationAssertion], config: &TreeConfig) -> FamilyTree {
    FamilyTreeBuilder::new(config.clone()).build(assertions, &PersonId::new("U"), &NoProfiles)
}

proptest! {
    /// Property: no node lists the same child twice
    #[test]
    fn test_no_duplicate_children(assertions in any_assertions(), config in any_config()) {
        let tree = build(&assertions, &config);
        for node in tree.nodes() {
            let unique: HashSet<&PersonId> = node.children.iter().collect();
            prop_assert_eq!(unique.len(), node.children.len(), "duplicate child under {}", node.id);
        }
    }

    /// Property: the viewer exists and some root reaches it
    #[test]
    fn test_viewer_always_reachable(assertions in any_assertions(), config in any_config()) {
        let tree = build(&assertions, &config);
        prop_assert!(tree.viewer_node().is_some());
        prop_assert!(!tree.roots().is_empty());
        prop_assert!(tree.flatten().iter().any(|n| n.id == PersonId::new("U")));
    }

    /// Property: one node per distinct person, viewer included
    #[test]
    fn test_one_node_per_person(assertions in any_assertions()) {
        let tree = build(&assertions, &TreeConfig::default());
        let viewer = PersonId::new("U");

        let mut expected: HashSet<PersonId> = assertions
            .iter()
            .filter(|a| a.subject_id != a.object_id)
            .filter_map(|a| a.other_party(&viewer).cloned())
            .collect();
        expected.insert(viewer);

        let actual: HashSet<PersonId> = tree
            .nodes()
            .filter(|n| n.kind != NodeKind::Placeholder)
            .map(|n| n.id.clone())
            .collect();
        prop_assert_eq!(actual.len(), tree.nodes().filter(|n| !n.is_placeholder()).count());
        prop_assert_eq!(actual, expected);
    }

    /// Property: a relative's band is the band of its relation code,
    /// except that anyone named as a spouse shares the viewer's band
    #[test]
    fn test_placement_follows_relation(assertions in any_assertions()) {
        let tree = build(&assertions, &TreeConfig::default());
        let viewer = PersonId::new("U");
        let spouses: HashSet<PersonId> = assertions
            .iter()
            .filter(|a| a.code().family() == Some(RelationFamily::Spouse))
            .filter_map(|a| a.other_party(&viewer).cloned())
            .collect();

        for node in tree.nodes().filter(|n| n.kind == NodeKind::Relative) {
            let expected = if spouses.contains(&node.id) {
                Some(Placement::VIEWER)
            } else {
                node.relation.as_ref().and_then(|r| r.placement())
            };
            prop_assert_eq!(node.placement, expected, "band of {}", node.id);
        }
    }

    /// Property: rebuilding from the same input yields the same structure
    #[test]
    fn test_rebuild_is_idempotent(assertions in any_assertions(), config in any_config()) {
        let first = build(&assertions, &config);
        let second = build(&assertions, &config);

        prop_assert_eq!(first.roots(), second.roots());
        let a: Vec<_> = first.nodes().cloned().collect();
        let b: Vec<_> = second.nodes().cloned().collect();
        prop_assert_eq!(a, b);
        prop_assert_eq!(first.to_forest(), second.to_forest());
    }

    /// Property: the flat walk never repeats a node
    #[test]
    fn test_flatten_is_unique(assertions in any_assertions()) {
        let tree = build(&assertions, &TreeConfig::default());
        let flat = tree.flatten();
        let unique: HashSet<&PersonId> = flat.iter().map(|n| &n.id).collect();
        prop_assert_eq!(unique.len(), flat.len());
        prop_assert_eq!(flat.len() + tree.detached().len(), tree.len());
    }
}
