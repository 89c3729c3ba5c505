//! Traversal and dedup over the linked forest
//!
//! All walks keep a visited set, so shared children and cyclic input are
//! visited once and never recursed into forever.

use crate::arena::NodeArena;
use crate::node::{PersonNode, TreeNode};
use kinfolk_domain::PersonId;
use std::collections::HashSet;

/// Depth-first, pre-order, duplicate-free walk from `roots`
///
/// A node reachable through two parents appears once, at its first visit.
/// The arena itself is untouched: both parents keep the child.
pub fn flatten<'a>(arena: &'a NodeArena, roots: &[PersonId]) -> Vec<&'a PersonNode> {
    let mut visited: HashSet<&PersonId> = HashSet::new();
    let mut order = Vec::new();
    let mut stack: Vec<&PersonId> = roots.iter().rev().collect();

    while let Some(id) = stack.pop() {
        let Some(node) = arena.get(id) else {
            continue;
        };
        if !visited.insert(&node.id) {
            continue;
        }
        order.push(node);
        stack.extend(node.children.iter().rev());
    }

    order
}

/// Whether `target` can be reached from any of `roots`
pub fn reachable(arena: &NodeArena, roots: &[PersonId], target: &PersonId) -> bool {
    flatten(arena, roots).iter().any(|node| &node.id == target)
}

/// Arena nodes not reachable from `roots`, in discovery order
pub fn detached<'a>(arena: &'a NodeArena, roots: &[PersonId]) -> Vec<&'a PersonNode> {
    let reached: HashSet<&PersonId> = flatten(arena, roots).into_iter().map(|n| &n.id).collect();
    arena.iter().filter(|node| !reached.contains(&node.id)).collect()
}

/// Owned, nested forest for layout
///
/// Shared children are repeated under each parent. An edge that would close
/// a cycle along the current path is dropped from the nested view only.
pub fn to_forest(arena: &NodeArena, roots: &[PersonId]) -> Vec<TreeNode> {
    let mut path = Vec::new();
    roots
        .iter()
        .filter_map(|id| nest(arena, id, &mut path))
        .collect()
}

fn nest(arena: &NodeArena, id: &PersonId, path: &mut Vec<PersonId>) -> Option<TreeNode> {
    let node = arena.get(id)?;
    let mut tree = TreeNode::leaf(node);

    path.push(id.clone());
    for child in &node.children {
        if path.contains(child) {
            tracing::debug!(parent = %id, child = %child, "Cycle in parent/child edges; cutting");
            continue;
        }
        if let Some(subtree) = nest(arena, child, path) {
            tree.children.push(subtree);
        }
    }
    path.pop();

    Some(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeKind;
    use kinfolk_domain::{Placement, RelationType};

    fn node(id: &str) -> PersonNode {
        let mut node = PersonNode::placeholder(PersonId::new(id), "x", RelationType::Sibling.into());
        node.kind = NodeKind::Relative;
        node.placement = Some(Placement::VIEWER);
        node
    }

    fn arena(nodes: &[&str], edges: &[(&str, &str)]) -> NodeArena {
        let mut arena = NodeArena::new();
        for id in nodes {
            arena.insert_if_absent(node(id));
        }
        for (parent, child) in edges {
            arena.add_child(&PersonId::new(*parent), &PersonId::new(*child));
        }
        arena
    }

    fn ids(nodes: &[&PersonNode]) -> Vec<String> {
        nodes.iter().map(|n| n.id.to_string()).collect()
    }

    #[test]
    fn test_flatten_is_preorder_and_deduplicated() {
        // Two parents share one child
        let arena = arena(&["P1", "P2", "U", "K"], &[("P1", "U"), ("P2", "U"), ("U", "K")]);
        let roots = vec![PersonId::new("P1"), PersonId::new("P2")];

        assert_eq!(ids(&flatten(&arena, &roots)), vec!["P1", "U", "K", "P2"]);
        // Dedup does not strip the shared child from either parent
        assert_eq!(arena.get(&PersonId::new("P2")).map(|n| n.children.len()), Some(1));
    }

    #[test]
    fn test_flatten_survives_cycles() {
        let arena = arena(&["A", "B"], &[("A", "B"), ("B", "A")]);
        assert_eq!(ids(&flatten(&arena, &[PersonId::new("A")])), vec!["A", "B"]);
    }

    #[test]
    fn test_detached() {
        let arena = arena(&["U", "B1", "P1"], &[("P1", "U")]);
        let detached = detached(&arena, &[PersonId::new("P1")]);
        assert_eq!(ids(&detached), vec!["B1"]);
    }

    #[test]
    fn test_forest_repeats_shared_children() {
        let arena = arena(&["P1", "P2", "U"], &[("P1", "U"), ("P2", "U")]);
        let forest = to_forest(&arena, &[PersonId::new("P1"), PersonId::new("P2")]);

        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].children[0].id, PersonId::new("U"));
        assert_eq!(forest[1].children[0].id, PersonId::new("U"));
    }

    #[test]
    fn test_forest_cuts_cycles() {
        let arena = arena(&["A", "B"], &[("A", "B"), ("B", "A")]);
        let forest = to_forest(&arena, &[PersonId::new("A")]);
        assert_eq!(forest[0].size(), 2);
    }
}
