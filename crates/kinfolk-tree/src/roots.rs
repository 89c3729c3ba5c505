//! Root resolver - where forest traversal starts

use crate::arena::NodeArena;
use crate::traversal;
use kinfolk_domain::PersonId;
use std::collections::HashSet;

/// Find the roots of the linked arena, in discovery order
///
/// A root candidate is a placed node with no incoming parent edge whose
/// level is the shallowest placed level (or level 1 when no level-0 node
/// exists). Unplaced nodes are never roots. The viewer is guaranteed to be
/// reachable: with no candidates the forest is the viewer alone, and when
/// candidates miss the viewer its topmost ancestor is appended.
pub fn resolve_roots(arena: &NodeArena, viewer: &PersonId) -> Vec<PersonId> {
    let with_parent: HashSet<&PersonId> = arena.iter().flat_map(|n| n.children.iter()).collect();
    let levels: Vec<i32> = arena.iter().filter_map(|n| n.level()).collect();
    let Some(min_level) = levels.iter().copied().min() else {
        return vec![viewer.clone()];
    };
    let has_level_zero = levels.contains(&0);

    let mut roots: Vec<PersonId> = arena
        .iter()
        .filter(|node| !with_parent.contains(&node.id))
        .filter(|node| match node.level() {
            Some(level) => level == min_level || (level == 1 && !has_level_zero),
            None => false,
        })
        .map(|node| node.id.clone())
        .collect();

    if roots.is_empty() {
        tracing::debug!(viewer = %viewer, "No root candidates; falling back to viewer");
        return vec![viewer.clone()];
    }

    if !traversal::reachable(arena, &roots, viewer) {
        let anchor = topmost_ancestor(arena, viewer);
        tracing::debug!(viewer = %viewer, anchor = %anchor, "Viewer unreachable from roots; adding anchor");
        if !roots.contains(&anchor) {
            roots.push(anchor);
        }
    }

    roots
}

/// Follow first parents upward until none remain or a cycle closes
fn topmost_ancestor(arena: &NodeArena, start: &PersonId) -> PersonId {
    let mut current = start.clone();
    let mut seen = HashSet::new();
    seen.insert(current.clone());

    while let Some(parent) = arena.parents_of(&current).into_iter().next() {
        if !seen.insert(parent.clone()) {
            break;
        }
        current = parent;
    }

    current
}
