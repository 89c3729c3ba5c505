//! Node arena owned by a single build
//!
//! Insertion order is discovery order, which is what makes root order and
//! first-match heuristics deterministic for a given input.

use crate::node::PersonNode;
use indexmap::IndexMap;
use kinfolk_domain::{PersonId, Placement, RelationFamily};

/// Keyed, insertion-ordered set of nodes
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: IndexMap<PersonId, PersonNode>,
}

impl NodeArena {
    /// Create an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether a node exists for `id`
    pub fn contains(&self, id: &PersonId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Get a node
    pub fn get(&self, id: &PersonId) -> Option<&PersonNode> {
        self.nodes.get(id)
    }

    /// Nodes in discovery order
    pub fn iter(&self) -> impl Iterator<Item = &PersonNode> {
        self.nodes.values()
    }

    /// Insert a node unless one with the same id exists
    ///
    /// Returns whether the node was inserted.
    pub(crate) fn insert_if_absent(&mut self, node: PersonNode) -> bool {
        if self.nodes.contains_key(&node.id) {
            return false;
        }
        self.nodes.insert(node.id.clone(), node);
        true
    }

    /// Append `child` to `parent`'s children unless already present
    ///
    /// Returns whether an edge was added. Self-edges and edges to unknown
    /// nodes are refused.
    pub(crate) fn add_child(&mut self, parent: &PersonId, child: &PersonId) -> bool {
        if parent == child || !self.nodes.contains_key(child) {
            return false;
        }
        match self.nodes.get_mut(parent) {
            Some(node) if !node.has_child(child) => {
                node.children.push(child.clone());
                true
            }
            _ => false,
        }
    }

    pub(crate) fn set_placement(&mut self, id: &PersonId, placement: Option<Placement>) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.placement = placement;
        }
    }

    /// Ids of nodes holding `id` as a child, in discovery order
    pub fn parents_of(&self, id: &PersonId) -> Vec<PersonId> {
        self.nodes
            .values()
            .filter(|node| node.has_child(id))
            .map(|node| node.id.clone())
            .collect()
    }

    /// First node, in discovery order, whose relation matches `predicate`
    pub(crate) fn first_in_family(
        &self,
        predicate: impl Fn(RelationFamily) -> bool,
    ) -> Option<PersonId> {
        self.nodes
            .values()
            .find(|node| {
                node.relation
                    .as_ref()
                    .and_then(|relation| relation.family())
                    .is_some_and(&predicate)
            })
            .map(|node| node.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinfolk_domain::{RelationCode, RelationType};

    fn relative(id: &str, relation: RelationType) -> PersonNode {
        let mut node = PersonNode::placeholder(PersonId::new(id), relation.as_str(), relation.into());
        node.kind = crate::NodeKind::Relative;
        node
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut arena = NodeArena::new();
        assert!(arena.insert_if_absent(relative("B1", RelationType::Brother)));
        assert!(!arena.insert_if_absent(relative("B1", RelationType::Friend)));
        assert_eq!(arena.len(), 1);
        assert_eq!(
            arena.get(&PersonId::new("B1")).and_then(|n| n.relation.clone()),
            Some(RelationCode::Known(RelationType::Brother))
        );
    }

    #[test]
    fn test_add_child_refuses_duplicates_and_self_edges() {
        let mut arena = NodeArena::new();
        arena.insert_if_absent(relative("P", RelationType::Father));
        arena.insert_if_absent(relative("C", RelationType::Son));
        let (p, c) = (PersonId::new("P"), PersonId::new("C"));

        assert!(arena.add_child(&p, &c));
        assert!(!arena.add_child(&p, &c));
        assert!(!arena.add_child(&p, &p));
        assert!(!arena.add_child(&p, &PersonId::new("missing")));
        assert_eq!(arena.get(&p).map(|n| n.children.len()), Some(1));
        assert_eq!(arena.parents_of(&c), vec![p]);
    }

    #[test]
    fn test_first_in_family_uses_discovery_order() {
        let mut arena = NodeArena::new();
        arena.insert_if_absent(relative("F", RelationType::Friend));
        arena.insert_if_absent(relative("A1", RelationType::Aunt));
        arena.insert_if_absent(relative("U1", RelationType::Uncle));

        let found = arena.first_in_family(|f| f == RelationFamily::ParentSibling);
        assert_eq!(found, Some(PersonId::new("A1")));
        assert_eq!(arena.first_in_family(|f| f.is_sibling()), None);
    }
}
