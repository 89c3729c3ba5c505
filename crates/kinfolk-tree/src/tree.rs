//! The result of one build

use crate::arena::NodeArena;
use crate::node::{PersonNode, TreeNode};
use crate::stats::BuildStats;
use crate::traversal;
use kinfolk_domain::PersonId;

/// A built family tree: node arena, roots and build counters
///
/// Each build produces a fresh `FamilyTree`; callers replace the previous
/// one wholesale rather than patching it.
#[derive(Debug, Clone)]
pub struct FamilyTree {
    viewer: PersonId,
    arena: NodeArena,
    roots: Vec<PersonId>,
    stats: BuildStats,
}

impl FamilyTree {
    pub(crate) fn new(viewer: PersonId, arena: NodeArena, roots: Vec<PersonId>, stats: BuildStats) -> Self {
        Self {
            viewer,
            arena,
            roots,
            stats,
        }
    }

    /// Id of the person the tree was built for
    pub fn viewer(&self) -> &PersonId {
        &self.viewer
    }

    /// The viewer's own node
    pub fn viewer_node(&self) -> Option<&PersonNode> {
        self.arena.get(&self.viewer)
    }

    /// Root ids, in discovery order
    pub fn roots(&self) -> &[PersonId] {
        &self.roots
    }

    /// Root nodes, in discovery order
    pub fn root_nodes(&self) -> Vec<&PersonNode> {
        self.roots.iter().filter_map(|id| self.arena.get(id)).collect()
    }

    /// Look up a node
    pub fn node(&self, id: &PersonId) -> Option<&PersonNode> {
        self.arena.get(id)
    }

    /// Every node, reachable or not, in discovery order
    pub fn nodes(&self) -> impl Iterator<Item = &PersonNode> {
        self.arena.iter()
    }

    /// Number of nodes, placeholders included
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the tree has no nodes (never true for a built tree)
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Ids of the nodes holding `id` as a child
    pub fn parents_of(&self, id: &PersonId) -> Vec<PersonId> {
        self.arena.parents_of(id)
    }

    /// Reachable nodes, depth-first, each once
    pub fn flatten(&self) -> Vec<&PersonNode> {
        traversal::flatten(&self.arena, &self.roots)
    }

    /// Nodes no root reaches
    pub fn detached(&self) -> Vec<&PersonNode> {
        traversal::detached(&self.arena, &self.roots)
    }

    /// Nested, owned forest for layout
    pub fn to_forest(&self) -> Vec<TreeNode> {
        traversal::to_forest(&self.arena, &self.roots)
    }

    /// Build counters
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }
}
