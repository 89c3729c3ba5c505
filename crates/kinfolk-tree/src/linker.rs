//! Relationship linker - turns edges into parent/child structure
//!
//! Every edge is read from the viewer's side and dispatched on the family of
//! that relation. Attachment only ever appends an id to a `children` list
//! after a containment check, so redundant or contradictory edges cannot
//! duplicate structure, and nothing here walks the graph recursively.
//!
//! Cousins and nephews/nieces are placed by a first-match heuristic: the
//! cousin goes under the first aunt/uncle in discovery order, the
//! nephew/niece under the first sibling. With several candidates this may
//! not be the true pedigree; assertions carry no reference to the
//! intermediate relative that would settle it.

use crate::arena::NodeArena;
use crate::node::PersonNode;
use crate::perspective::ViewerEdge;
use crate::stats::BuildStats;
use crate::TreeConfig;
use kinfolk_domain::{PersonId, RelationFamily, RelationType};
use uuid::Uuid;

/// Role of a synthesized node relative to the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlaceholderRole {
    Parent,
    Child,
}

impl PlaceholderRole {
    fn as_str(&self) -> &'static str {
        match self {
            PlaceholderRole::Parent => "parent",
            PlaceholderRole::Child => "child",
        }
    }

    fn relation(&self) -> RelationType {
        match self {
            PlaceholderRole::Parent => RelationType::Parent,
            PlaceholderRole::Child => RelationType::Child,
        }
    }
}

/// Deterministic id for the viewer's placeholder in `role`
///
/// Name-based so that rebuilding from the same input reproduces it.
fn placeholder_id(viewer: &PersonId, role: PlaceholderRole) -> PersonId {
    let name = format!("kinfolk/placeholder/{}/{}", role.as_str(), viewer);
    PersonId::new(Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()).to_string())
}

/// Attaches already-materialized nodes to each other
pub struct Linker<'a> {
    arena: &'a mut NodeArena,
    viewer: &'a PersonId,
    config: &'a TreeConfig,
    stats: &'a mut BuildStats,
}

impl<'a> Linker<'a> {
    /// Create a linker over `arena`
    pub fn new(
        arena: &'a mut NodeArena,
        viewer: &'a PersonId,
        config: &'a TreeConfig,
        stats: &'a mut BuildStats,
    ) -> Self {
        Self {
            arena,
            viewer,
            config,
            stats,
        }
    }

    /// Link every edge, then re-align spouses with the viewer
    pub fn link_all(&mut self, edges: &[ViewerEdge]) {
        for edge in edges {
            self.link(edge);
        }
        self.realign_spouses(edges);
    }

    /// Link a single edge
    pub fn link(&mut self, edge: &ViewerEdge) {
        self.stats.linked += 1;

        if !self.arena.contains(&edge.other) {
            tracing::debug!(person = %edge.other, "No node for related person; skipping edge");
            self.stats.unattached += 1;
            return;
        }

        let Some(family) = edge.relation.family() else {
            tracing::debug!(code = %edge.relation, person = %edge.other, "Unmapped code; leaving node unattached");
            self.stats.unmapped_codes += 1;
            self.stats.unattached += 1;
            return;
        };

        let related = &edge.other;
        let added = match family {
            RelationFamily::Parent => self.attach(related, self.viewer),
            RelationFamily::Child => self.attach(self.viewer, related),
            RelationFamily::Spouse => {
                self.align_with_viewer(related);
                0
            }
            RelationFamily::Sibling | RelationFamily::HalfSibling => {
                let parents = self.arena.parents_of(self.viewer);
                parents.iter().map(|parent| self.attach(parent, related)).sum::<usize>()
            }
            RelationFamily::Grandparent => self.link_above_parents(related, true),
            RelationFamily::ParentSibling => self.link_above_parents(related, false),
            RelationFamily::Grandchild => self.link_grandchild(related),
            RelationFamily::Cousin => {
                let anchor = self
                    .arena
                    .first_in_family(|f| f == RelationFamily::ParentSibling);
                self.attach_under(anchor, related)
            }
            RelationFamily::SiblingChild => {
                let anchor = self.arena.first_in_family(|f| f.is_sibling());
                self.attach_under(anchor, related)
            }
            RelationFamily::Friend => 0,
        };

        if added == 0 && family != RelationFamily::Spouse {
            self.stats.unattached += 1;
        }
        tracing::debug!(person = %related, family = ?family, edges = added, "Linked edge");
    }

    /// Force every spouse back onto the viewer's band
    pub fn realign_spouses(&mut self, edges: &[ViewerEdge]) {
        for edge in edges {
            if edge.relation.family() == Some(RelationFamily::Spouse) {
                self.align_with_viewer(&edge.other);
            }
        }
    }

    fn align_with_viewer(&mut self, related: &PersonId) {
        let placement = self.arena.get(self.viewer).and_then(|v| v.placement);
        self.arena.set_placement(related, placement);
    }

    /// Grandparents, aunts and uncles go above every viewer-parent
    ///
    /// Only grandparents justify inventing a parent when none is recorded.
    fn link_above_parents(&mut self, related: &PersonId, synthesize: bool) -> usize {
        let mut parents = self.arena.parents_of(self.viewer);

        if parents.is_empty() && synthesize && self.config.synthesize_placeholders {
            let placeholder = self.placeholder(PlaceholderRole::Parent);
            self.attach(&placeholder, self.viewer);
            parents.push(placeholder);
        }

        parents.iter().map(|parent| self.attach(related, parent)).sum::<usize>()
    }

    /// Grandchildren go under the viewer's first child
    fn link_grandchild(&mut self, related: &PersonId) -> usize {
        let first_child = self
            .arena
            .get(self.viewer)
            .and_then(|viewer| viewer.children.first().cloned());

        let child = match first_child {
            Some(child) => child,
            None if self.config.synthesize_placeholders => {
                let placeholder = self.placeholder(PlaceholderRole::Child);
                self.attach(self.viewer, &placeholder);
                placeholder
            }
            None => return 0,
        };

        self.attach(&child, related)
    }

    fn attach_under(&mut self, anchor: Option<PersonId>, related: &PersonId) -> usize {
        match anchor {
            Some(anchor) => self.attach(&anchor, related),
            None => 0,
        }
    }

    fn attach(&mut self, parent: &PersonId, child: &PersonId) -> usize {
        if self.arena.add_child(parent, child) {
            self.stats.edges_added += 1;
            1
        } else {
            0
        }
    }

    /// Get or create the viewer's placeholder in `role`
    fn placeholder(&mut self, role: PlaceholderRole) -> PersonId {
        let id = placeholder_id(self.viewer, role);
        let label = match role {
            PlaceholderRole::Parent => &self.config.placeholder_parent_label,
            PlaceholderRole::Child => &self.config.placeholder_child_label,
        };

        if self
            .arena
            .insert_if_absent(PersonNode::placeholder(id.clone(), label, role.relation().into()))
        {
            tracing::debug!(placeholder = %id, role = role.as_str(), "Synthesized placeholder");
            self.stats.placeholders += 1;
        }
        id
    }
}
