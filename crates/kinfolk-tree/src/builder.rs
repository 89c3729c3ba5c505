//! Tree builder - runs the whole pipeline for one viewer

use crate::factory::create_nodes;
use crate::linker::Linker;
use crate::perspective::ViewerEdge;
use crate::roots::resolve_roots;
use crate::stats::BuildStats;
use crate::tree::FamilyTree;
use crate::TreeConfig;
use kinfolk_domain::{PersonId, ProfileLookup, RelationAssertion};

/// Builds family trees from relation assertions
///
/// The builder holds only configuration; every call to [`build`] starts
/// from an empty arena, so it can be reused freely.
///
/// # Examples
///
/// ```
/// use kinfolk_domain::{NoProfiles, PersonId, RelationAssertion};
/// use kinfolk_tree::FamilyTreeBuilder;
///
/// let assertions = vec![RelationAssertion::new("a1", "U", "P1", "father")];
/// let tree = FamilyTreeBuilder::default().build(&assertions, &PersonId::new("U"), &NoProfiles);
///
/// assert_eq!(tree.roots(), &[PersonId::new("P1")]);
/// assert_eq!(tree.len(), 2);
/// ```
///
/// [`build`]: FamilyTreeBuilder::build
#[derive(Debug, Clone, Default)]
pub struct FamilyTreeBuilder {
    config: TreeConfig,
}

impl FamilyTreeBuilder {
    /// Create a builder with the given configuration
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Build the tree for `viewer`
    ///
    /// Non-accepted assertions, assertions the viewer is not a party to, and
    /// self-referential assertions are skipped and counted in the stats.
    /// Never fails: the viewer's node is always present and reachable.
    pub fn build<P: ProfileLookup + ?Sized>(
        &self,
        assertions: &[RelationAssertion],
        viewer: &PersonId,
        profiles: &P,
    ) -> FamilyTree {
        let mut stats = BuildStats::new();
        stats.assertions = assertions.len();

        let edges = self.viewer_edges(assertions, viewer, profiles, &mut stats);

        let mut arena = create_nodes(&edges, viewer, profiles, &self.config);
        Linker::new(&mut arena, viewer, &self.config, &mut stats).link_all(&edges);
        let roots = resolve_roots(&arena, viewer);

        tracing::info!(
            viewer = %viewer,
            nodes = arena.len(),
            roots = roots.len(),
            linked = stats.linked,
            skipped = stats.total_skipped(),
            placeholders = stats.placeholders,
            "Built family tree"
        );

        FamilyTree::new(viewer.clone(), arena, roots, stats)
    }

    fn viewer_edges<P: ProfileLookup + ?Sized>(
        &self,
        assertions: &[RelationAssertion],
        viewer: &PersonId,
        profiles: &P,
        stats: &mut BuildStats,
    ) -> Vec<ViewerEdge> {
        let mut edges = Vec::with_capacity(assertions.len());

        for assertion in assertions {
            if !assertion.is_accepted() {
                tracing::debug!(assertion = %assertion.id, status = assertion.status.as_str(), "Skipping non-accepted assertion");
                stats.skipped_status += 1;
                continue;
            }

            if !assertion.involves(viewer) {
                tracing::debug!(assertion = %assertion.id, "Viewer is not a party; skipping");
                stats.skipped_unrelated += 1;
                continue;
            }

            match ViewerEdge::resolve(assertion, viewer, profiles) {
                Some(edge) => edges.push(edge),
                None => {
                    tracing::warn!(assertion = %assertion.id, "Assertion relates a person to themselves; skipping");
                    stats.skipped_self_reference += 1;
                }
            }
        }

        edges
    }
}
