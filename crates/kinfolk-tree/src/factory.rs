//! Node factory - one node per distinct person

use crate::arena::NodeArena;
use crate::node::{NodeKind, PersonNode};
use crate::perspective::ViewerEdge;
use crate::TreeConfig;
use kinfolk_domain::{PersonId, ProfileLookup};

/// Materialize the viewer and every other party named by `edges`
///
/// The viewer node comes first. For everyone else, the first edge that
/// names them decides label, relation and placement; later edges naming the
/// same person do not create or alter a node. Missing profiles produce
/// empty display fields.
pub fn create_nodes<P: ProfileLookup + ?Sized>(
    edges: &[ViewerEdge],
    viewer: &PersonId,
    profiles: &P,
    config: &TreeConfig,
) -> NodeArena {
    let mut arena = NodeArena::new();

    let (name, avatar) = display_fields(profiles, viewer);
    arena.insert_if_absent(PersonNode::viewer(viewer.clone(), name, avatar, &config.viewer_label));

    for edge in edges {
        if arena.contains(&edge.other) {
            continue;
        }

        let (display_name, avatar_ref) = display_fields(profiles, &edge.other);
        let node = PersonNode {
            id: edge.other.clone(),
            kind: NodeKind::Relative,
            display_name,
            avatar_ref,
            relation_label: edge.label().to_string(),
            relation: Some(edge.relation.clone()),
            assertion_id: Some(edge.assertion_id.clone()),
            placement: edge.relation.placement(),
            children: Vec::new(),
        };

        tracing::debug!(
            person = %node.id,
            label = %node.relation_label,
            level = ?node.level(),
            "Created node"
        );
        arena.insert_if_absent(node);
    }

    arena
}

fn display_fields<P: ProfileLookup + ?Sized>(profiles: &P, id: &PersonId) -> (String, Option<String>) {
    match profiles.profile(id) {
        Some(profile) => (profile.display_name.clone(), profile.avatar_ref.clone()),
        None => (String::new(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinfolk_domain::{Gender, NoProfiles, PersonProfile, Placement, RelationAssertion};
    use std::collections::HashMap;

    fn edges(assertions: &[RelationAssertion], viewer: &PersonId, profiles: &impl ProfileLookup) -> Vec<ViewerEdge> {
        assertions
            .iter()
            .filter_map(|a| ViewerEdge::resolve(a, viewer, profiles))
            .collect()
    }

    #[test]
    fn test_viewer_node_always_created() {
        let viewer = PersonId::new("U");
        let arena = create_nodes(&[], &viewer, &NoProfiles, &TreeConfig::default());

        let node = arena.get(&viewer).unwrap();
        assert_eq!(node.kind, NodeKind::Viewer);
        assert_eq!(node.relation_label, "self");
        assert_eq!(node.placement, Some(Placement::VIEWER));
    }

    #[test]
    fn test_duplicate_assertions_create_one_node() {
        let viewer = PersonId::new("U");
        let assertions = vec![
            RelationAssertion::new("a1", "U", "B1", "brother"),
            RelationAssertion::new("a2", "B1", "U", "sibling"),
            RelationAssertion::new("a3", "U", "B1", "friend"),
        ];
        let arena = create_nodes(&edges(&assertions, &viewer, &NoProfiles), &viewer, &NoProfiles, &TreeConfig::default());

        assert_eq!(arena.len(), 2);
        let b1 = arena.get(&PersonId::new("B1")).unwrap();
        assert_eq!(b1.relation_label, "brother");
        assert_eq!(b1.assertion_id.as_ref().map(|id| id.as_str()), Some("a1"));
    }

    #[test]
    fn test_profile_data_and_inverse_label() {
        let viewer = PersonId::new("U");
        let mut profiles = HashMap::new();
        profiles.insert(
            PersonId::new("K1"),
            PersonProfile::new("Kim", Gender::Female).with_avatar("avatars/k1.png"),
        );
        let assertions = vec![RelationAssertion::new("a1", "K1", "U", "mother")];
        let arena = create_nodes(&edges(&assertions, &viewer, &profiles), &viewer, &profiles, &TreeConfig::default());

        let k1 = arena.get(&PersonId::new("K1")).unwrap();
        assert_eq!(k1.relation_label, "daughter");
        assert_eq!(k1.display_name, "Kim");
        assert_eq!(k1.avatar_ref.as_deref(), Some("avatars/k1.png"));
        assert_eq!(k1.placement, Some(Placement::CHILDREN));
    }

    #[test]
    fn test_missing_profile_and_unmapped_code() {
        let viewer = PersonId::new("U");
        let assertions = vec![RelationAssertion::new("a1", "U", "G1", "godmother")];
        let arena = create_nodes(&edges(&assertions, &viewer, &NoProfiles), &viewer, &NoProfiles, &TreeConfig::default());

        let g1 = arena.get(&PersonId::new("G1")).unwrap();
        assert_eq!(g1.display_name, "");
        assert_eq!(g1.relation_label, "godmother");
        assert_eq!(g1.placement, None);
    }
}
