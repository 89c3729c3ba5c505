//! Viewer-relative labels for list and table views
//!
//! The same reading of an assertion the tree builder uses, without building
//! a tree.

use crate::perspective::ViewerEdge;
use kinfolk_domain::{AssertionId, AssertionStatus, PersonId, ProfileLookup, RelationAssertion};
use serde::Serialize;

/// One row of a flat relation list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationLabel {
    /// Source assertion
    pub assertion_id: AssertionId,

    /// The other party
    pub person_id: PersonId,

    /// What that person is to the viewer
    pub label: String,

    /// Review status of the assertion
    pub status: AssertionStatus,
}

/// Label describing the other party of `assertion`, as `viewer` would say it
///
/// Returns `None` when the viewer is not a party or the assertion is
/// self-referential. Unmapped codes come back unchanged.
pub fn viewer_relation_label<P: ProfileLookup + ?Sized>(
    assertion: &RelationAssertion,
    viewer: &PersonId,
    profiles: &P,
) -> Option<String> {
    ViewerEdge::resolve(assertion, viewer, profiles).map(|edge| edge.label().to_string())
}

/// Labels for every assertion the viewer is a party to, in input order
///
/// Status is not filtered: list views commonly show pending requests too.
pub fn viewer_relation_labels<P: ProfileLookup + ?Sized>(
    assertions: &[RelationAssertion],
    viewer: &PersonId,
    profiles: &P,
) -> Vec<RelationLabel> {
    assertions
        .iter()
        .filter_map(|assertion| {
            ViewerEdge::resolve(assertion, viewer, profiles).map(|edge| RelationLabel {
                label: edge.label().to_string(),
                assertion_id: edge.assertion_id,
                person_id: edge.other,
                status: assertion.status,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinfolk_domain::{Gender, NoProfiles, PersonProfile};
    use std::collections::HashMap;

    #[test]
    fn test_spouse_from_both_sides() {
        let mut profiles = HashMap::new();
        profiles.insert(PersonId::new("U"), PersonProfile::new("Ulf", Gender::Male));
        profiles.insert(PersonId::new("S1"), PersonProfile::new("Siv", Gender::Female));

        let assertion = RelationAssertion::new("a1", "U", "S1", "wife");
        assert_eq!(
            viewer_relation_label(&assertion, &"U".into(), &profiles).as_deref(),
            Some("wife")
        );
        assert_eq!(
            viewer_relation_label(&assertion, &"S1".into(), &profiles).as_deref(),
            Some("husband")
        );
    }

    #[test]
    fn test_not_a_party() {
        let assertion = RelationAssertion::new("a1", "A", "B", "wife");
        assert_eq!(viewer_relation_label(&assertion, &"U".into(), &NoProfiles), None);
    }

    #[test]
    fn test_list_keeps_status_and_order() {
        let assertions = vec![
            RelationAssertion::new("a1", "C1", "U", "uncle"),
            RelationAssertion::new("a2", "A", "B", "wife"),
            RelationAssertion::new("a3", "U", "P1", "mother").with_status(AssertionStatus::Pending),
        ];
        let rows = viewer_relation_labels(&assertions, &"U".into(), &NoProfiles);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].person_id, PersonId::new("C1"));
        assert_eq!(rows[0].label, "sibling_child");
        assert_eq!(rows[1].label, "mother");
        assert_eq!(rows[1].status, AssertionStatus::Pending);
    }
}
