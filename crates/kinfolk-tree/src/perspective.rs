//! Reading an assertion from the viewer's side

use kinfolk_domain::{AssertionId, PersonId, ProfileLookup, RelationAssertion, RelationCode};

/// An assertion resolved relative to one viewer
///
/// `relation` says what `other` is to the viewer, already re-gendered for
/// `other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerEdge {
    /// Source assertion
    pub assertion_id: AssertionId,

    /// The party that is not the viewer
    pub other: PersonId,

    /// What `other` is to the viewer
    pub relation: RelationCode,
}

impl ViewerEdge {
    /// Resolve `assertion` for `viewer`
    ///
    /// Returns `None` when the viewer is not a party, or when both parties
    /// are the viewer. If the viewer is the subject the stored code already
    /// describes the other party; if the viewer is the object the inverse
    /// code does. Either way the code is then adapted to the other party's
    /// gender. Unmapped codes are kept as stored, with one warning per edge.
    pub fn resolve<P: ProfileLookup + ?Sized>(
        assertion: &RelationAssertion,
        viewer: &PersonId,
        profiles: &P,
    ) -> Option<Self> {
        if assertion.subject_id == assertion.object_id {
            return None;
        }

        let (other, forward) = if &assertion.subject_id == viewer {
            (&assertion.object_id, true)
        } else if &assertion.object_id == viewer {
            (&assertion.subject_id, false)
        } else {
            return None;
        };

        let relation = match assertion.code() {
            RelationCode::Known(stored) => {
                let relation = if forward { stored } else { stored.inverse() };
                RelationCode::Known(relation.adapt(profiles.gender(other)))
            }
            unmapped => {
                tracing::warn!(
                    assertion = %assertion.id,
                    code = %unmapped,
                    "Unmapped relation code; using it unchanged"
                );
                unmapped
            }
        };

        Some(Self {
            assertion_id: assertion.id.clone(),
            other: other.clone(),
            relation,
        })
    }

    /// Viewer-relative label
    pub fn label(&self) -> &str {
        self.relation.as_str()
    }
}
