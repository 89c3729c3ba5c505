//! Level assigner - fixed generation bands per relation code
//!
//! Bands are relative to the viewer, who always sits at level 2 /
//! generation 0. A band depends on the relation code alone, never on where
//! an edge happens to be discovered while building a tree.

use crate::relation::{RelationFamily, RelationType};
use serde::{Deserialize, Serialize};

/// Vertical position of a node relative to the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Row index, 0 = grandparents, 4 = grandchildren
    pub level: i32,

    /// Generation offset from the viewer (negative = ancestors)
    pub generation: i32,
}

impl Placement {
    /// Grandparents
    pub const GRANDPARENTS: Placement = Placement::new(0, -2);

    /// Parents, aunts and uncles
    pub const PARENTS: Placement = Placement::new(1, -1);

    /// The viewer, spouses, siblings and cousins
    pub const VIEWER: Placement = Placement::new(2, 0);

    /// Children, nephews and nieces
    pub const CHILDREN: Placement = Placement::new(3, 1);

    /// Grandchildren
    pub const GRANDCHILDREN: Placement = Placement::new(4, 2);

    /// Create a placement
    pub const fn new(level: i32, generation: i32) -> Self {
        Self { level, generation }
    }
}

/// Look up the band for a relation code
///
/// Half-siblings share the sibling band. Friends have no band: they are not
/// part of the pedigree and come back as `None`, the same as a code missing
/// from the catalog.
pub fn placement_of(relation: RelationType) -> Option<Placement> {
    match relation.family() {
        RelationFamily::Grandparent => Some(Placement::GRANDPARENTS),
        RelationFamily::Parent | RelationFamily::ParentSibling => Some(Placement::PARENTS),
        RelationFamily::Sibling
        | RelationFamily::HalfSibling
        | RelationFamily::Spouse
        | RelationFamily::Cousin => Some(Placement::VIEWER),
        RelationFamily::Child | RelationFamily::SiblingChild => Some(Placement::CHILDREN),
        RelationFamily::Grandchild => Some(Placement::GRANDCHILDREN),
        RelationFamily::Friend => None,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: lookups are pure regardless of order or repetition
        #[test]
        fn test_placement_is_fixed(
            order in proptest::collection::vec(proptest::sample::select(RelationType::ALL.to_vec()), 1..64)
        ) {
            for relation in &order {
                prop_assert_eq!(placement_of(*relation), placement_of(*relation));
                prop_assert_eq!(placement_of(*relation), placement_of(relation.adapt(crate::Gender::Male)));
            }
        }
    }
}
