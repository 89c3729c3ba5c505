//! Relation catalog
//!
//! The closed vocabulary of relation codes. Every code belongs to exactly one
//! [`RelationFamily`]; a family has one gender-neutral code and, where English
//! has them, a male and a female variant. Inversion and gender adaptation are
//! both defined on families, so adding a code means adding it to a family and
//! the compiler points at every `match` that needs updating.
//!
//! Codes are read as "object is `code` of subject": an assertion
//! `{subject: U, object: P, code: father}` says P is U's father.

use crate::placement::{placement_of, Placement};
use crate::Gender;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A known relation code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationType {
    /// Parent (neutral)
    Parent,
    /// Father
    Father,
    /// Mother
    Mother,
    /// Child (neutral)
    Child,
    /// Son
    Son,
    /// Daughter
    Daughter,
    /// Sibling (neutral)
    Sibling,
    /// Brother
    Brother,
    /// Sister
    Sister,
    /// Half-sibling (neutral)
    HalfSibling,
    /// Half-brother
    HalfBrother,
    /// Half-sister
    HalfSister,
    /// Spouse (neutral)
    Spouse,
    /// Husband
    Husband,
    /// Wife
    Wife,
    /// Grandparent (neutral)
    Grandparent,
    /// Grandfather
    Grandfather,
    /// Grandmother
    Grandmother,
    /// Grandchild (neutral)
    Grandchild,
    /// Grandson
    Grandson,
    /// Granddaughter
    Granddaughter,
    /// Aunt or uncle (neutral)
    ParentSibling,
    /// Uncle
    Uncle,
    /// Aunt
    Aunt,
    /// Nephew or niece (neutral)
    SiblingChild,
    /// Nephew
    Nephew,
    /// Niece
    Niece,
    /// Cousin
    Cousin,
    /// Friend
    Friend,
}

/// Group of relation codes that differ only by gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationFamily {
    /// parent / father / mother
    Parent,
    /// child / son / daughter
    Child,
    /// sibling / brother / sister
    Sibling,
    /// half_sibling / half_brother / half_sister
    HalfSibling,
    /// spouse / husband / wife
    Spouse,
    /// grandparent / grandfather / grandmother
    Grandparent,
    /// grandchild / grandson / granddaughter
    Grandchild,
    /// parent_sibling / uncle / aunt
    ParentSibling,
    /// sibling_child / nephew / niece
    SiblingChild,
    /// cousin
    Cousin,
    /// friend
    Friend,
}

impl RelationType {
    /// Every code in the catalog
    pub const ALL: [RelationType; 29] = [
        RelationType::Parent,
        RelationType::Father,
        RelationType::Mother,
        RelationType::Child,
        RelationType::Son,
        RelationType::Daughter,
        RelationType::Sibling,
        RelationType::Brother,
        RelationType::Sister,
        RelationType::HalfSibling,
        RelationType::HalfBrother,
        RelationType::HalfSister,
        RelationType::Spouse,
        RelationType::Husband,
        RelationType::Wife,
        RelationType::Grandparent,
        RelationType::Grandfather,
        RelationType::Grandmother,
        RelationType::Grandchild,
        RelationType::Grandson,
        RelationType::Granddaughter,
        RelationType::ParentSibling,
        RelationType::Uncle,
        RelationType::Aunt,
        RelationType::SiblingChild,
        RelationType::Nephew,
        RelationType::Niece,
        RelationType::Cousin,
        RelationType::Friend,
    ];

    /// Pairs whose inverses are each other exactly
    pub const ASYMMETRIC_PAIRS: [(RelationType, RelationType); 4] = [
        (RelationType::Parent, RelationType::Child),
        (RelationType::Husband, RelationType::Wife),
        (RelationType::Grandparent, RelationType::Grandchild),
        (RelationType::ParentSibling, RelationType::SiblingChild),
    ];

    /// Get the stored code
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::Parent => "parent",
            RelationType::Father => "father",
            RelationType::Mother => "mother",
            RelationType::Child => "child",
            RelationType::Son => "son",
            RelationType::Daughter => "daughter",
            RelationType::Sibling => "sibling",
            RelationType::Brother => "brother",
            RelationType::Sister => "sister",
            RelationType::HalfSibling => "half_sibling",
            RelationType::HalfBrother => "half_brother",
            RelationType::HalfSister => "half_sister",
            RelationType::Spouse => "spouse",
            RelationType::Husband => "husband",
            RelationType::Wife => "wife",
            RelationType::Grandparent => "grandparent",
            RelationType::Grandfather => "grandfather",
            RelationType::Grandmother => "grandmother",
            RelationType::Grandchild => "grandchild",
            RelationType::Grandson => "grandson",
            RelationType::Granddaughter => "granddaughter",
            RelationType::ParentSibling => "parent_sibling",
            RelationType::Uncle => "uncle",
            RelationType::Aunt => "aunt",
            RelationType::SiblingChild => "sibling_child",
            RelationType::Nephew => "nephew",
            RelationType::Niece => "niece",
            RelationType::Cousin => "cousin",
            RelationType::Friend => "friend",
        }
    }

    /// Parse a stored code
    ///
    /// Case-insensitive; `-` and spaces are accepted in place of `_`
    /// (`Half-Brother`, `half brother`).
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .iter()
            .copied()
            .find(|relation| relation.as_str() == normalized)
    }

    /// Family this code belongs to
    pub fn family(&self) -> RelationFamily {
        match self {
            RelationType::Parent | RelationType::Father | RelationType::Mother => {
                RelationFamily::Parent
            }
            RelationType::Child | RelationType::Son | RelationType::Daughter => {
                RelationFamily::Child
            }
            RelationType::Sibling | RelationType::Brother | RelationType::Sister => {
                RelationFamily::Sibling
            }
            RelationType::HalfSibling | RelationType::HalfBrother | RelationType::HalfSister => {
                RelationFamily::HalfSibling
            }
            RelationType::Spouse | RelationType::Husband | RelationType::Wife => {
                RelationFamily::Spouse
            }
            RelationType::Grandparent | RelationType::Grandfather | RelationType::Grandmother => {
                RelationFamily::Grandparent
            }
            RelationType::Grandchild | RelationType::Grandson | RelationType::Granddaughter => {
                RelationFamily::Grandchild
            }
            RelationType::ParentSibling | RelationType::Uncle | RelationType::Aunt => {
                RelationFamily::ParentSibling
            }
            RelationType::SiblingChild | RelationType::Nephew | RelationType::Niece => {
                RelationFamily::SiblingChild
            }
            RelationType::Cousin => RelationFamily::Cousin,
            RelationType::Friend => RelationFamily::Friend,
        }
    }

    /// Gender implied by the code itself (unknown for neutral codes)
    pub fn gender(&self) -> Gender {
        let family = self.family();
        if family.male() == Some(*self) {
            Gender::Male
        } else if family.female() == Some(*self) {
            Gender::Female
        } else {
            Gender::Unknown
        }
    }

    /// Whether this is the family's gender-neutral code
    pub fn is_neutral(&self) -> bool {
        self.family().neutral() == *self
    }

    /// The code the other party would use for the same edge
    ///
    /// Husband and wife invert exactly. Every other code inverts to the
    /// neutral code of the opposite family, since the other party's gender
    /// is not implied by this code; callers re-gender it with [`adapt`].
    ///
    /// [`adapt`]: RelationType::adapt
    pub fn inverse(&self) -> RelationType {
        match self {
            RelationType::Husband => RelationType::Wife,
            RelationType::Wife => RelationType::Husband,
            other => other.family().inverse().neutral(),
        }
    }

    /// Resolve a neutral code to its gendered variant
    ///
    /// Gendered codes are authoritative and returned unchanged, as are
    /// neutral codes whose family has no variant for `gender`.
    pub fn adapt(&self, gender: Gender) -> RelationType {
        if !self.is_neutral() {
            return *self;
        }
        let family = self.family();
        let variant = match gender {
            Gender::Male => family.male(),
            Gender::Female => family.female(),
            Gender::Unknown => None,
        };
        variant.unwrap_or(*self)
    }

    /// Fixed generation band for this code
    pub fn placement(&self) -> Option<Placement> {
        placement_of(*self)
    }
}

impl RelationFamily {
    /// Every family in the catalog
    pub const ALL: [RelationFamily; 11] = [
        RelationFamily::Parent,
        RelationFamily::Child,
        RelationFamily::Sibling,
        RelationFamily::HalfSibling,
        RelationFamily::Spouse,
        RelationFamily::Grandparent,
        RelationFamily::Grandchild,
        RelationFamily::ParentSibling,
        RelationFamily::SiblingChild,
        RelationFamily::Cousin,
        RelationFamily::Friend,
    ];

    /// Gender-neutral code of the family
    pub fn neutral(&self) -> RelationType {
        match self {
            RelationFamily::Parent => RelationType::Parent,
            RelationFamily::Child => RelationType::Child,
            RelationFamily::Sibling => RelationType::Sibling,
            RelationFamily::HalfSibling => RelationType::HalfSibling,
            RelationFamily::Spouse => RelationType::Spouse,
            RelationFamily::Grandparent => RelationType::Grandparent,
            RelationFamily::Grandchild => RelationType::Grandchild,
            RelationFamily::ParentSibling => RelationType::ParentSibling,
            RelationFamily::SiblingChild => RelationType::SiblingChild,
            RelationFamily::Cousin => RelationType::Cousin,
            RelationFamily::Friend => RelationType::Friend,
        }
    }

    /// Male variant, if the vocabulary has one
    pub fn male(&self) -> Option<RelationType> {
        match self {
            RelationFamily::Parent => Some(RelationType::Father),
            RelationFamily::Child => Some(RelationType::Son),
            RelationFamily::Sibling => Some(RelationType::Brother),
            RelationFamily::HalfSibling => Some(RelationType::HalfBrother),
            RelationFamily::Spouse => Some(RelationType::Husband),
            RelationFamily::Grandparent => Some(RelationType::Grandfather),
            RelationFamily::Grandchild => Some(RelationType::Grandson),
            RelationFamily::ParentSibling => Some(RelationType::Uncle),
            RelationFamily::SiblingChild => Some(RelationType::Nephew),
            RelationFamily::Cousin | RelationFamily::Friend => None,
        }
    }

    /// Female variant, if the vocabulary has one
    pub fn female(&self) -> Option<RelationType> {
        match self {
            RelationFamily::Parent => Some(RelationType::Mother),
            RelationFamily::Child => Some(RelationType::Daughter),
            RelationFamily::Sibling => Some(RelationType::Sister),
            RelationFamily::HalfSibling => Some(RelationType::HalfSister),
            RelationFamily::Spouse => Some(RelationType::Wife),
            RelationFamily::Grandparent => Some(RelationType::Grandmother),
            RelationFamily::Grandchild => Some(RelationType::Granddaughter),
            RelationFamily::ParentSibling => Some(RelationType::Aunt),
            RelationFamily::SiblingChild => Some(RelationType::Niece),
            RelationFamily::Cousin | RelationFamily::Friend => None,
        }
    }

    /// Family seen from the other side of the edge
    pub fn inverse(&self) -> RelationFamily {
        match self {
            RelationFamily::Parent => RelationFamily::Child,
            RelationFamily::Child => RelationFamily::Parent,
            RelationFamily::Grandparent => RelationFamily::Grandchild,
            RelationFamily::Grandchild => RelationFamily::Grandparent,
            RelationFamily::ParentSibling => RelationFamily::SiblingChild,
            RelationFamily::SiblingChild => RelationFamily::ParentSibling,
            RelationFamily::Sibling => RelationFamily::Sibling,
            RelationFamily::HalfSibling => RelationFamily::HalfSibling,
            RelationFamily::Spouse => RelationFamily::Spouse,
            RelationFamily::Cousin => RelationFamily::Cousin,
            RelationFamily::Friend => RelationFamily::Friend,
        }
    }

    /// Whether members of this family count as the viewer's siblings
    pub fn is_sibling(&self) -> bool {
        matches!(self, RelationFamily::Sibling | RelationFamily::HalfSibling)
    }
}

impl std::str::FromStr for RelationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid relation code: {}", s))
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A relation code as stored: either in the catalog or not
///
/// Unmapped codes are carried through untouched so the node stays visible
/// with its original wording; they simply take no part in placement or
/// structural linking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RelationCode {
    /// Code present in the catalog
    Known(RelationType),

    /// Code with no catalog entry
    Unmapped(String),
}

impl RelationCode {
    /// Parse a stored code; never fails
    pub fn parse(code: &str) -> Self {
        match RelationType::parse(code) {
            Some(relation) => RelationCode::Known(relation),
            None => RelationCode::Unmapped(code.to_string()),
        }
    }

    /// Get the code as a string
    pub fn as_str(&self) -> &str {
        match self {
            RelationCode::Known(relation) => relation.as_str(),
            RelationCode::Unmapped(code) => code,
        }
    }

    /// Catalog entry, if any
    pub fn relation_type(&self) -> Option<RelationType> {
        match self {
            RelationCode::Known(relation) => Some(*relation),
            RelationCode::Unmapped(_) => None,
        }
    }

    /// Family of the code, if known
    pub fn family(&self) -> Option<RelationFamily> {
        self.relation_type().map(|relation| relation.family())
    }

    /// Whether the code has no catalog entry
    pub fn is_unmapped(&self) -> bool {
        matches!(self, RelationCode::Unmapped(_))
    }

    /// Inverse code; unmapped codes come back unchanged
    pub fn inverse(&self) -> RelationCode {
        match self {
            RelationCode::Known(relation) => RelationCode::Known(relation.inverse()),
            RelationCode::Unmapped(code) => {
                tracing::warn!(code = %code, "No inverse for unmapped relation code; using it unchanged");
                self.clone()
            }
        }
    }

    /// Gender-adapted code; unmapped codes come back unchanged
    pub fn adapt(&self, gender: Gender) -> RelationCode {
        match self {
            RelationCode::Known(relation) => RelationCode::Known(relation.adapt(gender)),
            RelationCode::Unmapped(code) => {
                tracing::warn!(code = %code, "Cannot adapt unmapped relation code; using it unchanged");
                self.clone()
            }
        }
    }

    /// Fixed generation band, or `None` when the code has no band
    pub fn placement(&self) -> Option<Placement> {
        self.relation_type().and_then(|relation| relation.placement())
    }
}

impl From<RelationType> for RelationCode {
    fn from(relation: RelationType) -> Self {
        RelationCode::Known(relation)
    }
}

impl fmt::Display for RelationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inverse of a stored code, as a string
///
/// Unrecognized codes are returned unchanged and a warning is emitted.
pub fn inverse_code(code: &str) -> String {
    RelationCode::parse(code).inverse().as_str().to_string()
}

/// Gender-adapted variant of a stored code, as a string
///
/// Unrecognized codes are returned unchanged and a warning is emitted.
pub fn adapt_code(code: &str, gender: Gender) -> String {
    RelationCode::parse(code).adapt(gender).as_str().to_string()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_relation() -> impl Strategy<Value = RelationType> {
        proptest::sample::select(RelationType::ALL.to_vec())
    }

    fn any_gender() -> impl Strategy<Value = Gender> {
        prop_oneof![Just(Gender::Male), Just(Gender::Female), Just(Gender::Unknown)]
    }

    proptest! {
        /// Property: inverting twice and re-gendering returns the original code
        #[test]
        fn test_inverse_is_involutive_up_to_gender(relation in any_relation()) {
            let back = relation.inverse().inverse().adapt(relation.gender());
            prop_assert_eq!(back, relation);
        }

        /// Property: inversion preserves nothing but the family pairing
        #[test]
        fn test_inverse_family_matches_family_inverse(relation in any_relation()) {
            prop_assert_eq!(relation.inverse().family(), relation.family().inverse());
        }

        /// Property: adaptation never changes the family
        #[test]
        fn test_adapt_stays_in_family(relation in any_relation(), gender in any_gender()) {
            prop_assert_eq!(relation.adapt(gender).family(), relation.family());
        }

        /// Property: arbitrary strings never panic and unknown ones round-trip
        #[test]
        fn test_arbitrary_codes_fail_soft(code in "[a-z_]{0,16}") {
            let inverted = inverse_code(&code);
            if RelationType::parse(&code).is_none() {
                prop_assert_eq!(inverted, code);
            }
        }
    }
}
