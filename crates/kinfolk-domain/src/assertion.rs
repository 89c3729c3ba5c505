//! Relation assertions as they arrive from the storage layer

use crate::relation::RelationCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a person (account or profile)
///
/// Opaque to the engine; equality is the only operation it relies on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    /// Create a person id
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the id as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PersonId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Identifier of a stored assertion
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssertionId(String);

impl AssertionId {
    /// Create an assertion id
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the id as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssertionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssertionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Review status of an assertion
///
/// Only accepted assertions take part in tree construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssertionStatus {
    /// Awaiting confirmation by the other party
    Pending,

    /// Confirmed by the other party
    Accepted,

    /// Declined by the other party
    Rejected,
}

impl AssertionStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            AssertionStatus::Pending => "pending",
            AssertionStatus::Accepted => "accepted",
            AssertionStatus::Rejected => "rejected",
        }
    }

    /// Parse a status from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(AssertionStatus::Pending),
            "accepted" => Some(AssertionStatus::Accepted),
            "rejected" => Some(AssertionStatus::Rejected),
            _ => None,
        }
    }
}

impl std::str::FromStr for AssertionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid assertion status: {}", s))
    }
}

fn default_status() -> AssertionStatus {
    AssertionStatus::Accepted
}

/// A stored, directional relation claim
///
/// Read as "`object_id` is `relation_code` of `subject_id`". The stored
/// direction follows whichever party authored the claim, so a viewer may
/// find itself on either end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationAssertion {
    /// Storage identifier
    pub id: AssertionId,

    /// Party the relation is described from
    pub subject_id: PersonId,

    /// Party the relation describes
    pub object_id: PersonId,

    /// Raw relation code as stored
    #[serde(alias = "relation_type_code", alias = "type")]
    pub relation_code: String,

    /// Review status (defaults to accepted when omitted)
    #[serde(default = "default_status")]
    pub status: AssertionStatus,
}

impl RelationAssertion {
    /// Create an accepted assertion
    pub fn new(
        id: impl Into<String>,
        subject_id: impl Into<String>,
        object_id: impl Into<String>,
        relation_code: impl Into<String>,
    ) -> Self {
        Self {
            id: AssertionId::new(id),
            subject_id: PersonId::new(subject_id),
            object_id: PersonId::new(object_id),
            relation_code: relation_code.into(),
            status: AssertionStatus::Accepted,
        }
    }

    /// Set the review status
    pub fn with_status(mut self, status: AssertionStatus) -> Self {
        self.status = status;
        self
    }

    /// Parsed relation code
    pub fn code(&self) -> RelationCode {
        RelationCode::parse(&self.relation_code)
    }

    /// Whether the assertion takes part in tree construction
    pub fn is_accepted(&self) -> bool {
        self.status == AssertionStatus::Accepted
    }

    /// Whether `person` is one of the two parties
    pub fn involves(&self, person: &PersonId) -> bool {
        &self.subject_id == person || &self.object_id == person
    }

    /// The party that is not `person`, if `person` is a party at all
    pub fn other_party(&self, person: &PersonId) -> Option<&PersonId> {
        if &self.subject_id == person {
            Some(&self.object_id)
        } else if &self.object_id == person {
            Some(&self.subject_id)
        } else {
            None
        }
    }
}
