//! Kinfolk Domain Layer
//!
//! This crate holds the vocabulary and value objects of the family graph.
//! It depends only on `serde` (for the storage wire shape) and `tracing`
//! (for reporting unmapped relation codes), and contains no tree-building
//! logic of its own.
//!
//! ## Key Concepts
//!
//! - **Relation assertion**: a stored, directional claim that one person
//!   stands in a named relation to another
//! - **Relation catalog**: the closed set of relation codes, their inverses
//!   and their gendered variants
//! - **Placement**: the fixed generation band a relation code occupies
//!   relative to the viewer
//! - **Profile lookup**: display data and gender, keyed by person id
//!
//! ## Architecture
//!
//! - Pure lookups only, no I/O
//! - Unknown codes degrade (returned unchanged, warned about) instead of failing
//! - Tree construction lives in `kinfolk-tree`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assertion;
pub mod gender;
pub mod person;
pub mod placement;
pub mod relation;
pub mod traits;

// Re-exports for convenience
pub use assertion::{AssertionId, AssertionStatus, PersonId, RelationAssertion};
pub use gender::Gender;
pub use person::PersonProfile;
pub use placement::{placement_of, Placement};
pub use relation::{adapt_code, inverse_code, RelationCode, RelationFamily, RelationType};
pub use traits::{NoProfiles, ProfileLookup};
