//! Trait definitions for external interactions
//!
//! Profiles live in a separate store keyed by person id; the engine only
//! needs read access to them.

use crate::{Gender, PersonId, PersonProfile};
use std::collections::{BTreeMap, HashMap};

/// Read access to person profiles
///
/// Implemented for plain maps; storage-backed implementations live with the
/// storage layer.
pub trait ProfileLookup {
    /// Get the profile for a person, if one is known
    fn profile(&self, id: &PersonId) -> Option<&PersonProfile>;

    /// Gender of a person, unknown when no profile exists
    fn gender(&self, id: &PersonId) -> Gender {
        self.profile(id).map(|p| p.gender).unwrap_or_default()
    }
}

/// Lookup with no profiles at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProfiles;

impl ProfileLookup for NoProfiles {
    fn profile(&self, _id: &PersonId) -> Option<&PersonProfile> {
        None
    }
}

impl ProfileLookup for HashMap<PersonId, PersonProfile> {
    fn profile(&self, id: &PersonId) -> Option<&PersonProfile> {
        self.get(id)
    }
}

impl ProfileLookup for BTreeMap<PersonId, PersonProfile> {
    fn profile(&self, id: &PersonId) -> Option<&PersonProfile> {
        self.get(id)
    }
}

impl<T: ProfileLookup + ?Sized> ProfileLookup for &T {
    fn profile(&self, id: &PersonId) -> Option<&PersonProfile> {
        (**self).profile(id)
    }
}
