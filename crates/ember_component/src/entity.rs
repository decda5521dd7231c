//! Entity identity.
//!
//! An [`Entity`] is an opaque `u64` handle referencing a host-side entity
//! record. The script side never dereferences it; it only carries the id
//! back to the host with every call. ID `0` is reserved as the "no such
//! entity" sentinel, which is also what name lookups return on a miss.

use serde::{Deserialize, Serialize};

/// An opaque entity identifier assigned by the host.
///
/// Entities are identity, not value: two handles are the same entity iff
/// their ids are equal. The handle carries no component data — all state
/// lives host-side and is reached through accessor calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entity(pub u64);

impl Entity {
    /// The reserved "absent" sentinel. Returned by lookups that find
    /// nothing and never assigned to a live entity.
    pub const INVALID: Entity = Entity(0);

    /// Wrap a raw host-assigned id.
    #[must_use]
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// The raw `u64` id, as passed across the boundary.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }

    /// `true` unless this is the [`Entity::INVALID`] sentinel.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Hands out fresh entity ids, starting at 1.
///
/// Lives host-side; the boundary layer never allocates ids itself. Ids are
/// never reused, so a freshly instantiated entity is distinct from every
/// id ever issued before it — including destroyed ones.
#[derive(Debug)]
pub struct EntityAllocator {
    next_id: u64,
}

impl EntityAllocator {
    /// New allocator. `0` stays reserved for [`Entity::INVALID`].
    #[must_use]
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Allocate the next id.
    pub fn allocate(&mut self) -> Entity {
        let id = self.next_id;
        self.next_id += 1;
        Entity(id)
    }

    /// How many ids have been issued so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.next_id - 1
    }
}

impl Default for EntityAllocator {
    fn default() -> Self {
        Self::new()
    }
}
