//! Strongly typed identity keys.
//!
//! Every entity in the world is known by a stable key that is distinct from
//! its structural content.  Two agents with identical inventories are still
//! two agents; two handles carrying the same `AgentId` are the same agent.
//! All set membership in this workspace is therefore keyed on these types,
//! never on the entity records themselves.

use std::fmt;

/// Generate a typed identity key around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The raw key.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Identity of a place (a room, a clearing, a deck).
    pub struct PlaceId(u64);
}

typed_id! {
    /// Identity of an agent (player or non-player character).
    pub struct AgentId(u64);
}

typed_id! {
    /// Identity of an item, including containers such as backpacks.
    pub struct ItemId(u64);
}

// ── EntityId ──────────────────────────────────────────────────────────────────

/// Identity of any entity, tagged with its kind.
///
/// Used for the cross-kind union exposed by `Context::all`.  A `PlaceId(3)`
/// and an `AgentId(3)` are different entities and stay distinct here.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityId {
    Place(PlaceId),
    Agent(AgentId),
    Item(ItemId),
}

impl From<PlaceId> for EntityId {
    fn from(id: PlaceId) -> Self {
        EntityId::Place(id)
    }
}

impl From<AgentId> for EntityId {
    fn from(id: AgentId) -> Self {
        EntityId::Agent(id)
    }
}

impl From<ItemId> for EntityId {
    fn from(id: ItemId) -> Self {
        EntityId::Item(id)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Place(id) => id.fmt(f),
            EntityId::Agent(id) => id.fmt(f),
            EntityId::Item(id) => id.fmt(f),
        }
    }
}
