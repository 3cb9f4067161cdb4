//! The focal point of a context.

use std::fmt;

use cx_core::{AgentId, EntityId, PlaceId};

/// Whose surroundings a [`Context`](crate::Context) describes.
///
/// Exactly one of an agent or a place.  An agent focus is resolved to the
/// agent's current place; a place focus is used directly.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Focus {
    Agent(AgentId),
    Place(PlaceId),
}

impl Focus {
    /// The focal agent, if the focus is an agent.
    #[inline]
    pub fn agent(self) -> Option<AgentId> {
        match self {
            Focus::Agent(id) => Some(id),
            Focus::Place(_) => None,
        }
    }

    /// The focal place, if the focus is a place.
    #[inline]
    pub fn place(self) -> Option<PlaceId> {
        match self {
            Focus::Place(id) => Some(id),
            Focus::Agent(_) => None,
        }
    }

    pub fn entity(self) -> EntityId {
        match self {
            Focus::Agent(id) => id.into(),
            Focus::Place(id) => id.into(),
        }
    }
}

impl From<AgentId> for Focus {
    fn from(id: AgentId) -> Self {
        Focus::Agent(id)
    }
}

impl From<PlaceId> for Focus {
    fn from(id: PlaceId) -> Self {
        Focus::Place(id)
    }
}

impl fmt::Display for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.entity().fmt(f)
    }
}
