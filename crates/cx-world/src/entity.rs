//! Entity records: places, agents, items.
//!
//! Records hold references to one another by id only.  Relationship
//! bookkeeping (which place lists which agent, which container holds which
//! item) is maintained by [`WorldStore`](crate::WorldStore); the records
//! expose read access plus crate-private mutators.

use cx_core::{AgentId, ItemId, PlaceId};

use crate::capability::{CarrierState, Inventory, WearerState};

// ── Place ─────────────────────────────────────────────────────────────────────

/// A location with exits, present agents, and directly held items.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    pub id:   PlaceId,
    pub name: String,

    /// Items resting here, each with its own exposure.
    pub items: Inventory,

    exits:  Vec<PlaceId>,
    agents: Vec<AgentId>,
}

impl Place {
    pub fn new(id: PlaceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name:   name.into(),
            items:  Inventory::new(),
            exits:  Vec::new(),
            agents: Vec::new(),
        }
    }

    /// Exit references.  A referenced place may no longer exist.
    pub fn exits(&self) -> &[PlaceId] {
        &self.exits
    }

    /// Agents currently recorded as present.
    pub fn agents(&self) -> &[AgentId] {
        &self.agents
    }

    /// Agents present other than `agent`.
    pub fn others_than(&self, agent: AgentId) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.iter().copied().filter(move |&a| a != agent)
    }

    pub fn has_exit_to(&self, to: PlaceId) -> bool {
        self.exits.contains(&to)
    }

    pub(crate) fn add_exit(&mut self, to: PlaceId) {
        if !self.exits.contains(&to) {
            self.exits.push(to);
        }
    }

    pub(crate) fn remove_exit(&mut self, to: PlaceId) -> bool {
        let before = self.exits.len();
        self.exits.retain(|&e| e != to);
        self.exits.len() != before
    }

    pub(crate) fn enter(&mut self, agent: AgentId) {
        if !self.agents.contains(&agent) {
            self.agents.push(agent);
        }
    }

    pub(crate) fn leave(&mut self, agent: AgentId) {
        self.agents.retain(|&a| a != agent);
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// An acting entity.  Its location is tracked by the repository, not here.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub id:   AgentId,
    pub name: String,

    /// Present if the agent can carry items.
    pub carrier: Option<CarrierState>,

    /// Present if the agent can wear items.
    pub wearer: Option<WearerState>,
}

impl Agent {
    /// An agent with no capabilities.
    pub fn new(id: AgentId, name: impl Into<String>) -> Self {
        Self { id, name: name.into(), carrier: None, wearer: None }
    }

    pub fn with_carrier(mut self) -> Self {
        self.carrier.get_or_insert_with(CarrierState::new);
        self
    }

    pub fn with_wearer(mut self) -> Self {
        self.wearer.get_or_insert_with(WearerState::new);
        self
    }
}

// ── Item ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id:   ItemId,
    pub name: String,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}
