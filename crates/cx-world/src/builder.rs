//! Fluent builder for assembling a [`WorldStore`] in code.
//!
//! # Usage
//!
//! ```rust
//! use cx_world::{EntityRepository, Exposure, Placement, WorldBuilder};
//!
//! let mut b = WorldBuilder::new();
//! let hall = b.place("hall");
//! let yard = b.place("yard");
//! b.passage(hall, yard);
//!
//! let guard = b.agent("guard", hall);
//! b.carrier(guard).wearer(guard);
//! b.item("halberd", Placement::Held(guard));
//! b.item("tabard", Placement::Worn { agent: guard, visible: true });
//! b.item("bench", Placement::Place { place: hall, exposure: Exposure::OPEN });
//!
//! let world = b.build().unwrap();
//! assert_eq!(world.location_of(guard).map(|p| p.id), Some(hall));
//! ```

use cx_core::{AgentId, CxError, CxResult, ItemId, PlaceId};

use crate::{Agent, Item, Place, Placement, WorldStore};

/// Builds a [`WorldStore`], handing out sequential ids.
///
/// Ids are drawn from one counter shared by all entity kinds, so every raw
/// key in a built world is unique.  Methods never fail on the spot: the first
/// error is kept and returned by [`build`](Self::build).
pub struct WorldBuilder {
    store:   WorldStore,
    next_id: u64,
    error:   Option<CxError>,
}

impl WorldBuilder {
    pub fn new() -> Self {
        Self { store: WorldStore::new(), next_id: 1, error: None }
    }

    fn next_raw(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn record(&mut self, result: CxResult<()>) {
        if let Err(e) = result {
            self.error.get_or_insert(e);
        }
    }

    /// Add a place and return its id.
    pub fn place(&mut self, name: &str) -> PlaceId {
        let id = PlaceId(self.next_raw());
        let result = self.store.insert_place(Place::new(id, name));
        self.record(result);
        id
    }

    /// Add a **one-way** exit.
    pub fn exit(&mut self, from: PlaceId, to: PlaceId) -> &mut Self {
        let result = self.store.add_exit(from, to);
        self.record(result);
        self
    }

    /// Convenience: exits in both directions.
    pub fn passage(&mut self, a: PlaceId, b: PlaceId) -> &mut Self {
        self.exit(a, b).exit(b, a)
    }

    /// Add an agent with no capabilities, located at `at`.
    pub fn agent(&mut self, name: &str, at: PlaceId) -> AgentId {
        let id = self.homeless_agent(name);
        let result = self.store.move_agent(id, at);
        self.record(result);
        id
    }

    /// Add an agent with no recorded location.
    pub fn homeless_agent(&mut self, name: &str) -> AgentId {
        let id = AgentId(self.next_raw());
        let result = self.store.insert_agent(Agent::new(id, name));
        self.record(result);
        id
    }

    /// Grant the carrier capability.
    pub fn carrier(&mut self, agent: AgentId) -> &mut Self {
        let result = self.store.grant_carrier(agent);
        self.record(result);
        self
    }

    /// Grant the wearer capability.
    pub fn wearer(&mut self, agent: AgentId) -> &mut Self {
        let result = self.store.grant_wearer(agent);
        self.record(result);
        self
    }

    /// Add an item and put it into `placement`.
    pub fn item(&mut self, name: &str, placement: Placement) -> ItemId {
        let id = ItemId(self.next_raw());
        let result = self
            .store
            .insert_item(Item::new(id, name))
            .and_then(|()| self.store.put_item(id, placement));
        self.record(result);
        id
    }

    /// Return the world, or the first error encountered while building it.
    pub fn build(self) -> CxResult<WorldStore> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.store),
        }
    }
}

impl Default for WorldBuilder {
    fn default() -> Self {
        Self::new()
    }
}
