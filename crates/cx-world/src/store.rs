//! `WorldStore` — an in-memory [`EntityRepository`].
//!
//! Three identity-keyed maps hold the records, plus two indexes:
//!
//! - `locations`: agent → place.  Kept in sync with `Place::agents`.
//! - `placements`: item → the one container currently holding it.
//!
//! # Removal semantics
//!
//! `remove_place`, `remove_agent` and `remove_item` delete the *record* only.
//! References held elsewhere (exits, place membership, inventories) are left
//! in place and become dangling, exactly as they would when another
//! subsystem destroys an entity without notifying every holder.  Readers
//! drop them at resolution time.

use cx_core::{AgentId, CxError, CxResult, IdMap, ItemId, PlaceId, id_map};

use crate::capability::{BackContainer, Exposure};
use crate::{Agent, EntityRepository, Item, Place};

// ── Placement ─────────────────────────────────────────────────────────────────

/// The container an item currently belongs to.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// Resting in a place.
    Place { place: PlaceId, exposure: Exposure },
    /// In an agent's hands.  Requires the carrier capability.
    Held(AgentId),
    /// Worn on the agent's back as its secondary container.
    Back(AgentId),
    /// Inside the agent's back container.
    Packed { agent: AgentId, exposure: Exposure },
    /// Worn.  Requires the wearer capability.
    Worn { agent: AgentId, visible: bool },
}

// ── WorldStore ────────────────────────────────────────────────────────────────

/// In-memory world: places, agents, items and their relationships.
///
/// Build one with [`WorldBuilder`](crate::WorldBuilder) or
/// [`load_world_reader`](crate::load_world_reader), or insert records
/// directly.
#[derive(Clone, Debug, Default)]
pub struct WorldStore {
    places:     IdMap<PlaceId, Place>,
    agents:     IdMap<AgentId, Agent>,
    items:      IdMap<ItemId, Item>,
    locations:  IdMap<AgentId, PlaceId>,
    placements: IdMap<ItemId, Placement>,
}

impl WorldStore {
    pub fn new() -> Self {
        Self {
            places:     id_map(),
            agents:     id_map(),
            items:      id_map(),
            locations:  id_map(),
            placements: id_map(),
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn place_count(&self) -> usize {
        self.places.len()
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn places(&self) -> impl Iterator<Item = &Place> + '_ {
        self.places.values()
    }

    pub fn agents(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.agents.values()
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.values()
    }

    // ── Insertion ─────────────────────────────────────────────────────────

    pub fn insert_place(&mut self, place: Place) -> CxResult<()> {
        if self.places.contains_key(&place.id) {
            return Err(CxError::Duplicate(place.id.to_string()));
        }
        self.places.insert(place.id, place);
        Ok(())
    }

    /// Insert an agent with no location.  Place it with [`move_agent`](Self::move_agent).
    pub fn insert_agent(&mut self, agent: Agent) -> CxResult<()> {
        if self.agents.contains_key(&agent.id) {
            return Err(CxError::Duplicate(agent.id.to_string()));
        }
        self.agents.insert(agent.id, agent);
        Ok(())
    }

    /// Insert an item that belongs to no container yet.
    ///
    /// An id that was removed while placed is refused: its old container
    /// still refers to it, and a new record would reappear there.
    pub fn insert_item(&mut self, item: Item) -> CxResult<()> {
        if self.items.contains_key(&item.id) || self.placements.contains_key(&item.id) {
            return Err(CxError::Duplicate(item.id.to_string()));
        }
        self.items.insert(item.id, item);
        Ok(())
    }

    // ── Topology ──────────────────────────────────────────────────────────

    /// Add a one-way exit.  Both places must exist.
    pub fn add_exit(&mut self, from: PlaceId, to: PlaceId) -> CxResult<()> {
        if !self.places.contains_key(&to) {
            return Err(CxError::PlaceNotFound(to));
        }
        self.place_mut(from)?.add_exit(to);
        Ok(())
    }

    /// Remove a one-way exit.  Returns `false` if there was none.
    pub fn remove_exit(&mut self, from: PlaceId, to: PlaceId) -> CxResult<bool> {
        Ok(self.place_mut(from)?.remove_exit(to))
    }

    // ── Agent location ────────────────────────────────────────────────────

    /// Move `agent` to `place`, leaving its previous place.
    pub fn move_agent(&mut self, agent: AgentId, place: PlaceId) -> CxResult<()> {
        if !self.agents.contains_key(&agent) {
            return Err(CxError::AgentNotFound(agent));
        }
        if !self.places.contains_key(&place) {
            return Err(CxError::PlaceNotFound(place));
        }
        self.leave_current(agent);
        if let Some(p) = self.places.get_mut(&place) {
            p.enter(agent);
        }
        self.locations.insert(agent, place);
        Ok(())
    }

    /// Forget where `agent` is.  It stays in the world but has no place.
    pub fn clear_location(&mut self, agent: AgentId) -> CxResult<()> {
        if !self.agents.contains_key(&agent) {
            return Err(CxError::AgentNotFound(agent));
        }
        self.leave_current(agent);
        Ok(())
    }

    fn leave_current(&mut self, agent: AgentId) {
        if let Some(old) = self.locations.remove(&agent) {
            if let Some(p) = self.places.get_mut(&old) {
                p.leave(agent);
            }
        }
    }

    // ── Capabilities ──────────────────────────────────────────────────────

    /// Give `agent` the carrier capability if it lacks it.
    pub fn grant_carrier(&mut self, agent: AgentId) -> CxResult<()> {
        let a = self.agent_mut(agent)?;
        a.carrier.get_or_insert_with(Default::default);
        Ok(())
    }

    /// Give `agent` the wearer capability if it lacks it.
    pub fn grant_wearer(&mut self, agent: AgentId) -> CxResult<()> {
        let a = self.agent_mut(agent)?;
        a.wearer.get_or_insert_with(Default::default);
        Ok(())
    }

    // ── Item placement ────────────────────────────────────────────────────

    /// Where `item` currently is, if anywhere.
    pub fn placement_of(&self, item: ItemId) -> Option<Placement> {
        self.placements.get(&item).copied()
    }

    /// Put `item` into `placement`, taking it out of its previous container.
    ///
    /// Fails without changing anything if the item or the target is
    /// unknown, the target agent lacks the needed capability, or the item is
    /// a non-empty back container being moved somewhere else.
    pub fn put_item(&mut self, item: ItemId, placement: Placement) -> CxResult<()> {
        if !self.items.contains_key(&item) {
            return Err(CxError::ItemNotFound(item));
        }
        self.check_target(item, placement)?;
        if let Some(previous) = self.placements.get(&item).copied() {
            if previous != placement {
                self.detach(item, previous)?;
            }
        }
        self.attach(item, placement)?;
        self.placements.insert(item, placement);
        Ok(())
    }

    fn check_target(&self, item: ItemId, placement: Placement) -> CxResult<()> {
        match placement {
            Placement::Place { place, .. } => {
                if !self.places.contains_key(&place) {
                    return Err(CxError::PlaceNotFound(place));
                }
            }
            Placement::Held(agent) => self.require_carrier(agent)?,
            Placement::Back(agent) => {
                self.require_carrier(agent)?;
                if self.carrier_back(agent).is_some_and(|b| b.item != item) {
                    return Err(CxError::Duplicate(format!("back container of {agent}")));
                }
            }
            Placement::Packed { agent, .. } => {
                self.require_carrier(agent)?;
                match self.carrier_back(agent) {
                    Some(back) if back.item == item => {
                        return Err(CxError::Config(format!("{item} cannot be packed into itself")));
                    }
                    Some(_) => {}
                    None => {
                        return Err(CxError::MissingCapability {
                            agent,
                            capability: "back container",
                        });
                    }
                }
            }
            Placement::Worn { agent, .. } => {
                let a = self.agents.get(&agent).ok_or(CxError::AgentNotFound(agent))?;
                if a.wearer.is_none() {
                    return Err(CxError::MissingCapability { agent, capability: "wearer" });
                }
            }
        }
        Ok(())
    }

    fn require_carrier(&self, agent: AgentId) -> CxResult<()> {
        let a = self.agents.get(&agent).ok_or(CxError::AgentNotFound(agent))?;
        if a.carrier.is_none() {
            return Err(CxError::MissingCapability { agent, capability: "carrier" });
        }
        Ok(())
    }

    fn carrier_back(&self, agent: AgentId) -> Option<&BackContainer> {
        self.agents
            .get(&agent)
            .and_then(|a| a.carrier.as_ref())
            .and_then(|c| c.back())
    }

    fn detach(&mut self, item: ItemId, from: Placement) -> CxResult<()> {
        match from {
            Placement::Place { place, .. } => {
                // The place may have been removed; nothing left to detach from.
                if let Some(p) = self.places.get_mut(&place) {
                    p.items.remove(item);
                }
            }
            Placement::Held(agent) => {
                if let Some(c) = self.agents.get_mut(&agent).and_then(|a| a.carrier.as_mut()) {
                    c.release(item);
                }
            }
            Placement::Back(agent) => {
                if let Some(c) = self.agents.get_mut(&agent).and_then(|a| a.carrier.as_mut()) {
                    if c.back().is_some_and(|b| !b.inventory.is_empty()) {
                        return Err(CxError::ContainerNotEmpty(item));
                    }
                    c.take_back();
                }
            }
            Placement::Packed { agent, .. } => {
                if let Some(back) = self
                    .agents
                    .get_mut(&agent)
                    .and_then(|a| a.carrier.as_mut())
                    .and_then(|c| c.back_mut())
                {
                    back.inventory.remove(item);
                }
            }
            Placement::Worn { agent, .. } => {
                if let Some(w) = self.agents.get_mut(&agent).and_then(|a| a.wearer.as_mut()) {
                    w.take_off(item);
                }
            }
        }
        Ok(())
    }

    fn attach(&mut self, item: ItemId, to: Placement) -> CxResult<()> {
        match to {
            Placement::Place { place, exposure } => {
                self.place_mut(place)?.items.store(item, exposure);
            }
            Placement::Held(agent) => {
                if let Some(c) = self.agent_mut(agent)?.carrier.as_mut() {
                    c.hold(item);
                }
            }
            Placement::Back(agent) => {
                if let Some(c) = self.agent_mut(agent)?.carrier.as_mut() {
                    if c.back().is_none_or(|b| b.item != item) {
                        c.set_back(BackContainer::new(item));
                    }
                }
            }
            Placement::Packed { agent, exposure } => {
                if let Some(back) = self
                    .agent_mut(agent)?
                    .carrier
                    .as_mut()
                    .and_then(|c| c.back_mut())
                {
                    back.inventory.store(item, exposure);
                }
            }
            Placement::Worn { agent, visible } => {
                if let Some(w) = self.agent_mut(agent)?.wearer.as_mut() {
                    w.wear(item, visible);
                }
            }
        }
        Ok(())
    }

    // ── Removal ───────────────────────────────────────────────────────────

    /// Delete the place record.  Exits pointing at it and agents located in
    /// it keep their now-dangling references.
    pub fn remove_place(&mut self, place: PlaceId) -> CxResult<Place> {
        self.places.remove(&place).ok_or(CxError::PlaceNotFound(place))
    }

    /// Delete the agent record.  Places listing it keep the reference.
    pub fn remove_agent(&mut self, agent: AgentId) -> CxResult<Agent> {
        self.agents.remove(&agent).ok_or(CxError::AgentNotFound(agent))
    }

    /// Delete the item record.  Its container keeps the reference, and the
    /// id cannot be inserted again.
    pub fn remove_item(&mut self, item: ItemId) -> CxResult<Item> {
        self.items.remove(&item).ok_or(CxError::ItemNotFound(item))
    }

    // ── Mutable record access ─────────────────────────────────────────────

    fn place_mut(&mut self, id: PlaceId) -> CxResult<&mut Place> {
        self.places.get_mut(&id).ok_or(CxError::PlaceNotFound(id))
    }

    fn agent_mut(&mut self, id: AgentId) -> CxResult<&mut Agent> {
        self.agents.get_mut(&id).ok_or(CxError::AgentNotFound(id))
    }
}

impl EntityRepository for WorldStore {
    fn place(&self, id: PlaceId) -> Option<&Place> {
        self.places.get(&id)
    }

    fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(&id)
    }

    fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    fn location_of(&self, agent: AgentId) -> Option<&Place> {
        self.locations
            .get(&agent)
            .and_then(|place| self.places.get(place))
    }
}
