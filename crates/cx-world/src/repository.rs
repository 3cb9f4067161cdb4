//! The `EntityRepository` trait — the read contract the context engine
//! consumes.

use cx_core::{AgentId, ItemId, PlaceId};

use crate::{Agent, Item, Place};

/// Identity-keyed, read-only access to live entities.
///
/// Implementors only need the four single lookups.  The bulk `resolve_*`
/// methods are provided and follow the drop-missing policy: a reference
/// whose entity no longer exists is skipped (and logged at `debug`), never
/// reported as an error.  The world may change faster than every holder of a
/// reference can be told about it.
///
/// The trait is object safe, so `&dyn EntityRepository` works wherever a
/// generic `R: EntityRepository` does.
///
/// # Example
///
/// ```rust
/// use cx_core::PlaceId;
/// use cx_world::{EntityRepository, WorldBuilder};
///
/// let mut b = WorldBuilder::new();
/// let hall = b.place("hall");
/// let world = b.build().unwrap();
///
/// let found = world.resolve_places(&[hall, PlaceId(999)]);
/// assert_eq!(found.len(), 1);
/// ```
pub trait EntityRepository {
    fn place(&self, id: PlaceId) -> Option<&Place>;

    fn agent(&self, id: AgentId) -> Option<&Agent>;

    fn item(&self, id: ItemId) -> Option<&Item>;

    /// The place `agent` currently occupies.
    ///
    /// `None` if the agent is unknown, has no recorded location, or its
    /// recorded place no longer exists.
    fn location_of(&self, agent: AgentId) -> Option<&Place>;

    /// Resolve place references, dropping any that no longer exist.
    fn resolve_places(&self, refs: &[PlaceId]) -> Vec<&Place> {
        refs.iter()
            .filter_map(|&id| {
                let place = self.place(id);
                if place.is_none() {
                    tracing::debug!(place = %id, "dropping dangling place reference");
                }
                place
            })
            .collect()
    }

    /// Resolve agent references, dropping any that no longer exist.
    fn resolve_agents(&self, refs: &[AgentId]) -> Vec<&Agent> {
        refs.iter()
            .filter_map(|&id| {
                let agent = self.agent(id);
                if agent.is_none() {
                    tracing::debug!(agent = %id, "dropping dangling agent reference");
                }
                agent
            })
            .collect()
    }

    /// Materialize item references, dropping any that no longer exist.
    fn resolve_items(&self, refs: &[ItemId]) -> Vec<&Item> {
        refs.iter()
            .filter_map(|&id| {
                let item = self.item(id);
                if item.is_none() {
                    tracing::debug!(item = %id, "dropping dangling item reference");
                }
                item
            })
            .collect()
    }
}
