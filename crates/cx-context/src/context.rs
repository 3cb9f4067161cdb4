//! The `Context` result type.

use cx_core::{AgentId, EntityId, IdSet, ItemId, PlaceId, id_set};

use crate::Focus;

/// What is perceivable from a focal agent or place.
///
/// A `Context` is a snapshot: it never changes after construction and is
/// never updated when the world does.  Build a fresh one whenever current
/// state is needed (before rendering a description, before validating a
/// command target).
///
/// All three relations are identity sets; an empty relation means "nothing
/// there", not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Context {
    focus:        Focus,
    anchor:       PlaceId,
    destinations: IdSet<PlaceId>,
    others:       IdSet<AgentId>,
    items:        IdSet<ItemId>,
}

impl Context {
    pub(crate) fn new(
        focus:        Focus,
        anchor:       PlaceId,
        destinations: IdSet<PlaceId>,
        others:       IdSet<AgentId>,
        items:        IdSet<ItemId>,
    ) -> Self {
        Self { focus, anchor, destinations, others, items }
    }

    /// The focal agent or place this context was built for.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// The place the context was resolved around.
    pub fn anchor(&self) -> PlaceId {
        self.anchor
    }

    /// Places reachable from the anchor.
    pub fn destinations(&self) -> &IdSet<PlaceId> {
        &self.destinations
    }

    /// Agents present at the anchor, never including the focal agent.
    pub fn others(&self) -> &IdSet<AgentId> {
        &self.others
    }

    /// Items that can be perceived or handled.
    pub fn items(&self) -> &IdSet<ItemId> {
        &self.items
    }

    /// Union of all three relations.
    pub fn all(&self) -> IdSet<EntityId> {
        let mut all = id_set();
        all.reserve(self.len());
        all.extend(self.destinations.iter().map(|&p| EntityId::from(p)));
        all.extend(self.others.iter().map(|&a| EntityId::from(a)));
        all.extend(self.items.iter().map(|&i| EntityId::from(i)));
        all
    }

    /// `true` if `entity` belongs to any relation.
    pub fn contains(&self, entity: impl Into<EntityId>) -> bool {
        match entity.into() {
            EntityId::Place(id) => self.destinations.contains(&id),
            EntityId::Agent(id) => self.others.contains(&id),
            EntityId::Item(id) => self.items.contains(&id),
        }
    }

    /// Total members across the three relations.
    pub fn len(&self) -> usize {
        self.destinations.len() + self.others.len() + self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A new context whose relations are the pairwise union of `self` and
    /// `other`.  Neither input is modified.
    ///
    /// The result keeps `self`'s focus and anchor.  Union is associative and
    /// commutative per relation, so the order of merging only affects which
    /// focus the result reports.
    pub fn merge(&self, other: &Context) -> Context {
        let mut merged = self.clone();
        merged.destinations.extend(other.destinations.iter().copied());
        merged.others.extend(other.others.iter().copied());
        merged.items.extend(other.items.iter().copied());
        merged
    }

    /// Merge a sequence of contexts left to right.  `None` if it is empty.
    pub fn merge_all<'a, I>(contexts: I) -> Option<Context>
    where
        I: IntoIterator<Item = &'a Context>,
    {
        let mut iter = contexts.into_iter();
        let first = iter.next()?.clone();
        Some(iter.fold(first, |acc, c| acc.merge(c)))
    }
}
