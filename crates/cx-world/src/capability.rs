//! Item collections and the optional agent capabilities built on them.
//!
//! An [`Agent`](crate::Agent) carries at most one [`CarrierState`] and at
//! most one [`WearerState`].  Code that needs a capability checks for its
//! presence (`agent.carrier.as_ref()`) instead of downcasting.
//!
//! All collections hold item *references* (`ItemId`), not items.  Turning a
//! reference into a live [`Item`](crate::Item) is the repository's job, and
//! references whose item no longer exists are dropped at that point.

use cx_core::{ItemFilter, ItemId};

// ── Exposure ──────────────────────────────────────────────────────────────────

/// How an item resting in an [`Inventory`] can be perceived and handled.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exposure {
    /// Visible to a bystander without interaction.
    pub observable: bool,
    /// Can be physically retrieved.
    pub accessible: bool,
}

impl Exposure {
    /// In plain sight and within reach.
    pub const OPEN: Exposure = Exposure { observable: true, accessible: true };

    /// Behind glass, out of reach, on a high shelf.
    pub const DISPLAYED: Exposure = Exposure { observable: true, accessible: false };

    /// Retrievable but not noticed at a glance (under the bed, in a drawer).
    pub const TUCKED: Exposure = Exposure { observable: false, accessible: true };

    /// Neither seen nor reachable.
    pub const SEALED: Exposure = Exposure { observable: false, accessible: false };

    /// `true` if an item with this exposure passes `filter`.
    #[inline]
    pub fn passes(self, filter: ItemFilter) -> bool {
        match filter {
            ItemFilter::Observable => self.observable,
            ItemFilter::Accessible => self.accessible,
        }
    }
}

impl Default for Exposure {
    fn default() -> Self {
        Self::OPEN
    }
}

// ── Inventory ─────────────────────────────────────────────────────────────────

/// An item reference stored in an [`Inventory`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stored {
    pub item:     ItemId,
    pub exposure: Exposure,
}

/// Items resting directly in a container: a place's floor or the inside of a
/// backpack.
///
/// Each item appears at most once; storing it again replaces its exposure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    entries: Vec<Stored>,
}

impl Inventory {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Store `item` with `exposure`, replacing any existing entry for it.
    pub fn store(&mut self, item: ItemId, exposure: Exposure) {
        match self.entries.iter_mut().find(|s| s.item == item) {
            Some(existing) => existing.exposure = exposure,
            None => self.entries.push(Stored { item, exposure }),
        }
    }

    /// Take `item` out.  Returns `false` if it was not here.
    pub fn remove(&mut self, item: ItemId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|s| s.item != item);
        self.entries.len() != before
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.entries.iter().any(|s| s.item == item)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every stored item regardless of exposure.
    pub fn all(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.entries.iter().map(|s| s.item)
    }

    /// Items a bystander notices without interacting.
    pub fn observable(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.filtered(ItemFilter::Observable)
    }

    /// Items that can be picked up.
    pub fn accessible(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.filtered(ItemFilter::Accessible)
    }

    /// Items passing `filter`.
    pub fn filtered(&self, filter: ItemFilter) -> impl Iterator<Item = ItemId> + '_ {
        self.entries
            .iter()
            .filter(move |s| s.exposure.passes(filter))
            .map(|s| s.item)
    }
}

// ── Carrier ───────────────────────────────────────────────────────────────────

/// A secondary container worn on the back (a backpack, a quiver).
///
/// The container is itself an item; its contents live in `inventory`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackContainer {
    pub item:      ItemId,
    pub inventory: Inventory,
}

impl BackContainer {
    pub fn new(item: ItemId) -> Self {
        Self { item, inventory: Inventory::new() }
    }
}

/// Capability: the agent can carry items.
///
/// `held` are the items in hand or on the belt.  The optional back container
/// is carried too, but its contents are a separate inventory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarrierState {
    held: Vec<ItemId>,
    back: Option<BackContainer>,
}

impl CarrierState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start holding `item`.  Holding it twice is a no-op.
    pub fn hold(&mut self, item: ItemId) {
        if !self.held.contains(&item) {
            self.held.push(item);
        }
    }

    /// Stop holding `item`.  Returns `false` if it was not held.
    pub fn release(&mut self, item: ItemId) -> bool {
        let before = self.held.len();
        self.held.retain(|&h| h != item);
        self.held.len() != before
    }

    pub fn held(&self) -> &[ItemId] {
        &self.held
    }

    pub fn back(&self) -> Option<&BackContainer> {
        self.back.as_ref()
    }

    pub fn back_mut(&mut self) -> Option<&mut BackContainer> {
        self.back.as_mut()
    }

    /// Put `container` on the back, returning whatever was there before.
    pub fn set_back(&mut self, container: BackContainer) -> Option<BackContainer> {
        self.back.replace(container)
    }

    /// Take the back container off.
    pub fn take_back(&mut self) -> Option<BackContainer> {
        self.back.take()
    }

    /// The flattened carried set: held items plus the back container item.
    ///
    /// The back container's *contents* are not part of this set.
    pub fn everything(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.held
            .iter()
            .copied()
            .chain(self.back.as_ref().map(|b| b.item))
    }
}

// ── Wearer ────────────────────────────────────────────────────────────────────

/// An item reference worn by an agent.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Worn {
    pub item:    ItemId,
    /// `false` for underlayers and anything covered by another garment.
    pub visible: bool,
}

/// Capability: the agent can wear items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WearerState {
    worn: Vec<Worn>,
}

impl WearerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wear `item`.  Wearing it again only updates its visibility.
    pub fn wear(&mut self, item: ItemId, visible: bool) {
        match self.worn.iter_mut().find(|w| w.item == item) {
            Some(existing) => existing.visible = visible,
            None => self.worn.push(Worn { item, visible }),
        }
    }

    /// Take `item` off.  Returns `false` if it was not worn.
    pub fn take_off(&mut self, item: ItemId) -> bool {
        let before = self.worn.len();
        self.worn.retain(|w| w.item != item);
        self.worn.len() != before
    }

    pub fn all(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.worn.iter().map(|w| w.item)
    }

    /// The subset of worn items an observer can see.
    pub fn visible(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.worn.iter().filter(|w| w.visible).map(|w| w.item)
    }

    pub fn is_empty(&self) -> bool {
        self.worn.is_empty()
    }
}
