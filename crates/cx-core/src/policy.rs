//! Context resolution policy.
//!
//! Two product decisions shape a context and are made explicit here rather
//! than baked into the builder:
//!
//! - whether the anchor place is itself listed among the destinations, and
//! - which view of the anchor place's own items is included.
//!
//! Applications pick one of the named presets or assemble their own.

/// Whether the anchor place appears in `Context::destinations`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AnchorPolicy {
    /// The anchor place is a destination (commands like "look here" resolve).
    #[default]
    Include,
    /// Only places reachable through an exit are destinations.
    Exclude,
}

/// Which of a place's held items enter `Context::items`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemFilter {
    /// Items perceivable by a bystander without interaction.
    Observable,
    /// Items that can be physically retrieved.
    #[default]
    Accessible,
}

/// Resolution policy consumed by the context builder.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContextPolicy {
    /// Anchor place self-membership in destinations.
    pub anchor: AnchorPolicy,

    /// Filter applied to the anchor place's own items.
    pub place_items: ItemFilter,
}

impl ContextPolicy {
    /// Context used to validate command targets: the anchor place is a valid
    /// target and only retrievable place items are offered.
    ///
    /// This is the default.
    pub const INTERACTIVE: ContextPolicy = ContextPolicy {
        anchor:      AnchorPolicy::Include,
        place_items: ItemFilter::Accessible,
    };

    /// Context used to render a description of the surroundings: only real
    /// exits are destinations and every visible place item is mentioned.
    pub const DESCRIPTIVE: ContextPolicy = ContextPolicy {
        anchor:      AnchorPolicy::Exclude,
        place_items: ItemFilter::Observable,
    };

    /// `true` if the anchor place belongs in the destination set.
    #[inline]
    pub fn includes_anchor(&self) -> bool {
        self.anchor == AnchorPolicy::Include
    }
}
