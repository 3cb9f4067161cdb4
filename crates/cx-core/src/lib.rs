//! `cx-core` — foundational types for the perceivable-context engine.
//!
//! Every other `cx-*` crate depends on this one.  It has no `cx-*`
//! dependencies and minimal external ones (`thiserror`, plus optional `serde`
//! and `rustc-hash`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `PlaceId`, `AgentId`, `ItemId`, `EntityId`            |
//! | [`set`]     | `IdSet`, `IdMap` identity-keyed collections           |
//! | [`policy`]  | `ContextPolicy`, `AnchorPolicy`, `ItemFilter`         |
//! | [`error`]   | `CxError`, `CxResult`                                 |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `serde`   | Adds `Serialize`/`Deserialize` to all public types.      |
//! | `fx-hash` | Uses FxHash instead of SipHash for `IdSet`/`IdMap`.      |

pub mod error;
pub mod ids;
pub mod policy;
pub mod set;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CxError, CxResult};
pub use ids::{AgentId, EntityId, ItemId, PlaceId};
pub use policy::{AnchorPolicy, ContextPolicy, ItemFilter};
pub use set::{IdMap, IdSet, id_map, id_set};
