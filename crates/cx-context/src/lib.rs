//! `cx-context` — perceivable-context resolution.
//!
//! Given a focal agent or place, compute what is around it: the places
//! reachable from there, the other agents present, and the items that can
//! be perceived or handled.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`focus`]   | `Focus` (agent or place)                                   |
//! | [`context`] | `Context` — immutable result, union and merge              |
//! | [`builder`] | `ContextBuilder` — the resolution algorithm                |
//! | [`error`]   | `ContextError`, `ContextResult<T>`                         |
//!
//! # Policy
//!
//! Whether the anchor place counts as a destination, and which of its
//! items are included, are set by [`cx_core::ContextPolicy`]:
//!
//! | Preset        | Anchor in destinations | Place items  |
//! |---------------|------------------------|--------------|
//! | `INTERACTIVE` | yes                    | accessible   |
//! | `DESCRIPTIVE` | no                     | observable   |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `serde`   | Derives `Serialize`/`Deserialize` on `Focus`/`Context`.   |
//! | `fx-hash` | FxHash identity sets.                                    |

pub mod builder;
pub mod context;
pub mod error;
pub mod focus;


pub use builder::ContextBuilder;
pub use context::Context;
pub use error::{ContextError, ContextResult};
pub use focus::Focus;
