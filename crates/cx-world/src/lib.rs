//! `cx-world` — entity records and the repository contract.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                       |
//! |------------------|----------------------------------------------------------------|
//! | [`entity`]       | `Place`, `Agent`, `Item`                                       |
//! | [`capability`]   | `Inventory`, `Exposure`, `CarrierState`, `BackContainer`, `WearerState` |
//! | [`repository`]   | `EntityRepository` trait (drop-missing bulk resolution)        |
//! | [`store`]        | `WorldStore` (in-memory repository), `Placement`               |
//! | [`builder`]      | `WorldBuilder` (fluent construction)                           |
//! | [`loader`]       | `load_world_csv`, `load_world_reader`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.  |

pub mod builder;
pub mod capability;
pub mod entity;
pub mod loader;
pub mod repository;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::WorldBuilder;
pub use capability::{BackContainer, CarrierState, Exposure, Inventory, Stored, WearerState, Worn};
pub use entity::{Agent, Item, Place};
pub use loader::{load_world_csv, load_world_reader};
pub use repository::EntityRepository;
pub use store::{Placement, WorldStore};
