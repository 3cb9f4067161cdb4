//! Shared error type for world-side operations.
//!
//! Context resolution has its own error enum in `cx-context`; this one covers
//! repository mutation and world loading, where a missing entity really is
//! the caller's mistake.

use thiserror::Error;

use crate::{AgentId, ItemId, PlaceId};

#[derive(Debug, Error)]
pub enum CxError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("place {0} not found")]
    PlaceNotFound(PlaceId),

    #[error("item {0} not found")]
    ItemNotFound(ItemId),

    #[error("agent {agent} lacks the {capability} capability")]
    MissingCapability {
        agent:      AgentId,
        capability: &'static str,
    },

    #[error("container {0} is not empty")]
    ContainerNotEmpty(ItemId),

    #[error("{0} already exists")]
    Duplicate(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for the `cx-*` crates.
pub type CxResult<T> = Result<T, CxError>;
