use thiserror::Error;

use crate::Focus;

/// Why a context could not be built.
///
/// Dangling references are not errors: an exit, agent, or item that no
/// longer resolves is simply left out of the context.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// The focal agent has no current place, or the focal place does not
    /// exist.  Nothing can be resolved without an anchor.
    #[error("no location can be resolved for {focus}")]
    UnresolvedLocation { focus: Focus },
}

pub type ContextResult<T> = Result<T, ContextError>;
