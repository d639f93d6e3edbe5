//! Element error types.

use tether_core::LocationKind;
use tether_transaction::TransactionError;
use thiserror::Error;

/// Errors surfaced to graph node authors.
#[derive(Debug, Error)]
pub enum ElementError {
    /// A required factory input was not supplied (unconnected port).
    /// Fails before any transaction opens.
    #[error("missing required argument: {name}")]
    MissingArgument { name: &'static str },

    /// The component's location cannot accept a point.
    #[error("point-based location required, found {found} location")]
    InvalidLocation { found: LocationKind },

    /// The document rejected a mutation or commit; the transaction was
    /// rolled back.
    #[error(transparent)]
    Transaction(#[from] TransactionError),
}

/// Result type for element operations.
pub type ElementResult<T> = Result<T, ElementError>;
