//! Document error types.

use crate::DocumentKind;
use tether_core::{LevelId, LocationKind, ObjectId, SymbolId};
use thiserror::Error;

/// Errors that can occur during document operations.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// A creation entry point was invoked against the wrong document kind.
    #[error("{operation} requires a {required} document")]
    WrongContext {
        operation: &'static str,
        required: DocumentKind,
    },

    /// Levels exist only in instance documents.
    #[error("levels are not supported in a definition document")]
    LevelsUnsupported,

    /// Symbol not found.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(SymbolId),

    /// Level not found.
    #[error("unknown level: {0}")]
    UnknownLevel(LevelId),

    /// Component not found.
    #[error("component not found: {0}")]
    ComponentNotFound(ObjectId),

    /// Point mutation attempted on a non-point location.
    #[error("location is {found}, point-based location required")]
    LocationKindMismatch { found: LocationKind },
}

/// Result type for document operations.
pub type DocumentResult<T> = Result<T, DocumentError>;
