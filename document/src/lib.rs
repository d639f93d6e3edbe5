//! Tether Document
//!
//! The in-memory stand-in for the external document session: a mutable
//! store of identified components plus the symbol and level registries
//! they reference.
//!
//! Responsibilities:
//! - Expose the kind-specific creation entry points (definition vs
//!   instance documents)
//! - Resolve identities to live component records
//! - Apply checked mutations (location, symbol, level, rotation)
//! - Snapshot and restore whole-document state for the transaction
//!   manager
//! - Validate referential integrity at commit time

mod component;
mod document;
mod error;

pub use component::Component;
pub use document::{Document, DocumentKind, DocumentSnapshot};
pub use error::{DocumentError, DocumentResult};
