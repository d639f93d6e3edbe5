//! Tether Transaction
//!
//! Reentrant atomic-boundary control around document mutation.
//!
//! Responsibilities:
//! - Collapse nested scope acquisitions into one outermost atomic unit
//!   via a depth counter
//! - Snapshot the document when the outermost scope opens
//! - Commit (with validation) or roll back when it closes
//! - Abort mid-scope on failed mutations
//!
//! Not a general database transaction system: there is exactly one
//! logical document and no concurrent callers. It serializes a linear
//! sequence of mutations into atomic groups.

mod error;
mod manager;

pub use error::{TransactionError, TransactionResult};
pub use manager::TransactionManager;
