//! Tether Elements
//!
//! Graph-facing placement of persistent objects: rebind-or-create
//! orchestration over the trace store, transaction-scoped mutators, and
//! the `Placement` wrapper node authors hold.
//!
//! Responsibilities:
//! - Check the trace store for a call-site's prior binding
//! - Rebind and update in place, or create and register the binding
//! - Apply mutators in a safe order (symbol before position)
//! - Dispatch creation on the document kind
//! - Reject missing factory inputs before any transaction opens

mod binder;
mod context;
mod error;
mod mutators;
mod placement;
mod wrappers;

pub use context::BindingContext;
pub use error::{ElementError, ElementResult};
pub use placement::Placement;
pub use wrappers::{Level, Symbol};
