//! Tether Trace
//!
//! The per-call-site map from trace slots to previously bound object
//! identities. This is what lets a node re-execute without duplicating
//! the object it created on an earlier pass.

mod store;

pub use store::TraceStore;
