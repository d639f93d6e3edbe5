//! Tether Session
//!
//! Owns the process-wide stores for one open document and lends them to
//! element operations as a borrow bundle.

mod workspace;

pub use workspace::Workspace;

/// Common imports for hosts and tests.
pub mod prelude {
    pub use crate::Workspace;
    pub use tether_core::{
        CallSiteId, Location, LocationKind, ObjectId, Point, TraceSlot, Transform, Vector,
    };
    pub use tether_document::{Document, DocumentError, DocumentKind};
    pub use tether_elements::{BindingContext, ElementError, Level, Placement, Symbol};
    pub use tether_trace::TraceStore;
    pub use tether_transaction::{TransactionError, TransactionManager};
}
