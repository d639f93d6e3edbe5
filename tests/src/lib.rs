//! Integration fixtures for tether.
//!
//! Workspace builders shared by the property tests under `tests/`.

pub mod fixtures;

/// Common imports for integration tests.
pub mod prelude {
    pub use crate::fixtures::*;
    pub use tether_session::prelude::*;
}
