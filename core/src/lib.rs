//! Tether Core Types
//!
//! This crate provides the foundational types used throughout the tether
//! system:
//! - Identity types (ObjectId, SymbolId, LevelId, CallSiteId)
//! - Trace slots (the durable identity of a graph call-site)
//! - Geometry values (Point, Vector, Transform)
//! - Location representations (the Location enum and its kind)

mod geometry;
mod id;
mod location;

pub use geometry::*;
pub use id::*;
pub use location::*;
