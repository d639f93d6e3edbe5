//! Identity types for tether entities.
//!
//! All identifiers are 64-bit values that are:
//! - Unique within their namespace
//! - Immutable once assigned
//! - Opaque to external users
//!
//! Object, symbol and level ids are assigned by the owning document;
//! call-site ids are assigned by the graph engine driving re-execution.

use std::fmt;

/// Unique identifier for a persistent object within one document session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

impl ObjectId {
    /// Create a new ObjectId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "o{}", self.0)
    }
}

/// Unique identifier for a symbol (a placeable type) in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub u64);

impl SymbolId {
    /// Create a new SymbolId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SymbolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

/// Unique identifier for a hosting level in an instance document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LevelId(pub u64);

impl LevelId {
    /// Create a new LevelId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "l{}", self.0)
    }
}

/// Identity of one node call-site in the graph, assigned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallSiteId(pub u64);

impl CallSiteId {
    /// Create a new CallSiteId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CallSiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// The durable identity of one node call-site across graph re-executions.
///
/// Slots are deterministic: the same call-site and iteration index always
/// produce the same slot, so re-running a graph replays the same slot
/// sequence and finds the bindings the previous pass registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceSlot {
    /// Call-site identity assigned by the graph engine.
    pub call_site: CallSiteId,
    /// Re-execution iteration index, for call-sites evaluated more than
    /// once per pass (e.g. inside a mapped list).
    pub iteration: u32,
}

impl TraceSlot {
    /// Create a slot for a call-site at a specific iteration.
    pub fn new(call_site: CallSiteId, iteration: u32) -> Self {
        Self {
            call_site,
            iteration,
        }
    }

    /// The slot of a call-site's first (or only) evaluation.
    pub fn first(call_site: CallSiteId) -> Self {
        Self::new(call_site, 0)
    }
}

impl fmt::Display for TraceSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.call_site, self.iteration)
    }
}
