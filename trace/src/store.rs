//! Slot-to-object bindings.

use std::collections::HashMap;

use tether_core::{ObjectId, TraceSlot};
use tether_document::Document;
use tracing::debug;

/// Bindings from trace slots to previously created objects.
///
/// The store holds raw ids, never live references: every lookup
/// re-resolves against the document, so an object deleted behind our
/// back simply reads as unbound and the caller falls through to create.
/// A binding is stable until replaced by `set` or invalidated by the
/// target vanishing.
#[derive(Debug, Default)]
pub struct TraceStore {
    bindings: HashMap<TraceSlot, ObjectId>,
}

impl TraceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a slot against the current document.
    ///
    /// Returns `None` when the slot was never bound or the bound object
    /// no longer resolves. A stale binding is dropped on the way out;
    /// resolution failure is recovery, never an error.
    pub fn resolve(&mut self, slot: TraceSlot, document: &Document) -> Option<ObjectId> {
        let id = *self.bindings.get(&slot)?;
        if document.resolve(id).is_some() {
            Some(id)
        } else {
            self.bindings.remove(&slot);
            debug!(%slot, %id, "stale binding dropped");
            None
        }
    }

    /// Bind a slot, replacing any prior binding.
    pub fn set(&mut self, slot: TraceSlot, id: ObjectId) {
        debug!(%slot, %id, "binding registered");
        self.bindings.insert(slot, id);
    }

    /// Number of registered bindings, stale ones included.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True if no bindings are registered.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
