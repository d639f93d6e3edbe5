//! Workspace fixtures.

use tether_core::{CallSiteId, TraceSlot};
use tether_document::Document;
use tether_session::Workspace;

/// An instance-document workspace with two symbols and two levels.
pub fn instance_workspace() -> Workspace {
    let mut document = Document::new_instance();
    document.add_symbol("Desk");
    document.add_symbol("Chair");
    document.add_level("Level 1", 0.0).unwrap();
    document.add_level("Level 2", 3.0).unwrap();
    Workspace::for_document(document)
}

/// A definition-document workspace with two symbols and no levels.
pub fn definition_workspace() -> Workspace {
    let mut document = Document::new_definition();
    document.add_symbol("Desk");
    document.add_symbol("Chair");
    Workspace::for_document(document)
}

/// First-iteration slot for call-site `n`.
pub fn slot(n: u64) -> TraceSlot {
    TraceSlot::first(CallSiteId::new(n))
}
