//! Symbol and level wrappers.
//!
//! Thin graph-facing handles over registry ids. A `Level` can only be
//! obtained from a document that has levels, which is what keeps level
//! hosting out of definition documents without any runtime guard.

use tether_core::{LevelId, SymbolId};
use tether_document::Document;

/// A placeable type registered in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    id: SymbolId,
    name: String,
}

impl Symbol {
    /// Look a symbol up by name.
    pub fn by_name(document: &Document, name: &str) -> Option<Symbol> {
        document.symbol_by_name(name).map(|id| Symbol {
            id,
            name: name.to_string(),
        })
    }

    /// Registry id of this symbol.
    pub fn id(&self) -> SymbolId {
        self.id
    }

    /// Name of this symbol.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A hosting level in an instance document.
///
/// Definition documents register no levels, so `by_name` finds nothing
/// there and no level-hosted construction can be expressed against one.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    id: LevelId,
    name: String,
    elevation: f64,
}

impl Level {
    /// Look a level up by name.
    pub fn by_name(document: &Document, name: &str) -> Option<Level> {
        let id = document.level_by_name(name)?;
        let elevation = document.level_elevation(id)?;
        Some(Level {
            id,
            name: name.to_string(),
            elevation,
        })
    }

    /// Registry id of this level.
    pub fn id(&self) -> LevelId {
        self.id
    }

    /// Name of this level.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Elevation of this level.
    pub fn elevation(&self) -> f64 {
        self.elevation
    }
}
