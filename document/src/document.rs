//! The in-memory document store.

use std::collections::HashMap;
use std::fmt;

use tether_core::{wrap_angle, LevelId, Location, ObjectId, Point, SymbolId};

use crate::component::Component;
use crate::error::{DocumentError, DocumentResult};

/// Capability kind of an open document.
///
/// Definition documents edit a reusable component definition and have no
/// level concept; instance documents edit a concrete model where
/// components may be hosted on levels. The two kinds expose different
/// creation entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Definition,
    Instance,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Definition => write!(f, "definition"),
            DocumentKind::Instance => write!(f, "instance"),
        }
    }
}

/// A symbol registered in the document.
#[derive(Debug, Clone)]
struct SymbolDef {
    name: String,
}

/// A hosting level registered in an instance document.
#[derive(Debug, Clone)]
struct LevelDef {
    name: String,
    elevation: f64,
}

/// Cloned document state, held by an open transaction for rollback.
#[derive(Debug, Clone)]
pub struct DocumentSnapshot {
    next_object: u64,
    symbols: HashMap<SymbolId, SymbolDef>,
    levels: HashMap<LevelId, LevelDef>,
    components: HashMap<ObjectId, Component>,
}

/// One open document session.
#[derive(Debug)]
pub struct Document {
    kind: DocumentKind,
    next_object: u64,
    next_symbol: u64,
    next_level: u64,
    symbols: HashMap<SymbolId, SymbolDef>,
    levels: HashMap<LevelId, LevelDef>,
    components: HashMap<ObjectId, Component>,
}

impl Document {
    fn new(kind: DocumentKind) -> Self {
        Self {
            kind,
            next_object: 1,
            next_symbol: 1,
            next_level: 1,
            symbols: HashMap::new(),
            levels: HashMap::new(),
            components: HashMap::new(),
        }
    }

    /// Open an empty definition document.
    pub fn new_definition() -> Self {
        Self::new(DocumentKind::Definition)
    }

    /// Open an empty instance document.
    pub fn new_instance() -> Self {
        Self::new(DocumentKind::Instance)
    }

    /// The capability kind of this document.
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    // --- Symbol registry ---

    /// Register a symbol and return its id.
    pub fn add_symbol(&mut self, name: &str) -> SymbolId {
        let id = SymbolId::new(self.next_symbol);
        self.next_symbol += 1;
        self.symbols.insert(
            id,
            SymbolDef {
                name: name.to_string(),
            },
        );
        id
    }

    /// Name of a registered symbol.
    pub fn symbol_name(&self, id: SymbolId) -> Option<&str> {
        self.symbols.get(&id).map(|s| s.name.as_str())
    }

    /// Retire a symbol. Components still referencing it fail commit
    /// validation. Models external edits to the registry.
    pub fn remove_symbol(&mut self, id: SymbolId) -> DocumentResult<()> {
        self.symbols
            .remove(&id)
            .map(|_| ())
            .ok_or(DocumentError::UnknownSymbol(id))
    }

    /// Look a symbol up by name.
    pub fn symbol_by_name(&self, name: &str) -> Option<SymbolId> {
        self.symbols
            .iter()
            .find(|(_, def)| def.name == name)
            .map(|(id, _)| *id)
    }

    // --- Level registry ---

    /// Register a hosting level. Only instance documents have levels.
    pub fn add_level(&mut self, name: &str, elevation: f64) -> DocumentResult<LevelId> {
        if self.kind == DocumentKind::Definition {
            return Err(DocumentError::LevelsUnsupported);
        }
        let id = LevelId::new(self.next_level);
        self.next_level += 1;
        self.levels.insert(
            id,
            LevelDef {
                name: name.to_string(),
                elevation,
            },
        );
        Ok(id)
    }

    /// Name of a registered level.
    pub fn level_name(&self, id: LevelId) -> Option<&str> {
        self.levels.get(&id).map(|l| l.name.as_str())
    }

    /// Elevation of a registered level.
    pub fn level_elevation(&self, id: LevelId) -> Option<f64> {
        self.levels.get(&id).map(|l| l.elevation)
    }

    /// Look a level up by name. Finds nothing in definition documents,
    /// which cannot register levels in the first place.
    pub fn level_by_name(&self, name: &str) -> Option<LevelId> {
        self.levels
            .iter()
            .find(|(_, def)| def.name == name)
            .map(|(id, _)| *id)
    }

    // --- Creation entry points ---

    /// Place a component in a definition document. No level association
    /// exists in this context.
    pub fn create_in_definition(
        &mut self,
        symbol: SymbolId,
        point: Point,
    ) -> DocumentResult<ObjectId> {
        if self.kind != DocumentKind::Definition {
            return Err(DocumentError::WrongContext {
                operation: "create_in_definition",
                required: DocumentKind::Definition,
            });
        }
        self.insert_component(symbol, point, None)
    }

    /// Place a component in an instance document, optionally hosted on a
    /// level.
    pub fn create_in_instance(
        &mut self,
        symbol: SymbolId,
        point: Point,
        level: Option<LevelId>,
    ) -> DocumentResult<ObjectId> {
        if self.kind != DocumentKind::Instance {
            return Err(DocumentError::WrongContext {
                operation: "create_in_instance",
                required: DocumentKind::Instance,
            });
        }
        if let Some(level) = level {
            if !self.levels.contains_key(&level) {
                return Err(DocumentError::UnknownLevel(level));
            }
        }
        self.insert_component(symbol, point, level)
    }

    /// Place a curve-located component in an instance document (walls
    /// and similar hosted-on-a-path objects).
    pub fn create_curve_in_instance(
        &mut self,
        symbol: SymbolId,
        start: Point,
        end: Point,
    ) -> DocumentResult<ObjectId> {
        if self.kind != DocumentKind::Instance {
            return Err(DocumentError::WrongContext {
                operation: "create_curve_in_instance",
                required: DocumentKind::Instance,
            });
        }
        if !self.symbols.contains_key(&symbol) {
            return Err(DocumentError::UnknownSymbol(symbol));
        }
        let id = ObjectId::new(self.next_object);
        self.next_object += 1;
        let mut component = Component::placed(id, symbol, start, None);
        component.location = Location::Curve { start, end };
        self.components.insert(id, component);
        Ok(id)
    }

    fn insert_component(
        &mut self,
        symbol: SymbolId,
        point: Point,
        level: Option<LevelId>,
    ) -> DocumentResult<ObjectId> {
        if !self.symbols.contains_key(&symbol) {
            return Err(DocumentError::UnknownSymbol(symbol));
        }
        let id = ObjectId::new(self.next_object);
        self.next_object += 1;
        self.components
            .insert(id, Component::placed(id, symbol, point, level));
        Ok(id)
    }

    // --- Resolution and queries ---

    /// Resolve an identity to its live component, if it still exists.
    pub fn resolve(&self, id: ObjectId) -> Option<&Component> {
        self.components.get(&id)
    }

    /// Delete a component. Models external deletion between graph passes.
    pub fn delete(&mut self, id: ObjectId) -> DocumentResult<()> {
        self.components
            .remove(&id)
            .map(|_| ())
            .ok_or(DocumentError::ComponentNotFound(id))
    }

    /// All components of a symbol, in id order.
    pub fn components_of_symbol(&self, symbol: SymbolId) -> Vec<ObjectId> {
        let mut ids: Vec<ObjectId> = self
            .components
            .values()
            .filter(|c| c.symbol == symbol)
            .map(|c| c.id)
            .collect();
        ids.sort();
        ids
    }

    /// Number of live components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// True if the document holds no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    // --- Mutation entry points ---

    fn component_mut(&mut self, id: ObjectId) -> DocumentResult<&mut Component> {
        self.components
            .get_mut(&id)
            .ok_or(DocumentError::ComponentNotFound(id))
    }

    /// Move a point-located component. Non-point locations are rejected
    /// rather than narrowed unchecked.
    pub fn set_location_point(&mut self, id: ObjectId, point: Point) -> DocumentResult<()> {
        let component = self.component_mut(id)?;
        match component.location {
            Location::Point(_) => {
                component.location = Location::Point(point);
                component.transform.origin = point;
                Ok(())
            }
            other => Err(DocumentError::LocationKindMismatch {
                found: other.kind(),
            }),
        }
    }

    /// Re-host a component under a new symbol.
    pub fn set_symbol(&mut self, id: ObjectId, symbol: SymbolId) -> DocumentResult<()> {
        if !self.symbols.contains_key(&symbol) {
            return Err(DocumentError::UnknownSymbol(symbol));
        }
        self.component_mut(id)?.symbol = symbol;
        Ok(())
    }

    /// Set a component's hosting level.
    pub fn set_level(&mut self, id: ObjectId, level: LevelId) -> DocumentResult<()> {
        if !self.levels.contains_key(&level) {
            return Err(DocumentError::UnknownLevel(level));
        }
        self.component_mut(id)?.level = Some(level);
        Ok(())
    }

    /// Rotate a component by `delta` radians about its local up axis,
    /// anchored at its transform origin. Origin and tilt are untouched.
    pub fn rotate(&mut self, id: ObjectId, delta: f64) -> DocumentResult<()> {
        let component = self.component_mut(id)?;
        component.transform.yaw = wrap_angle(component.transform.yaw + delta);
        Ok(())
    }

    // --- Transaction support ---

    /// Clone the mutable state for rollback.
    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            next_object: self.next_object,
            symbols: self.symbols.clone(),
            levels: self.levels.clone(),
            components: self.components.clone(),
        }
    }

    /// Restore state captured by `snapshot`.
    pub fn restore(&mut self, snapshot: DocumentSnapshot) {
        self.next_object = snapshot.next_object;
        self.symbols = snapshot.symbols;
        self.levels = snapshot.levels;
        self.components = snapshot.components;
    }

    /// Commit-time referential integrity check: every component must
    /// reference a registered symbol and, where hosted, a registered
    /// level.
    pub fn validate(&self) -> DocumentResult<()> {
        for component in self.components.values() {
            if !self.symbols.contains_key(&component.symbol) {
                return Err(DocumentError::UnknownSymbol(component.symbol));
            }
            if let Some(level) = component.level {
                if !self.levels.contains_key(&level) {
                    return Err(DocumentError::UnknownLevel(level));
                }
            }
        }
        Ok(())
    }
}
