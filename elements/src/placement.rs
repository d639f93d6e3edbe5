//! The graph-facing wrapper over a bound document component.

use tether_core::{Location, ObjectId, Point, TraceSlot, Vector};
use tether_document::Document;

use crate::binder::{bind_or_create, Hosting};
use crate::context::BindingContext;
use crate::error::{ElementError, ElementResult};
use crate::mutators;
use crate::wrappers::{Level, Symbol};

/// A persistent object as seen from the graph.
///
/// The wrapper's lifetime spans a node instance across re-executions,
/// not a single call: re-running the same call-site attaches a new
/// wrapper to the same underlying component. Factory inputs are
/// `Option` because an upstream graph port may be unconnected; `None`
/// where a value is required fails before any transaction opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    id: ObjectId,
    document_owned: bool,
}

impl Placement {
    pub(crate) fn graph_owned(id: ObjectId) -> Self {
        Self {
            id,
            document_owned: false,
        }
    }

    pub(crate) fn document_owned(id: ObjectId) -> Self {
        Self {
            id,
            document_owned: true,
        }
    }

    /// Identity of the bound component.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// True when the component pre-existed in the document and is not
    /// this graph's to dispose of.
    pub fn is_document_owned(&self) -> bool {
        self.document_owned
    }

    // --- Factories ---

    /// Place a component of `symbol` at `point`.
    pub fn by_point(
        ctx: &mut BindingContext<'_>,
        slot: TraceSlot,
        symbol: Option<&Symbol>,
        point: Option<Point>,
    ) -> ElementResult<Placement> {
        let symbol = symbol.ok_or(ElementError::MissingArgument { name: "symbol" })?;
        let point = point.ok_or(ElementError::MissingArgument { name: "point" })?;
        bind_or_create(ctx, slot, symbol, point, Hosting::Free)
    }

    /// Place a component of `symbol` at world-space coordinates.
    pub fn by_coordinates(
        ctx: &mut BindingContext<'_>,
        slot: TraceSlot,
        symbol: Option<&Symbol>,
        x: f64,
        y: f64,
        z: f64,
    ) -> ElementResult<Placement> {
        Self::by_point(ctx, slot, symbol, Some(Point::new(x, y, z)))
    }

    /// Place a component of `symbol` at `point`, hosted on `level`.
    pub fn by_point_and_level(
        ctx: &mut BindingContext<'_>,
        slot: TraceSlot,
        symbol: Option<&Symbol>,
        point: Option<Point>,
        level: Option<&Level>,
    ) -> ElementResult<Placement> {
        let symbol = symbol.ok_or(ElementError::MissingArgument { name: "symbol" })?;
        let point = point.ok_or(ElementError::MissingArgument { name: "point" })?;
        let level = level.ok_or(ElementError::MissingArgument { name: "level" })?;
        bind_or_create(ctx, slot, symbol, point, Hosting::OnLevel(level))
    }

    /// Import every pre-existing component of `symbol` from the
    /// document. No creation happens, so the trace store is bypassed and
    /// the resulting placements are document-owned.
    pub fn by_existing_of_type(
        document: &Document,
        symbol: Option<&Symbol>,
    ) -> ElementResult<Vec<Placement>> {
        let symbol = symbol.ok_or(ElementError::MissingArgument { name: "symbol" })?;
        Ok(document
            .components_of_symbol(symbol.id())
            .into_iter()
            .map(Placement::document_owned)
            .collect())
    }

    // --- Instance operations ---

    /// Rotate to `degrees` about the local up axis. Fluent: returns the
    /// placement for chaining. Re-requesting the current angle opens no
    /// transaction.
    pub fn rotate(self, ctx: &mut BindingContext<'_>, degrees: f64) -> ElementResult<Self> {
        mutators::set_rotation(ctx, self.id, degrees)?;
        Ok(self)
    }

    // --- Read accessors ---

    /// The symbol the component is currently an instance of.
    pub fn symbol(&self, document: &Document) -> Option<Symbol> {
        let component = document.resolve(self.id)?;
        let name = document.symbol_name(component.symbol)?;
        Symbol::by_name(document, name)
    }

    /// The component's current location.
    pub fn location(&self, document: &Document) -> Option<Location> {
        document.resolve(self.id).map(|c| c.location)
    }

    /// The component's current facing direction.
    pub fn facing_orientation(&self, document: &Document) -> Option<Vector> {
        document.resolve(self.id).map(|c| c.transform.facing())
    }
}
