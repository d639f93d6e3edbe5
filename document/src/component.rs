//! Component records.

use tether_core::{LevelId, Location, ObjectId, Point, SymbolId, Transform};

/// A persistent object as stored by the document.
#[derive(Debug, Clone)]
pub struct Component {
    /// Unique identifier, stable for the document session.
    pub id: ObjectId,
    /// The symbol (placeable type) this component is an instance of.
    pub symbol: SymbolId,
    /// Where the component sits.
    pub location: Location,
    /// Hosting level; present only in instance documents.
    pub level: Option<LevelId>,
    /// Placement transform.
    pub transform: Transform,
}

impl Component {
    /// Create a freshly placed component at `point`.
    pub(crate) fn placed(
        id: ObjectId,
        symbol: SymbolId,
        point: Point,
        level: Option<LevelId>,
    ) -> Self {
        Self {
            id,
            symbol,
            location: Location::Point(point),
            level,
            transform: Transform::identity_at(point),
        }
    }
}
