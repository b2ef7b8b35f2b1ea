//! An Kacheln angehaengte Objekte.

use super::{Fields, MapError, Position};
use std::fmt;
use std::sync::Arc;

/// Subtyp eines Kartenobjekts (z.B. Fahrzeug).
pub trait ObjectKind: fmt::Debug + Send + Sync {
    /// Typ-Tag, unter dem der Subtyp in der Registry steht
    fn class(&self) -> &str;

    /// Schreibt die subtypspezifischen Felder in `fields`.
    ///
    /// Werte, die JSON nicht darstellen kann (NaN, ±inf), müssen als
    /// `MalformedFile` gemeldet werden.
    fn save_fields(&self, _fields: &mut Fields) -> Result<(), MapError> {
        Ok(())
    }
}

/// Ein Objekt, das an einer Kachel haengt.
///
/// `owner` ist ein nicht-besitzender Verweis per Position; die Lebensdauer
/// verwaltet die `TileMap`.
#[derive(Debug, Clone)]
pub struct MapObject {
    /// Position der Besitzer-Kachel (= Position des Objekts)
    pub owner: Position,
    /// Subtyp mit eigenen Feldern
    pub kind: Arc<dyn ObjectKind>,
}

impl MapObject {
    pub fn new(owner: impl Into<Position>, kind: Arc<dyn ObjectKind>) -> Self {
        Self {
            owner: owner.into(),
            kind,
        }
    }

    pub fn position(&self) -> Position {
        self.owner
    }

    /// Typ-Tag des Subtyps
    pub fn class(&self) -> &str {
        self.kind.class()
    }
}
