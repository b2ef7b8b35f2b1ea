//! Kacheln (Knoten der Karte) und ihre Subtyp-Schnittstelle.

use super::{MapError, Position};
use std::fmt;
use std::sync::Arc;

/// Generischer Feldsatz eines Karteneintrags (JSON-Objekt ohne Schema-Felder).
pub type Fields = serde_json::Map<String, serde_json::Value>;

/// Subtyp einer Kachel.
///
/// Die Karte kennt nur Position und Ausgaenge. Alles weitere gehoert dem
/// Subtyp und wird ausschliesslich beim Speichern ueber `save_fields` gelesen.
pub trait TileKind: fmt::Debug + Send + Sync {
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

/// Eine Kachel der Karte
#[derive(Debug, Clone)]
pub struct Tile {
    /// Position, zugleich eindeutiger Schluessel in der Karte
    pub position: Position,
    /// Ausgaenge als Positions-Schluessel (keine direkten Referenzen)
    pub exits: Vec<Position>,
    /// Subtyp mit eigenen Feldern
    pub kind: Arc<dyn TileKind>,
}

impl Tile {
    /// Erstellt eine neue Kachel
    pub fn new(
        position: impl Into<Position>,
        exits: impl IntoIterator<Item = Position>,
        kind: Arc<dyn TileKind>,
    ) -> Self {
        Self {
            position: position.into(),
            exits: exits.into_iter().collect(),
            kind,
        }
    }

    /// Typ-Tag des Subtyps
    pub fn class(&self) -> &str {
        self.kind.class()
    }

    /// Prueft ob `target` unter den Ausgaengen steht.
    pub fn has_exit(&self, target: Position) -> bool {
        self.exits.contains(&target)
    }

    /// Entfernt einen Ausgang (alle Vorkommen). Gibt `true` zurueck falls gefunden.
    pub fn remove_exit(&mut self, target: Position) -> bool {
        let before = self.exits.len();
        self.exits.retain(|exit| *exit != target);
        self.exits.len() < before
    }
}

impl PartialEq for Tile {
    /// Kacheln sind gleich, wenn Position und Ausgaenge uebereinstimmen und der
    /// Subtyp denselben Tag traegt.
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
            && self.exits == other.exits
            && self.class() == other.class()
    }
}
