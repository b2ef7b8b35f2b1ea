//! Fehler-Taxonomie der Kachelkarte.

use super::Position;
use thiserror::Error;

/// Fehler aus Registry, Karte, Serializer und Routing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    /// Fuer den Typ-Tag ist kein Konstruktor registriert
    #[error("unbekannter Typ-Tag '{0}'")]
    UnknownType(String),
    /// Ein Ausgang verweist auf eine nicht vorhandene Kachel
    #[error("Ausgang {0} verweist auf keine Kachel")]
    DanglingExit(Position),
    /// Ein Objekt verweist auf eine nicht vorhandene Besitzer-Kachel
    #[error("Objekt-Besitzer {0} ist keine Kachel der Karte")]
    DanglingOwner(Position),
    /// Das Dokument entspricht nicht dem Kartenschema
    #[error("fehlerhafte Kartendatei: {0}")]
    MalformedFile(String),
    /// Ziel ist vom Start aus nicht erreichbar
    #[error("kein Pfad von {from} nach {to}")]
    NoPath { from: Position, to: Position },
    /// Routing-Endpunkt ist keine Kachel der Karte
    #[error("unbekannte Kachel {0}")]
    UnknownTile(Position),
    /// Die Suche hat das Expansionslimit erreicht
    #[error("Suche nach {limit} expandierten Kacheln abgebrochen")]
    ExpansionLimit { limit: usize },
}

impl MapError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedFile(reason.into())
    }
}

impl From<serde_json::Error> for MapError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedFile(err.to_string())
    }
}
