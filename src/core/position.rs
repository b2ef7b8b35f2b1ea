//! Kachel-Position als Identitaetsschluessel der Karte.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Position einer Kachel in Weltkoordinaten.
///
/// Gleichheit und Hash arbeiten bitweise auf den Koordinaten, `-0.0` wird
/// dabei auf `0.0` normalisiert. Nicht-endliche Werte werden an der
/// Dateigrenze abgewiesen und tauchen in einer geladenen Karte nicht auf.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Position {
    /// X-Koordinate
    pub x: f64,
    /// Y-Koordinate
    pub y: f64,
}

impl Position {
    /// Erstellt eine neue Position
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Prueft ob beide Koordinaten endlich sind.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euklidische Distanz zu einer anderen Position.
    pub fn distance(&self, other: Position) -> f64 {
        self.to_dvec2().distance(other.to_dvec2())
    }

    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    fn key_bits(&self) -> (u64, u64) {
        // +0.0 addieren macht aus -0.0 ein +0.0
        ((self.x + 0.0).to_bits(), (self.y + 0.0).to_bits())
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.key_bits() == other.key_bits()
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key_bits().hash(state);
    }
}

impl From<[f64; 2]> for Position {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Position> for [f64; 2] {
    fn from(pos: Position) -> Self {
        [pos.x, pos.y]
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn negative_zero_is_same_key() {
        let mut set = HashSet::new();
        set.insert(Position::new(0.0, 1.0));
        assert!(set.contains(&Position::new(-0.0, 1.0)));
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(1.0, 2.0);
        let b = Position::new(4.0, -2.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn serializes_as_two_element_array() {
        let json = serde_json::to_string(&Position::new(1.5, -2.0)).unwrap();
        assert_eq!(json, "[1.5,-2.0]");
        let back: Position = serde_json::from_str("[3, 4]").unwrap();
        assert_eq!(back, Position::new(3.0, 4.0));
    }
}
