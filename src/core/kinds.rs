//! Eingebaute Subtypen: `Road` (Kachel) und `Car` (Objekt).

use super::{Fields, MapError, ObjectKind, Tile, TileKind};
use std::sync::Arc;

/// Tag der Strassen-Kachel
pub const ROAD_CLASS: &str = "Road";
/// Tag des Fahrzeug-Objekts
pub const CAR_CLASS: &str = "Car";

/// Strassen-Kachel ohne eigene Felder
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Road;

impl Road {
    /// Konstruktor fuer die Registry
    pub fn load(_fields: &Fields) -> Result<Arc<dyn TileKind>, MapError> {
        Ok(Arc::new(Road))
    }
}

impl TileKind for Road {
    fn class(&self) -> &str {
        ROAD_CLASS
    }
}

/// Fahrzeug, das auf einer Kachel steht
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Car {
    /// Fahrzeugbreite in Welteinheiten
    pub width: f64,
}

impl Car {
    pub fn new(width: f64) -> Self {
        Self { width }
    }

    /// Konstruktor fuer die Registry. `width` ist Pflicht.
    pub fn load(fields: &Fields, owner: &Tile) -> Result<Arc<dyn ObjectKind>, MapError> {
        let width = fields
            .get("width")
            .and_then(serde_json::Value::as_f64)
            .ok_or_else(|| {
                MapError::malformed(format!(
                    "Car auf {} ohne numerisches Feld 'width'",
                    owner.position
                ))
            })?;
        Ok(Arc::new(Car::new(width)))
    }
}

impl ObjectKind for Car {
    fn class(&self) -> &str {
        CAR_CLASS
    }

    fn save_fields(&self, fields: &mut Fields) -> Result<(), MapError> {
        if !self.width.is_finite() {
            return Err(MapError::malformed(format!(
                "Car-Breite {} ist nicht endlich",
                self.width
            )));
        }
        fields.insert("width".to_string(), serde_json::json!(self.width));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[test]
    fn car_requires_width() {
        let owner = Tile::new(Position::new(0.0, 0.0), [], Arc::new(Road));
        let err = Car::load(&Fields::new(), &owner).expect_err("width fehlt");
        assert!(matches!(err, MapError::MalformedFile(_)));
    }

    #[test]
    fn car_writes_width() {
        let mut fields = Fields::new();
        Car::new(0.05).save_fields(&mut fields).unwrap();
        assert_eq!(fields["width"], serde_json::json!(0.05));
    }

    #[test]
    fn car_rejects_non_finite_width() {
        for width in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut fields = Fields::new();
            let err = Car::new(width).save_fields(&mut fields).unwrap_err();
            assert!(matches!(err, MapError::MalformedFile(_)));
            assert!(fields.is_empty());
        }
    }
}
