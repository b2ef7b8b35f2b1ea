//! Typ-Registry: Tag → Konstruktor für Kachel- und Objekt-Subtypen.
//!
//! Die Registry wird einmal beim Start befüllt (`TypeRegistry::builtin()` oder
//! explizite `register`-Aufrufe) und danach nur noch gelesen.

use crate::core::{Car, Fields, MapError, ObjectKind, Road, Tile, TileKind};
use crate::core::{CAR_CLASS, ROAD_CLASS};
use std::collections::HashMap;
use std::sync::Arc;

/// Baut einen Kachel-Subtyp aus dem generischen Feldsatz.
pub type TileConstructor = fn(&Fields) -> Result<Arc<dyn TileKind>, MapError>;

/// Baut einen Objekt-Subtyp aus dem Feldsatz und der Besitzer-Kachel.
pub type ObjectConstructor = fn(&Fields, &Tile) -> Result<Arc<dyn ObjectKind>, MapError>;

/// Registrierter Konstruktor
#[derive(Debug, Clone, Copy)]
pub enum Constructor {
    /// Konstruktor für Kacheln
    Tile(TileConstructor),
    /// Konstruktor für angehängte Objekte
    Object(ObjectConstructor),
}

/// Tabelle `tag → Konstruktor`
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    constructors: HashMap<String, Constructor>,
}

impl TypeRegistry {
    /// Erstellt eine leere Registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry mit den eingebauten Subtypen `Road` und `Car`
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(ROAD_CLASS, Constructor::Tile(Road::load));
        registry.register(CAR_CLASS, Constructor::Object(Car::load));
        registry
    }

    /// Registriert einen Konstruktor. Ein bereits vorhandener Tag wird ersetzt.
    pub fn register(&mut self, tag: impl Into<String>, constructor: Constructor) {
        let tag = tag.into();
        if self.constructors.insert(tag.clone(), constructor).is_some() {
            log::debug!("Typ-Tag '{}' neu registriert", tag);
        }
    }

    /// Löst einen Tag auf.
    pub fn resolve(&self, tag: &str) -> Result<&Constructor, MapError> {
        self.constructors
            .get(tag)
            .ok_or_else(|| MapError::UnknownType(tag.to_string()))
    }

    /// Löst einen Tag als Kachel-Konstruktor auf. Ein Objekt-Tag gilt als unbekannt.
    pub fn resolve_tile(&self, tag: &str) -> Result<TileConstructor, MapError> {
        match self.resolve(tag)? {
            Constructor::Tile(ctor) => Ok(*ctor),
            Constructor::Object(_) => Err(MapError::UnknownType(tag.to_string())),
        }
    }

    /// Löst einen Tag als Objekt-Konstruktor auf. Ein Kachel-Tag gilt als unbekannt.
    pub fn resolve_object(&self, tag: &str) -> Result<ObjectConstructor, MapError> {
        match self.resolve(tag)? {
            Constructor::Object(ctor) => Ok(*ctor),
            Constructor::Tile(_) => Err(MapError::UnknownType(tag.to_string())),
        }
    }

    /// Alle registrierten Tags, sortiert
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    #[derive(Debug)]
    struct Bridge;

    impl TileKind for Bridge {
        fn class(&self) -> &str {
            "Bridge"
        }
    }

    fn load_bridge(_fields: &Fields) -> Result<Arc<dyn TileKind>, MapError> {
        Ok(Arc::new(Bridge))
    }

    #[test]
    fn builtin_contains_road_and_car() {
        let registry = TypeRegistry::builtin();
        assert_eq!(registry.tags(), vec!["Car", "Road"]);
        assert!(registry.resolve_tile("Road").is_ok());
        assert!(registry.resolve_object("Car").is_ok());
    }

    #[test]
    fn unknown_tag_is_reported_with_name() {
        let registry = TypeRegistry::builtin();
        let err = registry.resolve("Tram").expect_err("Tag unbekannt");
        assert_eq!(err, MapError::UnknownType("Tram".to_string()));
        assert_eq!(err.to_string(), "unbekannter Typ-Tag 'Tram'");
    }

    #[test]
    fn wrong_variant_counts_as_unknown() {
        let registry = TypeRegistry::builtin();
        assert!(matches!(
            registry.resolve_tile("Car"),
            Err(MapError::UnknownType(tag)) if tag == "Car"
        ));
        assert!(matches!(
            registry.resolve_object("Road"),
            Err(MapError::UnknownType(tag)) if tag == "Road"
        ));
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = TypeRegistry::builtin();
        registry.register("Road", Constructor::Tile(load_bridge));

        let ctor = registry.resolve_tile("Road").unwrap();
        let kind = ctor(&Fields::new()).unwrap();
        assert_eq!(kind.class(), "Bridge");
        assert_eq!(registry.len(), 2);

        let tile = Tile::new(Position::new(0.0, 0.0), [], kind);
        assert_eq!(tile.class(), "Bridge");
    }
}
