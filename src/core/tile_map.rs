//! Die zentrale TileMap-Datenstruktur mit Kacheln, Objekten und Spatial-Index.

use super::{MapError, MapObject, Position, Tile};
use super::{SpatialIndex, SpatialMatch};
use indexmap::IndexMap;

/// Container für das gesamte Kachel-Straßennetz.
///
/// Kacheln sind nach Position indexiert, Objekte nach der Position ihrer
/// Besitzer-Kachel. Die Einfüge-Reihenfolge bleibt erhalten und bestimmt die
/// Reihenfolge beim Speichern.
#[derive(Debug, Clone)]
pub struct TileMap {
    /// Alle Kacheln, indexiert nach ihrer Position
    tiles: IndexMap<Position, Tile>,
    /// Alle Objekte, gruppiert nach Besitzer-Position
    objects: IndexMap<Position, Vec<MapObject>>,
    /// Spatial-Index, wird lazy neu aufgebaut
    spatial_index: SpatialIndex,
    spatial_dirty: bool,
}

impl TileMap {
    /// Erstellt eine neue leere TileMap
    pub fn new() -> Self {
        Self {
            tiles: IndexMap::new(),
            objects: IndexMap::new(),
            spatial_index: SpatialIndex::empty(),
            spatial_dirty: false,
        }
    }

    /// Fügt eine Kachel hinzu oder ersetzt die Kachel an derselben Position.
    ///
    /// Gibt die ersetzte Kachel zurück.
    pub fn add_tile(&mut self, tile: Tile) -> Option<Tile> {
        let position = tile.position;
        let replaced = self.tiles.insert(position, tile);
        if replaced.is_some() {
            log::debug!("Kachel {} ersetzt", position);
        } else {
            self.spatial_dirty = true;
        }
        replaced
    }

    /// Hängt ein Objekt an seine Besitzer-Kachel.
    pub fn add_object(&mut self, object: MapObject) -> Result<(), MapError> {
        if !self.tiles.contains_key(&object.owner) {
            return Err(MapError::DanglingOwner(object.owner));
        }
        self.objects.entry(object.owner).or_default().push(object);
        Ok(())
    }

    /// Findet eine Kachel per Position — O(1)
    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.tiles.get(&position)
    }

    /// Prüft ob an der Position eine Kachel liegt
    pub fn contains_tile(&self, position: Position) -> bool {
        self.tiles.contains_key(&position)
    }

    /// Löst die Ausgänge einer Kachel in Reihenfolge auf.
    ///
    /// Schlägt beim ersten Ausgang ohne Kachel mit `DanglingExit` fehl.
    pub fn neighbors(&self, tile: &Tile) -> Result<Vec<&Tile>, MapError> {
        tile.exits
            .iter()
            .map(|exit| {
                self.tiles
                    .get(exit)
                    .ok_or(MapError::DanglingExit(*exit))
            })
            .collect()
    }

    /// Fügt einen gerichteten Ausgang `from → to` hinzu (ohne Duplikat).
    ///
    /// Gibt `false` zurück, wenn `from` keine Kachel ist.
    pub fn add_exit(&mut self, from: Position, to: Position) -> bool {
        let Some(tile) = self.tiles.get_mut(&from) else {
            return false;
        };
        if !tile.has_exit(to) {
            tile.exits.push(to);
        }
        true
    }

    /// Verbindet zwei Kacheln in beiden Richtungen.
    pub fn connect(&mut self, a: Position, b: Position) -> bool {
        let forward = self.add_exit(a, b);
        let backward = self.add_exit(b, a);
        forward && backward
    }

    /// Entfernt alle Ausgänge zwischen zwei Kacheln (in beiden Richtungen).
    ///
    /// Gibt die Anzahl entfernter Richtungen zurück.
    pub fn remove_exits_between(&mut self, a: Position, b: Position) -> usize {
        let mut removed = 0;
        if self.tiles.get_mut(&a).is_some_and(|tile| tile.remove_exit(b)) {
            removed += 1;
        }
        if self.tiles.get_mut(&b).is_some_and(|tile| tile.remove_exit(a)) {
            removed += 1;
        }
        removed
    }

    /// Objekte, die an der Kachel `position` hängen
    pub fn objects_at(&self, position: Position) -> &[MapObject] {
        self.objects
            .get(&position)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterator über alle Kacheln in Einfüge-Reihenfolge.
    pub fn tiles_iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Iterator über alle Objekte, gruppiert nach Besitzer in Einfüge-Reihenfolge.
    pub fn objects_iter(&self) -> impl Iterator<Item = &MapObject> {
        self.objects.values().flatten()
    }

    /// Gibt die Anzahl der Kacheln zurück
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Gibt die Anzahl der Objekte zurück
    pub fn object_count(&self) -> usize {
        self.objects.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Prüft ob die Karte einsatzbereit ist: alle Ausgänge und alle
    /// Objekt-Besitzer müssen auf Kacheln zeigen.
    ///
    /// Liefert den ersten Fehler in Iterations-Reihenfolge.
    pub fn validate(&self) -> Result<(), MapError> {
        for tile in self.tiles.values() {
            if let Some(exit) = tile.exits.iter().find(|e| !self.tiles.contains_key(*e)) {
                return Err(MapError::DanglingExit(*exit));
            }
        }
        for owner in self.objects.keys() {
            if !self.tiles.contains_key(owner) {
                return Err(MapError::DanglingOwner(*owner));
            }
        }
        Ok(())
    }

    /// Baut den Spatial-Index neu auf, falls sich Kacheln geändert haben.
    pub fn ensure_spatial_index(&mut self) {
        if self.spatial_dirty {
            self.spatial_index = SpatialIndex::from_positions(self.tiles.keys().copied());
            self.spatial_dirty = false;
        }
    }

    /// Findet die nächstgelegene Kachel zur Weltposition.
    ///
    /// Ohne aktuellen Index (siehe `ensure_spatial_index`) wird linear gesucht.
    pub fn nearest_tile(&self, query: Position) -> Option<SpatialMatch> {
        if !self.spatial_dirty {
            return self.spatial_index.nearest(query);
        }

        log::debug!("Spatial-Index veraltet, lineare Suche");
        self.tiles
            .keys()
            .map(|&position| SpatialMatch {
                position,
                distance: position.distance(query),
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    /// Findet alle Kacheln innerhalb eines Radius, nach Distanz sortiert.
    pub fn tiles_within_radius(&self, query: Position, radius: f64) -> Vec<SpatialMatch> {
        if !self.spatial_dirty {
            return self.spatial_index.within_radius(query, radius);
        }

        let mut matches: Vec<SpatialMatch> = self
            .tiles
            .keys()
            .map(|&position| SpatialMatch {
                position,
                distance: position.distance(query),
            })
            .filter(|m| m.distance <= radius)
            .collect();
        matches.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        matches
    }
}

impl Default for TileMap {
    fn default() -> Self {
        Self::new()
    }
}
