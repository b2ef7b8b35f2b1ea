//! Demo-Karten: rechteckige Straßenraster mit Fahrzeugen.

use crate::core::{Car, MapObject, Position, Road, Tile, TileMap};
use std::sync::Arc;

/// Standard-Fahrzeugbreite der Demo-Karten
pub const DEMO_CAR_WIDTH: f64 = 0.05;

/// Baut ein Raster aus `columns × rows` Straßen-Kacheln an ganzzahligen
/// Positionen `(0,0)..(columns-1, rows-1)`.
///
/// Jede Kachel ist mit ihren Nachbarn oben/unten/links/rechts verbunden
/// (von-Neumann) und trägt ein `Car`.
pub fn grid(columns: u32, rows: u32) -> TileMap {
    let mut map = TileMap::new();

    for x in 0..columns {
        for y in 0..rows {
            let mut exits = Vec::with_capacity(4);
            if x > 0 {
                exits.push(cell(x - 1, y));
            }
            if y > 0 {
                exits.push(cell(x, y - 1));
            }
            if y + 1 < rows {
                exits.push(cell(x, y + 1));
            }
            if x + 1 < columns {
                exits.push(cell(x + 1, y));
            }
            map.add_tile(Tile::new(cell(x, y), exits, Arc::new(Road)));
        }
    }

    for x in 0..columns {
        for y in 0..rows {
            let car = MapObject::new(cell(x, y), Arc::new(Car::new(DEMO_CAR_WIDTH)));
            if let Err(err) = map.add_object(car) {
                log::warn!("Demo-Fahrzeug nicht platziert: {}", err);
            }
        }
    }

    log::debug!(
        "Demo-Raster {}x{}: {} Kacheln, {} Objekte",
        columns,
        rows,
        map.tile_count(),
        map.object_count()
    );
    map
}

/// Das klassische 3×3-Raster
pub fn grid_3x3() -> TileMap {
    grid(3, 3)
}

fn cell(x: u32, y: u32) -> Position {
    Position::new(x as f64, y as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_3x3_has_von_neumann_exits() {
        let map = grid_3x3();
        assert_eq!(map.tile_count(), 9);
        assert_eq!(map.object_count(), 9);

        let center = map.tile(Position::new(1.0, 1.0)).unwrap();
        assert_eq!(center.exits.len(), 4);
        let corner = map.tile(Position::new(0.0, 0.0)).unwrap();
        assert_eq!(corner.exits.len(), 2);
        assert!(map.validate().is_ok());
    }

    #[test]
    fn degenerate_grid_is_empty() {
        assert!(grid(0, 5).is_empty());
        assert_eq!(grid(1, 1).tile_count(), 1);
    }
}
