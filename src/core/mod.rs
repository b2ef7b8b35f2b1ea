//! Core-Domänentypen: Kacheln, Objekte, TileMap, Spatial-Index, Fehler.

pub mod error;
/// Eingebaute Subtypen der Karte
pub mod kinds;
pub mod object;
pub mod position;
pub mod spatial;
pub mod tile;
pub mod tile_map;

pub use error::MapError;
pub use kinds::{Car, Road, CAR_CLASS, ROAD_CLASS};
pub use object::{MapObject, ObjectKind};
pub use position::Position;
pub use spatial::{SpatialIndex, SpatialMatch};
pub use tile::{Fields, Tile, TileKind};
pub use tile_map::TileMap;
