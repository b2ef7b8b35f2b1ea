//! Tile Road Map Library.
//! Kachelbasierte Straßenkarte: Typ-Registry, JSON-Persistenz und Dijkstra-Routing.

pub mod core;
pub mod demo;
pub mod json;
pub mod registry;
pub mod routing;
pub mod shared;

pub use core::{
    Car, Fields, MapError, MapObject, ObjectKind, Position, Road, Tile, TileKind, TileMap,
};
pub use core::{SpatialIndex, SpatialMatch};
pub use json::{load_map, load_map_file, save_map, save_map_file, LoadPolicy, SaveStyle};
pub use registry::{Constructor, TypeRegistry};
pub use routing::{path_length, PathFinder, Route, RoutingOptions};
pub use shared::MapOptions;
