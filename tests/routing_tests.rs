//! Integrationstests für die Wegsuche:
//! - Szenarien auf dem 3×3-Raster
//! - Vergleich mit Brute-Force-Suche auf zufälligen kleinen Karten

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use tile_road_map::{
    demo, load_map, path_length, LoadPolicy, MapError, PathFinder, Position, Road, Tile, TileMap,
    TypeRegistry,
};

fn pos(x: f64, y: f64) -> Position {
    Position::new(x, y)
}

/// Kürzeste Länge über alle einfachen Pfade (nur für kleine Karten).
fn brute_force(map: &TileMap, from: Position, to: Position) -> Option<f64> {
    fn walk(
        map: &TileMap,
        current: Position,
        to: Position,
        length: f64,
        visited: &mut HashSet<Position>,
        best: &mut Option<f64>,
    ) {
        if current == to {
            *best = Some(best.map_or(length, |b: f64| b.min(length)));
            return;
        }
        for &next in &map.tile(current).expect("Kachel existiert").exits {
            if visited.insert(next) {
                walk(map, next, to, length + current.distance(next), visited, best);
                visited.remove(&next);
            }
        }
    }

    let mut visited = HashSet::from([from]);
    let mut best = None;
    walk(map, from, to, 0.0, &mut visited, &mut best);
    best
}

/// Karte aus bis zu 12 Kacheln mit zufälligen Positionen und Ausgängen.
fn arb_map() -> impl Strategy<Value = TileMap> {
    (2usize..=12)
        .prop_flat_map(|count| {
            (
                proptest::collection::hash_set((0i32..20, 0i32..20), count),
                proptest::collection::vec(proptest::collection::vec(any::<prop::sample::Index>(), 0..4), count),
            )
        })
        .prop_map(|(cells, exits)| {
            let positions: Vec<Position> = cells
                .into_iter()
                .map(|(x, y)| pos(x as f64, y as f64))
                .collect();
            let mut map = TileMap::new();
            for (index, position) in positions.iter().enumerate() {
                let targets: Vec<Position> = exits[index]
                    .iter()
                    .map(|i| positions[i.index(positions.len())])
                    .filter(|target| target != position)
                    .collect();
                map.add_tile(Tile::new(*position, targets, Arc::new(Road)));
            }
            map
        })
}

proptest! {
    #[test]
    fn prop_matches_brute_force(map in arb_map()) {
        let tiles: Vec<Position> = map.tiles_iter().map(|t| t.position).collect();
        let finder = PathFinder::new(&map);

        for &from in &tiles {
            for &to in &tiles {
                let expected = if from == to { Some(0.0) } else { brute_force(&map, from, to) };
                match (finder.route(from, to), expected) {
                    (Ok(route), Some(best)) => {
                        prop_assert!((route.length - best).abs() < 1e-9,
                            "{} → {}: {} statt {}", from, to, route.length, best);
                        prop_assert_eq!(route.hops.last().copied().unwrap_or(from), to);
                        prop_assert!(!route.hops.contains(&from));
                    }
                    (Err(MapError::NoPath { .. }), None) => {}
                    (result, expected) => {
                        prop_assert!(false, "{} → {}: {:?} vs. {:?}", from, to, result, expected);
                    }
                }
            }
        }
    }

    #[test]
    fn prop_self_route_is_empty(map in arb_map()) {
        let finder = PathFinder::new(&map);
        for tile in map.tiles_iter() {
            prop_assert!(finder.find(tile, tile).unwrap().is_empty());
        }
    }
}

#[test]
fn test_fixture_grid_scenarios() {
    let content = include_str!("fixtures/grid_3x3.json");
    let map = load_map(content.as_bytes(), &TypeRegistry::builtin(), LoadPolicy::Lenient).unwrap();
    let finder = PathFinder::new(&map);

    let source = map.tile(pos(0.0, 0.0)).unwrap();
    let goal = map.tile(pos(2.0, 2.0)).unwrap();

    let path = finder.find(source, goal).unwrap();
    let hops: Vec<Position> = path.iter().map(|t| t.position).collect();
    assert_eq!(hops.len(), 4);
    assert_eq!(path_length(source.position, &hops), 4.0);

    assert!(finder.find(source, source).unwrap().is_empty());
}

#[test]
fn test_cut_grid_routes_via_bottom_right_corner() {
    let mut map = demo::grid_3x3();
    map.remove_exits_between(pos(1.0, 1.0), pos(2.0, 1.0));
    map.remove_exits_between(pos(1.0, 2.0), pos(2.0, 2.0));

    let route = PathFinder::new(&map)
        .route(pos(0.0, 0.0), pos(2.0, 2.0))
        .unwrap();

    assert!(route.hops.contains(&pos(2.0, 0.0)));
    assert_eq!(route.length, 4.0);
    assert_eq!(brute_force(&map, pos(0.0, 0.0), pos(2.0, 2.0)), Some(4.0));
}

#[test]
fn test_dangling_exit_surfaces_from_find() {
    let mut map = demo::grid_3x3();
    map.add_exit(pos(2.0, 2.0), pos(3.0, 2.0));

    let err = PathFinder::new(&map)
        .route(pos(2.0, 2.0), pos(0.0, 0.0))
        .unwrap_err();
    assert_eq!(err, MapError::DanglingExit(pos(3.0, 2.0)));
}
