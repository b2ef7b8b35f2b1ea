/// Integration-Tests für JSON-Parsing
use tile_road_map::{load_map, LoadPolicy, MapError, Position, TypeRegistry};

#[test]
fn test_parse_fixture_skips_unknown_class() {
    let content = include_str!("fixtures/grid_3x3.json");
    let map = load_map(content.as_bytes(), &TypeRegistry::builtin(), LoadPolicy::Lenient)
        .expect("Fixture muss laden");

    assert_eq!(map.tile_count(), 9);
    assert_eq!(map.object_count(), 9);
    assert!(!map.contains_tile(Position::new(7.0, 7.0)));
}

#[test]
fn test_parse_fixture_strict_rejects_unknown_class() {
    let content = include_str!("fixtures/grid_3x3.json");
    let err = load_map(content.as_bytes(), &TypeRegistry::builtin(), LoadPolicy::Strict)
        .expect_err("Strict muss abbrechen");

    assert_eq!(err, MapError::UnknownType("Roundabout".to_string()));
}
