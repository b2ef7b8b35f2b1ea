#![no_main]

use libfuzzer_sys::fuzz_target;
use tile_road_map::{load_map, save_map, LoadPolicy, SaveStyle, TypeRegistry};

fuzz_target!(|data: &[u8]| {
    let registry = TypeRegistry::builtin();
    // Fehler sind erlaubt, Panics nicht
    if let Ok(map) = load_map(data, &registry, LoadPolicy::Lenient) {
        let bytes = save_map(&map, SaveStyle::Compact).expect("geladene Karte muss speicherbar sein");
        let reloaded = load_map(&bytes, &registry, LoadPolicy::Strict)
            .expect("gespeicherte Karte muss wieder ladbar sein");
        assert_eq!(map.tile_count(), reloaded.tile_count());
    }
});
