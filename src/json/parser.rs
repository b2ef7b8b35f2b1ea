//! Parser für JSON-Kachelkarten.

mod fields;

use crate::core::{Fields, MapError, MapObject, Tile, TileMap};
use crate::registry::TypeRegistry;
use anyhow::Context;
use fields::{take_class, take_exits, take_position};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Umgang mit Einträgen, deren `class`-Tag fehlt oder unbekannt ist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadPolicy {
    /// Eintrag überspringen und warnen
    #[default]
    Lenient,
    /// Laden mit `UnknownType` abbrechen
    Strict,
}

/// Zähler eines Ladevorgangs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Geladene Kacheln (inkl. ersetzter Duplikate)
    pub tiles_loaded: usize,
    /// Übersprungene Kacheln wegen unbekanntem oder fehlendem Tag
    pub tiles_skipped: usize,
    /// Kacheln, die eine frühere Kachel gleicher Position ersetzt haben
    pub tiles_replaced: usize,
    pub objects_loaded: usize,
    pub objects_skipped: usize,
}

impl LoadReport {
    /// Prüft ob Einträge übersprungen wurden.
    pub fn had_skips(&self) -> bool {
        self.tiles_skipped > 0 || self.objects_skipped > 0
    }
}

#[derive(Deserialize)]
struct MapDocument {
    tiles: Vec<Fields>,
    #[serde(default)]
    objects: Vec<Fields>,
}

/// Parsed eine Kachelkarte aus JSON-Bytes.
pub fn load_map(
    bytes: &[u8],
    registry: &TypeRegistry,
    policy: LoadPolicy,
) -> Result<TileMap, MapError> {
    load_map_with_report(bytes, registry, policy).map(|(map, _)| map)
}

/// Wie `load_map`, liefert zusätzlich die Zähler des Ladevorgangs.
///
/// Reihenfolge: erst alle Kacheln, dann alle Objekte, zuletzt die Prüfung
/// aller Ausgänge. Ein Ausgang ohne Kachel bricht das Laden mit
/// `DanglingExit` ab, unabhängig von der `policy`.
pub fn load_map_with_report(
    bytes: &[u8],
    registry: &TypeRegistry,
    policy: LoadPolicy,
) -> Result<(TileMap, LoadReport), MapError> {
    let document: MapDocument = serde_json::from_slice(bytes)?;
    let mut map = TileMap::new();
    let mut report = LoadReport::default();

    for (index, mut fields) in document.tiles.into_iter().enumerate() {
        let entry = format!("Kachel #{}", index);
        let Some(ctor) = resolve_entry(&mut fields, &entry, policy, |tag| {
            registry.resolve_tile(tag)
        })?
        else {
            report.tiles_skipped += 1;
            continue;
        };

        let position = take_position(&mut fields, "pos", &entry)?;
        let exits = take_exits(&mut fields, &entry)?;
        let kind = ctor(&fields)?;

        if map.add_tile(Tile::new(position, exits, kind)).is_some() {
            log::warn!("{}: Position {} doppelt, vorherige Kachel ersetzt", entry, position);
            report.tiles_replaced += 1;
        }
        report.tiles_loaded += 1;
    }

    for (index, mut fields) in document.objects.into_iter().enumerate() {
        let entry = format!("Objekt #{}", index);
        let Some(ctor) = resolve_entry(&mut fields, &entry, policy, |tag| {
            registry.resolve_object(tag)
        })?
        else {
            report.objects_skipped += 1;
            continue;
        };

        let owner_position = take_position(&mut fields, "pos", &entry)?;
        let owner = map
            .tile(owner_position)
            .ok_or(MapError::DanglingOwner(owner_position))?;
        let kind = ctor(&fields, owner)?;

        map.add_object(MapObject::new(owner_position, kind))?;
        report.objects_loaded += 1;
    }

    map.validate()?;
    map.ensure_spatial_index();

    log::info!(
        "Karte geladen: {} Kacheln, {} Objekte ({} bzw. {} übersprungen)",
        map.tile_count(),
        map.object_count(),
        report.tiles_skipped,
        report.objects_skipped
    );

    Ok((map, report))
}

/// Liest und löst den `class`-Tag eines Eintrags auf.
///
/// `Ok(None)` bedeutet: Eintrag überspringen (nur bei `LoadPolicy::Lenient`).
fn resolve_entry<C>(
    fields: &mut Fields,
    entry: &str,
    policy: LoadPolicy,
    resolve: impl FnOnce(&str) -> Result<C, MapError>,
) -> Result<Option<C>, MapError> {
    let Some(tag) = take_class(fields) else {
        return match policy {
            LoadPolicy::Lenient => {
                log::warn!("{}: kein 'class'-Tag, übersprungen", entry);
                Ok(None)
            }
            LoadPolicy::Strict => Err(MapError::malformed(format!(
                "{}: Feld 'class' fehlt",
                entry
            ))),
        };
    };

    match (resolve(&tag), policy) {
        (Ok(ctor), _) => Ok(Some(ctor)),
        (Err(MapError::UnknownType(tag)), LoadPolicy::Lenient) => {
            log::warn!("{}: unbekannter Typ-Tag '{}', übersprungen", entry, tag);
            Ok(None)
        }
        (Err(err), _) => Err(err),
    }
}

/// Lädt eine Kachelkarte aus einer Datei.
pub fn load_map_file(
    path: &Path,
    registry: &TypeRegistry,
    policy: LoadPolicy,
) -> anyhow::Result<TileMap> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Kartendatei nicht lesbar: {}", path.display()))?;
    let map = load_map(&bytes, registry, policy)
        .with_context(|| format!("Fehler beim Laden von {}", path.display()))?;
    Ok(map)
}
