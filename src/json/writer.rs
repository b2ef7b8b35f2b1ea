//! Writer für JSON-Kachelkarten.

use crate::core::{Fields, MapError, MapObject, Position, Tile, TileMap};
use anyhow::Context;
use serde::Serialize;
use serde_json::{json, Value};
use std::path::Path;

/// Ausgabeformat
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveStyle {
    /// Eingerückt, eine Zeile pro Feld
    #[default]
    Pretty,
    /// Alles in einer Zeile
    Compact,
}

#[derive(Serialize)]
struct MapDocument {
    tiles: Vec<Fields>,
    objects: Vec<Fields>,
}

/// Schreibt eine TileMap als JSON.
///
/// Reihenfolge: erst alle Kacheln, dann alle Objekte, jeweils in der
/// Iterations-Reihenfolge der Karte. Nicht endliche Koordinaten oder
/// Subtyp-Werte ergeben `MalformedFile`, weil JSON sie nur als `null`
/// schreiben könnte.
pub fn save_map(map: &TileMap, style: SaveStyle) -> Result<Vec<u8>, MapError> {
    let document = MapDocument {
        tiles: map.tiles_iter().map(tile_entry).collect::<Result<_, _>>()?,
        objects: map
            .objects_iter()
            .map(object_entry)
            .collect::<Result<_, _>>()?,
    };

    let bytes = match style {
        SaveStyle::Pretty => serde_json::to_vec_pretty(&document)?,
        SaveStyle::Compact => serde_json::to_vec(&document)?,
    };

    log::info!(
        "Karte gespeichert: {} Kacheln, {} Objekte, {} Bytes",
        document.tiles.len(),
        document.objects.len(),
        bytes.len()
    );
    Ok(bytes)
}

fn tile_entry(tile: &Tile) -> Result<Fields, MapError> {
    ensure_finite(tile.position, "Kachel")?;
    for &exit in &tile.exits {
        ensure_finite(exit, "Ausgang")?;
    }

    let mut fields = Fields::new();
    fields.insert("class".to_string(), Value::String(tile.class().to_string()));
    fields.insert("pos".to_string(), json!(tile.position));
    fields.insert("exits".to_string(), json!(tile.exits));

    let mut extra = Fields::new();
    tile.kind.save_fields(&mut extra)?;
    append_subtype_fields(&mut fields, extra);
    Ok(fields)
}

fn object_entry(object: &MapObject) -> Result<Fields, MapError> {
    ensure_finite(object.owner, "Objekt")?;

    let mut fields = Fields::new();
    fields.insert("class".to_string(), Value::String(object.class().to_string()));
    fields.insert("pos".to_string(), json!(object.owner));

    let mut extra = Fields::new();
    object.kind.save_fields(&mut extra)?;
    append_subtype_fields(&mut fields, extra);
    Ok(fields)
}

/// Hängt Subtyp-Felder hinter die Schema-Felder. Schema-Felder haben Vorrang.
fn append_subtype_fields(fields: &mut Fields, extra: Fields) {
    for (key, value) in extra {
        if !fields.contains_key(&key) {
            fields.insert(key, value);
        }
    }
}

fn ensure_finite(position: Position, what: &str) -> Result<(), MapError> {
    if position.is_finite() {
        Ok(())
    } else {
        Err(MapError::malformed(format!(
            "{} auf {} ist nicht endlich",
            what, position
        )))
    }
}

/// Speichert eine TileMap als Datei.
pub fn save_map_file(map: &TileMap, path: &Path, style: SaveStyle) -> anyhow::Result<()> {
    let bytes = save_map(map, style).context("Karte konnte nicht serialisiert werden")?;
    std::fs::write(path, bytes)
        .with_context(|| format!("Kartendatei nicht schreibbar: {}", path.display()))?;
    Ok(())
}
