//! Zentrale Konfiguration für Laden, Speichern und Routing.
//!
//! `MapOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::json::{LoadPolicy, SaveStyle};
use crate::routing::RoutingOptions;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Routing ─────────────────────────────────────────────────────────

/// Snap-Radius (Welteinheiten): eine Koordinate innerhalb dieses Radius wird
/// auf die nächste Kachel gezogen.
pub const SNAP_RADIUS: f64 = 0.5;
/// Standard-Expansionslimit der Wegsuche (`None` = unbegrenzt).
pub const MAX_EXPANSIONS: Option<usize> = None;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `tile_road_map.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    /// Umgang mit unbekannten `class`-Tags beim Laden
    #[serde(default)]
    pub load_policy: LoadPolicy,
    /// JSON eingerückt speichern
    #[serde(default = "default_pretty_output")]
    pub pretty_output: bool,
    /// Maximale Anzahl expandierter Kacheln pro Wegsuche
    #[serde(default)]
    pub max_expansions: Option<usize>,
    /// Snap-Radius für Koordinaten-Eingaben
    #[serde(default = "default_snap_radius")]
    pub snap_radius: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            load_policy: LoadPolicy::default(),
            pretty_output: true,
            max_expansions: MAX_EXPANSIONS,
            snap_radius: SNAP_RADIUS,
        }
    }
}

fn default_pretty_output() -> bool {
    true
}

/// Serde-Default für `snap_radius` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_snap_radius() -> f64 {
    SNAP_RADIUS
}

impl MapOptions {
    /// Dateiname der Optionen-Datei
    pub const FILE_NAME: &'static str = "tile_road_map.toml";

    /// Liest Optionen aus einer TOML-Datei.
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Optionen-Datei nicht lesbar: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Optionen-Datei fehlerhaft: {}", path.display()))
    }

    /// Wie `read`, fällt aber auf `MapOptions::default()` zurück.
    ///
    /// Eine fehlende Datei ist normal (Info), eine kaputte Datei wird gewarnt.
    pub fn load_from_file(path: &Path) -> Self {
        if !path.exists() {
            log::info!("{} nicht vorhanden, Standard-Optionen aktiv", path.display());
            return Self::default();
        }
        Self::read(path).unwrap_or_else(|err| {
            log::warn!("{:#}, Standard-Optionen aktiv", err);
            Self::default()
        })
    }

    /// Schreibt die Optionen als TOML.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self).context("Optionen nicht serialisierbar")?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen-Datei nicht schreibbar: {}", path.display()))
    }

    /// `tile_road_map.toml` im Verzeichnis der Binary, sonst im Arbeitsverzeichnis.
    pub fn config_path() -> PathBuf {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_default();
        dir.join(Self::FILE_NAME)
    }

    /// Routing-Optionen für den `PathFinder`
    pub fn routing(&self) -> RoutingOptions {
        RoutingOptions {
            max_expansions: self.max_expansions,
        }
    }

    pub fn save_style(&self) -> SaveStyle {
        if self.pretty_output {
            SaveStyle::Pretty
        } else {
            SaveStyle::Compact
        }
    }
}
