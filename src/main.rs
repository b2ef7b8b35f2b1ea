//! Tile Road Map (Kommandozeile).
//!
//! Erzeugt Demo-Karten, prüft Kartendateien und sucht kürzeste Wege.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tile_road_map::{
    demo, load_map_file, save_map_file, MapOptions, PathFinder, Position, TileMap, TypeRegistry,
};

#[derive(Parser)]
#[command(name = "tile-road-map", version, about = "Kachel-Straßenkarten und kürzeste Wege")]
struct Cli {
    /// Optionen-Datei (Standard: tile_road_map.toml neben der Binary)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Schreibt ein Demo-Raster mit Straßen und Fahrzeugen
    Generate {
        #[arg(long, default_value_t = 3)]
        columns: u32,
        #[arg(long, default_value_t = 3)]
        rows: u32,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Sucht den kürzesten Weg zwischen zwei Koordinaten
    Route {
        #[arg(short, long)]
        map: PathBuf,
        /// Start als "x,y"
        #[arg(long, value_parser = parse_position)]
        from: Position,
        /// Ziel als "x,y"
        #[arg(long, value_parser = parse_position)]
        to: Position,
    },
    /// Lädt eine Karte und prüft sie
    Check {
        #[arg(short, long)]
        map: PathBuf,
    },
}

fn main() -> Result<()> {
    AppRunner::run(Cli::parse())
}

struct AppRunner;

impl AppRunner {
    fn run(cli: Cli) -> Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Tile Road Map v{} startet...", env!("CARGO_PKG_VERSION"));

        let config_path = cli.config.unwrap_or_else(MapOptions::config_path);
        let options = MapOptions::load_from_file(&config_path);
        let registry = TypeRegistry::builtin();

        match cli.command {
            Commands::Generate {
                columns,
                rows,
                output,
            } => {
                let map = demo::grid(columns, rows);
                save_map_file(&map, &output, options.save_style())?;
                println!(
                    "{} Kacheln und {} Objekte nach {} geschrieben",
                    map.tile_count(),
                    map.object_count(),
                    output.display()
                );
            }

            Commands::Route { map, from, to } => {
                let tile_map = load_map_file(&map, &registry, options.load_policy)?;
                let from = snap_to_tile(&tile_map, from, options.snap_radius)?;
                let to = snap_to_tile(&tile_map, to, options.snap_radius)?;

                let route = PathFinder::with_options(&tile_map, options.routing())
                    .route(from, to)
                    .with_context(|| format!("Wegsuche {} → {} fehlgeschlagen", from, to))?;

                println!("Start: {}", route.source);
                for (index, hop) in route.hops.iter().enumerate() {
                    println!("{:>4}: {}", index + 1, hop);
                }
                println!("Länge: {:.3} ({} Schritte)", route.length, route.hop_count());
            }

            Commands::Check { map } => {
                let tile_map = load_map_file(&map, &registry, options.load_policy)?;
                println!(
                    "OK: {} Kacheln, {} Objekte",
                    tile_map.tile_count(),
                    tile_map.object_count()
                );
                println!("Bekannte Typen: {}", registry.tags().join(", "));
            }
        }

        Ok(())
    }
}

/// Zieht eine Eingabe-Koordinate auf die nächste Kachel innerhalb `radius`.
fn snap_to_tile(map: &TileMap, query: Position, radius: f64) -> Result<Position> {
    if map.contains_tile(query) {
        return Ok(query);
    }
    match map.nearest_tile(query) {
        Some(hit) if hit.distance <= radius => {
            log::info!("{} auf Kachel {} gezogen", query, hit.position);
            Ok(hit.position)
        }
        _ => bail!("Keine Kachel innerhalb {} um {}", radius, query),
    }
}

fn parse_position(text: &str) -> Result<Position, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("'{}' ist nicht im Format x,y", text))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("x: {}", e))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("y: {}", e))?;
    let position = Position::new(x, y);
    if !position.is_finite() {
        return Err(format!("'{}' ist nicht endlich", text));
    }
    Ok(position)
}
