//! Kürzeste Wege über die TileMap (Dijkstra nach euklidischer Distanz).
//!
//! Die Suche liest die Karte nur. Distanz-, Vorgänger- und Frontier-Zustand
//! leben ausschließlich innerhalb eines `find`-Aufrufs, mehrere Suchen auf
//! derselben Karte dürfen daher parallel laufen.

mod frontier;

use crate::core::{MapError, Position, Tile, TileMap};
use frontier::Frontier;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Optionen der Wegsuche
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingOptions {
    /// Maximale Anzahl expandierter Kacheln (`None` = unbegrenzt)
    pub max_expansions: Option<usize>,
}

/// Ergebnis einer Wegsuche per Position
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Startposition (nicht in `hops` enthalten)
    pub source: Position,
    /// Stationen vom ersten Schritt bis einschließlich Ziel
    pub hops: Vec<Position>,
    /// Euklidische Gesamtlänge
    pub length: f64,
}

impl Route {
    /// Anzahl der Schritte
    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }
}

/// Dijkstra-Suche auf einer geliehenen TileMap
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'a> {
    map: &'a TileMap,
    options: RoutingOptions,
}

impl<'a> PathFinder<'a> {
    /// Wegsuche ohne Expansionslimit
    pub fn new(map: &'a TileMap) -> Self {
        Self::with_options(map, RoutingOptions::default())
    }

    pub fn with_options(map: &'a TileMap, options: RoutingOptions) -> Self {
        Self { map, options }
    }

    /// Findet den kürzesten Weg von `source` nach `goal`.
    ///
    /// Das Ergebnis enthält `source` nicht, `goal` dagegen schon, und ist vom
    /// ersten Schritt zum Ziel geordnet. Für `source == goal` ist es leer.
    ///
    /// # Fehler
    /// - `UnknownTile`, wenn Start oder Ziel nicht in der Karte liegen
    /// - `NoPath`, wenn das Ziel nicht erreichbar ist
    /// - `DanglingExit`, wenn ein Ausgang unterwegs ins Leere zeigt
    /// - `ExpansionLimit`, wenn `max_expansions` überschritten wird
    pub fn find(&self, source: &Tile, goal: &Tile) -> Result<Vec<&'a Tile>, MapError> {
        self.find_between(source.position, goal.position)
    }

    /// Wie `find`, aber mit Positionen als Endpunkte.
    pub fn find_between(&self, from: Position, to: Position) -> Result<Vec<&'a Tile>, MapError> {
        if !self.map.contains_tile(from) {
            return Err(MapError::UnknownTile(from));
        }
        if !self.map.contains_tile(to) {
            return Err(MapError::UnknownTile(to));
        }
        if from == to {
            return Ok(Vec::new());
        }

        let predecessor = self.search(from, to)?;

        // Vom Ziel rückwärts zum Start, danach umdrehen
        let mut hops = Vec::new();
        let mut current = to;
        while current != from {
            hops.push(current);
            current = *predecessor
                .get(&current)
                .ok_or(MapError::NoPath { from, to })?;
        }
        hops.reverse();

        hops.into_iter()
            .map(|position| {
                self.map
                    .tile(position)
                    .ok_or(MapError::UnknownTile(position))
            })
            .collect()
    }

    /// Sucht den Weg und fasst ihn mit Gesamtlänge zusammen.
    pub fn route(&self, from: Position, to: Position) -> Result<Route, MapError> {
        let hops: Vec<Position> = self
            .find_between(from, to)?
            .into_iter()
            .map(|tile| tile.position)
            .collect();
        let length = path_length(from, &hops);

        Ok(Route {
            source: from,
            hops,
            length,
        })
    }

    /// Dijkstra bis das Ziel aus der Frontier kommt. Liefert die Vorgänger-Map.
    fn search(&self, from: Position, to: Position) -> Result<HashMap<Position, Position>, MapError> {
        let mut best: HashMap<Position, f64> = HashMap::new();
        let mut predecessor: HashMap<Position, Position> = HashMap::new();
        let mut frontier = Frontier::new();
        let mut settled = 0usize;

        best.insert(from, 0.0);
        frontier.push(from, 0.0);

        while let Some(entry) = frontier.pop() {
            let known = best.get(&entry.position).copied().unwrap_or(f64::INFINITY);
            if entry.distance > known {
                // Veralteter Eintrag, die Kachel kam schon mit kürzerer Distanz
                continue;
            }

            if entry.position == to {
                log::debug!(
                    "Dijkstra {} → {}: Distanz {:.3}, {} expandiert, {} Einträge",
                    from,
                    to,
                    entry.distance,
                    settled,
                    frontier.pushed()
                );
                return Ok(predecessor);
            }

            settled += 1;
            if let Some(limit) = self.options.max_expansions {
                if settled > limit {
                    return Err(MapError::ExpansionLimit { limit });
                }
            }

            let tile = self
                .map
                .tile(entry.position)
                .ok_or(MapError::DanglingExit(entry.position))?;

            for next in self.map.neighbors(tile)? {
                let candidate = entry.distance + tile.position.distance(next.position);
                let current = best.get(&next.position).copied().unwrap_or(f64::INFINITY);
                if candidate < current {
                    best.insert(next.position, candidate);
                    predecessor.insert(next.position, tile.position);
                    frontier.push(next.position, candidate);
                }
            }
        }

        log::debug!(
            "Dijkstra {} → {}: Ziel nach {} Expansionen nicht erreicht",
            from,
            to,
            settled
        );
        Err(MapError::NoPath { from, to })
    }
}

/// Euklidische Länge eines Weges ab `source` über `hops`.
pub fn path_length(source: Position, hops: &[Position]) -> f64 {
    let mut length = 0.0;
    let mut previous = source;
    for &hop in hops {
        length += previous.distance(hop);
        previous = hop;
    }
    length
}
