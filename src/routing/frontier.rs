//! Stabile Min-Priority-Queue für die Dijkstra-Suche.
//!
//! `BinaryHeap` ist ein Max-Heap, die Ordnung von `FrontierEntry` ist daher
//! umgekehrt. Bei gleicher Distanz gewinnt der früher eingefügte Eintrag.

use crate::core::Position;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Eintrag der Frontier
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrontierEntry {
    /// Bisher beste Distanz vom Start
    pub distance: f64,
    /// Einfüge-Nummer für den Tie-Break
    pub sequence: u64,
    pub position: Position,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Umgekehrt: kleinere Distanz, dann kleinere Sequenz = höhere Priorität
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Frontier mit Einfüge-Zähler
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, position: Position, distance: f64) {
        self.heap.push(FrontierEntry {
            distance,
            sequence: self.next_sequence,
            position,
        });
        self.next_sequence += 1;
    }

    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    /// Anzahl bisher eingefügter Einträge
    pub fn pushed(&self) -> u64 {
        self.next_sequence
    }
}
