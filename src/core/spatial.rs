//! Spatial-Index (KD-Tree) für schnelle Kachel-Abfragen.

use kiddo::{KdTree, SquaredEuclidean};

use super::Position;

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// Position der gefundenen Kachel
    pub position: Position,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f64,
}

/// Read-only Spatial-Index über allen Kacheln einer TileMap.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: KdTree<f64, 2>,
    positions: Vec<Position>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            positions: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus den übergebenen Positionen.
    pub fn from_positions(positions: impl IntoIterator<Item = Position>) -> Self {
        let positions: Vec<Position> = positions.into_iter().collect();
        let entries: Vec<[f64; 2]> = positions.iter().map(|p| [p.x, p.y]).collect();
        let tree: KdTree<f64, 2> = (&entries).into();

        Self { tree, positions }
    }

    /// Gibt die Anzahl indexierter Kacheln zurück.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Gibt `true` zurück, wenn keine Kacheln im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Findet die nächste Kachel zur gegebenen Weltposition.
    pub fn nearest(&self, query: Position) -> Option<SpatialMatch> {
        if self.is_empty() {
            return None;
        }

        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x, query.y]);
        let position = *self.positions.get(result.item as usize)?;

        Some(SpatialMatch {
            position,
            distance: result.distance.sqrt(),
        })
    }

    /// Findet alle Kacheln innerhalb eines Radius um die Query-Position.
    pub fn within_radius(&self, query: Position, radius: f64) -> Vec<SpatialMatch> {
        if self.is_empty() || radius.is_sign_negative() {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&[query.x, query.y], radius * radius)
            .into_iter()
            .filter_map(|entry| {
                let position = *self.positions.get(entry.item as usize)?;
                Some(SpatialMatch {
                    position,
                    distance: entry.distance.sqrt(),
                })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }
}
