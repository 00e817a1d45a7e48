use super::{Cell, CellSet};
use rand::Rng;

/// A named set of live cells
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: CellSet,
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: &[(i64, i64)]) -> Self {
        Self {
            name,
            description,
            cells: cells.iter().copied().map(Cell::from).collect(),
        }
    }

    /// Copy of the cells moved by `(dx, dy)`.
    /// Cells that would leave the coordinate range are dropped.
    pub fn translated(&self, dx: i64, dy: i64) -> CellSet {
        self.cells
            .iter()
            .filter_map(|cell| cell.offset(dx, dy))
            .collect()
    }
}

/// Random soup inside the `width` x `height` box anchored at the origin.
/// Each cell is alive with probability `density`.
pub fn random_soup<R: Rng>(rng: &mut R, width: i64, height: i64, density: f64) -> CellSet {
    let mut cells = CellSet::new();
    for y in 0..height {
        for x in 0..width {
            if rng.random_bool(density) {
                cells.insert(Cell::new(x, y));
            }
        }
    }
    cells
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            &[
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ],
        )
    }

    /// Blinker - period 2 oscillator, vertical phase
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            &[(0, -1), (0, 0), (0, 1)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            &[
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            &[
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Glider - moves one cell diagonally (+x, +y) every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceship (period 4)",
            &[
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            &[
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ],
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            &[
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            &[
                (1, 0),
                (3, 1),
                (0, 2), (1, 2), (4, 2), (5, 2), (6, 2),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            blinker(),
            toad(),
            beacon(),
            glider(),
            lwss(),
            r_pentomino(),
            acorn(),
        ]
    }
}
