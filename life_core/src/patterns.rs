// patterns.rs - Named starting patterns that can be stamped onto the grid

use crate::grid::Grid;

/// A named set of live cells, as `(x, y)` offsets from the pattern origin.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Lightweight spaceship",
        cells: &[(1, 0), (4, 0), (0, 1), (0, 2), (4, 2), (0, 3), (1, 3), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Gosper glider gun",
        cells: &[
            (24, 0),
            (22, 1), (24, 1),
            (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
            (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
            (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
            (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
            (10, 6), (16, 6), (24, 6),
            (11, 7), (15, 7),
            (12, 8), (13, 8),
        ],
    },
];

/// Pattern at `index`, wrapping around the library.
pub fn pattern_at(index: usize) -> &'static Pattern {
    &PATTERNS[index % PATTERNS.len()]
}

/// Turns the pattern's cells on with its origin at `(x, y)`, leaving other cells as they are.
/// Cells that fall off the grid are clipped. Returns how many cells landed.
pub fn stamp(grid: &mut Grid, pattern: &Pattern, x: usize, y: usize) -> usize {
    pattern
        .cells
        .iter()
        .filter_map(|&(dx, dy)| Some((x.checked_add(dx)?, y.checked_add(dy)?)))
        .filter(|&(cx, cy)| grid.set(cx, cy, true))
        .count()
}
