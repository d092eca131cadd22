// grid.rs - Flat boolean grid and the B3/S23 step for Conway's Game of Life

use crate::error::ConfigError;

// Reference configuration of the terminal front end
pub const REFERENCE_WIDTH: usize = 80;
pub const REFERENCE_HEIGHT: usize = 15;

// The 8 neighbor offsets (dx, dy) around a cell
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Validated grid size: both sides positive and `width * height` addressable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if width.checked_mul(height).is_none() {
            return Err(ConfigError::TooLarge { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells, `width * height`.
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

/// Computes the next generation of a flat grid `width` cells wide.
///
/// Cells are addressed by flat index `y * width + x`. Anything outside
/// `0..width` x `0..height` counts as dead: the edges do not wrap.
/// The input is never modified and the whole grid is recomputed.
///
/// # Panics
///
/// Panics if `width` is zero or `cells.len()` is not a multiple of `width`,
/// which can only happen through a broken grid invariant.
pub fn next_turn(cells: &[bool], width: usize) -> Vec<bool> {
    assert!(
        width > 0 && cells.len() % width == 0,
        "grid of {} cells cannot be {} wide",
        cells.len(),
        width
    );
    let height = cells.len() / width;

    cells
        .iter()
        .enumerate()
        .map(|(index, &alive)| {
            let x = index % width;
            let y = index / width;

            match (alive, live_neighbors(cells, width, height, x, y)) {
                (true, 2) | (true, 3) => true,   // Survival
                (false, 3)            => true,   // Birth
                _                     => false,  // Death or stays dead
            }
        })
        .collect()
}

fn live_neighbors(cells: &[bool], width: usize, height: usize, x: usize, y: usize) -> usize {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| {
            let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                return false;
            };
            nx < width && ny < height && cells[ny * width + nx]
        })
        .count()
}

/// Fixed-size Life grid stored row-major as one flat `Vec<bool>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dimensions: Dimensions,
    cells: Vec<bool>,
}

impl Grid {
    /// An all-dead grid.
    pub fn new(dimensions: Dimensions) -> Self {
        Self { dimensions, cells: vec![false; dimensions.area()] }
    }

    /// A grid with exactly the listed `(x, y)` cells alive. Positions off the grid are skipped.
    pub fn with_alive(dimensions: Dimensions, alive: &[(usize, usize)]) -> Self {
        let mut grid = Self::new(dimensions);
        for &(x, y) in alive {
            grid.set(x, y, true);
        }
        grid
    }

    pub fn width(&self) -> usize {
        self.dimensions.width
    }

    pub fn height(&self) -> usize {
        self.dimensions.height
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width() && y < self.height()).then(|| y * self.width() + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.index(x, y).map(|index| self.cells[index])
    }

    /// Sets one cell. Returns `false` if `(x, y)` is off the grid.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> bool {
        match self.index(x, y) {
            Some(index) => {
                self.cells[index] = alive;
                true
            }
            None => false,
        }
    }

    pub fn toggle(&mut self, x: usize, y: usize) {
        if let Some(index) = self.index(x, y) {
            self.cells[index] = !self.cells[index];
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of every live cell, in flat index order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width();
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(index, _)| (index % width, index / width))
    }

    pub fn next_turn(&self) -> Grid {
        Grid { dimensions: self.dimensions, cells: next_turn(&self.cells, self.width()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: usize, height: usize) -> Dimensions {
        Dimensions::new(width, height).unwrap()
    }

    #[test]
    fn zero_sides_are_rejected() {
        assert_eq!(Dimensions::new(0, 5), Err(ConfigError::ZeroWidth));
        assert_eq!(Dimensions::new(5, 0), Err(ConfigError::ZeroHeight));
        assert!(matches!(Dimensions::new(usize::MAX, 2), Err(ConfigError::TooLarge { .. })));
    }

    #[test]
    fn blinker_oscillates() {
        let horizontal = Grid::with_alive(dims(5, 5), &[(1, 2), (2, 2), (3, 2)]);
        let vertical = horizontal.next_turn();
        assert_eq!(vertical.alive_cells().collect::<Vec<_>>(), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(vertical.next_turn(), horizontal);
    }

    #[test]
    fn edges_do_not_wrap() {
        // A vertical blinker on the left edge would pick up wrapped neighbors on a torus
        let grid = Grid::with_alive(dims(4, 3), &[(0, 0), (0, 1), (0, 2)]);
        let next = grid.next_turn();
        assert_eq!(next.alive_cells().collect::<Vec<_>>(), vec![(0, 1), (1, 1)]);
    }

    #[test]
    fn bottom_right_corner_counts_only_real_neighbors() {
        // Odd dimensions; the corner cell sits at the last flat index
        let grid = Grid::with_alive(dims(3, 3), &[(1, 1), (2, 1), (1, 2)]);
        let next = grid.next_turn();
        assert_eq!(next.get(2, 2), Some(true));
        assert_eq!(next.population(), 4);
    }

    #[test]
    fn single_row_and_column_grids_step() {
        let row = next_turn(&[true, true, true, false], 4);
        assert_eq!(row, vec![false, true, false, false]);

        let column = next_turn(&[true, true, true], 1);
        assert_eq!(column, vec![false, true, false]);
    }

    #[test]
    fn next_turn_leaves_input_untouched() {
        let cells = vec![true, true, false, true];
        let before = cells.clone();
        let next = next_turn(&cells, 2);
        assert_eq!(cells, before);
        assert_eq!(next, vec![true, true, true, true]);
    }

    #[test]
    fn set_and_get_reject_off_grid_positions() {
        let mut grid = Grid::new(dims(2, 2));
        assert!(!grid.set(2, 0, true));
        assert_eq!(grid.get(0, 2), None);
        grid.toggle(5, 5);
        assert_eq!(grid.population(), 0);
    }
}
