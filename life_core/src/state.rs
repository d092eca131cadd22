// state.rs - Simulation state and the command set that mutates it

use std::time::Duration;

use crate::grid::{Dimensions, Grid};
use crate::patterns;

pub const INITIAL_SPEED_MS: u64 = 500;  // Step interval after a reset
pub const MIN_SPEED_MS: u64 = 10;       // Fastest allowed step interval
pub const SPEED_STEP_MS: u64 = 10;      // Change per faster/slower command

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunStatus {
    #[default]
    Paused,
    Running,
}

impl RunStatus {
    pub fn toggled(self) -> Self {
        match self {
            RunStatus::Paused => RunStatus::Running,
            RunStatus::Running => RunStatus::Paused,
        }
    }

    pub fn is_running(self) -> bool {
        self == RunStatus::Running
    }

    pub fn label(self) -> &'static str {
        match self {
            RunStatus::Paused => "paused",
            RunStatus::Running => "running",
        }
    }
}

/// Cursor position, always inside the grid. Movement clamps, never wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
}

/// Everything the simulation knows. One live instance per program; a reset replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationState {
    status: RunStatus,
    cursor: Cursor,
    grid: Grid,
    speed: u64,
    generation: u64,
    pattern: usize,
}

/// Read-only snapshot handed to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderModel<'a> {
    pub status: RunStatus,
    pub width: usize,
    pub height: usize,
    pub cursor: Cursor,
    pub grid: &'a [bool],
    pub speed: u64,
    pub generation: u64,
    pub population: usize,
    pub pattern: &'static str,
}

impl RenderModel<'_> {
    pub fn is_cursor(&self, x: usize, y: usize) -> bool {
        self.cursor.x == x && self.cursor.y == y
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        x < self.width && self.grid.get(y * self.width + x).copied().unwrap_or(false)
    }
}

impl SimulationState {
    /// Fresh state: paused, cursor at the origin, default speed, all cells dead.
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            status: RunStatus::Paused,
            cursor: Cursor::default(),
            grid: Grid::new(dimensions),
            speed: INITIAL_SPEED_MS,
            generation: 0,
            pattern: 0,
        }
    }

    /// Replaces the whole state, dimensions included.
    pub fn reset(&mut self, dimensions: Dimensions) {
        *self = Self::new(dimensions);
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Milliseconds between steps while running.
    pub fn speed(&self) -> u64 {
        self.speed
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.speed)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn selected_pattern(&self) -> &'static patterns::Pattern {
        patterns::pattern_at(self.pattern)
    }

    pub fn cursor_left(&mut self) {
        self.cursor.x = self.cursor.x.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor.x = (self.cursor.x + 1).min(self.width() - 1);
    }

    pub fn cursor_up(&mut self) {
        self.cursor.y = self.cursor.y.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        self.cursor.y = (self.cursor.y + 1).min(self.height() - 1);
    }

    /// Flips the cell under the cursor.
    pub fn toggle(&mut self) {
        self.grid.toggle(self.cursor.x, self.cursor.y);
    }

    pub fn toggle_pause(&mut self) {
        self.status = self.status.toggled();
    }

    /// Advances one generation whatever the run status; the scheduler gates on status.
    pub fn next_turn(&mut self) {
        self.grid = self.grid.next_turn();
        self.generation += 1;
    }

    /// Shortens the step interval, down to `MIN_SPEED_MS`.
    pub fn increase_speed(&mut self) {
        self.speed = self.speed.saturating_sub(SPEED_STEP_MS).max(MIN_SPEED_MS);
    }

    /// Lengthens the step interval. There is no upper bound.
    pub fn decrease_speed(&mut self) {
        self.speed = self.speed.saturating_add(SPEED_STEP_MS);
    }

    pub fn select_next_pattern(&mut self) {
        self.pattern = (self.pattern + 1) % patterns::PATTERNS.len();
    }

    /// Stamps the selected pattern with its origin under the cursor. Returns the cells placed.
    pub fn stamp_pattern(&mut self) -> usize {
        let pattern = self.selected_pattern();
        patterns::stamp(&mut self.grid, pattern, self.cursor.x, self.cursor.y)
    }

    pub fn render_model(&self) -> RenderModel<'_> {
        RenderModel {
            status: self.status,
            width: self.width(),
            height: self.height(),
            cursor: self.cursor,
            grid: self.grid.cells(),
            speed: self.speed,
            generation: self.generation,
            population: self.grid.population(),
            pattern: self.selected_pattern().name,
        }
    }
}
