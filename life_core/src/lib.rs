// lib.rs - Conway's Game of Life core: grid, state, commands and stepping timer
//
// Nothing in here touches the terminal. A front end feeds `InputEvent`s to a
// `CommandDispatcher`, waits on a `Scheduler`, and paints `RenderModel`s.

pub mod command;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod scheduler;
pub mod state;

pub use command::{CommandDispatcher, Dispatch, InputEvent};
pub use error::ConfigError;
pub use grid::{next_turn, Dimensions, Grid, REFERENCE_HEIGHT, REFERENCE_WIDTH};
pub use scheduler::Scheduler;
pub use state::{Cursor, RenderModel, RunStatus, SimulationState};
