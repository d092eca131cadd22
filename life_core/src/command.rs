// command.rs - Routes input events onto simulation state transitions

use tracing::{debug, info, trace};

use crate::grid::Dimensions;
use crate::state::SimulationState;

/// Closed vocabulary of input events. Anything else arrives as `Unrecognized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Left,
    Right,
    Up,
    Down,
    Toggle,
    PauseResume,
    IncreaseSpeed,
    DecreaseSpeed,
    Reset,
    NextPattern,
    StampPattern,
    Quit,
    Unrecognized,
}

/// What a dispatched event did, so the caller knows when the timer must be re-armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Ignored,
    Applied,
    StatusChanged,
    SpeedChanged,
    Replaced,
    Quit,
}

/// Stateless router. Holds only the dimensions a reset rebuilds the state with.
#[derive(Debug, Clone, Copy)]
pub struct CommandDispatcher {
    dimensions: Dimensions,
}

impl CommandDispatcher {
    pub fn new(dimensions: Dimensions) -> Self {
        Self { dimensions }
    }

    pub fn initial_state(&self) -> SimulationState {
        SimulationState::new(self.dimensions)
    }

    pub fn dispatch(&self, state: &mut SimulationState, event: InputEvent) -> Dispatch {
        match event {
            InputEvent::Left          => state.cursor_left(),
            InputEvent::Right         => state.cursor_right(),
            InputEvent::Up            => state.cursor_up(),
            InputEvent::Down          => state.cursor_down(),
            InputEvent::Toggle        => state.toggle(),
            InputEvent::PauseResume   => {
                state.toggle_pause();
                debug!(status = state.status().label(), "run status changed");
                return Dispatch::StatusChanged;
            }
            InputEvent::IncreaseSpeed => return speed_change(state, SimulationState::increase_speed),
            InputEvent::DecreaseSpeed => return speed_change(state, SimulationState::decrease_speed),
            InputEvent::Reset         => {
                state.reset(self.dimensions);
                info!(width = self.dimensions.width(), height = self.dimensions.height(), "simulation reset");
                return Dispatch::Replaced;
            }
            InputEvent::NextPattern   => state.select_next_pattern(),
            InputEvent::StampPattern  => {
                let placed = state.stamp_pattern();
                debug!(pattern = state.selected_pattern().name, placed, "pattern stamped");
            }
            InputEvent::Quit          => return Dispatch::Quit,
            InputEvent::Unrecognized  => {
                trace!("unrecognized input dropped");
                return Dispatch::Ignored;
            }
        }
        Dispatch::Applied
    }
}

fn speed_change(state: &mut SimulationState, change: fn(&mut SimulationState)) -> Dispatch {
    let before = state.speed();
    change(state);
    if state.speed() == before {
        return Dispatch::Applied;
    }
    debug!(from = before, to = state.speed(), "speed changed");
    Dispatch::SpeedChanged
}
