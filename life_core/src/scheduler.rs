// scheduler.rs - Periodic stepping timer, re-armed whenever speed or state changes

use std::future;

use tokio::time::{self, Duration, Instant, Interval, MissedTickBehavior};
use tracing::debug;

use crate::command::Dispatch;
use crate::state::SimulationState;

#[derive(Debug)]
enum Phase {
    Idle,
    Armed { period: Duration, interval: Interval },
}

/// Drives automatic stepping.
///
/// While `Armed`, [`Scheduler::tick`] resolves once per period. Re-arming or
/// dropping the scheduler drops the previous `Interval`, so at most one timer
/// is ever live. Arming needs a tokio runtime with the time driver enabled.
#[derive(Debug)]
pub struct Scheduler {
    phase: Phase,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// (Re)starts the timer. The first tick lands one full period from now.
    pub fn arm(&mut self, period: Duration) {
        let mut interval = time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        debug!(?period, "scheduler armed");
        self.phase = Phase::Armed { period, interval };
    }

    pub fn disarm(&mut self) {
        if self.is_armed() {
            debug!("scheduler disarmed");
        }
        self.phase = Phase::Idle;
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.phase, Phase::Armed { .. })
    }

    pub fn period(&self) -> Option<Duration> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Armed { period, .. } => Some(*period),
        }
    }

    /// Waits for the next firing. Never resolves while idle.
    pub async fn tick(&mut self) {
        match &mut self.phase {
            Phase::Idle => future::pending::<()>().await,
            Phase::Armed { interval, .. } => {
                interval.tick().await;
            }
        }
    }

    /// Handles one firing: steps the state if it is running. Returns whether it stepped.
    pub fn fire(&self, state: &mut SimulationState) -> bool {
        if !state.status().is_running() {
            return false;
        }
        state.next_turn();
        true
    }

    /// Keeps the timer in line with the outcome of a dispatched event.
    ///
    /// A resume restarts the period, so the first step lands a full interval after it.
    pub fn follow(&mut self, outcome: Dispatch, state: &SimulationState) {
        match outcome {
            Dispatch::StatusChanged | Dispatch::SpeedChanged | Dispatch::Replaced => {
                self.arm(state.step_interval())
            }
            Dispatch::Quit => self.disarm(),
            Dispatch::Ignored | Dispatch::Applied => {}
        }
    }
}
