// app.rs - The dispatch loop: key events and timer firings, strictly one at a time

use std::ops::ControlFlow;

use anyhow::Context;
use crossterm::event::KeyEvent;
use life_core::{CommandDispatcher, Dimensions, Dispatch, RenderModel, Scheduler, SimulationState};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::input::{self, TermInput};
use crate::terminal::TerminalSession;

const INPUT_QUEUE_DEPTH: usize = 64;

/// Owns the one live simulation together with its dispatcher and timer.
#[derive(Debug)]
pub struct App {
    dispatcher: CommandDispatcher,
    state: SimulationState,
    scheduler: Scheduler,
    last_key: String,
}

enum Wake {
    Input(Option<TermInput>),
    Tick,
}

impl App {
    /// Builds the initial state and arms the timer. Must run inside a tokio runtime.
    pub fn new(dimensions: Dimensions) -> Self {
        let dispatcher = CommandDispatcher::new(dimensions);
        let state = dispatcher.initial_state();
        let mut scheduler = Scheduler::new();
        scheduler.arm(state.step_interval());
        Self { dispatcher, state, scheduler, last_key: String::new() }
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn last_key(&self) -> &str {
        &self.last_key
    }

    pub fn render_model(&self) -> RenderModel<'_> {
        self.state.render_model()
    }

    pub fn handle_key(&mut self, key: &KeyEvent) -> ControlFlow<()> {
        self.last_key = input::describe(key);
        let outcome = self.dispatcher.dispatch(&mut self.state, input::decode(key));
        self.scheduler.follow(outcome, &self.state);
        match outcome {
            Dispatch::Quit => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }

    /// One timer firing. Returns whether the grid advanced.
    pub fn handle_tick(&mut self) -> bool {
        let stepped = self.scheduler.fire(&mut self.state);
        if stepped {
            debug!(generation = self.state.generation(), "stepped");
        }
        stepped
    }
}

pub async fn run(dimensions: Dimensions) -> anyhow::Result<()> {
    let mut session = TerminalSession::enter()?;
    let (tx, mut rx) = mpsc::channel(INPUT_QUEUE_DEPTH);
    let reader = input::spawn_reader(tx);

    let mut app = App::new(dimensions);
    info!(width = dimensions.width(), height = dimensions.height(), "simulation started");

    let mut dirty = true;
    loop {
        if dirty {
            session.draw(&app.render_model(), app.last_key())?;
        }

        let wake = tokio::select! {
            input = rx.recv() => Wake::Input(input),
            () = app.scheduler.tick() => Wake::Tick,
        };

        dirty = match wake {
            Wake::Input(Some(TermInput::Key(key))) => {
                if app.handle_key(&key).is_break() {
                    break;
                }
                true
            }
            // The next draw picks up the new terminal size
            Wake::Input(Some(TermInput::Resize)) => true,
            Wake::Input(None) => {
                warn!("input reader stopped");
                break;
            }
            Wake::Tick => app.handle_tick(),
        };
    }

    app.scheduler.disarm();
    drop(rx);
    reader
        .await
        .context("input reader panicked")?
        .context("cannot read terminal input")?;

    info!(generation = app.state().generation(), "simulation stopped");
    Ok(())
}
