// input.rs - Key decoding and the blocking reader feeding the dispatch loop

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use life_core::InputEvent;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

// How long the reader waits for a key before checking whether the loop has gone away
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Maps a key press onto the input vocabulary.
pub fn decode(key: &KeyEvent) -> InputEvent {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return InputEvent::Quit;
    }

    match key.code {
        KeyCode::Left  => InputEvent::Left,
        KeyCode::Right => InputEvent::Right,
        KeyCode::Up    => InputEvent::Up,
        KeyCode::Down  => InputEvent::Down,
        KeyCode::Enter => InputEvent::PauseResume,
        KeyCode::Esc   => InputEvent::Quit,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'a' => InputEvent::Left,
            'd' => InputEvent::Right,
            'w' => InputEvent::Up,
            's' => InputEvent::Down,
            ' ' => InputEvent::Toggle,
            '+' => InputEvent::IncreaseSpeed,
            '-' => InputEvent::DecreaseSpeed,
            'r' => InputEvent::Reset,
            'p' => InputEvent::NextPattern,
            'o' => InputEvent::StampPattern,
            'q' => InputEvent::Quit,
            _   => InputEvent::Unrecognized,
        },
        _ => InputEvent::Unrecognized,
    }
}

/// Short human-readable name of a key, for the status line.
pub fn describe(key: &KeyEvent) -> String {
    let name = match key.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c)   => c.to_string(),
        KeyCode::Left      => "left".to_string(),
        KeyCode::Right     => "right".to_string(),
        KeyCode::Up        => "up".to_string(),
        KeyCode::Down      => "down".to_string(),
        KeyCode::Enter     => "return".to_string(),
        KeyCode::Esc       => "escape".to_string(),
        KeyCode::F(n)      => format!("f{n}"),
        other              => format!("{other:?}").to_lowercase(),
    };

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        format!("ctrl+{name}")
    } else {
        name
    }
}

/// What the reader hands to the dispatch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermInput {
    Key(KeyEvent),
    Resize,
}

/// Keeps key presses and resizes; drops releases, repeats, mouse and focus events.
pub fn forward(event: Event) -> Option<TermInput> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(TermInput::Key(key)),
        Event::Resize(..) => Some(TermInput::Resize),
        _ => None,
    }
}

/// Spawns the terminal reader. Forwarded events go into `tx` one at a time;
/// the task ends when the receiving side is dropped or the terminal errors.
pub fn spawn_reader(tx: mpsc::Sender<TermInput>) -> JoinHandle<io::Result<()>> {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            let Some(input) = forward(event::read()?) else {
                continue;
            };
            trace!(?input, "terminal input");
            if tx.blocking_send(input).is_err() {
                break;
            }
        }
        Ok(())
    })
}
