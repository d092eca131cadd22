//! Rule and invariant checks driven through the public core API only.

use life_core::state::{INITIAL_SPEED_MS, MIN_SPEED_MS};
use life_core::{
    next_turn, CommandDispatcher, Cursor, Dimensions, Dispatch, Grid, InputEvent, RunStatus,
    SimulationState,
};

// ── Helpers ────────────────────────────────────────────────────────────

fn dims(width: usize, height: usize) -> Dimensions {
    Dimensions::new(width, height).unwrap()
}

fn alive(grid: &Grid) -> Vec<(usize, usize)> {
    let mut cells: Vec<_> = grid.alive_cells().collect();
    cells.sort_unstable();
    cells
}

fn assert_invariants(state: &SimulationState) {
    assert_eq!(state.grid().cells().len(), state.width() * state.height());
    assert!(state.cursor().x < state.width());
    assert!(state.cursor().y < state.height());
    assert!(state.speed() >= MIN_SPEED_MS);
}

// ── Rule ───────────────────────────────────────────────────────────────

#[test]
fn glider_advances_one_generation() {
    let glider = Grid::with_alive(dims(5, 5), &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
    let next = glider.next_turn();
    assert_eq!(alive(&next), vec![(0, 1), (1, 2), (1, 3), (2, 1), (2, 2)]);
}

#[test]
fn glider_returns_to_its_shape_shifted_diagonally() {
    let mut grid = Grid::with_alive(dims(8, 8), &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
    for _ in 0..4 {
        grid = grid.next_turn();
    }
    assert_eq!(alive(&grid), vec![(1, 3), (2, 1), (2, 3), (3, 2), (3, 3)]);
}

#[test]
fn all_dead_is_a_fixed_point() {
    for (width, height) in [(1, 1), (3, 7), (80, 15)] {
        let cells = vec![false; width * height];
        assert_eq!(next_turn(&cells, width), cells);
    }
}

#[test]
fn block_is_still_for_five_turns() {
    let block = Grid::with_alive(dims(6, 6), &[(2, 2), (3, 2), (2, 3), (3, 3)]);
    let mut grid = block.clone();
    for _ in 0..5 {
        grid = grid.next_turn();
        assert_eq!(grid, block);
    }
}

#[test]
fn block_in_the_bottom_right_corner_is_still() {
    let corner = Grid::with_alive(dims(5, 3), &[(3, 1), (4, 1), (3, 2), (4, 2)]);
    assert_eq!(corner.next_turn(), corner);
}

// ── Commands ───────────────────────────────────────────────────────────

#[test]
fn toggle_twice_restores_the_cell() {
    let dispatcher = CommandDispatcher::new(dims(4, 4));
    let mut state = dispatcher.initial_state();
    dispatcher.dispatch(&mut state, InputEvent::Right);
    let before = state.clone();
    dispatcher.dispatch(&mut state, InputEvent::Toggle);
    assert_ne!(state, before);
    dispatcher.dispatch(&mut state, InputEvent::Toggle);
    assert_eq!(state, before);
}

#[test]
fn cursor_moves_are_idempotent_at_the_boundary() {
    let dispatcher = CommandDispatcher::new(dims(3, 3));
    let mut state = dispatcher.initial_state();

    dispatcher.dispatch(&mut state, InputEvent::Left);
    dispatcher.dispatch(&mut state, InputEvent::Up);
    assert_eq!(state.cursor(), Cursor { x: 0, y: 0 });

    for _ in 0..2 {
        dispatcher.dispatch(&mut state, InputEvent::Right);
        dispatcher.dispatch(&mut state, InputEvent::Down);
    }
    let corner = state.cursor();
    dispatcher.dispatch(&mut state, InputEvent::Right);
    dispatcher.dispatch(&mut state, InputEvent::Down);
    assert_eq!(state.cursor(), corner);
    assert_eq!(corner, Cursor { x: 2, y: 2 });
}

#[test]
fn reset_scenario_yields_a_fresh_ten_by_six() {
    let dispatcher = CommandDispatcher::new(dims(10, 6));
    let mut state = dispatcher.initial_state();
    dispatcher.dispatch(&mut state, InputEvent::Toggle);
    dispatcher.dispatch(&mut state, InputEvent::PauseResume);
    dispatcher.dispatch(&mut state, InputEvent::DecreaseSpeed);

    assert_eq!(dispatcher.dispatch(&mut state, InputEvent::Reset), Dispatch::Replaced);
    let model = state.render_model();
    assert_eq!(model.status, RunStatus::Paused);
    assert_eq!(model.speed, INITIAL_SPEED_MS);
    assert_eq!(model.cursor, Cursor { x: 0, y: 0 });
    assert_eq!(model.grid.len(), 60);
    assert!(model.grid.iter().all(|&cell| !cell));
}

#[test]
fn invariants_hold_over_a_long_mixed_session() {
    let dispatcher = CommandDispatcher::new(dims(7, 5));
    let mut state = dispatcher.initial_state();
    let script = [
        InputEvent::Right,
        InputEvent::Toggle,
        InputEvent::Down,
        InputEvent::IncreaseSpeed,
        InputEvent::StampPattern,
        InputEvent::NextPattern,
        InputEvent::Left,
        InputEvent::Unrecognized,
        InputEvent::Up,
        InputEvent::DecreaseSpeed,
        InputEvent::PauseResume,
    ];

    for round in 0..120 {
        for (i, &event) in script.iter().enumerate() {
            // Bias towards speeding up so the floor gets exercised
            let event = if (round + i) % 3 == 0 { InputEvent::IncreaseSpeed } else { event };
            dispatcher.dispatch(&mut state, event);
            assert_invariants(&state);
        }
        state.next_turn();
        assert_invariants(&state);
    }
    assert_eq!(state.speed(), MIN_SPEED_MS);
}
