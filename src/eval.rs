// Terminal detection, exact utility, and the cutoff heuristic
//
// Scores are always read relative to `side_to_move` of the scored state, i.e. the side that
// would move next, not the side that just acted. The signs below look inverted at first
// glance.

use crate::state::GameState;
use crate::types::Side;

/// Game over: player on the goal cell, or the turn budget is spent
pub fn is_terminal(state: &GameState) -> bool {
    state.player() >= state.board().last_cell() || state.turn() > state.turn_limit()
}

/// Exact value of a terminal state
pub fn utility(state: &GameState) -> f64 {
    let to_move_is_player = state.side_to_move() == Side::Player;
    if state.player() >= state.board().last_cell() {
        if to_move_is_player {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    } else if to_move_is_player {
        f64::INFINITY
    } else {
        f64::NEG_INFINITY
    }
}

/// Manhattan distance from the player to the goal cell
pub fn player_goal_distance(state: &GameState) -> i32 {
    let board = state.board();
    board.manhattan(state.player(), board.last_cell())
}

/// Heuristic value of a non-terminal state
pub fn evaluate(state: &GameState) -> f64 {
    let to_goal = player_goal_distance(state) as f64;

    match state.side_to_move() {
        Side::Player => -to_goal,
        Side::Snake => {
            let board = state.board();
            let closest = state
                .snakes()
                .iter()
                .map(|s| board.manhattan(state.player(), s.head) as f64)
                .fold(f64::MAX, f64::min);
            to_goal - closest
        }
    }
}
