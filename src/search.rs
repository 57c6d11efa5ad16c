// Depth-limited minimax with alpha-beta pruning
//
// The side whose turn triggered the search (the root side) maximizes for the whole tree;
// the other side minimizes. Equal scores are broken on the player's distance to the goal:
// a snake root prefers pushing the player away, a player root prefers getting closer.

use crate::eval::{evaluate, is_terminal, player_goal_distance, utility};
use crate::state::GameState;
use crate::types::Side;

/// Counters collected during one search
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// States visited, root included
    pub nodes: u64,
    /// Times the remaining children of a node were skipped
    pub cutoffs: u64,
    /// Terminal or depth-limited states scored
    pub leaves: u64,
}

/// Result of a top-level search
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub score: f64,
    /// Successor of the root chosen by the search (the root itself if nothing beat it)
    pub chosen: GameState,
    pub stats: SearchStats,
}

/// Searches `root` to `max_depth` plies and returns the chosen successor.
/// A depth of zero or less returns the root's own static value.
pub fn search(root: &GameState, max_depth: i32) -> SearchOutcome {
    let mut stats = SearchStats::default();
    let root_side = root.side_to_move();
    let (score, chosen) = alpha_beta(
        root,
        max_depth,
        f64::NEG_INFINITY,
        f64::INFINITY,
        root_side,
        &mut stats,
    );
    SearchOutcome { score, chosen, stats }
}

/// True when `challenger` should replace `current` on an exact score tie
pub fn prefers(current: &GameState, challenger: &GameState, root_side: Side) -> bool {
    let current_distance = player_goal_distance(current);
    let challenger_distance = player_goal_distance(challenger);
    match root_side {
        Side::Snake => current_distance < challenger_distance,
        Side::Player => current_distance > challenger_distance,
    }
}

fn alpha_beta(
    state: &GameState,
    depth: i32,
    mut alpha: f64,
    mut beta: f64,
    root_side: Side,
    stats: &mut SearchStats,
) -> (f64, GameState) {
    stats.nodes += 1;

    if is_terminal(state) {
        stats.leaves += 1;
        return (utility(state), state.clone());
    }
    if depth <= 0 {
        stats.leaves += 1;
        return (evaluate(state), state.clone());
    }

    let maximizing = state.side_to_move() == root_side;
    let mut best_score = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    let mut best: Option<GameState> = None;

    for child in state.successors() {
        let (value, _) = alpha_beta(&child, depth - 1, alpha, beta, root_side, stats);

        let improves = if maximizing {
            value > best_score
        } else {
            value < best_score
        };
        let tie_wins =
            value == best_score && prefers(best.as_ref().unwrap_or(state), &child, root_side);
        if improves || tie_wins {
            best_score = value;
            best = Some(child);
        }

        if maximizing {
            alpha = alpha.max(value);
        } else {
            beta = beta.min(value);
        }
        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    (best_score, best.unwrap_or_else(|| state.clone()))
}
