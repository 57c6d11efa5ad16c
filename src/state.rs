// Immutable game snapshot the search operates on
//
// A GameState is built fresh by a controller at the start of every turn, expanded by the
// search, and discarded. The active snake is derived at construction and never inherited
// from a parent state.

use serde::{Deserialize, Serialize};

use crate::geometry::Board;
use crate::types::{Cell, Ladder, Side, Snake};

/// Snapshot of a position: player, snakes, ladders, and turn bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StateRecord", into = "StateRecord")]
pub struct GameState {
    player: Cell,
    snakes: Vec<Snake>,
    ladders: Vec<Ladder>,
    turn: i32,
    turn_limit: i32,
    board: Board,
    side_to_move: Side,
    diagonal_cooldown: i32,
    diagonal_period: i32,
    active_snake: Option<usize>,
}

impl GameState {
    /// Builds a snapshot. Inputs are trusted: the configuration layer validates them.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        player: Cell,
        snakes: Vec<Snake>,
        ladders: Vec<Ladder>,
        turn: i32,
        turn_limit: i32,
        rows: i32,
        cols: i32,
        side_to_move: Side,
        diagonal_cooldown: i32,
        diagonal_period: i32,
    ) -> Self {
        let board = Board::new(rows, cols);
        let active_snake = closest_snake(&board, player, &snakes);
        GameState {
            player,
            snakes,
            ladders,
            turn,
            turn_limit,
            board,
            side_to_move,
            diagonal_cooldown,
            diagonal_period,
            active_snake,
        }
    }

    /// Child snapshot sharing this state's dimensions and turn limit
    pub(crate) fn derive(
        &self,
        player: Cell,
        snakes: Vec<Snake>,
        ladders: Vec<Ladder>,
        turn: i32,
        side_to_move: Side,
        diagonal_cooldown: i32,
    ) -> Self {
        GameState::new(
            player,
            snakes,
            ladders,
            turn,
            self.turn_limit,
            self.board.rows,
            self.board.cols,
            side_to_move,
            diagonal_cooldown,
            self.diagonal_period,
        )
    }

    pub fn player(&self) -> Cell {
        self.player
    }

    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    pub fn ladders(&self) -> &[Ladder] {
        &self.ladders
    }

    pub fn turn(&self) -> i32 {
        self.turn
    }

    pub fn turn_limit(&self) -> i32 {
        self.turn_limit
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn diagonal_cooldown(&self) -> i32 {
        self.diagonal_cooldown
    }

    pub fn diagonal_period(&self) -> i32 {
        self.diagonal_period
    }

    /// Index of the snake whose head is Manhattan-closest to the player (first on ties)
    pub fn active_snake(&self) -> Option<usize> {
        self.active_snake
    }

    /// Diagonal moves are unlocked for the player on this turn
    pub fn diagonal_unlocked(&self) -> bool {
        self.diagonal_cooldown == self.diagonal_period
    }

    /// Same player, snake, and ladder positions
    pub fn same_positions(&self, other: &GameState) -> bool {
        self.player == other.player && self.snakes == other.snakes && self.ladders == other.ladders
    }
}

fn closest_snake(board: &Board, player: Cell, snakes: &[Snake]) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (i, snake) in snakes.iter().enumerate() {
        let distance = board.manhattan(player, snake.head);
        match best {
            Some((_, d)) if d <= distance => {}
            _ => best = Some((i, distance)),
        }
    }
    best.map(|(i, _)| i)
}

/// Serialized shape of a GameState; the active snake is recomputed on load
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateRecord {
    pub player: Cell,
    pub snakes: Vec<Snake>,
    pub ladders: Vec<Ladder>,
    pub turn: i32,
    pub turn_limit: i32,
    pub rows: i32,
    pub cols: i32,
    pub side_to_move: Side,
    pub diagonal_cooldown: i32,
    pub diagonal_period: i32,
}

impl From<StateRecord> for GameState {
    fn from(r: StateRecord) -> Self {
        GameState::new(
            r.player,
            r.snakes,
            r.ladders,
            r.turn,
            r.turn_limit,
            r.rows,
            r.cols,
            r.side_to_move,
            r.diagonal_cooldown,
            r.diagonal_period,
        )
    }
}

impl From<GameState> for StateRecord {
    fn from(s: GameState) -> Self {
        StateRecord {
            player: s.player,
            snakes: s.snakes,
            ladders: s.ladders,
            turn: s.turn,
            turn_limit: s.turn_limit,
            rows: s.board.rows,
            cols: s.board.cols,
            side_to_move: s.side_to_move,
            diagonal_cooldown: s.diagonal_cooldown,
            diagonal_period: s.diagonal_period,
        }
    }
}
