// Live match data and the controller-side turn rules
//
// A Match owns the real positions. Each turn it hands out a GameState snapshot for the
// search, then copies the chosen result back. Its bookkeeping differs from
// the search's own: the diagonal cooldown counts 0..=period and resets, and the match ends
// once `turn >= turn_limit`.

use rand::Rng;
use serde::Serialize;
use std::fmt;

use crate::config::{Config, RulesConfig};
use crate::geometry::Board;
use crate::layout::Layout;
use crate::resolver::resolve;
use crate::state::GameState;
use crate::types::{Cell, Direction, Ladder, Side, Snake};

/// Errors raised by the live game and its controllers
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("it is the {0} side's turn")]
    NotYourTurn(Side),
    #[error("the match is already over")]
    GameOver,
    #[error("moving {0} leaves the board")]
    IllegalMove(Direction),
    #[error("diagonal moves unlock in {0} turn(s)")]
    DiagonalLocked(i32),
    #[error("search task failed: {0}")]
    SearchTask(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// How a finished match ended, from the player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Victory,
    Defeat,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Victory => f.write_str("Victory!"),
            Outcome::Defeat => f.write_str("Defeat!"),
        }
    }
}

/// The game being played
#[derive(Debug, Clone)]
pub struct Match {
    board: Board,
    player: Cell,
    snakes: Vec<Snake>,
    ladders: Vec<Ladder>,
    turn: i32,
    turn_limit: i32,
    diagonal_cooldown: i32,
    diagonal_period: i32,
    to_move: Side,
}

impl Match {
    /// New match with the player on cell 0 and the player to move
    pub fn new(board: Board, layout: Layout, rules: &RulesConfig) -> Self {
        Match {
            board,
            player: 0,
            snakes: layout.snakes,
            ladders: layout.ladders,
            turn: 0,
            turn_limit: rules.turn_limit,
            diagonal_cooldown: 0,
            diagonal_period: rules.diagonal_period,
            to_move: Side::Player,
        }
    }

    /// New match on a randomly generated board
    pub fn from_config<R: Rng>(config: &Config, rng: &mut R) -> Self {
        let board = Board::square(config.board.size);
        let layout = Layout::generate(board, config.board.ladders, config.board.snakes, rng);
        Self::new(board, layout, &config.rules)
    }

    pub fn board(&self) -> Board {
        self.board
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

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    pub fn turns_remaining(&self) -> i32 {
        self.turn_limit - self.turn
    }

    pub fn diagonal_available(&self) -> bool {
        self.diagonal_cooldown == self.diagonal_period
    }

    /// Player turns until diagonal moves unlock (0 when available now)
    pub fn diagonal_in(&self) -> i32 {
        self.diagonal_period - self.diagonal_cooldown
    }

    /// Search snapshot of the current position
    pub fn snapshot(&self) -> GameState {
        GameState::new(
            self.player,
            self.snakes.clone(),
            self.ladders.clone(),
            self.turn,
            self.turn_limit,
            self.board.rows,
            self.board.cols,
            self.to_move,
            self.diagonal_cooldown,
            self.diagonal_period,
        )
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if self.player == self.board.last_cell() {
            Some(Outcome::Victory)
        } else if self.turn >= self.turn_limit {
            Some(Outcome::Defeat)
        } else {
            None
        }
    }

    /// Raw landing cell for a direct player move, before ladders and snakes
    pub fn landing_for(&self, dir: Direction) -> Result<Cell, GameError> {
        if dir.is_diagonal() && !self.diagonal_available() {
            return Err(GameError::DiagonalLocked(self.diagonal_in()));
        }
        self.board
            .step(self.player, dir)
            .ok_or(GameError::IllegalMove(dir))
    }

    /// Moves the player one step in `dir`; returns the resolved cell
    pub fn move_player(&mut self, dir: Direction) -> Result<Cell, GameError> {
        self.ensure_turn(Side::Player)?;
        let landing = self.landing_for(dir)?;
        self.land_player(landing)
    }

    /// Puts the player on `landing`, follows ladders and snakes, and ends the player's turn.
    /// Returns the cell the player ends up on.
    pub fn land_player(&mut self, landing: Cell) -> Result<Cell, GameError> {
        self.ensure_turn(Side::Player)?;

        if self.board.contains(landing) {
            self.player = resolve(landing, &self.ladders, &self.snakes);
        }

        self.diagonal_cooldown += 1;
        if self.diagonal_cooldown > self.diagonal_period {
            self.diagonal_cooldown = 0;
        }
        self.turn += 1;

        if self.outcome().is_none() {
            self.to_move = Side::Snake;
        }
        Ok(self.player)
    }

    /// Applies the snake side's chosen successor: new snakes and ladders, then the player is
    /// re-resolved against them
    pub fn apply_snake_choice(&mut self, chosen: &GameState) -> Result<(), GameError> {
        self.ensure_turn(Side::Snake)?;

        self.snakes = chosen.snakes().to_vec();
        self.ladders = chosen.ladders().to_vec();
        self.player = resolve(chosen.player(), &self.ladders, &self.snakes);

        if self.outcome().is_none() {
            self.to_move = Side::Player;
        }
        Ok(())
    }

    fn ensure_turn(&self, side: Side) -> Result<(), GameError> {
        if self.outcome().is_some() {
            return Err(GameError::GameOver);
        }
        if self.to_move != side {
            return Err(GameError::NotYourTurn(self.to_move));
        }
        Ok(())
    }

    fn cell_label(&self, cell: Cell) -> String {
        if cell == self.player {
            return "@".to_string();
        }
        if let Some(i) = self.snakes.iter().position(|s| s.head == cell) {
            return format!("S{}", i);
        }
        if let Some(i) = self.ladders.iter().position(|l| l.start == cell) {
            return format!("L{}", i);
        }
        if let Some(i) = self.snakes.iter().position(|s| s.tail == cell) {
            return format!("s{}", i);
        }
        if let Some(i) = self.ladders.iter().position(|l| l.end == cell) {
            return format!("l{}", i);
        }
        cell.to_string()
    }
}

/// Text board: top row first, `@` player, `S`/`s` snake head/tail, `L`/`l` ladder start/end
impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.board.rows).rev() {
            for col in 0..self.board.cols {
                let cell = self.board.to_index(row, col);
                write!(f, "{:>5}", self.cell_label(cell))?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Turns: {}", self.turns_remaining())?;
        if self.diagonal_available() {
            writeln!(f, "Diagonal Available")?;
        } else {
            writeln!(f, "Diagonal In: {}", self.diagonal_in())?;
        }
        for (i, snake) in self.snakes.iter().enumerate() {
            writeln!(f, "Snake {}: {} -> {}", i, snake.head, snake.tail)?;
        }
        for (i, ladder) in self.ladders.iter().enumerate() {
            writeln!(f, "Ladder {}: {} -> {}", i, ladder.start, ladder.end)?;
        }
        Ok(())
    }
}
