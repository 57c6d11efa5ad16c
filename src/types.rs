// Core value types shared by the engine and the live game
//
// Ladders and snakes are plain (start, end) records. Whoever owns a GameState or a Match
// owns these positions; nothing else holds a mutable reference to them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Linear board position, `row * cols + col`
pub type Cell = i32;

/// The two agents of the game
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Snake,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Snake => "snake",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-way shortcut from `start` to `end`
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Ladder {
    pub start: Cell,
    pub end: Cell,
}

impl Ladder {
    pub fn new(start: Cell, end: Cell) -> Self {
        Ladder { start, end }
    }
}

/// One-way hazard: a piece landing on `head` slides to `tail`
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Snake {
    pub head: Cell,
    pub tail: Cell,
}

impl Snake {
    pub fn new(head: Cell, tail: Cell) -> Self {
        Snake { head, tail }
    }
}

/// The eight compass moves. "Up" increases the row, i.e. moves toward the last cell.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpRight,
    UpLeft,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Cardinal moves in the order the player side expands them
    pub const PLAYER_CARDINAL: [Direction; 4] =
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// Diagonal moves in the order the player side expands them
    pub const PLAYER_DIAGONAL: [Direction; 4] = [
        Direction::UpRight,
        Direction::DownLeft,
        Direction::UpLeft,
        Direction::DownRight,
    ];

    /// All eight moves in the order a snake translates itself
    pub const SNAKE_ORDER: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpRight,
        Direction::UpLeft,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// (row delta, column delta)
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (1, 0),
            Direction::Down => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpRight => (1, 1),
            Direction::UpLeft => (1, -1),
            Direction::DownLeft => (-1, -1),
            Direction::DownRight => (-1, 1),
        }
    }

    pub fn is_diagonal(&self) -> bool {
        let (dr, dc) = self.delta();
        dr != 0 && dc != 0
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::UpRight => "up-right",
            Direction::UpLeft => "up-left",
            Direction::DownLeft => "down-left",
            Direction::DownRight => "down-right",
        }
    }

    /// Parses a direction name or one of its short aliases (`u`, `ur`, `w`, ...)
    pub fn parse(s: &str) -> Option<Direction> {
        match s.trim().to_lowercase().as_str() {
            "up" | "u" | "w" => Some(Direction::Up),
            "down" | "s" => Some(Direction::Down),
            "left" | "l" | "a" => Some(Direction::Left),
            "right" | "r" | "d" => Some(Direction::Right),
            "up-right" | "upright" | "ur" | "e" => Some(Direction::UpRight),
            "up-left" | "upleft" | "ul" | "q" => Some(Direction::UpLeft),
            "down-left" | "downleft" | "dl" | "z" => Some(Direction::DownLeft),
            "down-right" | "downright" | "dr" | "c" => Some(Direction::DownRight),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
