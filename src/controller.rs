// Who drives the player piece
//
// A session asks its PlayerAgent for a decision whenever the player is to move. Humans type
// directions; the computer agent defers to the search.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::game::{GameError, Match};
use crate::types::Direction;

/// What the player side does this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerDecision {
    /// Move one step in a direction already checked against the board
    Step(Direction),
    /// Let the search pick the move
    Search,
    /// Give up the match
    Resign,
}

/// Source of player decisions
pub trait PlayerAgent: Send {
    fn decide(&mut self, game: &Match) -> Result<PlayerDecision, GameError>;
}

/// Reads moves as text lines, re-prompting until one is legal
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl HumanAgent<BufReader<Stdin>, Stdout> {
    /// Agent reading from stdin and prompting on stdout
    pub fn stdio() -> Self {
        HumanAgent::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead + Send, W: Write + Send> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        HumanAgent { input, output }
    }

    fn prompt(&mut self, game: &Match) -> io::Result<()> {
        if game.diagonal_available() {
            write!(
                self.output,
                "Your move (up, down, left, right, up-right, up-left, down-left, down-right, quit): "
            )?;
        } else {
            write!(self.output, "Your move (up, down, left, right, quit): ")?;
        }
        self.output.flush()
    }
}

impl<R: BufRead + Send, W: Write + Send> PlayerAgent for HumanAgent<R, W> {
    fn decide(&mut self, game: &Match) -> Result<PlayerDecision, GameError> {
        loop {
            self.prompt(game)?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                // end of input
                return Ok(PlayerDecision::Resign);
            }

            let text = line.trim().to_ascii_lowercase();
            if text.is_empty() {
                continue;
            }
            if matches!(text.as_str(), "quit" | "resign" | "exit") {
                return Ok(PlayerDecision::Resign);
            }

            let Some(dir) = Direction::parse(&text) else {
                writeln!(self.output, "Unknown move '{}'", text)?;
                continue;
            };

            match game.landing_for(dir) {
                Ok(_) => return Ok(PlayerDecision::Step(dir)),
                Err(e @ (GameError::IllegalMove(_) | GameError::DiagonalLocked(_))) => {
                    writeln!(self.output, "{}", e)?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Lets the search play the player side
#[derive(Debug, Default, Clone, Copy)]
pub struct ComputerAgent;

impl PlayerAgent for ComputerAgent {
    fn decide(&mut self, _game: &Match) -> Result<PlayerDecision, GameError> {
        Ok(PlayerDecision::Search)
    }
}
