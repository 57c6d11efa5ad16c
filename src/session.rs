// Turn loop tying the match, the player's agent, the bot, and the debug log together

use log::info;
use std::time::Duration;

use crate::bot::Bot;
use crate::controller::{PlayerAgent, PlayerDecision};
use crate::debug_logger::{DebugLogger, TurnRecord};
use crate::game::{GameError, Match, Outcome};
use crate::types::Side;

/// One interactive or automated match
pub struct Session<A: PlayerAgent> {
    game: Match,
    bot: Bot,
    agent: A,
    logger: DebugLogger,
    turn_delay: Duration,
    show_board: bool,
}

impl<A: PlayerAgent> Session<A> {
    /// Session paced by the bot's `pacing.turn_delay_ms`
    pub fn new(game: Match, bot: Bot, agent: A, logger: DebugLogger) -> Self {
        let turn_delay = Duration::from_millis(bot.config().pacing.turn_delay_ms);
        Session {
            game,
            bot,
            agent,
            logger,
            turn_delay,
            show_board: false,
        }
    }

    pub fn with_turn_delay(mut self, turn_delay: Duration) -> Self {
        self.turn_delay = turn_delay;
        self
    }

    /// Print the board to stdout before every turn
    pub fn with_board_display(mut self, show_board: bool) -> Self {
        self.show_board = show_board;
        self
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Plays until the match ends or the player resigns
    pub async fn run(&mut self) -> Result<Outcome, GameError> {
        info!(
            "Game start: {} snakes, {} ladders",
            self.game.snakes().len(),
            self.game.ladders().len()
        );

        loop {
            if self.show_board {
                println!("{}", self.game);
            }

            if let Some(outcome) = self.game.outcome() {
                info!("Game over on turn {}: {}", self.game.turn(), outcome);
                return Ok(outcome);
            }

            let resigned = match self.game.to_move() {
                Side::Player => self.player_turn().await?,
                Side::Snake => {
                    self.snake_turn().await?;
                    false
                }
            };
            if resigned {
                info!("Player resigned on turn {}", self.game.turn());
                return Ok(Outcome::Defeat);
            }
        }
    }

    /// Returns true when the player resigned
    async fn player_turn(&mut self) -> Result<bool, GameError> {
        let before = self.game.snapshot();

        match self.agent.decide(&self.game)? {
            PlayerDecision::Resign => Ok(true),
            PlayerDecision::Step(dir) => {
                let landed = self.game.move_player(dir)?;
                info!("Turn {}: player moved {} to {}", before.turn(), dir, landed);
                let record = TurnRecord::new(before, self.game.snapshot(), None);
                self.logger.log_turn(&record).await;
                Ok(false)
            }
            PlayerDecision::Search => {
                self.pause().await;
                let outcome = self.bot.decide_async(before.clone()).await?;
                let landed = self.game.land_player(outcome.chosen.player())?;
                info!("Turn {}: player moved to {}", before.turn(), landed);
                let record = TurnRecord::new(before, outcome.chosen, Some(outcome.score));
                self.logger.log_turn(&record).await;
                Ok(false)
            }
        }
    }

    async fn snake_turn(&mut self) -> Result<(), GameError> {
        self.pause().await;
        let before = self.game.snapshot();
        let outcome = self.bot.decide_async(before.clone()).await?;
        self.game.apply_snake_choice(&outcome.chosen)?;
        let record = TurnRecord::new(before, outcome.chosen, Some(outcome.score));
        self.logger.log_turn(&record).await;
        Ok(())
    }

    async fn pause(&self) {
        if !self.turn_delay.is_zero() {
            tokio::time::sleep(self.turn_delay).await;
        }
    }
}

/// Plays both sides with the search, synchronously and without pacing or logging
pub fn autoplay(game: &mut Match, bot: &Bot) -> Result<Outcome, GameError> {
    loop {
        if let Some(outcome) = game.outcome() {
            return Ok(outcome);
        }

        let outcome = bot.decide(&game.snapshot());
        match game.to_move() {
            Side::Player => {
                game.land_player(outcome.chosen.player())?;
            }
            Side::Snake => game.apply_snake_choice(&outcome.chosen)?,
        }
    }
}
