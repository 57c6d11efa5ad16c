// Computer opponent (and optional computer player)
//
// Wraps the alpha-beta search with the configured depth and logs every decision.
// The async entry point runs the search on tokio's blocking pool so a session's
// event loop keeps running while the CPU-bound work happens.

use log::{debug, info};
use std::time::Instant;

use crate::config::Config;
use crate::game::GameError;
use crate::search::{search, SearchOutcome};
use crate::state::GameState;

/// Search-driven decision maker
/// Takes static configuration and picks a successor for whichever side is to move
#[derive(Debug, Clone)]
pub struct Bot {
    config: Config,
}

impl Bot {
    /// Creates a new Bot instance with the given configuration
    ///
    /// # Arguments
    /// * `config` - Static configuration that does not change during the bot's lifetime
    pub fn new(config: Config) -> Self {
        Bot { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Searches `state` to the configured depth and returns the chosen successor
    pub fn decide(&self, state: &GameState) -> SearchOutcome {
        Self::decide_with(state, self.config.search.max_depth)
    }

    /// Same as `decide`, on the blocking thread pool
    pub async fn decide_async(&self, state: GameState) -> Result<SearchOutcome, GameError> {
        let max_depth = self.config.search.max_depth;
        tokio::task::spawn_blocking(move || Self::decide_with(&state, max_depth))
            .await
            .map_err(|e| GameError::SearchTask(e.to_string()))
    }

    fn decide_with(state: &GameState, max_depth: i32) -> SearchOutcome {
        let start_time = Instant::now();

        debug!(
            "Turn {}: searching for {} (player {}, snakes {:?}, ladders {:?})",
            state.turn(),
            state.side_to_move(),
            state.player(),
            state.snakes(),
            state.ladders()
        );

        let outcome = search(state, max_depth);

        info!(
            "Turn {}: {} chose player {} (score: {}, nodes: {}, cutoffs: {}, time: {}ms)",
            state.turn(),
            state.side_to_move(),
            outcome.chosen.player(),
            outcome.score,
            outcome.stats.nodes,
            outcome.stats.cutoffs,
            start_time.elapsed().as_millis()
        );
        debug!(
            "Turn {}: chosen snakes {:?}, ladders {:?}",
            state.turn(),
            outcome.chosen.snakes(),
            outcome.chosen.ladders()
        );

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Ladder, Side, Snake};

    fn bot_with_depth(max_depth: i32) -> Bot {
        let mut config = Config::default_hardcoded();
        config.search.max_depth = max_depth;
        Bot::new(config)
    }

    #[test]
    fn test_decide_matches_direct_search() {
        let state = GameState::new(
            0,
            vec![Snake::new(7, 2)],
            vec![],
            0,
            6,
            4,
            4,
            Side::Snake,
            0,
            3,
        );
        let bot = bot_with_depth(3);
        let outcome = bot.decide(&state);
        let direct = search(&state, 3);
        assert_eq!(outcome.score, direct.score);
        assert_eq!(outcome.chosen, direct.chosen);
        assert_eq!(outcome.stats, direct.stats);
    }

    #[tokio::test]
    async fn test_decide_async_takes_winning_ladder() {
        let state = GameState::new(
            0,
            vec![],
            vec![Ladder::new(1, 8)],
            0,
            5,
            3,
            3,
            Side::Player,
            0,
            3,
        );
        let outcome = bot_with_depth(4).decide_async(state).await.expect("search task");
        assert_eq!(outcome.chosen.player(), 8);
    }
}
