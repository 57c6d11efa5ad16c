//! Game Flow Tests
//!
//! Whole matches driven through the session loop and the synchronous autoplay helper,
//! with scripted player input and no pacing delay.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::time::Duration;

use snakes_and_ladders::bot::Bot;
use snakes_and_ladders::config::{Config, RulesConfig};
use snakes_and_ladders::controller::{ComputerAgent, PlayerAgent, PlayerDecision};
use snakes_and_ladders::debug_logger::DebugLogger;
use snakes_and_ladders::game::{GameError, Match, Outcome};
use snakes_and_ladders::geometry::Board;
use snakes_and_ladders::layout::Layout;
use snakes_and_ladders::session::{autoplay, Session};
use snakes_and_ladders::types::{Direction, Ladder, Side, Snake};

/// Plays a fixed list of decisions, then resigns
struct ScriptedAgent {
    moves: VecDeque<PlayerDecision>,
}

impl ScriptedAgent {
    fn new(moves: Vec<PlayerDecision>) -> Self {
        ScriptedAgent { moves: moves.into() }
    }
}

impl PlayerAgent for ScriptedAgent {
    fn decide(&mut self, _game: &Match) -> Result<PlayerDecision, GameError> {
        Ok(self.moves.pop_front().unwrap_or(PlayerDecision::Resign))
    }
}

fn bot(max_depth: i32) -> Bot {
    let mut config = Config::default_hardcoded();
    config.search.max_depth = max_depth;
    Bot::new(config)
}

fn ladder_match() -> Match {
    Match::new(
        Board::square(3),
        Layout::new(vec![Ladder::new(1, 8)], vec![Snake::new(7, 0)]),
        &RulesConfig {
            turn_limit: 5,
            diagonal_period: 3,
        },
    )
}

fn open_match() -> Match {
    Match::new(
        Board::square(5),
        Layout::new(vec![], vec![Snake::new(23, 2)]),
        &RulesConfig {
            turn_limit: 10,
            diagonal_period: 3,
        },
    )
}

fn session<A: PlayerAgent>(game: Match, bot: Bot, agent: A) -> Session<A> {
    Session::new(game, bot, agent, DebugLogger::disabled()).with_turn_delay(Duration::ZERO)
}

#[tokio::test]
async fn test_human_ladder_move_wins() {
    let agent = ScriptedAgent::new(vec![PlayerDecision::Step(Direction::Right)]);
    let mut session = session(ladder_match(), bot(2), agent);

    let outcome = session.run().await.expect("session runs");
    assert_eq!(outcome, Outcome::Victory);
    assert_eq!(session.game().player(), 8);
    assert_eq!(session.game().turn(), 1);
}

#[tokio::test]
async fn test_computer_player_finds_ladder() {
    let mut session = session(ladder_match(), bot(4), ComputerAgent);

    let outcome = session.run().await.expect("session runs");
    assert_eq!(outcome, Outcome::Victory);
    assert_eq!(session.game().turn(), 1, "Should win on the very first move");
}

#[tokio::test]
async fn test_resign_is_defeat() {
    let mut session = session(open_match(), bot(2), ScriptedAgent::new(vec![]));

    let outcome = session.run().await.expect("session runs");
    assert_eq!(outcome, Outcome::Defeat);
    assert_eq!(session.game().turn(), 0);
}

#[tokio::test]
async fn test_snake_answers_every_player_move() {
    let agent = ScriptedAgent::new(vec![
        PlayerDecision::Step(Direction::Up),
        PlayerDecision::Step(Direction::Right),
    ]);
    let mut session = session(open_match(), bot(2), agent);

    let outcome = session.run().await.expect("session runs");
    assert_eq!(outcome, Outcome::Defeat);
    assert_eq!(session.game().turn(), 2);
    assert_eq!(
        session.game().to_move(),
        Side::Player,
        "Snake must have replied before the resignation"
    );
}

#[tokio::test]
async fn test_illegal_scripted_move_aborts_session() {
    let agent = ScriptedAgent::new(vec![PlayerDecision::Step(Direction::Down)]);
    let mut session = session(open_match(), bot(2), agent);

    let result = session.run().await;
    assert!(matches!(result, Err(GameError::IllegalMove(Direction::Down))));
}

#[test]
fn test_autoplay_ladder_match() {
    let mut game = ladder_match();
    assert_eq!(autoplay(&mut game, &bot(4)).unwrap(), Outcome::Victory);
}

#[test]
fn test_autoplay_random_boards_finish_within_turn_limit() {
    let mut config = Config::default_hardcoded();
    config.board.size = 5;
    config.rules.turn_limit = 8;
    let bot = Bot::new({
        let mut c = config.clone();
        c.search.max_depth = 3;
        c
    });

    for seed in 0..5 {
        let mut game = Match::from_config(&config, &mut StdRng::seed_from_u64(seed));
        let outcome = autoplay(&mut game, &bot).expect("autoplay finishes");
        assert_eq!(game.outcome(), Some(outcome));
        assert!(game.turn() <= 8, "seed {}: turn {} past the limit", seed, game.turn());
        if outcome == Outcome::Defeat {
            assert_eq!(game.turn(), 8);
        }
    }
}
