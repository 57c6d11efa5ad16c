// Replay module for re-checking logged decisions
//
// This module provides functionality to:
// 1. Parse JSONL turn logs written by the debug logger
// 2. Re-run the search on each logged position
// 3. Compare the logged choice with the fresh one
// 4. Generate summary reports

use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use crate::config::Config;
use crate::debug_logger::TurnRecord;
use crate::search::search;
use crate::types::{Cell, Side};

/// Errors raised while loading or checking a turn log
#[derive(thiserror::Error, Debug)]
pub enum ReplayError {
    #[error("failed to read log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse JSON on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("turn {0} not found in log file")]
    MissingTurn(i32),
    #[error("turn {turn}: expected player on one of {expected:?}, but got {actual}")]
    UnexpectedMove {
        turn: i32,
        expected: Vec<Cell>,
        actual: Cell,
    },
}

/// Result of replaying a single turn
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub turn: i32,
    pub side: Side,
    pub original_player: Cell,
    pub replayed_player: Cell,
    /// Same player, snake, and ladder positions after the move
    pub matches: bool,
    pub original_score: f64,
    pub replayed_score: f64,
    pub nodes: u64,
    pub computation_time_ms: u128,
}

/// Statistics for a complete replay session
#[derive(Debug, Default)]
pub struct ReplayStats {
    pub total_turns: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub match_rate: f64,
}

/// Replay engine for analyzing turn logs
pub struct ReplayEngine {
    config: Config,
    verbose: bool,
}

impl ReplayEngine {
    /// Creates a new replay engine with the given configuration
    pub fn new(config: Config, verbose: bool) -> Self {
        ReplayEngine { config, verbose }
    }

    /// Loads all records from a JSONL file
    pub fn load_log_file<P: AsRef<Path>>(
        &self,
        log_path: P,
    ) -> Result<Vec<TurnRecord>, ReplayError> {
        let file = File::open(log_path.as_ref())?;
        let records = Self::parse_records(BufReader::new(file))?;
        info!("Loaded {} log entries", records.len());
        Ok(records)
    }

    /// Parses JSONL records, skipping blank lines
    pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<TurnRecord>, ReplayError> {
        let mut records = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let record: TurnRecord =
                serde_json::from_str(&line).map_err(|source| ReplayError::Parse {
                    line: line_num + 1,
                    source,
                })?;
            records.push(record);
        }

        Ok(records)
    }

    /// Re-searches one logged position. Returns None for moves that were typed by a human.
    pub fn replay_entry(&self, record: &TurnRecord) -> Option<ReplayResult> {
        let original_score = record.score?;

        if self.verbose {
            info!("Replaying turn {} ({})...", record.turn, record.side);
        }

        let start_time = Instant::now();
        let outcome = search(&record.before, self.config.search.max_depth);
        let computation_time = start_time.elapsed().as_millis();

        let result = ReplayResult {
            turn: record.turn,
            side: record.side,
            original_player: record.after.player(),
            replayed_player: outcome.chosen.player(),
            matches: outcome.chosen.same_positions(&record.after),
            original_score,
            replayed_score: outcome.score,
            nodes: outcome.stats.nodes,
            computation_time_ms: computation_time,
        };

        if self.verbose {
            if result.matches {
                info!(
                    "Turn {} ({}): ✓ MATCH - player {} (score: {}, nodes: {}, time: {}ms)",
                    result.turn,
                    result.side,
                    result.replayed_player,
                    result.replayed_score,
                    result.nodes,
                    computation_time
                );
            } else {
                warn!(
                    "Turn {} ({}): ✗ MISMATCH - Original player {}, Replayed player {} (score: {} vs {}, time: {}ms)",
                    result.turn,
                    result.side,
                    result.original_player,
                    result.replayed_player,
                    result.original_score,
                    result.replayed_score,
                    computation_time
                );
            }
        }

        Some(result)
    }

    /// Replays every searched record
    pub fn replay_all(&self, records: &[TurnRecord]) -> Vec<ReplayResult> {
        records.iter().filter_map(|r| self.replay_entry(r)).collect()
    }

    /// Replays the records for specific turn numbers (both sides)
    pub fn replay_turns(
        &self,
        records: &[TurnRecord],
        turn_numbers: &[i32],
    ) -> Result<Vec<ReplayResult>, ReplayError> {
        let mut results = Vec::new();

        for turn_num in turn_numbers {
            let matching: Vec<&TurnRecord> =
                records.iter().filter(|r| r.turn == *turn_num).collect();
            if matching.is_empty() {
                return Err(ReplayError::MissingTurn(*turn_num));
            }
            results.extend(matching.into_iter().filter_map(|r| self.replay_entry(r)));
        }

        Ok(results)
    }

    /// Generates statistics from replay results
    pub fn generate_stats(&self, results: &[ReplayResult]) -> ReplayStats {
        let total_turns = results.len();
        let matches = results.iter().filter(|r| r.matches).count();
        let mismatches = total_turns - matches;
        let match_rate = if total_turns > 0 {
            (matches as f64 / total_turns as f64) * 100.0
        } else {
            0.0
        };

        ReplayStats {
            total_turns,
            matches,
            mismatches,
            match_rate,
        }
    }

    /// Prints a detailed report of replay results
    pub fn print_report(&self, results: &[ReplayResult]) {
        let stats = self.generate_stats(results);

        println!("\n═══════════════════════════════════════════════════════════");
        println!("                    REPLAY REPORT");
        println!("═══════════════════════════════════════════════════════════");
        println!("Search Depth:   {}", self.config.search.max_depth);
        println!("Total Turns:    {}", stats.total_turns);
        println!("Matches:        {} ({:.1}%)", stats.matches, stats.match_rate);
        println!("Mismatches:     {}", stats.mismatches);
        println!("═══════════════════════════════════════════════════════════\n");

        if !results.is_empty() {
            let avg_time: f64 = results.iter().map(|r| r.computation_time_ms as f64).sum::<f64>()
                / results.len() as f64;
            let avg_nodes: f64 =
                results.iter().map(|r| r.nodes as f64).sum::<f64>() / results.len() as f64;

            println!("Average Nodes Searched:     {:.1}", avg_nodes);
            println!("Average Computation Time:   {:.1}ms\n", avg_time);
        }

        let mismatches: Vec<_> = results.iter().filter(|r| !r.matches).collect();
        if !mismatches.is_empty() {
            println!("═══════════════════════════════════════════════════════════");
            println!("                  DETAILED MISMATCHES");
            println!("═══════════════════════════════════════════════════════════");

            for result in mismatches {
                println!(
                    "Turn {} ({}): player {} → {} (score: {} → {}, time: {}ms)",
                    result.turn,
                    result.side,
                    result.original_player,
                    result.replayed_player,
                    result.original_score,
                    result.replayed_score,
                    result.computation_time_ms
                );
            }
            println!();
        }
    }

    /// Checks that the player's logged move on each turn ended on one of the accepted cells
    pub fn validate_expected_moves(
        &self,
        records: &[TurnRecord],
        expected: &[(i32, Vec<Cell>)],
    ) -> Result<(), ReplayError> {
        for (turn, acceptable) in expected {
            let record = records
                .iter()
                .find(|r| r.turn == *turn && r.side == Side::Player)
                .ok_or(ReplayError::MissingTurn(*turn))?;

            let actual = record.after.player();
            if !acceptable.contains(&actual) {
                return Err(ReplayError::UnexpectedMove {
                    turn: *turn,
                    expected: acceptable.clone(),
                    actual,
                });
            }
        }

        Ok(())
    }
}
