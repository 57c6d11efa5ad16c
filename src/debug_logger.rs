// Debug logging module for per-turn game records
//
// Each turn is appended to a JSONL file as one TurnRecord: the position before the move,
// the position after it, and the search score when a search made the choice. The replay
// tool reads these files back.

use log::error;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::state::GameState;
use crate::types::Side;

/// One logged turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: i32,
    pub side: Side,
    pub before: GameState,
    pub after: GameState,
    /// Search score; absent for moves typed by a human
    #[serde(default, with = "score_text")]
    pub score: Option<f64>,
    pub timestamp: String,
}

impl TurnRecord {
    pub fn new(before: GameState, after: GameState, score: Option<f64>) -> Self {
        TurnRecord {
            turn: before.turn(),
            side: before.side_to_move(),
            before,
            after,
            score,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

// JSON has no infinities; non-finite scores are written as text ("inf", "-inf").
mod score_text {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            None => serializer.serialize_none(),
            Some(v) if v.is_finite() => serializer.serialize_some(&Repr::Number(*v)),
            Some(v) => serializer.serialize_some(&Repr::Text(v.to_string())),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Repr::Number(v)) => Ok(Some(v)),
            Some(Repr::Text(text)) => text
                .parse::<f64>()
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// Shared debug logger state
/// Uses Arc<Mutex<File>> so clones handed to different tasks append to one file
#[derive(Clone)]
pub struct DebugLogger {
    file: Arc<Mutex<Option<File>>>,
    enabled: bool,
}

impl DebugLogger {
    /// Creates a new debug logger
    /// If enabled is true, initializes the log file (truncating if it exists)
    pub async fn new(enabled: bool, log_file_path: &str) -> Self {
        if !enabled {
            return Self::disabled();
        }

        match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_file_path)
            .await
        {
            Ok(file) => {
                log::info!("Debug logging enabled: {}", log_file_path);
                DebugLogger {
                    file: Arc::new(Mutex::new(Some(file))),
                    enabled: true,
                }
            }
            Err(e) => {
                error!("Failed to create debug log file '{}': {}", log_file_path, e);
                Self::disabled()
            }
        }
    }

    /// Creates a disabled debug logger (no-op)
    pub fn disabled() -> Self {
        DebugLogger {
            file: Arc::new(Mutex::new(None)),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Appends one record. Write failures are logged, never returned.
    pub async fn log_turn(&self, record: &TurnRecord) {
        if !self.enabled {
            return;
        }

        let mut file_guard = self.file.lock().await;
        let Some(file) = file_guard.as_mut() else {
            return;
        };

        match serde_json::to_string(record) {
            Ok(json_line) => {
                let line_with_newline = format!("{}\n", json_line);
                if let Err(e) = file.write_all(line_with_newline.as_bytes()).await {
                    error!("Failed to write debug log entry: {}", e);
                } else if let Err(e) = file.flush().await {
                    error!("Failed to flush debug log: {}", e);
                }
            }
            Err(e) => {
                error!("Failed to serialize debug log entry: {}", e);
            }
        }
    }
}
