//! Responses from the remote evaluation service.
//!
//! The service answers with a JSON object such as:
//!
//! ```json
//! {
//!   "success": true,
//!   "evaluation": 0.35,
//!   "mate": null,
//!   "bestmove": "bestmove e2e4 ponder e7e5",
//!   "continuation": "e2e4 e7e5 g1f3 b8c6"
//! }
//! ```
//!
//! A failed request carries `"success": false` and an error message in
//! `data`.

use chess_analysis::Evaluation;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when reading an engine response.
#[derive(Error, Debug)]
pub enum EngineResponseError {
    /// The response body is not valid JSON for an [`EngineResponse`].
    #[error("Failed to parse engine response: {0}")]
    Json(#[from] serde_json::Error),
    /// The service reported a failure.
    #[error("Engine request failed: {0}")]
    Failed(String),
    /// Neither a centipawn evaluation nor a mate score was reported.
    #[error("Engine response has no evaluation")]
    MissingEvaluation,
    /// No best move was reported.
    #[error("Engine response has no best move")]
    MissingBestMove,
    /// The `bestmove` field could not be understood.
    #[error("Malformed bestmove field: '{0}'")]
    MalformedBestMove(String),
}

/// Raw JSON body returned by the evaluation service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EngineResponse {
    pub success: bool,
    /// Evaluation in pawns from White's perspective.
    #[serde(default)]
    pub evaluation: Option<f64>,
    /// Moves to mate; negative when Black mates.
    #[serde(default)]
    pub mate: Option<i32>,
    /// UCI `bestmove` line, e.g. `"bestmove e2e4 ponder e7e5"`.
    #[serde(default)]
    pub bestmove: Option<String>,
    /// Space-separated principal variation.
    #[serde(default)]
    pub continuation: Option<String>,
    /// Error message when `success` is false.
    #[serde(default)]
    pub data: Option<String>,
}

/// Usable result of an engine request.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineAnalysis {
    pub evaluation: Evaluation,
    pub best_move: String,
    pub ponder: Option<String>,
    pub continuation: Vec<String>,
}

impl EngineResponse {
    /// Parses a response body.
    pub fn from_json(json: &str) -> Result<Self, EngineResponseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates the response and extracts the analysis.
    pub fn into_analysis(self) -> Result<EngineAnalysis, EngineResponseError> {
        if !self.success {
            let message = self
                .data
                .unwrap_or_else(|| "no error message".to_string());
            return Err(EngineResponseError::Failed(message));
        }

        let cp = self.evaluation.map(Evaluation::pawns_to_centipawns);
        let evaluation = Evaluation::from_uci_score(cp, self.mate)
            .ok_or(EngineResponseError::MissingEvaluation)?;

        let bestmove = self
            .bestmove
            .ok_or(EngineResponseError::MissingBestMove)?;
        let (best_move, ponder) = parse_bestmove(&bestmove)?;

        let continuation: Vec<String> = self
            .continuation
            .as_deref()
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        debug!(
            "Engine analysis: eval {}, best {}, ponder {:?}, {} continuation moves",
            evaluation,
            best_move,
            ponder,
            continuation.len()
        );

        Ok(EngineAnalysis {
            evaluation,
            best_move,
            ponder,
            continuation,
        })
    }
}

/// Splits a `bestmove` field into the best move and optional ponder move.
///
/// Accepts both the full UCI line (`"bestmove e2e4 ponder e7e5"`) and a bare
/// move (`"e2e4"`).
pub fn parse_bestmove(field: &str) -> Result<(String, Option<String>), EngineResponseError> {
    let mut parts = field.split_whitespace().peekable();
    if parts.peek() == Some(&"bestmove") {
        parts.next();
    }

    let best = match parts.next() {
        Some("(none)") | None => return Err(EngineResponseError::MissingBestMove),
        Some(mv) => mv.to_string(),
    };

    let ponder = match (parts.next(), parts.next()) {
        (None, _) => None,
        (Some("ponder"), Some(mv)) => Some(mv.to_string()),
        _ => return Err(EngineResponseError::MalformedBestMove(field.to_string())),
    };

    Ok((best, ponder))
}
