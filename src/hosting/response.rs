use crate::game::Choice;
use crate::game::Outcome;
use crate::game::Round;
use serde::Serialize;

/// Error body for rejected choices.
pub const INVALID_CHOICE: &str = "Invalid choice. Must be rock, paper, or scissors";
/// Error body for malformed query strings.
pub const INVALID_QUERY: &str = "Invalid query parameters";
/// Error body for unknown routes.
pub const NOT_FOUND: &str = "Route not found";
/// Error body when the statistics store cannot be reached.
pub const UNAVAILABLE: &str = "Statistics store unavailable";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayResponse {
    pub player_choice: Choice,
    pub computer_choice: Choice,
    pub outcome: Outcome,
    pub message: &'static str,
}

impl From<Round> for PlayResponse {
    fn from(round: Round) -> Self {
        Self {
            player_choice: round.player(),
            computer_choice: round.computer(),
            outcome: round.outcome(),
            message: round.outcome().message(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub timestamp: u64,
    pub uptime: f64,
}

#[derive(Debug, Serialize)]
pub struct ServiceHealth {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}
