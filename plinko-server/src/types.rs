use serde::{Deserialize, Serialize};
use std::fmt;

/// Risk setting a client submits with its bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        };
        write!(f, "{}", s)
    }
}

/// Incoming bet from the game page.
/// Matches the same wire format the engine's client sends.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetRequest {
    pub bet_amount: String,
    pub risk: RiskLevel,
}

/// Reply carrying the drop start position for the client-side simulator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DropResponse {
    pub point: f64,
}

/// Error body for rejected bets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Accepted round, broadcast to /ws subscribers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundEvent {
    pub bet_amount: String,
    pub risk: RiskLevel,
    pub point: f64,
    /// When the bet was accepted (ms since epoch)
    pub at: i64,
}

/// Stats for monitoring.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServerStats {
    pub rounds_played: u64,
    pub bets_rejected: u64,
    pub ws_clients: usize,
    pub uptime_seconds: u64,
}
