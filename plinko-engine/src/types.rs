use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Risk setting sent alongside every bet. Independent of the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    #[default]
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

/// Bet payload for POST /game. The amount travels as the committed string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetRequest {
    pub bet_amount: String,
    pub risk: RiskLevel,
}

/// Server reply: the drop start position for the simulator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DropResponse {
    pub point: f64,
}

/// One scheduled drop handed to the simulator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallDrop {
    pub ticket: Uuid,
    pub point: f64,
}

/// Landing event, reported exactly once per finished drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landing {
    pub ticket: Uuid,
    pub bucket: usize,
}
