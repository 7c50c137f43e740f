use crate::types::{BetRequest, RiskLevel};
use rand::Rng;
use std::fmt;

/// Width of the board the simulator drops across, in canvas units.
pub const BOARD_WIDTH: f64 = 800.0;

const CENTER: f64 = BOARD_WIDTH / 2.0;

/// Why a bet was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BetRejection {
    Malformed(String),
    Negative(String),
}

impl fmt::Display for BetRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetRejection::Malformed(text) => write!(f, "malformed bet amount '{}'", text),
            BetRejection::Negative(text) => write!(f, "negative bet amount '{}'", text),
        }
    }
}

/// Validate the wire amount and return the parsed stake.
/// The amount travels as a string; anything that is not a non-negative
/// finite decimal is refused here, before a drop point is spent on it.
pub fn validate_bet(req: &BetRequest) -> Result<f64, BetRejection> {
    let amount: f64 = req
        .bet_amount
        .trim()
        .parse()
        .map_err(|_| BetRejection::Malformed(req.bet_amount.clone()))?;
    if !amount.is_finite() {
        return Err(BetRejection::Malformed(req.bet_amount.clone()));
    }
    if amount < 0.0 {
        return Err(BetRejection::Negative(req.bet_amount.clone()));
    }
    Ok(amount)
}

/// Half-width of the spawn band per risk level. Wider bands reach the
/// volatile edge buckets.
fn half_band(risk: RiskLevel) -> f64 {
    match risk {
        RiskLevel::Low => 40.0,
        RiskLevel::Medium => 120.0,
        RiskLevel::High => 260.0,
    }
}

/// Pick a drop start position for the given risk level, uniform within
/// the risk's band around the board center.
pub fn pick_drop_point(risk: RiskLevel) -> f64 {
    let half = half_band(risk);
    rand::rng().random_range(CENTER - half..=CENTER + half)
}
