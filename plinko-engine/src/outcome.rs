use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Bucket multipliers used when no custom table is configured.
pub const STANDARD_MULTIPLIERS: [f64; 3] = [1.5, 2.0, 2.5];

/// Multiplier table mapping landing buckets to payout multipliers.
///
/// Bucket indices outside the table wrap around modulo the table length
/// rather than being rejected.
#[derive(Debug, Clone)]
pub struct PayoutTable {
    multipliers: Vec<f64>,
}

impl PayoutTable {
    /// Returns None for an empty table; the modulo mapping needs at least
    /// one entry.
    pub fn new(multipliers: Vec<f64>) -> Option<Self> {
        if multipliers.is_empty() {
            return None;
        }
        Some(Self { multipliers })
    }

    pub fn standard() -> Self {
        Self {
            multipliers: STANDARD_MULTIPLIERS.to_vec(),
        }
    }

    pub fn multiplier_for(&self, bucket: usize) -> f64 {
        self.multipliers[bucket % self.multipliers.len()]
    }

    /// Resolve a landing into (multiplier, payout) for the given stake.
    pub fn resolve(&self, bucket: usize, stake: f64) -> (f64, f64) {
        let multiplier = self.multiplier_for(bucket);
        (multiplier, stake * multiplier)
    }
}

impl Default for PayoutTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Settled outcome of a single drop. One slot of these is kept per
/// session; each landing overwrites the previous.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundResult {
    pub ticket: Uuid,
    pub bucket: usize,
    pub multiplier: f64,
    pub stake: f64,
    pub payout: f64,
    pub settled_at: DateTime<Utc>,
}
