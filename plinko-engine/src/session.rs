use crate::amount::{self, AmountEditor};
use crate::client::{BetError, GameBackend};
use crate::outcome::{PayoutTable, RoundResult};
use crate::simulator::{BallSimulator, LandingReceiver};
use crate::types::{BallDrop, Landing, RiskLevel};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::{info, warn};
use uuid::Uuid;

/// Stake and timing captured when a bet was accepted, keyed by ticket
/// until its drop lands.
#[derive(Debug, Clone)]
struct PendingBet {
    stake: f64,
    placed_at: DateTime<Utc>,
}

/// One game session: the amount editor, the submission path to the game
/// server, and settlement of landings reported by the ball simulator.
///
/// `place_bet` takes `&self`, so overlapping submissions are possible and
/// are not serialized; each accepted bet is its own ticketed drop. Payouts
/// are computed against the stake captured at submission time, not against
/// whatever is committed when the drop lands.
pub struct GameSession<B, S> {
    backend: B,
    simulator: S,
    editor: AmountEditor,
    risk: RiskLevel,
    payouts: PayoutTable,
    pending: DashMap<Uuid, PendingBet>,
    landings: LandingReceiver,
    last_result: Option<RoundResult>,
}

impl<B: GameBackend, S: BallSimulator> GameSession<B, S> {
    pub fn new(backend: B, simulator: S, landings: LandingReceiver, payouts: PayoutTable) -> Self {
        Self {
            backend,
            simulator,
            editor: AmountEditor::new(),
            risk: RiskLevel::default(),
            payouts,
            pending: DashMap::new(),
            landings,
            last_result: None,
        }
    }

    pub fn editor(&self) -> &AmountEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut AmountEditor {
        &mut self.editor
    }

    pub fn risk(&self) -> RiskLevel {
        self.risk
    }

    pub fn set_risk(&mut self, risk: RiskLevel) {
        self.risk = risk;
    }

    /// Drops that have been accepted by the server but have not landed yet.
    pub fn pending_drops(&self) -> usize {
        self.pending.len()
    }

    /// The most recently landed result, if any drop has settled.
    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Submit the committed amount as one bet.
    ///
    /// The committed text is validated first; a malformed or negative
    /// amount returns `BetError::InvalidAmount` and nothing leaves the
    /// process. A failed request also returns before the simulator is
    /// touched. On success the drop is scheduled under a fresh ticket and
    /// the stake is captured for settlement.
    pub async fn place_bet(&self) -> Result<Uuid, BetError> {
        let committed = self.editor.committed().to_string();
        let stake = amount::parse_amount(&committed).map_err(BetError::InvalidAmount)?;

        let point = self.backend.request_drop(&committed, self.risk).await?;

        let ticket = Uuid::new_v4();
        self.pending.insert(
            ticket,
            PendingBet {
                stake,
                placed_at: Utc::now(),
            },
        );
        self.simulator.add_ball(BallDrop { ticket, point });

        info!(
            "🎯 Bet {} placed: {} at {} -> drop point {:.1}",
            ticket, committed, self.risk, point
        );
        Ok(ticket)
    }

    /// Await the next settled drop.
    ///
    /// Landings arrive in whatever order the simulator finishes drops, not
    /// submission order. Returns None once the landing channel is closed
    /// and drained.
    pub async fn next_result(&mut self) -> Option<RoundResult> {
        loop {
            let landing = self.landings.recv().await?;
            if let Some(result) = self.settle(landing) {
                return Some(result);
            }
        }
    }

    fn settle(&mut self, landing: Landing) -> Option<RoundResult> {
        let bet = match self.pending.remove(&landing.ticket) {
            Some((_, bet)) => bet,
            None => {
                warn!("Landing for unknown ticket {}, skipping", landing.ticket);
                return None;
            }
        };

        let (multiplier, payout) = self.payouts.resolve(landing.bucket, bet.stake);
        let settled_at = Utc::now();
        info!(
            "🏁 Ticket {} landed in bucket {} after {}ms: {}x -> {:.4}",
            landing.ticket,
            landing.bucket,
            (settled_at - bet.placed_at).num_milliseconds(),
            multiplier,
            payout
        );

        let result = RoundResult {
            ticket: landing.ticket,
            bucket: landing.bucket,
            multiplier,
            stake: bet.stake,
            payout,
            settled_at,
        };
        self.last_result = Some(result.clone());
        Some(result)
    }
}
