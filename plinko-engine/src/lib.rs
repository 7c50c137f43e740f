//! Client-side core of a Plinko-style betting game: draft/commit bet
//! editing, bet submission to the game server, and settlement of drop
//! landings reported by an external ball simulator.

pub mod amount;
pub mod client;
pub mod config;
pub mod outcome;
pub mod session;
pub mod simulator;
pub mod types;

pub use amount::{format_amount, parse_amount, AmountEditor, AmountError, AMOUNT_STEP};
pub use client::{BetError, GameBackend, HttpGameClient};
pub use config::EngineConfig;
pub use outcome::{PayoutTable, RoundResult, STANDARD_MULTIPLIERS};
pub use session::GameSession;
pub use simulator::{landing_channel, BallSimulator, LandingReceiver, LandingSender};
pub use types::{BallDrop, BetRequest, DropResponse, Landing, RiskLevel};
