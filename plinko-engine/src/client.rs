use crate::amount::AmountError;
use crate::types::{BetRequest, DropResponse, RiskLevel};
use reqwest::Client;
use std::error::Error;
use std::fmt;
use std::time::Duration;

/// Why a bet submission failed. Every variant is local to the attempted
/// bet; nothing here is fatal to the session.
#[derive(Debug)]
pub enum BetError {
    /// The committed amount failed validation before anything was sent.
    InvalidAmount(AmountError),
    /// Transport-level failure talking to the game server.
    Request(reqwest::Error),
    /// The server answered with a non-success status.
    Server { status: u16, body: String },
    /// The server answered 2xx but the body was not a drop response.
    MalformedResponse(serde_json::Error),
}

impl fmt::Display for BetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BetError::InvalidAmount(e) => write!(f, "invalid bet amount: {}", e),
            BetError::Request(e) => write!(f, "bet request failed: {}", e),
            BetError::Server { status, body } => {
                write!(f, "game server error {}: {}", status, body)
            }
            BetError::MalformedResponse(e) => write!(f, "malformed drop response: {}", e),
        }
    }
}

impl Error for BetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BetError::InvalidAmount(e) => Some(e),
            BetError::Request(e) => Some(e),
            BetError::Server { .. } => None,
            BetError::MalformedResponse(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for BetError {
    fn from(e: reqwest::Error) -> Self {
        BetError::Request(e)
    }
}

/// Seam between the session and the game server, so tests can stand in
/// for the real backend.
pub trait GameBackend {
    /// Submit one bet and return the drop start position on success.
    async fn request_drop(&self, bet_amount: &str, risk: RiskLevel) -> Result<f64, BetError>;
}

/// Client for the game server's /game endpoint.
pub struct HttpGameClient {
    client: Client,
    base_url: String,
}

impl HttpGameClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder().timeout(timeout).build().unwrap_or_default();

        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    pub fn from_config(config: &crate::config::EngineConfig) -> Self {
        Self::new(
            &config.server_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }
}

impl GameBackend for HttpGameClient {
    async fn request_drop(&self, bet_amount: &str, risk: RiskLevel) -> Result<f64, BetError> {
        let url = format!("{}/game", self.base_url);
        let body = BetRequest {
            bet_amount: bet_amount.to_string(),
            risk,
        };

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(BetError::Server {
                status: status.as_u16(),
                body: text,
            });
        }

        let drop: DropResponse =
            serde_json::from_str(&text).map_err(BetError::MalformedResponse)?;
        Ok(drop.point)
    }
}
