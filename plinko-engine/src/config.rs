use std::env;

#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub server_url: String,
    pub request_timeout_secs: u64,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self {
            server_url: env::var("GAME_SERVER_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            request_timeout_secs: env::var("GAME_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
        }
    }
}
