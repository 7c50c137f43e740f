mod config;
mod game;
mod types;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use config::Config;
use std::{net::SocketAddr, sync::Arc, time::Instant};
use tokio::sync::{broadcast, RwLock};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use types::{BetRequest, DropResponse, ErrorBody, RoundEvent, ServerStats};

// Shared state accessible by all handlers
pub struct AppState {
    pub tx: broadcast::Sender<RoundEvent>,
    pub stats: RwLock<ServerStats>,
    pub started_at: Instant,
}

pub type SharedState = Arc<AppState>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    dotenvy::dotenv().ok();

    info!("🚀 Starting plinko-server...");

    let config = Config::from_env();

    let (tx, _rx) = broadcast::channel(1000);
    let state: SharedState = Arc::new(AppState {
        tx,
        stats: RwLock::new(ServerStats::default()),
        started_at: Instant::now(),
    });

    let app = Router::new()
        .route("/game", post(place_bet))
        .route("/health", get(health_check))
        .route("/stats", get(get_stats))
        .route("/ws", get(ws_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("🌐 Game server starting on {}", addr);
    info!("✅ plinko-server ready!");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

async fn health_check() -> &'static str {
    "OK"
}

/// Accept one bet: validate the amount, pick a drop start point for the
/// requested risk and hand it back for the client-side simulator.
async fn place_bet(State(state): State<SharedState>, Json(req): Json<BetRequest>) -> Response {
    match game::validate_bet(&req) {
        Ok(stake) => {
            let point = game::pick_drop_point(req.risk);
            {
                let mut stats = state.stats.write().await;
                stats.rounds_played += 1;
            }

            let event = RoundEvent {
                bet_amount: req.bet_amount.clone(),
                risk: req.risk,
                point,
                at: chrono::Utc::now().timestamp_millis(),
            };
            let _ = state.tx.send(event);

            info!(
                "🎲 Accepted {} bet of {:.4} -> drop point {:.1}",
                req.risk, stake, point
            );
            Json(DropResponse { point }).into_response()
        }
        Err(rejection) => {
            {
                let mut stats = state.stats.write().await;
                stats.bets_rejected += 1;
            }
            warn!("🚫 Rejected bet: {}", rejection);
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: rejection.to_string(),
                }),
            )
                .into_response()
        }
    }
}

async fn get_stats(State(state): State<SharedState>) -> impl IntoResponse {
    let mut stats = state.stats.read().await.clone();
    stats.uptime_seconds = state.started_at.elapsed().as_secs();
    Json(stats)
}

async fn ws_handler(ws: WebSocketUpgrade, State(state): State<SharedState>) -> impl IntoResponse {
    info!("👤 New WebSocket client connecting...");
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// Forward every accepted round to the subscriber until it hangs up.
async fn handle_socket(mut socket: WebSocket, state: SharedState) {
    info!("✅ WebSocket client connected");
    {
        let mut stats = state.stats.write().await;
        stats.ws_clients += 1;
    }
    let mut rx = state.tx.subscribe();

    while let Ok(event) = rx.recv().await {
        if let Ok(json) = serde_json::to_string(&event) {
            if socket.send(Message::Text(json)).await.is_err() {
                info!("❌ WebSocket client disconnected");
                break;
            }
        }
    }

    let mut stats = state.stats.write().await;
    stats.ws_clients = stats.ws_clients.saturating_sub(1);
}
