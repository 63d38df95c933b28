pub mod state;

use dashmap::DashMap;
use metrics::gauge;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::chat::Reply;
use crate::commands::{self, ChatEvent};
use crate::config::SessionConfig;
use crate::websocket::WebSocketManager;

use state::GameSession;

/// Main service coordinator
///
/// Owns one [`GameSession`] per game id. Chat events for the same game are
/// handled one at a time because the session entry stays locked for the
/// whole dispatch.
pub struct SwrpgService {
    sessions: DashMap<String, GameSession>,
    pub ws_manager: Arc<WebSocketManager>,
    session_config: SessionConfig,
    started_at: Instant,
}

impl SwrpgService {
    pub fn new(session_config: SessionConfig) -> Self {
        info!(
            idle_timeout_secs = session_config.idle_timeout_secs,
            "Initializing SWRPG service"
        );
        Self {
            sessions: DashMap::new(),
            ws_manager: Arc::new(WebSocketManager::new()),
            session_config,
            started_at: Instant::now(),
        }
    }

    /// Handle one chat event from a game table
    ///
    /// Events that are not our commands produce no replies and do not
    /// create a session.
    pub fn handle_chat_event(&self, game_id: &str, event: &ChatEvent) -> Vec<Reply> {
        let Some(envelope) = commands::parse_envelope(event) else {
            return Vec::new();
        };

        debug!(
            game_id = %game_id,
            command = %envelope.name,
            args = ?envelope.args,
            who = ?event.who,
            "Handling command"
        );

        let replies = {
            let mut session = self.sessions.entry(game_id.to_string()).or_default();
            session.touch();
            commands::handle(&mut session, &envelope)
        };
        self.record_active_sessions();
        replies
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Drop sessions idle for longer than `timeout`
    pub fn cleanup_idle_sessions(&self, timeout: Duration) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| !session.is_idle(timeout));
        let removed = before.saturating_sub(self.sessions.len());
        self.record_active_sessions();
        removed
    }

    fn record_active_sessions(&self) {
        gauge!("swrpg_active_sessions").set(self.sessions.len() as f64);
    }

    /// Start the background task that drops idle sessions
    pub fn start_session_sweeper(service: Arc<Self>) {
        let interval = service.session_config.cleanup_interval();
        let timeout = service.session_config.idle_timeout();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                let removed = service.cleanup_idle_sessions(timeout);
                if removed > 0 {
                    info!(removed, "Cleaned up idle game sessions");
                }
            }
        });
    }
}
