//! WebSocket connection manager.
//!
//! Tracks every open bridge connection and the game table it is bound to.

use dashmap::DashMap;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::messages::ServerMessage;

/// State for a single WebSocket connection
struct ConnectionState {
    tx: mpsc::UnboundedSender<ServerMessage>,
    /// Set once the bridge authenticates
    game_id: Option<String>,
    user_name: Option<String>,
}

/// Manager for all WebSocket connections
pub struct WebSocketManager {
    connections: DashMap<String, ConnectionState>,
}

impl Default for WebSocketManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WebSocketManager {
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
        }
    }

    pub(crate) fn add_connection(
        &self,
        session_id: String,
        tx: mpsc::UnboundedSender<ServerMessage>,
    ) {
        debug!(session_id = %session_id, "Adding WebSocket connection");
        self.connections.insert(
            session_id,
            ConnectionState {
                tx,
                game_id: None,
                user_name: None,
            },
        );
    }

    pub(crate) fn remove_connection(&self, session_id: &str) {
        debug!(session_id = %session_id, "Removing WebSocket connection");
        self.connections.remove(session_id);
    }

    /// Bind a connection to a game; false if the connection is gone
    pub(crate) fn authenticate(&self, session_id: &str, game_id: String, user_name: String) -> bool {
        let Some(mut conn) = self.connections.get_mut(session_id) else {
            return false;
        };
        conn.game_id = Some(game_id);
        conn.user_name = Some(user_name);
        true
    }

    /// Game the connection is bound to, `None` before authentication
    pub fn game_id(&self, session_id: &str) -> Option<String> {
        self.connections
            .get(session_id)
            .and_then(|conn| conn.game_id.clone())
    }

    pub fn user_name(&self, session_id: &str) -> Option<String> {
        self.connections
            .get(session_id)
            .and_then(|conn| conn.user_name.clone())
    }

    /// Send a message to a specific connection
    pub fn send_to(&self, session_id: &str, msg: ServerMessage) {
        if let Some(conn) = self.connections.get(session_id)
            && conn.tx.send(msg).is_err()
        {
            warn!(session_id = %session_id, "Failed to send message to connection");
        }
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Connections bound to a game table
    pub fn authenticated_count(&self) -> usize {
        self.connections
            .iter()
            .filter(|entry| entry.value().game_id.is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_lifecycle() {
        let manager = WebSocketManager::new();
        let (tx, mut rx) = mpsc::unbounded_channel();

        manager.add_connection("session1".to_string(), tx);
        assert_eq!(manager.connection_count(), 1);
        assert_eq!(manager.authenticated_count(), 0);
        assert!(manager.game_id("session1").is_none());

        assert!(manager.authenticate("session1", "campaign-7".to_string(), "GM".to_string()));
        assert_eq!(manager.game_id("session1").as_deref(), Some("campaign-7"));
        assert_eq!(manager.user_name("session1").as_deref(), Some("GM"));
        assert_eq!(manager.authenticated_count(), 1);

        manager.send_to("session1", ServerMessage::Pong { timestamp: 1 });
        assert!(matches!(rx.try_recv(), Ok(ServerMessage::Pong { timestamp: 1 })));

        manager.remove_connection("session1");
        assert_eq!(manager.connection_count(), 0);
        assert!(!manager.authenticate("session1", "x".to_string(), "y".to_string()));
    }
}
