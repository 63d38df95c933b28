//! WebSocket message handlers.
//!
//! Contains the logic for handling incoming WebSocket connections
//! and processing client messages.

use axum::extract::ws::{Message, WebSocket};
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::commands::ChatEvent;
use crate::service::SwrpgService;

use super::messages::{ClientMessage, ServerMessage};

/// Handle a WebSocket connection
///
/// Runs until the client disconnects. Outgoing messages go through an
/// unbounded channel drained by a separate send task.
pub async fn handle_ws_connection(socket: WebSocket, service: Arc<SwrpgService>) {
    let session_id = uuid::Uuid::new_v4().to_string();

    let (mut ws_tx, mut ws_rx) = socket.split();
    let (msg_tx, mut msg_rx) = mpsc::unbounded_channel::<ServerMessage>();
    service.ws_manager.add_connection(session_id.clone(), msg_tx);
    info!(
        session_id = %session_id,
        connections = service.ws_manager.connection_count(),
        "New WebSocket connection"
    );

    let send_session_id = session_id.clone();
    let send_task = tokio::spawn(async move {
        while let Some(msg) = msg_rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(json) => {
                    if ws_tx.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    error!(error = %e, "Failed to serialize WebSocket message");
                }
            }
        }
        debug!(session_id = %send_session_id, "WebSocket send task ended");
    });

    while let Some(result) = ws_rx.next().await {
        match result {
            Ok(Message::Text(text)) => {
                handle_client_message(&session_id, &text, &service);
            }
            Ok(Message::Binary(data)) => {
                if let Ok(text) = std::str::from_utf8(&data) {
                    handle_client_message(&session_id, text, &service);
                }
            }
            // axum answers pings itself
            Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => {}
            Ok(Message::Close(_)) => {
                info!(session_id = %session_id, "WebSocket connection closed by client");
                break;
            }
            Err(e) => {
                error!(session_id = %session_id, error = %e, "WebSocket error");
                break;
            }
        }
    }

    service.ws_manager.remove_connection(&session_id);
    send_task.abort();
    info!(session_id = %session_id, "WebSocket connection closed");
}

/// Handle a client message
fn handle_client_message(session_id: &str, text: &str, service: &SwrpgService) {
    let ws_manager = &service.ws_manager;
    let msg: ClientMessage = match serde_json::from_str(text) {
        Ok(msg) => msg,
        Err(e) => {
            warn!(
                session_id = %session_id,
                error = %e,
                "Failed to parse client message"
            );
            ws_manager.send_to(
                session_id,
                ServerMessage::error("parse_error", format!("Failed to parse message: {}", e)),
            );
            return;
        }
    };

    match msg {
        ClientMessage::Auth { game_id, user_name } => {
            ws_manager.authenticate(session_id, game_id.clone(), user_name);
            ws_manager.send_to(
                session_id,
                ServerMessage::AuthResponse {
                    success: true,
                    session_id: session_id.to_string(),
                },
            );
            info!(
                session_id = %session_id,
                game_id = %game_id,
                "WebSocket connection authenticated"
            );
        }
        ClientMessage::Ping => {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0);
            ws_manager.send_to(session_id, ServerMessage::Pong { timestamp });
        }
        ClientMessage::Chat { kind, content, who } => {
            let Some(game_id) = ws_manager.game_id(session_id) else {
                ws_manager.send_to(
                    session_id,
                    ServerMessage::error("not_authenticated", "Send auth before chat events"),
                );
                return;
            };
            debug!(
                session_id = %session_id,
                game_id = %game_id,
                bridge_user = ?ws_manager.user_name(session_id),
                "Chat event from bridge"
            );
            let event = ChatEvent { kind, content, who };
            for reply in service.handle_chat_event(&game_id, &event) {
                ws_manager.send_to(session_id, reply.into());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;

    fn connected() -> (SwrpgService, mpsc::UnboundedReceiver<ServerMessage>) {
        let service = SwrpgService::new(SessionConfig::default());
        let (tx, rx) = mpsc::unbounded_channel();
        service.ws_manager.add_connection("s1".to_string(), tx);
        (service, rx)
    }

    #[test]
    fn test_client_message_deserialization() {
        let msg: ClientMessage =
            serde_json::from_str(r#"{"type":"auth","game_id":"g1","user_name":"GM"}"#).unwrap();
        assert!(matches!(msg, ClientMessage::Auth { ref game_id, .. } if game_id == "g1"));

        let msg: ClientMessage = serde_json::from_str(r#"{"type":"ping"}"#).unwrap();
        assert!(matches!(msg, ClientMessage::Ping));

        let msg: ClientMessage = serde_json::from_str(
            r#"{"type":"chat","chat_type":"api","content":"!swrpg-ui"}"#,
        )
        .unwrap();
        match msg {
            ClientMessage::Chat { kind, content, who } => {
                assert_eq!(kind, "api");
                assert_eq!(content, "!swrpg-ui");
                assert!(who.is_none());
            }
            _ => panic!("Expected Chat message"),
        }
    }

    #[test]
    fn test_server_message_serialization() {
        let json = serde_json::to_string(&ServerMessage::RollDice {
            speaking_as: "Contact".to_string(),
            command: "!eed 2g 1p".to_string(),
        })
        .unwrap();
        assert!(json.contains(r#""type":"roll_dice""#));
        assert!(json.contains(r#""command":"!eed 2g 1p""#));

        let json = serde_json::to_string(&ServerMessage::error("parse_error", "bad")).unwrap();
        assert!(json.contains(r#""type":"error""#));
        assert!(json.contains(r#""recoverable":true"#));
    }

    #[test]
    fn test_chat_before_auth_is_rejected() {
        let (service, mut rx) = connected();
        handle_client_message(
            "s1",
            r#"{"type":"chat","chat_type":"api","content":"!swrpg-ui"}"#,
            &service,
        );
        assert!(matches!(
            rx.try_recv(),
            Ok(ServerMessage::Error { ref code, .. }) if code == "not_authenticated"
        ));
        assert_eq!(service.active_sessions(), 0);
    }

    #[test]
    fn test_authenticated_chat_gets_replies() {
        let (service, mut rx) = connected();
        handle_client_message("s1", r#"{"type":"auth","game_id":"g1","user_name":"GM"}"#, &service);
        assert!(matches!(
            rx.try_recv(),
            Ok(ServerMessage::AuthResponse { success: true, .. })
        ));

        handle_client_message(
            "s1",
            r#"{"type":"chat","chat_type":"api","content":"!swrpg-ui","who":"GM"}"#,
            &service,
        );
        match rx.try_recv() {
            Ok(ServerMessage::SendChat { content, noarchive, .. }) => {
                assert!(content.starts_with("/w gm "));
                assert!(content.contains("{{title=GM Tools}}"));
                assert!(noarchive);
            }
            other => panic!("Expected SendChat, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let (service, mut rx) = connected();
        handle_client_message("s1", "not json", &service);
        assert!(matches!(
            rx.try_recv(),
            Ok(ServerMessage::Error { ref code, .. }) if code == "parse_error"
        ));
    }
}
