//! WebSocket message types.
//!
//! Defines the client-to-server and server-to-client message formats
//! for WebSocket communication.

use serde::{Deserialize, Serialize};

use crate::chat::Reply;

/// Messages sent from client to server
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Bind the connection to a game table
    Auth { game_id: String, user_name: String },
    /// Keepalive ping
    Ping,
    /// A chat event seen by the bridge
    Chat {
        #[serde(rename = "chat_type")]
        kind: String,
        content: String,
        #[serde(default)]
        who: Option<String>,
    },
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Response to authentication attempt
    AuthResponse { success: bool, session_id: String },
    /// Keepalive pong response
    Pong { timestamp: u64 },
    /// Post a chat message
    SendChat {
        speaking_as: String,
        content: String,
        noarchive: bool,
    },
    /// Roll a dice pool through the host's dice roller
    RollDice { speaking_as: String, command: String },
    /// Error message
    Error {
        code: String,
        message: String,
        recoverable: bool,
    },
}

impl ServerMessage {
    pub fn error(code: &str, message: impl Into<String>) -> Self {
        ServerMessage::Error {
            code: code.to_string(),
            message: message.into(),
            recoverable: true,
        }
    }
}

impl From<Reply> for ServerMessage {
    fn from(reply: Reply) -> Self {
        match reply {
            Reply::Chat(chat) => ServerMessage::SendChat {
                speaking_as: chat.speaking_as,
                content: chat.content,
                noarchive: chat.noarchive,
            },
            Reply::Roll(roll) => ServerMessage::RollDice {
                speaking_as: roll.speaking_as,
                command: roll.command,
            },
        }
    }
}
