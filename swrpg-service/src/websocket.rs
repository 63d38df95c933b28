//! WebSocket transport for the VTT bridge
//!
//! A browser-side bridge script connects, authenticates with its game id
//! and forwards `api` chat events. Replies come back as `send_chat` and
//! `roll_dice` messages for the bridge to post.

mod handlers;
mod manager;
pub mod messages;

pub use handlers::handle_ws_connection;
pub use manager::WebSocketManager;
