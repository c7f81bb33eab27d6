//! Network transport: token issuance over HTTPS and the streaming WebSocket.

pub mod auth;
pub mod ws;
