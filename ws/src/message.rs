use serde::{Deserialize, Serialize};

/// Server-originated frames on the `/ws` channel, serialized as
/// `{"event": "...", "data": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "lowercase")]
pub enum Frame {
    /// Pushed to every open connection when a CRUD mutation occurs.
    Broadcast(String),
    /// Per-connection acknowledgment of a received client frame.
    Echo(String),
}

/// A client-originated frame. The `event` field is free-form; only `data`
/// feeds the echo reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inbound {
    pub event: String,
    pub data: String,
}
