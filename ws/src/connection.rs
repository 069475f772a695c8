use axum::extract::ws::Message;
use dashmap::DashMap;
use log::*;
use tokio::sync::mpsc::UnboundedSender;

/// Unique identifier for a connection (server-generated)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionId(String);

impl ConnectionId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry of live connection handles. Each handle is the sending half of
/// the channel feeding one open WebSocket; the socket itself stays with the
/// web layer.
pub struct ConnectionRegistry {
    /// Lookup by connection_id for registration/cleanup - O(1)
    connections: DashMap<ConnectionId, UnboundedSender<Message>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
        }
    }

    /// Register a new connection - O(1)
    pub fn register(&self, sender: UnboundedSender<Message>) -> ConnectionId {
        let connection_id = ConnectionId::new();
        self.connections.insert(connection_id.clone(), sender);
        connection_id
    }

    /// Unregister a connection - O(1)
    pub fn unregister(&self, connection_id: &ConnectionId) {
        self.connections.remove(connection_id);
    }

    /// A stable copy of the current handles, taken before fan-out so that
    /// connections closing mid-broadcast don't disturb iteration.
    pub fn snapshot(&self) -> Vec<(ConnectionId, UnboundedSender<Message>)> {
        self.connections
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Broadcast a text payload to all connections - O(n). A send failure
    /// for one connection is logged and skipped; the rest still receive
    /// their copy.
    pub fn broadcast(&self, text: String) {
        for (connection_id, sender) in self.snapshot() {
            if let Err(e) = sender.send(Message::Text(text.clone())) {
                warn!(
                    "Failed to send broadcast to connection {}: {}",
                    connection_id.as_str(),
                    e
                );
            }
        }
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
