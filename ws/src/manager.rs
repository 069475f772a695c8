use crate::connection::{ConnectionId, ConnectionRegistry};
use crate::message::Frame;
use axum::extract::ws::Message;
use log::*;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

pub struct Manager {
    registry: Arc<ConnectionRegistry>,
}

impl Manager {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(ConnectionRegistry::new()),
        }
    }

    /// Register a new connection and return its unique ID
    pub fn register_connection(&self, sender: UnboundedSender<Message>) -> ConnectionId {
        let connection_id = self.registry.register(sender);
        info!("Registered new WebSocket connection");
        connection_id
    }

    /// Unregister a connection by ID
    pub fn unregister_connection(&self, connection_id: &ConnectionId) {
        info!("Unregistering WebSocket connection");
        self.registry.unregister(connection_id);
    }

    /// Serialize a frame once and deliver it to every open connection.
    pub fn broadcast(&self, frame: Frame) {
        let payload = match serde_json::to_string(&frame) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize WebSocket frame: {e}");
                return;
            }
        };

        self.registry.broadcast(payload);
    }

    pub fn connection_count(&self) -> usize {
        self.registry.len()
    }
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}
