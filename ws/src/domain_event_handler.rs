use crate::message::Frame;
use crate::Manager;
use async_trait::async_trait;
use events::{DomainEvent, EventHandler};
use log::*;
use std::sync::Arc;

/// Handles domain events by converting them to broadcast frames and fanning
/// them out to every open WebSocket connection.
///
/// The domain layer decides when a mutation is worth announcing; this handler
/// only formats the human-readable description and routes it.
pub struct WsDomainEventHandler {
    ws_manager: Arc<Manager>,
}

impl WsDomainEventHandler {
    pub fn new(ws_manager: Arc<Manager>) -> Self {
        Self { ws_manager }
    }
}

#[async_trait]
impl EventHandler for WsDomainEventHandler {
    async fn handle(&self, event: &DomainEvent) {
        let description = match event {
            DomainEvent::ItemCreated { name, .. } => format!("Item created: {name}"),
            DomainEvent::ItemUpdated { name, .. } => format!("Item updated: {name}"),
            DomainEvent::ItemPatched { name, .. } => format!("Item patched: {name}"),
            DomainEvent::ItemDeleted { name, .. } => format!("Item deleted: {name}"),
        };

        debug!(
            "Broadcasting \"{}\" to {} connection(s)",
            description,
            self.ws_manager.connection_count()
        );

        self.ws_manager.broadcast(Frame::Broadcast(description));
    }
}
