//! Event system infrastructure for the live items service.
//!
//! This crate provides the event system that enables loose coupling between
//! domain logic and infrastructure concerns (like WebSocket notifications).
//!
//! # Architecture
//!
//! - **DomainEvent**: Enum representing all business events in the system
//! - **EventHandler**: Trait for implementing event handlers
//! - **EventPublisher**: Publishes events to registered handlers
//!
//! This crate has no dependencies on internal crates (store, domain, etc.),
//! avoiding circular dependencies. Events carry only the item identifier and
//! name, which is all the notification layer needs.

use async_trait::async_trait;
use std::sync::Arc;

/// A type alias that represents an item's internal id field data type.
/// This matches the definition in the store crate to maintain compatibility.
pub type Id = u64;

/// Domain events that represent business-level changes in the system.
/// These events are emitted when domain operations complete successfully,
/// after the store mutation and before the operation returns to its caller.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainEvent {
    /// Emitted when a new item is created.
    ItemCreated { id: Id, name: String },
    /// Emitted when an item is fully replaced.
    ItemUpdated { id: Id, name: String },
    /// Emitted when an item is partially updated.
    ItemPatched { id: Id, name: String },
    /// Emitted when an item is permanently removed.
    ItemDeleted { id: Id, name: String },
}

/// Trait for handling domain events.
/// Implementations can perform side effects like sending notifications,
/// updating caches, logging, etc.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: &DomainEvent);
}

/// Publishes domain events to registered handlers.
/// Handlers are called sequentially in registration order.
#[derive(Clone)]
pub struct EventPublisher {
    handlers: Arc<Vec<Arc<dyn EventHandler>>>,
}

impl EventPublisher {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(Vec::new()),
        }
    }

    /// Register a new event handler.
    /// Note: This creates a new publisher instance with the additional handler.
    /// Store the returned publisher in your application state.
    pub fn with_handler(mut self, handler: Arc<dyn EventHandler>) -> Self {
        let mut handlers = (*self.handlers).clone();
        handlers.push(handler);
        self.handlers = Arc::new(handlers);
        self
    }

    /// Publish an event to all registered handlers.
    /// Handler failures stay inside the handler; publishing never fails and
    /// never interrupts the operation that triggered the event.
    pub async fn publish(&self, event: DomainEvent) {
        for handler in self.handlers.iter() {
            handler.handle(&event).await;
        }
    }
}

impl Default for EventPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingHandler {
        seen: Mutex<Vec<DomainEvent>>,
    }

    #[async_trait]
    impl EventHandler for RecordingHandler {
        async fn handle(&self, event: &DomainEvent) {
            self.seen.lock().unwrap().push(event.clone());
        }
    }

    #[tokio::test]
    async fn publish_reaches_every_registered_handler() {
        let first = Arc::new(RecordingHandler {
            seen: Mutex::new(Vec::new()),
        });
        let second = Arc::new(RecordingHandler {
            seen: Mutex::new(Vec::new()),
        });
        let publisher = EventPublisher::new()
            .with_handler(first.clone())
            .with_handler(second.clone());

        let event = DomainEvent::ItemCreated {
            id: 7,
            name: "Widget".to_string(),
        };
        publisher.publish(event.clone()).await;

        assert_eq!(first.seen.lock().unwrap().as_slice(), &[event.clone()]);
        assert_eq!(second.seen.lock().unwrap().as_slice(), &[event]);
    }

    #[tokio::test]
    async fn publish_without_handlers_is_a_no_op() {
        let publisher = EventPublisher::new();
        publisher
            .publish(DomainEvent::ItemDeleted {
                id: 1,
                name: "Gone".to_string(),
            })
            .await;
    }
}
