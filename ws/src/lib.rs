//! WebSocket broadcast infrastructure for real-time updates.
//!
//! This crate provides the connection registry and fan-out used to push
//! mutation notifications to every open WebSocket connection.
//!
//! # Architecture
//!
//! - **Opaque connection handles**: Each accepted WebSocket connection
//!   registers the sending half of an unbounded channel; the web layer owns
//!   the socket itself and drains the channel into it.
//! - **Stable snapshots**: Broadcasts iterate over a snapshot of the registry
//!   taken before iteration begins, so a connection closing mid-broadcast
//!   never disturbs delivery to the rest.
//! - **Fire and forget**: A failed delivery to one connection is logged and
//!   dropped. It never prevents delivery to the remaining connections and
//!   never propagates to the mutation that triggered the broadcast.
//! - **Ephemeral messages**: No retry and no dead-letter handling - a client
//!   that is offline when a mutation happens simply misses the event.
//!
//! # Message Flow
//!
//! 1. Client connects to the `/ws` endpoint
//! 2. The handler registers the connection's channel sender in the
//!    ConnectionRegistry and receives a ConnectionId
//! 3. When a domain operation mutates the item store it publishes a
//!    DomainEvent; [`WsDomainEventHandler`] converts it to a broadcast frame
//!    and hands it to the [`Manager`]
//! 4. The manager serializes the frame once and attempts delivery to every
//!    registered connection
//! 5. On disconnect the handler unregisters the ConnectionId
//!
//! # Modules
//!
//! - `connection`: ConnectionRegistry and type-safe ConnectionId
//! - `manager`: High-level broadcast routing (delegates to ConnectionRegistry)
//! - `message`: Wire frame definitions for the `/ws` channel
//! - `domain_event_handler`: Bridges domain events onto the broadcast channel

pub mod connection;
pub mod domain_event_handler;
pub mod manager;
pub mod message;

pub use domain_event_handler::WsDomainEventHandler;
pub use manager::Manager;
