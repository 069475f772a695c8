//! HTTP surface for the live items service: REST controllers, the SSE tick
//! stream, the WebSocket channel and the router wiring them together.

pub(crate) use error::Error;
pub(crate) use service::AppState;

pub(crate) mod controller;
pub mod error;
pub(crate) mod params;
pub mod router;
pub(crate) mod sse;
pub(crate) mod websocket;
