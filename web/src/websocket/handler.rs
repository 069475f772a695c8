use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use log::*;
use service::AppState;
use tokio::sync::mpsc;
use ws::message::{Frame, Inbound};

/// WebSocket endpoint for real-time communication. Echoes each parsed client
/// frame back with an acknowledgment and carries the mutation broadcasts
/// pushed through the connection manager.
pub(crate) async fn ws_endpoint(
    ws: WebSocketUpgrade,
    State(app_state): State<AppState>,
) -> Response {
    debug!("WebSocket connection requested");
    ws.on_upgrade(move |socket| handle_socket(socket, app_state))
}

/// Per-connection lifecycle: register the connection's outbound channel with
/// the manager, drain that channel into the socket from a separate task, then
/// run the receive loop until the peer disconnects.
async fn handle_socket(socket: WebSocket, app_state: AppState) {
    let (mut sink, mut stream) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let connection_id = app_state.ws_manager.register_connection(tx.clone());
    info!(
        "WebSocket connection {} established",
        connection_id.as_str()
    );

    // Echo replies and broadcasts share one channel, so writes to the socket
    // never interleave.
    let send_task = tokio::spawn(async move {
        while let Some(message) = rx.recv().await {
            if sink.send(message).await.is_err() {
                // Peer is gone; the receive loop will notice and clean up.
                break;
            }
        }
    });

    while let Some(Ok(message)) = stream.next().await {
        match message {
            Message::Text(text) => match serde_json::from_str::<Inbound>(&text) {
                Ok(inbound) => match serde_json::to_string(&echo_frame(&inbound)) {
                    Ok(json) => {
                        if tx.send(Message::Text(json)).is_err() {
                            break;
                        }
                    }
                    Err(e) => error!("Failed to serialize echo frame: {e}"),
                },
                // Malformed frames are dropped; the connection stays open.
                Err(e) => warn!("Dropping malformed WebSocket frame: {e}"),
            },
            Message::Close(_) => {
                debug!("Client requested close");
                break;
            }
            // Ping/pong are answered by axum itself; binary frames are ignored.
            _ => {}
        }
    }

    app_state.ws_manager.unregister_connection(&connection_id);
    send_task.abort();
    info!("WebSocket connection {} closed", connection_id.as_str());
}

/// Build the acknowledgment frame for one received client frame.
fn echo_frame(inbound: &Inbound) -> Frame {
    Frame::Echo(format!("Received: {}", inbound.data))
}
