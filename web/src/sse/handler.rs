use async_stream::stream;
use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use chrono::Utc;
use futures::{Stream, StreamExt};
use log::*;
use service::AppState;
use std::convert::Infallible;
use std::time::Duration;

/// SSE handler that streams the current server time as a `tick` event on a
/// fixed interval, indefinitely, until the client disconnects. Every
/// subscriber gets its own independent producer; dropping the response body
/// drops the producer with it.
pub(crate) async fn sse_stream(
    State(app_state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    debug!("Establishing SSE tick stream");

    let period = Duration::from_secs(app_state.config.tick_interval_secs);
    let stream =
        tick_stream(period).map(|payload| Ok(Event::default().event("tick").data(payload)));

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// Infinite sequence of tick payloads. The first tick fires immediately,
/// then one per period.
pub(crate) fn tick_stream(period: Duration) -> impl Stream<Item = String> {
    stream! {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            yield format!("Server time: {}", Utc::now().to_rfc3339());
        }
    }
}
