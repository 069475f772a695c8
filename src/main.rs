use std::sync::Arc;

use events::EventPublisher;
use log::*;
use service::config::Config;
use service::logging::Logger;
use service::AppState;
use store::ItemStore;
use ws::{Manager, WsDomainEventHandler};

#[tokio::main]
async fn main() {
    let config = Config::new();
    Logger::init_logger(&config);

    info!(
        "Starting live items server in {} mode",
        config.runtime_env()
    );

    // Process-wide state, constructed once and handed to every handler.
    let item_store = Arc::new(ItemStore::new());
    store::seed(&item_store);
    info!("Seeded item store with {} item(s)", item_store.len());

    let ws_manager = Arc::new(Manager::new());
    let event_publisher =
        EventPublisher::new().with_handler(Arc::new(WsDomainEventHandler::new(ws_manager.clone())));

    let app_state = AppState::new(config, &item_store, &ws_manager, event_publisher);

    let address = format!(
        "{}:{}",
        app_state.config.interface(),
        app_state.config.port
    );
    let router = web::router::define_routes(app_state);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .expect("Failed to bind server address");
    info!("Server listening on {address}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // No persistence across restarts.
    item_store.clear();
    info!("Item store cleared, server shut down");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    info!("Shutdown signal received");
}
