use config::Config;
use events::EventPublisher;
use std::sync::Arc;
use store::ItemStore;
use ws::Manager;

pub mod config;
pub mod logging;

// Service-level state containing the process-wide item store, the WebSocket
// connection manager and the event publisher wired to it. Constructed once at
// startup and passed by handle to every request handler; needs to implement
// Clone to be able to be passed into Router as State.
#[derive(Clone)]
pub struct AppState {
    pub item_store: Arc<ItemStore>,
    pub ws_manager: Arc<Manager>,
    pub event_publisher: EventPublisher,
    pub config: Config,
}

impl AppState {
    pub fn new(
        app_config: Config,
        item_store: &Arc<ItemStore>,
        ws_manager: &Arc<Manager>,
        event_publisher: EventPublisher,
    ) -> Self {
        Self {
            item_store: Arc::clone(item_store),
            ws_manager: Arc::clone(ws_manager),
            event_publisher,
            config: app_config,
        }
    }

    pub fn item_store_ref(&self) -> &ItemStore {
        self.item_store.as_ref()
    }
}
