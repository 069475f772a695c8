use crate::controller::{health_check_controller, item_controller};
use crate::{params, sse, websocket, AppState};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use log::*;
use tower_http::cors::{AllowOrigin, CorsLayer};

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "Live Items API",
            description = "Demo: REST API, SSE, WebSocket"
        ),
        paths(
            item_controller::index,
            item_controller::read,
            item_controller::create,
            item_controller::update,
            item_controller::patch,
            item_controller::delete,
            health_check_controller::health_check,
        ),
        components(
            schemas(
                domain::items::Model,
                params::item::CreateParams,
                params::item::UpdateParams,
                params::item::PatchParams,
            )
        ),
        tags(
            (name = "live_items", description = "Live Items demo API")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(item_routes(app_state.clone()))
        .merge(health_routes())
        .merge(sse_routes(app_state.clone()))
        .merge(websocket_routes(app_state.clone()))
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
        .layer(cors_layer(&app_state))
}

fn item_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/items", get(item_controller::index))
        .route("/items", post(item_controller::create))
        .route("/items/:id", get(item_controller::read))
        .route("/items/:id", put(item_controller::update))
        .route("/items/:id", patch(item_controller::patch))
        .route("/items/:id", delete(item_controller::delete))
        .with_state(app_state)
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

fn sse_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/sse/stream", get(sse::handler::sse_stream))
        .with_state(app_state)
}

fn websocket_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/ws", get(websocket::handler::ws_endpoint))
        .with_state(app_state)
}

fn cors_layer(app_state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = app_state
        .config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Skipping invalid CORS origin {origin}: {e}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use clap::Parser;
    use domain::items::Model;
    use events::EventPublisher;
    use service::config::Config;
    use std::sync::Arc;
    use store::ItemStore;
    use tower::ServiceExt;
    use ws::WsDomainEventHandler;

    /// A fresh application state per test, seeded with the startup data set,
    /// wired the same way `main` wires it.
    fn test_state() -> AppState {
        let config = Config::parse_from(["live_items_rs"]);
        let item_store = Arc::new(ItemStore::new());
        store::seed(&item_store);
        let ws_manager = Arc::new(ws::Manager::new());
        let event_publisher = EventPublisher::new()
            .with_handler(Arc::new(WsDomainEventHandler::new(ws_manager.clone())));
        AppState::new(config, &item_store, &ws_manager, event_publisher)
    }

    fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn json_body<T: serde::de::DeserializeOwned>(
        response: axum::response::Response,
    ) -> Result<T> {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    #[tokio::test]
    async fn index_returns_the_seeded_items() -> Result<()> {
        let response = define_routes(test_state())
            .oneshot(empty_request(Method::GET, "/items"))
            .await?;
        assert_eq!(response.status(), StatusCode::OK);

        let items: Vec<Model> = json_body(response).await?;
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].name, "Item 1");
        assert_eq!(items[2].price, 30.0);
        Ok(())
    }

    #[tokio::test]
    async fn create_assigns_an_id_above_the_seeded_range() -> Result<()> {
        let response = define_routes(test_state())
            .oneshot(json_request(
                Method::POST,
                "/items",
                r#"{"name":"Test","price":10.0}"#,
            ))
            .await?;
        assert_eq!(response.status(), StatusCode::CREATED);

        let item: Model = json_body(response).await?;
        assert!(item.id > 3);
        assert_eq!(item.name, "Test");
        assert_eq!(item.price, 10.0);
        assert!(item.is_active);
        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_a_non_positive_price() -> Result<()> {
        let response = define_routes(test_state())
            .oneshot(json_request(
                Method::POST,
                "/items",
                r#"{"name":"Free","price":0.0}"#,
            ))
            .await?;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        Ok(())
    }

    #[tokio::test]
    async fn read_of_an_unknown_id_is_a_404() -> Result<()> {
        let response = define_routes(test_state())
            .oneshot(empty_request(Method::GET, "/items/9999"))
            .await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_all_fields_but_preserves_the_id() -> Result<()> {
        let router = define_routes(test_state());
        let response = router
            .oneshot(json_request(
                Method::PUT,
                "/items/2",
                r#"{"name":"Replaced","price":99.0,"is_active":false}"#,
            ))
            .await?;
        assert_eq!(response.status(), StatusCode::OK);

        let item: Model = json_body(response).await?;
        assert_eq!(item.id, 2);
        assert_eq!(item.name, "Replaced");
        assert_eq!(item.price, 99.0);
        assert!(!item.is_active);
        Ok(())
    }

    #[tokio::test]
    async fn update_of_an_unknown_id_is_a_404() -> Result<()> {
        let response = define_routes(test_state())
            .oneshot(json_request(
                Method::PUT,
                "/items/9999",
                r#"{"name":"Ghost","price":1.0}"#,
            ))
            .await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn patch_preserves_fields_absent_from_the_body() -> Result<()> {
        let response = define_routes(test_state())
            .oneshot(json_request(
                Method::PATCH,
                "/items/1",
                r#"{"name":"Patched"}"#,
            ))
            .await?;
        assert_eq!(response.status(), StatusCode::OK);

        let item: Model = json_body(response).await?;
        assert_eq!(item.name, "Patched");
        assert_eq!(item.price, 10.0);
        assert!(item.is_active);
        Ok(())
    }

    #[tokio::test]
    async fn delete_is_a_204_then_the_item_is_gone() -> Result<()> {
        let state = test_state();
        let response = define_routes(state.clone())
            .oneshot(empty_request(Method::DELETE, "/items/3"))
            .await?;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = define_routes(state.clone())
            .oneshot(empty_request(Method::GET, "/items/3"))
            .await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Deleting again is an idempotent failure.
        let response = define_routes(state)
            .oneshot(empty_request(Method::DELETE, "/items/3"))
            .await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn every_mutation_broadcasts_to_all_open_connections() -> Result<()> {
        let state = test_state();
        let (tx_a, mut rx_a) = tokio::sync::mpsc::unbounded_channel();
        let (tx_b, mut rx_b) = tokio::sync::mpsc::unbounded_channel();
        state.ws_manager.register_connection(tx_a);
        state.ws_manager.register_connection(tx_b);

        let response = define_routes(state)
            .oneshot(json_request(
                Method::POST,
                "/items",
                r#"{"name":"Test","price":10.0}"#,
            ))
            .await?;
        assert_eq!(response.status(), StatusCode::CREATED);

        for rx in [&mut rx_a, &mut rx_b] {
            match rx.recv().await.unwrap() {
                axum::extract::ws::Message::Text(text) => {
                    assert_eq!(text, r#"{"event":"broadcast","data":"Item created: Test"}"#)
                }
                other => panic!("unexpected message: {other:?}"),
            }
        }
        Ok(())
    }

    #[tokio::test]
    async fn a_dead_connection_does_not_starve_the_others() -> Result<()> {
        let state = test_state();
        let (tx_dead, rx_dead) = tokio::sync::mpsc::unbounded_channel();
        let (tx_live, mut rx_live) = tokio::sync::mpsc::unbounded_channel();
        state.ws_manager.register_connection(tx_dead);
        state.ws_manager.register_connection(tx_live);
        drop(rx_dead);

        let response = define_routes(state)
            .oneshot(empty_request(Method::DELETE, "/items/1"))
            .await?;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        match rx_live.recv().await.unwrap() {
            axum::extract::ws::Message::Text(text) => {
                assert_eq!(text, r#"{"event":"broadcast","data":"Item deleted: Item 1"}"#)
            }
            other => panic!("unexpected message: {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn health_check_responds_ok() -> Result<()> {
        let response = define_routes(test_state())
            .oneshot(empty_request(Method::GET, "/health"))
            .await?;
        assert_eq!(response.status(), StatusCode::OK);
        Ok(())
    }
}
