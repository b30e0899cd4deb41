//! Application route configuration.

use std::any::Any;

use axum::{middleware, response::Response, routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::system_handler::{metrics, root};
use super::handlers::{health_routes, system_routes, user_routes};
use super::middleware::{build_cors_layer, track_metrics};
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::{API_V1_PREFIX, DOCS_PATH, METRICS_PATH, OPENAPI_PATH};
use crate::errors::internal_error_response;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(root))
        .merge(health_routes())
        .nest(API_V1_PREFIX, user_routes().merge(system_routes()))
        // Panics become a generic 500 before metrics see the response
        .route_layer(CatchPanicLayer::custom(handle_panic));

    if state.config.metrics_enabled {
        router = router
            .route_layer(middleware::from_fn_with_state(state.clone(), track_metrics))
            .route(METRICS_PATH, get(metrics));
    }

    let cors = build_cors_layer(&state.config);

    router
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
        // Global middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Log the panic payload and answer with the generic internal error.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    tracing::error!("Unhandled panic in request handler: {}", detail);
    internal_error_response()
}
