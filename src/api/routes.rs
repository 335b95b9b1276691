//! Router configuration for the API.
//!
//! Centralized route registration and middleware configuration.

use std::time::Duration;

use axum::{Json, Router, http::StatusCode, middleware, routing::get};
use tower_http::timeout::TimeoutLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;

use crate::api::ApiDoc;
use crate::api::handlers::{health, qrcode};
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Where the generated OpenAPI document is served
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Layers run outermost first:
/// 1. Request ID - generates/propagates request IDs
/// 2. Logging - logs requests with their request ID
/// 3. Timeout - answers 408 once `request_timeout` elapses
///
/// # Routes
/// - `GET /api/health`
/// - `GET /api/qrcode`
/// - `GET /api-docs/openapi.json`
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    let (router, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", api_routes())
        .split_for_parts();

    router
        .route(
            OPENAPI_PATH,
            get(move || {
                let openapi = openapi.clone();
                async move { Json(openapi) }
            }),
        )
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        // Last added runs first, so logging sees the request ID
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .merge(health::health_routes())
        .merge(qrcode::qrcode_routes())
}
