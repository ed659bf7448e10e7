/**
 * Router Configuration
 *
 * Assembles the API routes, a JSON `404` fallback for unknown paths, and the
 * tracing/CORS layers, then binds the router to its `AppState`.
 */

use axum::Router;

use crate::backend::error::ApiError;
use crate::backend::middleware::add_layers;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

async fn route_not_found() -> ApiError {
    ApiError::not_found("route not found")
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new()).fallback(route_not_found);
    add_layers(router).with_state(app_state)
}
