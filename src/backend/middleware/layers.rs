//! Tower layers wrapped around the whole router
//!
//! Request tracing goes through `tracing`, so `RUST_LOG=tower_http=debug`
//! (the default filter) shows one span per request. CORS is wide open for
//! browser clients: any origin, the verbs the API uses, and the headers a
//! bearer-token client sends.

use axum::{
    body::Body,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE, ORIGIN},
        Method, Request, Response,
    },
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{Level, Span};

use crate::backend::server::state::AppState;

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([ORIGIN, CONTENT_TYPE, AUTHORIZATION])
}

/// Add request tracing (method, path, status, latency) and CORS
pub fn add_layers(router: Router<AppState>) -> Router<AppState> {
    let trace = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            let method = req.method().clone();
            let uri = req.uri().path().to_string();
            tracing::span!(Level::INFO, "http", %method, %uri)
        })
        .on_response(|res: &Response<_>, latency: Duration, _span: &Span| {
            tracing::info!(status = %res.status(), ?latency, "response");
        });

    router.layer(ServiceBuilder::new().layer(trace).layer(cors_layer()))
}
