//! HTTP routes
//!
//! Browser routes render HTML from a `DashboardView`; `/api/records` serves
//! the same operations as JSON.

pub mod dashboard;
pub mod health;
pub mod records;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use qualtrack_core::RequestId;
use tower_http::trace::TraceLayer;
use tracing::Instrument;

use crate::state::AppState;

const HEADER_REQUEST_ID: &str = "x-request-id";
const MAX_ID_LEN: usize = 128;

pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/records", get(records::list_records))
        .route(
            "/records/:id",
            get(records::get_record)
                .put(records::update_record)
                .delete(records::delete_record),
        );

    Router::new()
        .route("/", get(dashboard::show_dashboard))
        .route("/export.csv", get(dashboard::download_csv))
        .route("/records/save", post(dashboard::save_changes))
        .route("/records/add", post(dashboard::add_record))
        .route("/records/delete", post(dashboard::delete_record))
        .route("/health", get(health::health))
        .nest("/api", api)
        .with_state(state)
        .layer(middleware::from_fn(request_context))
        .layer(TraceLayer::new_for_http())
}

/// Attach a request id to the span of every request and echo it back
async fn request_context(req: Request<Body>, next: Next) -> Response {
    let header = HeaderName::from_static(HEADER_REQUEST_ID);

    let request_id = req
        .headers()
        .get(&header)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty() && id.len() <= MAX_ID_LEN)
        .map(|id| RequestId::from_string(id.to_string()))
        .unwrap_or_default();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %req.method(),
        path = %req.uri().path()
    );

    let mut response = next.run(req).instrument(span).await;
    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(header, value);
    }
    response
}
