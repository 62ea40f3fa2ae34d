use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub records: i64,
}

/// Liveness plus a row count, which proves the database is reachable
pub async fn health(State(state): State<Arc<AppState>>) -> ApiResult<Json<HealthStatus>> {
    let records = state.repo()?.count()?;
    Ok(Json(HealthStatus {
        status: "ok",
        records,
    }))
}
