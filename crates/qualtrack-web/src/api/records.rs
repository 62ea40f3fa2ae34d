//! JSON API over the same dashboard commands

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use qualtrack_core::{QualTrackError, QualificationRecord, RecordFields, StatusFilter};
use qualtrack_engine::{apply_dashboard_command, DashboardCommand, DashboardView, ViewMode};
use serde::Serialize;

use crate::api::dashboard::ExportQuery;
use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub affected: usize,
    pub message: Option<String>,
}

fn mutate(state: &AppState, cmd: DashboardCommand) -> ApiResult<Json<MutationResponse>> {
    let outcome = {
        let mut repo = state.repo()?;
        apply_dashboard_command(cmd, &mut repo)?
    };
    Ok(Json(MutationResponse {
        affected: outcome.affected,
        message: outcome.notice.map(|n| n.message),
    }))
}

/// The read-only view as JSON, honouring `?status=`
pub async fn list_records(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExportQuery>,
) -> ApiResult<Json<DashboardView>> {
    let cmd = DashboardCommand::Load {
        mode: ViewMode::View,
        filter: StatusFilter::from(query.status),
    };
    let outcome = {
        let mut repo = state.repo()?;
        apply_dashboard_command(cmd, &mut repo)?
    };
    Ok(Json(outcome.view))
}

pub async fn get_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<QualificationRecord>> {
    let found = state.repo()?.get(id)?;
    match found {
        Some(record) => Ok(Json(record)),
        None => Err(qualtrack_core::ExError::from(QualTrackError::RecordNotFound { id }).into()),
    }
}

/// Overwrite all four fields of one row; an unknown id affects nothing
pub async fn update_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(fields): Json<RecordFields>,
) -> ApiResult<Json<MutationResponse>> {
    let rows = vec![QualificationRecord::new(id, fields)];
    mutate(&state, DashboardCommand::Save { rows })
}

pub async fn delete_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MutationResponse>> {
    mutate(&state, DashboardCommand::Delete { id })
}
