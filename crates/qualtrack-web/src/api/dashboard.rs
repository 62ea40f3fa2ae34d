//! Browser routes: the dashboard page, its three forms and the CSV download

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
    Form,
};
use qualtrack_core::errors::parse_record_id;
use qualtrack_core::{QualificationRecord, RecordFields, StatusFilter};
use qualtrack_engine::{apply_dashboard_command, export_csv, DashboardCommand, ViewMode};
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::html::render_page;
use crate::state::AppState;

pub const CSV_FILENAME: &str = "qualifications.csv";

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub mode: ViewMode,
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExportQuery {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    pub id: String,
}

fn run(state: &AppState, cmd: DashboardCommand) -> ApiResult<Html<String>> {
    let outcome = {
        let mut repo = state.repo()?;
        apply_dashboard_command(cmd, &mut repo)?
    };
    Ok(Html(render_page(&outcome.view, outcome.notice.as_ref())))
}

pub async fn show_dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> ApiResult<Html<String>> {
    run(
        &state,
        DashboardCommand::Load {
            mode: query.mode,
            filter: StatusFilter::from(query.status),
        },
    )
}

pub async fn download_csv(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ExportQuery>,
) -> ApiResult<impl IntoResponse> {
    let filter = StatusFilter::from(query.status);
    let bytes = {
        let repo = state.repo()?;
        export_csv(&repo, &filter)?
    };
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", CSV_FILENAME),
            ),
        ],
        bytes,
    ))
}

pub async fn save_changes(
    State(state): State<Arc<AppState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> ApiResult<Html<String>> {
    let rows = rows_from_form(pairs)?;
    run(&state, DashboardCommand::Save { rows })
}

pub async fn add_record(
    State(state): State<Arc<AppState>>,
    Form(fields): Form<RecordFields>,
) -> ApiResult<Html<String>> {
    run(&state, DashboardCommand::Add { fields })
}

pub async fn delete_record(
    State(state): State<Arc<AppState>>,
    Form(form): Form<DeleteForm>,
) -> ApiResult<Html<String>> {
    let id = parse_record_id(&form.id)?;
    run(&state, DashboardCommand::Delete { id })
}

/// Rebuild the edit grid from `row-{id}-{field}` inputs, ordered by id
///
/// Fields missing for a row are saved as empty text.
pub fn rows_from_form(pairs: Vec<(String, String)>) -> ApiResult<Vec<QualificationRecord>> {
    let mut grid: BTreeMap<i64, RecordFields> = BTreeMap::new();

    for (name, value) in pairs {
        let (raw_id, field) = name
            .strip_prefix("row-")
            .and_then(|rest| rest.split_once('-'))
            .ok_or_else(|| ApiError::BadRequest(format!("unexpected form field '{}'", name)))?;
        let id = parse_record_id(raw_id)?;
        let fields = grid.entry(id).or_default();
        match field {
            "faculty" => fields.faculty = value,
            "qualification" => fields.qualification = value,
            "status" => fields.status = value,
            "date" => fields.date = value,
            other => {
                return Err(ApiError::BadRequest(format!(
                    "unknown column '{}' for row {}",
                    other, id
                )))
            }
        }
    }

    Ok(grid
        .into_iter()
        .map(|(id, fields)| QualificationRecord::new(id, fields))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn test_rows_from_form_groups_by_id() {
        let rows = rows_from_form(vec![
            pair("row-2-faculty", "Law"),
            pair("row-1-faculty", "EMS"),
            pair("row-1-status", "DHET Approved"),
            pair("row-2-qualification", "LLB"),
        ])
        .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].faculty, "EMS");
        assert_eq!(rows[0].status, "DHET Approved");
        assert_eq!(rows[0].date, "");
        assert_eq!(rows[1].qualification, "LLB");
    }

    #[test]
    fn test_rows_from_form_rejects_unknown_fields() {
        assert!(matches!(
            rows_from_form(vec![pair("row-1-colour", "red")]),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            rows_from_form(vec![pair("faculty", "EMS")]),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            rows_from_form(vec![pair("row-x-faculty", "EMS")]),
            Err(ApiError::Core(_))
        ));
    }
}
