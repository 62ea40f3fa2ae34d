use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use qualtrack_core::errors::{ExError, ExErrorKind};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] ExError),
    #[error("Not Found")]
    NotFound,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    error_code: &'static str,
    message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Core(e) => {
                let status = match e.kind() {
                    ExErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
                    ExErrorKind::NotFound => StatusCode::NOT_FOUND,
                    ExErrorKind::Serialization
                    | ExErrorKind::Io
                    | ExErrorKind::Persistence
                    | ExErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, e.code())
            }
            ApiError::NotFound => (StatusCode::NOT_FOUND, ExErrorKind::NotFound.code()),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, ExErrorKind::InvalidInput.code()),
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ExErrorKind::Internal.code(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            error_code,
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_to_status() {
        let err = ApiError::from(ExError::new(ExErrorKind::Persistence));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = ApiError::from(ExError::new(ExErrorKind::InvalidInput));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

        assert_eq!(ApiError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
    }
}
