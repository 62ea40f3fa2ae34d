use std::sync::{Arc, Mutex, MutexGuard};

use qualtrack_store::QualificationRepo;

use crate::config::ServerConfig;
use crate::error::{ApiError, ApiResult};

/// Shared application state
///
/// rusqlite connections are not `Sync`, so the repository sits behind a
/// mutex; requests are served one at a time against it.
pub struct AppState {
    repo: Mutex<QualificationRepo>,
}

impl AppState {
    pub fn new(repo: QualificationRepo) -> Arc<Self> {
        Arc::new(Self {
            repo: Mutex::new(repo),
        })
    }

    pub fn repo(&self) -> ApiResult<MutexGuard<'_, QualificationRepo>> {
        self.repo
            .lock()
            .map_err(|_| ApiError::Internal("repository lock poisoned".to_string()))
    }
}

/// Open the configured database, ensure the schema and seed it
pub fn build_state(config: &ServerConfig) -> anyhow::Result<Arc<AppState>> {
    let repo = QualificationRepo::bootstrap(&config.db_path)?;
    tracing::info!(
        db_path = %config.db_path.display(),
        rows = repo.count()?,
        "Database ready"
    );
    Ok(AppState::new(repo))
}
