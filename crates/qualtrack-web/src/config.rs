use std::{net::SocketAddr, path::PathBuf};

use anyhow::Context;

pub const DEFAULT_DB_PATH: &str = "qualifications.db";
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8501";

/// Server settings, read from the environment (and `.env`)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub db_path: PathBuf,
}

impl ServerConfig {
    /// Read `QUALTRACK_LISTEN_ADDR` and `QUALTRACK_DB_PATH` (after loading `.env`)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_raw =
            lookup("QUALTRACK_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr: SocketAddr = listen_raw
            .parse()
            .with_context(|| format!("Invalid QUALTRACK_LISTEN_ADDR: {}", listen_raw))?;
        let db_path = lookup("QUALTRACK_DB_PATH")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string())
            .into();

        Ok(Self {
            listen_addr,
            db_path,
        })
    }

    /// Apply command-line values on top of the environment
    pub fn with_overrides(
        mut self,
        listen_addr: Option<SocketAddr>,
        db_path: Option<PathBuf>,
    ) -> Self {
        if let Some(addr) = listen_addr {
            self.listen_addr = addr;
        }
        if let Some(path) = db_path {
            self.db_path = path;
        }
        self
    }
}
