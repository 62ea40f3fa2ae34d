//! Serve command
//!
//! Usage: qualtrack serve [--listen <ADDR>]
//!
//! Settings come from `QUALTRACK_*` variables (and `.env`); flags override them.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Args;
use qualtrack_web::ServerConfig;

use super::CommandResult;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to listen on [default: QUALTRACK_LISTEN_ADDR or 127.0.0.1:8501]
    #[arg(long)]
    pub listen: Option<SocketAddr>,
}

pub fn execute(args: ServeArgs, db: Option<PathBuf>) -> CommandResult {
    let config = ServerConfig::from_env()?.with_overrides(args.listen, db);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(qualtrack_web::serve(&config))?;
    Ok(())
}
