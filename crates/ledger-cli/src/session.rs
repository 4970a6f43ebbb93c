//! Session file location and gateway construction.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::debug;

use ledger_core::ApiUrl;
use ledger_file::FileStore;
use ledger_http::{ClientConfig, Gateway};

use crate::cli::GlobalArgs;

const SESSION_FILE: &str = "session.json";

/// Where the session is kept: `--store`, else the platform data directory.
pub fn store_path(global: &GlobalArgs) -> Result<PathBuf> {
    if let Some(path) = &global.store {
        return Ok(path.clone());
    }

    let dirs = ProjectDirs::from("", "", "ledger").context("Could not determine data directory")?;
    Ok(dirs.data_dir().join(SESSION_FILE))
}

/// Open a gateway over the stored session.
pub fn open(global: &GlobalArgs) -> Result<Gateway> {
    let api_url = ApiUrl::new(&global.api_url).context("Invalid API URL")?;
    let path = store_path(global)?;
    debug!(api = %api_url, store = %path.display(), "Opening session");

    let config = ClientConfig::new(api_url).with_timeout(Duration::from_secs(global.timeout));
    Gateway::new(config, Arc::new(FileStore::new(path))).context("Failed to build HTTP client")
}
