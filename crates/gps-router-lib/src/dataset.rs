use std::env;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{Error, Result};

/// Default filename for the node document.
pub const NODES_FILENAME: &str = "nodes_db.json";

/// Environment variable overriding the node document location.
pub const NODES_ENV_VAR: &str = "GPS_ROUTER_NODES";

/// Resolve the default node document location using platform-specific project directories.
pub fn default_nodes_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "gps-router", "gps-router")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(NODES_FILENAME))
}

/// Locate the node document and confirm it exists.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `GPS_ROUTER_NODES` environment variable.
/// 3. Platform-specific project data directory.
///
/// A path without an extension is treated as a directory containing
/// `nodes_db.json`.
pub fn resolve_nodes_path(target: Option<&Path>) -> Result<PathBuf> {
    let resolved = if let Some(explicit) = target {
        canonical_nodes_path(explicit)
    } else if let Some(env_path) = env::var_os(NODES_ENV_VAR) {
        canonical_nodes_path(Path::new(&env_path))
    } else {
        default_nodes_path()?
    };

    debug!(path = %resolved.display(), "resolved node document path");
    if !resolved.is_file() {
        return Err(Error::DatasetNotFound { path: resolved });
    }
    Ok(resolved)
}

fn canonical_nodes_path(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        return path.to_path_buf();
    }
    path.join(NODES_FILENAME)
}
