//! Data directory and database path resolution.

use anyhow::Result;
use std::path::PathBuf;

const MEMORA_DIR: &str = ".memora";
const DB_FILE: &str = "memora.db";

/// Environment variable to override the Memora directory.
const MEMORA_DIR_ENV: &str = "MEMORA_DIR";

/// Resolve the Memora data directory.
/// Priority: MEMORA_DIR env var > ~/.memora/
pub fn resolve_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(MEMORA_DIR_ENV)
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(MEMORA_DIR))
        .ok_or_else(|| anyhow::anyhow!("Failed to determine home directory"))
}

/// Ensure the data directory exists and return its path.
pub fn ensure_data_dir() -> Result<PathBuf> {
    let dir = resolve_data_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the database path: ~/.memora/memora.db
pub fn ensure_database_path() -> Result<PathBuf> {
    Ok(ensure_data_dir()?.join(DB_FILE))
}

/// Convenience helper returning the database path as a UTF-8 string.
pub fn ensure_database_path_string() -> Result<String> {
    Ok(ensure_database_path()?.to_string_lossy().into_owned())
}
