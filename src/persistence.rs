//! JSON record store: load at start, save at end when a command changed state.

use crate::models::Standings;
use std::fs::{rename, File};
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Default record store location, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "db.json";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid record store: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load standings from `path`. A missing file is a fresh tournament.
pub fn load(path: &Path) -> Result<Standings, StoreError> {
    if !path.exists() {
        log::debug!("No record store at {:?}, starting empty", path);
        return Ok(Standings::default());
    }
    let contents = std::fs::read_to_string(path)?;
    let standings = serde_json::from_str(&contents)?;
    log::debug!("Loaded {} bytes from {:?}", contents.len(), path);
    Ok(standings)
}

/// Write standings to `path` through a temp file and rename, so a crash never
/// leaves a half-written store behind.
pub fn save(path: &Path, standings: &Standings) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(standings)?;
    let temp_path = path.with_extension("tmp");
    {
        let mut file = File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        file.sync_all()?;
    }
    rename(&temp_path, path)?;
    log::info!("Saved standings to {:?}", path);
    Ok(())
}
