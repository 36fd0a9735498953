use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResetError {
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("environment error: {0}")]
    Environment(String),

    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("backup of {} failed: {reason}", .path.display())]
    Backup { path: PathBuf, reason: String },

    #[error("failed to read {}: {reason}", .path.display())]
    Read { path: PathBuf, reason: String },

    #[error("failed to write {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },
}
