use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Credentials for the signed-in account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredAuth {
    pub email: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// File-backed store for the email/token triple.
pub struct AuthStore {
    path: PathBuf,
}

impl AuthStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default store location under the user's config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cursor-keepalive").join("auth.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored credentials; an absent file reads as empty.
    pub fn load(&self) -> Result<StoredAuth> {
        if !self.path.exists() {
            return Ok(StoredAuth::default());
        }
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading auth store at {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing auth store at {}", self.path.display()))
    }

    /// Overwrite only the fields provided; everything else keeps its value.
    pub fn update(
        &self,
        email: Option<&str>,
        access_token: Option<&str>,
        refresh_token: Option<&str>,
    ) -> Result<StoredAuth> {
        let mut auth = self.load()?;

        if let Some(email) = email {
            auth.email = Some(email.to_string());
        }
        if let Some(token) = access_token {
            auth.access_token = Some(token.to_string());
        }
        if let Some(token) = refresh_token {
            auth.refresh_token = Some(token.to_string());
        }
        auth.updated_at = Some(Utc::now());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&auth)?)
            .with_context(|| format!("writing auth store at {}", self.path.display()))?;

        info!(path = %self.path.display(), "auth store updated");
        Ok(auth)
    }
}
