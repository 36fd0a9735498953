use std::path::{Path, PathBuf};

use chrono::Local;
use cursor_keepalive_core::ResetError;
use tracing::info;

/// Copy `path` to `<path>.backup_<YYYYMMDD_HHMMSS>` and confirm the copy
/// landed on disk. The backup is never cleaned up.
pub fn backup_file(path: &Path) -> Result<PathBuf, ResetError> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let backup_path = PathBuf::from(format!("{}.backup_{}", path.display(), timestamp));

    std::fs::copy(path, &backup_path).map_err(|e| ResetError::Backup {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if !backup_path.exists() {
        return Err(ResetError::Backup {
            path: path.to_path_buf(),
            reason: "backup copy not found after write".to_string(),
        });
    }

    info!(backup = %backup_path.display(), "backup created");
    Ok(backup_path)
}

/// A file rewrite that can only happen after the backup phase.
///
/// `prepare` takes a confirmed backup of the file (when it exists) and is
/// the only way to obtain a value whose `commit` overwrites the target.
pub struct GuardedWrite {
    path: PathBuf,
    backup: Option<PathBuf>,
}

impl GuardedWrite {
    /// Phase one: back up `path` if it exists. Fails when the backup cannot
    /// be confirmed; an absent file needs no backup.
    pub fn prepare(path: &Path) -> Result<Self, ResetError> {
        let backup = if path.exists() {
            Some(backup_file(path)?)
        } else {
            None
        };

        Ok(Self {
            path: path.to_path_buf(),
            backup,
        })
    }

    /// Whether the target existed when the backup phase ran.
    pub fn existed(&self) -> bool {
        self.backup.is_some()
    }

    pub fn backup_path(&self) -> Option<&Path> {
        self.backup.as_deref()
    }

    /// Phase two: overwrite the target.
    pub fn commit(&self, contents: &str) -> Result<(), ResetError> {
        std::fs::write(&self.path, contents).map_err(|e| ResetError::Write {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_preserves_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("storage.json");
        std::fs::write(&target, r#"{"foo": "bar"}"#).unwrap();

        let backup = backup_file(&target).unwrap();

        let name = backup.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("storage.json.backup_"));
        let suffix = name.trim_start_matches("storage.json.backup_");
        assert_eq!(suffix.len(), 15); // YYYYMMDD_HHMMSS
        assert_eq!(
            std::fs::read(&backup).unwrap(),
            std::fs::read(&target).unwrap()
        );
    }

    #[test]
    fn test_backup_of_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = backup_file(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, ResetError::Backup { .. }));
    }

    #[test]
    fn test_guarded_write_backs_up_before_commit() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("machineid");
        std::fs::write(&target, "old").unwrap();

        let guard = GuardedWrite::prepare(&target).unwrap();
        assert!(guard.existed());
        guard.commit("new").unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "new");
        assert_eq!(
            std::fs::read_to_string(guard.backup_path().unwrap()).unwrap(),
            "old"
        );
    }

    #[test]
    fn test_guarded_write_on_absent_file_skips_backup() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("machineid");

        let guard = GuardedWrite::prepare(&target).unwrap();
        assert!(!guard.existed());
        assert!(guard.backup_path().is_none());

        guard.commit("fresh").unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "fresh");
    }
}
