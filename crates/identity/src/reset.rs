use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde_json::{json, Value};
use tracing::{error, info};

use cursor_keepalive_core::{
    DeviceIdentity, ResetError, DEV_DEVICE_ID_KEY, MACHINE_ID_KEY, MAC_MACHINE_ID_KEY,
};

use crate::backup::GuardedWrite;
use crate::generator::generate_identity;
use crate::paths::{resolve_paths, PathContext, CursorPaths, Platform};

/// Resets the device identity Cursor stores on disk.
///
/// One call is one linear procedure: back up both target files, generate a
/// fresh identity triple, patch `storage.json`, rewrite `machineid`. Every
/// call produces an independent triple.
pub struct IdentityResetter<R: RngCore + CryptoRng> {
    paths: CursorPaths,
    rng: R,
    create_missing_machine_id: bool,
}

impl IdentityResetter<OsRng> {
    /// Resetter for the current host, using the OS random source.
    pub fn for_host() -> Result<Self, ResetError> {
        let platform = Platform::detect()?;
        let paths = resolve_paths(platform, &PathContext::from_system())?;
        Ok(Self::new(paths, OsRng))
    }
}

impl<R: RngCore + CryptoRng> IdentityResetter<R> {
    pub fn new(paths: CursorPaths, rng: R) -> Self {
        Self {
            paths,
            rng,
            create_missing_machine_id: true,
        }
    }

    /// Whether a missing machineid file should be created with the new
    /// identifier instead of being left absent.
    pub fn create_missing_machine_id(mut self, create: bool) -> Self {
        self.create_missing_machine_id = create;
        self
    }

    /// Run the reset, reporting the outcome as a plain boolean. Errors are
    /// logged, never propagated.
    pub fn reset(&mut self) -> bool {
        match self.try_reset() {
            Ok(identity) => {
                info!(machine_id = %identity.machine_id, "new machine ID");
                info!(mac_machine_id = %identity.mac_machine_id, "new MAC machine ID");
                info!(dev_device_id = %identity.dev_device_id, "new device ID");
                true
            }
            Err(e) => {
                error!("identity reset failed: {e}");
                false
            }
        }
    }

    /// Run the reset and return the freshly generated identity.
    pub fn try_reset(&mut self) -> Result<DeviceIdentity, ResetError> {
        if !self.paths.storage_json.exists() {
            return Err(ResetError::ConfigNotFound(self.paths.storage_json.clone()));
        }

        // Backup phase for both files, before any mutation.
        let storage = GuardedWrite::prepare(&self.paths.storage_json)?;
        let machine_id_file = GuardedWrite::prepare(&self.paths.machine_id)?;

        let identity = generate_identity(&mut self.rng);

        let raw = std::fs::read_to_string(&self.paths.storage_json).map_err(|e| {
            ResetError::Read {
                path: self.paths.storage_json.clone(),
                reason: e.to_string(),
            }
        })?;
        let mut doc: Value = serde_json::from_str(&raw).map_err(|e| ResetError::Read {
            path: self.paths.storage_json.clone(),
            reason: e.to_string(),
        })?;
        let obj = doc.as_object_mut().ok_or_else(|| ResetError::Read {
            path: self.paths.storage_json.clone(),
            reason: "not a JSON object".to_string(),
        })?;

        obj.insert(MAC_MACHINE_ID_KEY.to_string(), json!(identity.mac_machine_id));
        obj.insert(MACHINE_ID_KEY.to_string(), json!(identity.machine_id));
        obj.insert(DEV_DEVICE_ID_KEY.to_string(), json!(identity.dev_device_id));

        let pretty = serde_json::to_string_pretty(&doc).map_err(|e| ResetError::Write {
            path: self.paths.storage_json.clone(),
            reason: e.to_string(),
        })?;
        storage.commit(&pretty)?;

        if machine_id_file.existed() || self.create_missing_machine_id {
            machine_id_file.commit(&identity.machine_id)?;
        }

        info!("device identity reset");
        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::path::Path;

    fn paths_in(dir: &Path) -> CursorPaths {
        CursorPaths {
            storage_json: dir.join("storage.json"),
            machine_id: dir.join("machineid"),
        }
    }

    fn backups_of(dir: &Path, stem: &str) -> Vec<std::path::PathBuf> {
        let prefix = format!("{stem}.backup_");
        std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().path())
            .filter(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().starts_with(&prefix))
                    .unwrap_or(false)
            })
            .collect()
    }

    #[test]
    fn test_reset_rewrites_both_files_and_backs_them_up() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        std::fs::write(&paths.storage_json, r#"{"foo": "bar"}"#).unwrap();
        std::fs::write(&paths.machine_id, "old").unwrap();

        let mut resetter = IdentityResetter::new(paths.clone(), StdRng::seed_from_u64(1));
        let identity = resetter.try_reset().unwrap();

        let storage_backups = backups_of(dir.path(), "storage.json");
        assert_eq!(storage_backups.len(), 1);
        assert_eq!(
            std::fs::read_to_string(&storage_backups[0]).unwrap(),
            r#"{"foo": "bar"}"#
        );
        let machineid_backups = backups_of(dir.path(), "machineid");
        assert_eq!(machineid_backups.len(), 1);
        assert_eq!(std::fs::read_to_string(&machineid_backups[0]).unwrap(), "old");

        let doc: Value =
            serde_json::from_str(&std::fs::read_to_string(&paths.storage_json).unwrap()).unwrap();
        assert_eq!(doc["foo"], "bar");
        assert_eq!(doc[MACHINE_ID_KEY], identity.machine_id.as_str());
        assert_eq!(doc[MAC_MACHINE_ID_KEY], identity.mac_machine_id.as_str());
        assert_eq!(doc[DEV_DEVICE_ID_KEY], identity.dev_device_id.as_str());

        assert_eq!(
            std::fs::read_to_string(&paths.machine_id).unwrap(),
            identity.machine_id
        );
    }

    #[test]
    fn test_missing_config_aborts_without_writes() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        std::fs::write(&paths.machine_id, "old").unwrap();

        let mut resetter = IdentityResetter::new(paths.clone(), StdRng::seed_from_u64(2));
        let err = resetter.try_reset().unwrap_err();

        assert!(matches!(err, ResetError::ConfigNotFound(_)));
        assert!(backups_of(dir.path(), "machineid").is_empty());
        assert_eq!(std::fs::read_to_string(&paths.machine_id).unwrap(), "old");
        assert!(!IdentityResetter::new(paths, StdRng::seed_from_u64(2)).reset());
    }

    #[test]
    fn test_missing_machineid_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        std::fs::write(&paths.storage_json, "{}").unwrap();

        let mut resetter = IdentityResetter::new(paths.clone(), StdRng::seed_from_u64(3));
        let identity = resetter.try_reset().unwrap();

        assert!(backups_of(dir.path(), "machineid").is_empty());
        assert_eq!(
            std::fs::read_to_string(&paths.machine_id).unwrap(),
            identity.machine_id
        );
    }

    #[test]
    fn test_missing_machineid_left_absent_when_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        std::fs::write(&paths.storage_json, "{}").unwrap();

        let mut resetter = IdentityResetter::new(paths.clone(), StdRng::seed_from_u64(4))
            .create_missing_machine_id(false);
        resetter.try_reset().unwrap();

        assert!(!paths.machine_id.exists());
    }

    #[test]
    fn test_malformed_config_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        std::fs::write(&paths.storage_json, "[1, 2, 3]").unwrap();

        let mut resetter = IdentityResetter::new(paths, StdRng::seed_from_u64(5));
        let err = resetter.try_reset().unwrap_err();
        assert!(matches!(err, ResetError::Read { .. }));
    }

    #[test]
    fn test_consecutive_resets_produce_fresh_identities() {
        let dir = tempfile::tempdir().unwrap();
        let paths = paths_in(dir.path());
        std::fs::write(&paths.storage_json, "{}").unwrap();

        let mut resetter = IdentityResetter::new(paths, StdRng::seed_from_u64(6));
        let first = resetter.try_reset().unwrap();
        let second = resetter.try_reset().unwrap();

        assert_ne!(first.machine_id, second.machine_id);
        assert_ne!(first.mac_machine_id, second.mac_machine_id);
        assert_ne!(first.dev_device_id, second.dev_device_id);
    }
}
