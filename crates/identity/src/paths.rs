use std::path::PathBuf;

use cursor_keepalive_core::ResetError;

/// Host platforms with a known Cursor install layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
}

impl Platform {
    /// Detect the platform of the current host.
    pub fn detect() -> Result<Self, ResetError> {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Map an OS identifier (as in `std::env::consts::OS`) to a platform.
    pub fn from_os_name(os: &str) -> Result<Self, ResetError> {
        match os {
            "macos" => Ok(Self::MacOs),
            "windows" => Ok(Self::Windows),
            "linux" => Ok(Self::Linux),
            other => Err(ResetError::UnsupportedPlatform(other.to_string())),
        }
    }
}

/// Locations of the two files that hold Cursor's device identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorPaths {
    /// `storage.json` under the user's global storage directory.
    pub storage_json: PathBuf,
    /// The plain-text `machineid` file next to the config tree.
    pub machine_id: PathBuf,
}

/// Filesystem context paths are resolved against. Kept explicit so
/// resolution stays a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct PathContext {
    pub home: Option<PathBuf>,
    pub app_data: Option<PathBuf>,
}

impl PathContext {
    /// Context for the current user: home directory plus `%APPDATA%`.
    pub fn from_system() -> Self {
        Self {
            home: dirs::home_dir(),
            app_data: std::env::var_os("APPDATA").map(PathBuf::from),
        }
    }
}

/// Resolve the config and machineid paths for a platform.
///
/// Fails when the directory the platform keys off (home or `%APPDATA%`)
/// is not available in the context.
pub fn resolve_paths(platform: Platform, ctx: &PathContext) -> Result<CursorPaths, ResetError> {
    let base = match platform {
        Platform::MacOs => ctx
            .home
            .as_ref()
            .ok_or_else(|| ResetError::Environment("home directory not found".to_string()))?
            .join("Library")
            .join("Application Support")
            .join("Cursor"),
        Platform::Windows => ctx
            .app_data
            .as_ref()
            .ok_or_else(|| ResetError::Environment("APPDATA is not set".to_string()))?
            .join("Cursor"),
        Platform::Linux => ctx
            .home
            .as_ref()
            .ok_or_else(|| ResetError::Environment("home directory not found".to_string()))?
            .join(".config")
            .join("Cursor"),
    };

    Ok(CursorPaths {
        storage_json: base.join("User").join("globalStorage").join("storage.json"),
        machine_id: base.join("machineid"),
    })
}
