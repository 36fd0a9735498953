use serde::{Deserialize, Serialize};

/// storage.json key holding the primary machine identifier.
pub const MACHINE_ID_KEY: &str = "telemetry.machineId";
/// storage.json key holding the MAC-derived machine identifier.
pub const MAC_MACHINE_ID_KEY: &str = "telemetry.macMachineId";
/// storage.json key holding the device UUID.
pub const DEV_DEVICE_ID_KEY: &str = "telemetry.devDeviceId";

/// The three telemetry identifiers that together form a device's soft
/// identity. Each value is regenerated independently on every reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceIdentity {
    /// 64 lowercase hex characters (256 bits).
    pub machine_id: String,
    /// Same format as `machine_id`, generated independently.
    pub mac_machine_id: String,
    /// Random UUID string.
    pub dev_device_id: String,
}

/// Credentials for a single registration attempt.
#[derive(Debug, Clone)]
pub struct AccountInfo {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}
