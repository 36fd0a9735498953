use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub account: AccountConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub reset: ResetConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AccountConfig {
    /// Mail domain for generated disposable addresses.
    pub email_domain: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default = "default_password_length")]
    pub password_length: usize,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AuthConfig {
    /// Overrides the default auth store location when set.
    #[serde(default)]
    pub store_path: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResetConfig {
    /// Write a fresh machineid file when Cursor has not created one yet.
    #[serde(default = "default_create_missing_machine_id")]
    pub create_missing_machine_id: bool,
}

impl Default for ResetConfig {
    fn default() -> Self {
        Self {
            create_missing_machine_id: default_create_missing_machine_id(),
        }
    }
}

fn default_password_length() -> usize { 12 }
fn default_create_missing_machine_id() -> bool { true }
