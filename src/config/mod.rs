#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use std::ffi::OsString;
use std::path::PathBuf;

pub const CONFIG_ROOT_ENV: &str = "SEEDNODES_CONFIG_ROOT";
const APP_DIR_NAME: &str = "seednodes";

/// `$SEEDNODES_CONFIG_ROOT`, else the platform data directory, else `./seednodes`.
pub fn default_config_root() -> PathBuf {
    config_root_from(std::env::var_os(CONFIG_ROOT_ENV), dirs::data_dir())
}

fn config_root_from(env_root: Option<OsString>, data_dir: Option<PathBuf>) -> PathBuf {
    match env_root.filter(|root| !root.is_empty()) {
        Some(root) => PathBuf::from(root),
        None => data_dir
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME),
    }
}
