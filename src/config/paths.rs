use std::path::PathBuf;

const APP_DIR_NAME: &str = "nba_gateway";

/// Per-user directory holding the gateway's config file and logs.
/// Relative to the working directory when the platform has no config dir.
pub fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

pub fn get_config_path() -> String {
    app_dir().join("config.toml").to_string_lossy().into_owned()
}

pub fn get_log_dir_path() -> String {
    app_dir().join("logs").to_string_lossy().into_owned()
}
