use std::path::PathBuf;

pub const DEFAULT_APP_ENV: &str = "production";
pub const DEFAULT_CONFIG_PATH: &str = "robots.toml";

/// The environment whose robots.txt rules apply, from APP_ENV.
pub fn get_app_env() -> String {
    non_empty_var("APP_ENV").unwrap_or_else(|| DEFAULT_APP_ENV.to_string())
}

/// Location of the robots.txt config file, from ROBOTS_CONFIG.
pub fn get_config_path() -> PathBuf {
    non_empty_var("ROBOTS_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Base URL for sitemaps, from APP_URL. Overrides `app_url` in the config file.
pub fn get_app_url() -> Option<String> {
    non_empty_var("APP_URL")
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
