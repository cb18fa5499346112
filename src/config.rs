// src/config.rs

use directories::ProjectDirs;
use lazy_static::lazy_static;
use std::path::PathBuf;

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase();
    pub static ref LOG_ENV: String = format!("{}_LOGLEVEL", PROJECT_NAME.clone());
    pub static ref DATA_DIR_ENV: String = format!("{}_DATA_DIR", PROJECT_NAME.clone());
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

/// Runtime settings, read from the environment once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the log file and exported reports go.
    pub data_dir: PathBuf,
    /// `EnvFilter` directive for the log file.
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup(DATA_DIR_ENV.as_str())
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let log_filter = lookup("RUST_LOG")
            .or_else(|| lookup(LOG_ENV.as_str()))
            .unwrap_or_else(|| format!("{}=info", env!("CARGO_CRATE_NAME")));

        Self { data_dir, log_filter }
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE.as_str())
    }

    pub fn export_dir(&self) -> PathBuf {
        self.data_dir.join("reports")
    }
}

fn default_data_dir() -> PathBuf {
    match ProjectDirs::from("com", "cyber-aware", env!("CARGO_PKG_NAME")) {
        Some(proj_dirs) => proj_dirs.data_local_dir().to_path_buf(),
        None => PathBuf::from(".").join(".data"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_crate_info_level() {
        let config = config_from(&[]);
        assert_eq!(config.log_filter, "cyber_aware=info");
    }

    #[test]
    fn rust_log_wins_over_project_variable() {
        let config = config_from(&[("RUST_LOG", "debug"), ("CYBER_AWARE_LOGLEVEL", "warn")]);
        assert_eq!(config.log_filter, "debug");
        let config = config_from(&[("CYBER_AWARE_LOGLEVEL", "warn")]);
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn data_dir_override() {
        let config = config_from(&[("CYBER_AWARE_DATA_DIR", "/tmp/aware")]);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/aware"));
        assert_eq!(config.log_path(), PathBuf::from("/tmp/aware/cyber-aware.log"));
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/aware/reports"));
    }
}
