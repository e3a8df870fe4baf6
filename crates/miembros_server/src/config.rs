//! Server configuration loaded from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `MIEMBROS_HOST` | `0.0.0.0` | bind address |
//! | `MIEMBROS_PORT` | `8080` | bind port |
//! | `MIEMBROS_DB_PATH` | `miembros.sqlite3` | SQLite file, `:memory:` for a throwaway db |
//! | `MIEMBROS_LOG_LEVEL` | `debug` (debug builds) / `info` | trace, debug, info, warn, error |
//! | `MIEMBROS_LOG_DIR` | unset | absolute directory for rolling log files; stderr when unset |
//! | `MIEMBROS_STATIC_DIR` | unset | directory served for paths outside `/miembros` |
//!
//! Empty values count as unset. Unparseable ports fall back to the default.

use miembros_core::db::{open_db, open_db_in_memory, DbResult};
use miembros_core::{default_log_level, init_logging, init_stderr_logging};
use rusqlite::Connection;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_PATH: &str = "miembros.sqlite3";
const IN_MEMORY_DB_PATH: &str = ":memory:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub static_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            host: get("MIEMBROS_HOST").unwrap_or_else(|| DEFAULT_HOST.into()),
            port: get("MIEMBROS_PORT")
                .and_then(|port| port.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            db_path: get("MIEMBROS_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.into()),
            log_level: get("MIEMBROS_LOG_LEVEL").unwrap_or_else(|| default_log_level().into()),
            log_dir: get("MIEMBROS_LOG_DIR"),
            static_dir: get("MIEMBROS_STATIC_DIR").map(PathBuf::from),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Starts process logging for the configured level and target.
    pub fn init_logging(&self) -> Result<(), String> {
        match self.log_dir.as_deref() {
            Some(dir) => init_logging(&self.log_level, dir),
            None => init_stderr_logging(&self.log_level),
        }
    }

    /// Opens the configured database with migrations applied.
    pub fn open_database(&self) -> DbResult<Connection> {
        if self.db_path == IN_MEMORY_DB_PATH {
            open_db_in_memory()
        } else {
            open_db(&self.db_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.db_path, "miembros.sqlite3");
        assert_eq!(config.log_dir, None);
        assert_eq!(config.static_dir, None);
    }

    #[test]
    fn values_are_read_and_blank_values_ignored() {
        let config = config_from(&[
            ("MIEMBROS_HOST", "127.0.0.1"),
            ("MIEMBROS_PORT", "9090"),
            ("MIEMBROS_DB_PATH", ":memory:"),
            ("MIEMBROS_LOG_LEVEL", "warn"),
            ("MIEMBROS_LOG_DIR", "  "),
            ("MIEMBROS_STATIC_DIR", "/srv/miembros"),
        ]);

        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, None);
        assert_eq!(config.static_dir, Some(PathBuf::from("/srv/miembros")));
        assert!(config.open_database().is_ok());
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let config = config_from(&[("MIEMBROS_PORT", "http")]);
        assert_eq!(config.port, 8080);
    }
}
