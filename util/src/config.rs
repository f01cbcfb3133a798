//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. Free functions
//! (`config::port()`, `config::database_url()`, ...) read the current values, and the
//! per-field setters allow tests to override them.

use std::env;
use std::sync::{OnceLock, RwLock, RwLockReadGuard};

/// Fixed local target used when the configured database cannot be reached.
pub const DEFAULT_FALLBACK_DATABASE_URL: &str = "sqlite://data/blog-api-local.db?mode=rwc";

const DEFAULT_DATABASE_URL: &str = "sqlite://data/blog-api.db?mode=rwc";
const DEFAULT_PORT: u16 = 3000;

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_url: String,
    pub fallback_database_url: String,
    pub host: String,
    pub port: u16,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every variable has a default, so loading never fails. A `PORT` that does not
    /// parse as a `u16` falls back to `3000`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "course-blog-api".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "api=info,db=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into()),
            log_to_stdout: parse_flag(env::var("LOG_TO_STDOUT").ok().as_deref()),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into()),
            fallback_database_url: env::var("FALLBACK_DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_FALLBACK_DATABASE_URL.into()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: parse_port(env::var("PORT").ok().as_deref()),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// A poisoned lock is recovered, since the configuration is plain data.
    pub fn global() -> RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_host(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.host = value.into());
    }

    pub fn set_port(value: u16) {
        AppConfig::set_field(|cfg| cfg.port = value);
    }
}

fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|p| p.trim().parse().ok()).unwrap_or(DEFAULT_PORT)
}

fn parse_flag(raw: Option<&str>) -> bool {
    matches!(raw.map(str::trim), Some("true") | Some("1"))
}

// --- Read accessors ---

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn database_url() -> String {
    AppConfig::global().database_url.clone()
}

pub fn fallback_database_url() -> String {
    AppConfig::global().fallback_database_url.clone()
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}
