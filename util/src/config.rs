//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.
//!
//! Only ambient settings live here (logging and verification defaults). Expected
//! answers are never stored in process-wide state; they travel with each grading case.

use std::env;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock, RwLockReadGuard};

/// Tolerance applied to numeric checks that do not declare their own.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Longest single value quoted verbatim in a diagnostic message.
pub const DEFAULT_MESSAGE_PREVIEW_CHARS: usize = 80;

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub default_tolerance: f64,
    pub message_preview_chars: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "verifier=info".into(),
            log_file: "verifier.log".into(),
            log_to_stdout: false,
            default_tolerance: DEFAULT_TOLERANCE,
            message_preview_chars: DEFAULT_MESSAGE_PREVIEW_CHARS,
        }
    }
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

/// Reads `key` and parses it, falling back to `default` when unset or malformed.
fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Missing or malformed values fall back to their defaults. A negative or
    /// non-finite `DEFAULT_TOLERANCE` is treated as malformed.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let default_tolerance = parse_var("DEFAULT_TOLERANCE", defaults.default_tolerance);
        let default_tolerance = if default_tolerance.is_finite() && default_tolerance >= 0.0 {
            default_tolerance
        } else {
            defaults.default_tolerance
        };

        Self {
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_file: env::var("LOG_FILE").unwrap_or(defaults.log_file),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            default_tolerance,
            message_preview_chars: parse_var(
                "MESSAGE_PREVIEW_CHARS",
                defaults.message_preview_chars,
            )
            .max(1),
        }
    }

    fn lock() -> &'static RwLock<AppConfig> {
        CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()))
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// A poisoned lock is recovered; the config holds plain values only.
    pub fn global() -> RwLockReadGuard<'static, AppConfig> {
        Self::lock()
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        Self::set_field(|cfg| *cfg = AppConfig::from_env());
    }

    /// Generic internal setter for any field in the config.
    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut guard = Self::lock()
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_log_level(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_level = value.into());
    }

    pub fn set_log_file(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.log_file = value.into());
    }

    pub fn set_log_to_stdout(value: bool) {
        AppConfig::set_field(|cfg| cfg.log_to_stdout = value);
    }

    pub fn set_default_tolerance(value: f64) {
        AppConfig::set_field(|cfg| cfg.default_tolerance = value);
    }

    pub fn set_message_preview_chars(value: usize) {
        AppConfig::set_field(|cfg| cfg.message_preview_chars = value.max(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 5] = [
        "LOG_LEVEL",
        "LOG_FILE",
        "LOG_TO_STDOUT",
        "DEFAULT_TOLERANCE",
        "MESSAGE_PREVIEW_CHARS",
    ];

    fn clear_env() {
        for key in KEYS {
            unsafe {
                env::remove_var(key);
            }
        }
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        clear_env();
        let cfg = AppConfig::from_env();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.default_tolerance, 0.01);
    }

    #[test]
    #[serial]
    fn test_reads_overrides() {
        clear_env();
        unsafe {
            env::set_var("LOG_LEVEL", "verifier=debug");
            env::set_var("LOG_TO_STDOUT", "true");
            env::set_var("DEFAULT_TOLERANCE", "0.5");
            env::set_var("MESSAGE_PREVIEW_CHARS", "12");
        }
        let cfg = AppConfig::from_env();
        assert_eq!(cfg.log_level, "verifier=debug");
        assert!(cfg.log_to_stdout);
        assert_eq!(cfg.default_tolerance, 0.5);
        assert_eq!(cfg.message_preview_chars, 12);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_malformed_values_fall_back() {
        clear_env();
        unsafe {
            env::set_var("DEFAULT_TOLERANCE", "-1");
            env::set_var("MESSAGE_PREVIEW_CHARS", "lots");
        }
        let cfg = AppConfig::from_env();
        assert_eq!(cfg.default_tolerance, DEFAULT_TOLERANCE);
        assert_eq!(cfg.message_preview_chars, DEFAULT_MESSAGE_PREVIEW_CHARS);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_setters_update_global() {
        clear_env();
        AppConfig::reset();
        AppConfig::set_default_tolerance(0.25);
        AppConfig::set_message_preview_chars(0);
        {
            let cfg = AppConfig::global();
            assert_eq!(cfg.default_tolerance, 0.25);
            assert_eq!(cfg.message_preview_chars, 1);
        }
        AppConfig::reset();
        assert_eq!(AppConfig::global().default_tolerance, DEFAULT_TOLERANCE);
    }
}
