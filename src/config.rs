//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `DATA_DIR` - Settings directory holding the JSON collections (default: `settings`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DUPLICATE_NAMES_ALLOWED` - Skip the duplicate-name gate (default: `false`)
//! - `GENERATION_WEBHOOK` - URL notified after each generated name (optional)
//! - `WEBHOOK_TIMEOUT_SECONDS` - Per-delivery timeout (default: 10, range 1-300)

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use url::Url;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub data_dir: PathBuf,
    pub log_level: String,
    pub log_format: String,
    /// When true, a generated name may repeat an already-logged name.
    pub duplicate_names_allowed: bool,
    /// URL notified after each successfully generated name.
    pub generation_webhook: Option<String>,
    pub webhook_timeout_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let data_dir = env::var("DATA_DIR")
            .unwrap_or_else(|_| "settings".to_string())
            .into();
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let duplicate_names_allowed = env::var("DUPLICATE_NAMES_ALLOWED")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let generation_webhook = env::var("GENERATION_WEBHOOK")
            .ok()
            .filter(|v| !v.is_empty());

        let webhook_timeout_seconds = env::var("WEBHOOK_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            listen_addr,
            data_dir,
            log_level,
            log_format,
            duplicate_names_allowed,
            generation_webhook,
            webhook_timeout_seconds,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `GENERATION_WEBHOOK` is not an http(s) URL
    /// - `WEBHOOK_TIMEOUT_SECONDS` is outside 1-300
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.data_dir.as_os_str().is_empty() {
            anyhow::bail!("DATA_DIR must not be empty");
        }

        if let Some(ref webhook) = self.generation_webhook {
            let url = Url::parse(webhook)
                .map_err(|e| anyhow::anyhow!("GENERATION_WEBHOOK is not a valid URL: {e}"))?;
            if url.scheme() != "http" && url.scheme() != "https" {
                anyhow::bail!(
                    "GENERATION_WEBHOOK must use http or https, got '{}'",
                    url.scheme()
                );
            }
        }

        if !(1..=300).contains(&self.webhook_timeout_seconds) {
            anyhow::bail!(
                "WEBHOOK_TIMEOUT_SECONDS must be between 1 and 300, got {}",
                self.webhook_timeout_seconds
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Data directory: {}", self.data_dir.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Duplicate names: {}",
            if self.duplicate_names_allowed {
                "allowed"
            } else {
                "rejected"
            }
        );
        if let Some(ref webhook) = self.generation_webhook {
            tracing::info!("  Generation webhook: {webhook}");
        } else {
            tracing::info!("  Generation webhook: disabled");
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            data_dir: PathBuf::from("settings"),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            duplicate_names_allowed: false,
            generation_webhook: None,
            webhook_timeout_seconds: 10,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:3000".to_string();

        config.generation_webhook = Some("not a url".to_string());
        assert!(config.validate().is_err());
        config.generation_webhook = Some("ftp://hooks.example.com".to_string());
        assert!(config.validate().is_err());
        config.generation_webhook = Some("https://hooks.example.com/naming".to_string());
        assert!(config.validate().is_ok());

        config.webhook_timeout_seconds = 0;
        assert!(config.validate().is_err());
        config.webhook_timeout_seconds = 301;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("DATA_DIR");
            env::remove_var("DUPLICATE_NAMES_ALLOWED");
            env::remove_var("GENERATION_WEBHOOK");
            env::remove_var("WEBHOOK_TIMEOUT_SECONDS");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.data_dir, PathBuf::from("settings"));
        assert!(!config.duplicate_names_allowed);
        assert!(config.generation_webhook.is_none());
        assert_eq!(config.webhook_timeout_seconds, 10);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("DATA_DIR", "/var/lib/namegen");
            env::set_var("DUPLICATE_NAMES_ALLOWED", "TRUE");
            env::set_var("GENERATION_WEBHOOK", "https://hooks.example.com/naming");
            env::set_var("WEBHOOK_TIMEOUT_SECONDS", "30");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/namegen"));
        assert!(config.duplicate_names_allowed);
        assert_eq!(
            config.generation_webhook.as_deref(),
            Some("https://hooks.example.com/naming")
        );
        assert_eq!(config.webhook_timeout_seconds, 30);

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("DATA_DIR");
            env::remove_var("DUPLICATE_NAMES_ALLOWED");
            env::remove_var("GENERATION_WEBHOOK");
            env::remove_var("WEBHOOK_TIMEOUT_SECONDS");
        }
    }

    #[test]
    #[serial]
    fn test_empty_webhook_reads_as_disabled() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("GENERATION_WEBHOOK", "");
        }

        let config = Config::from_env().unwrap();
        assert!(config.generation_webhook.is_none());

        unsafe {
            env::remove_var("GENERATION_WEBHOOK");
        }
    }
}
