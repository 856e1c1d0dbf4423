//! Service configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before a server starts.
//!
//! ## Variables
//!
//! - `PAYMENT_LISTEN` - Bind address of the payment service (default: `localhost:2900`)
//! - `THEATERS_LISTEN` - Bind address of the theaters service (default: `localhost:2901`)
//! - `RUST_LOG` - Log level / filter directives (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `STORE_TIMEOUT_MS` - Deadline for each persistence call in milliseconds (default: 5000)
//! - `CATALOG_PATH` - Optional JSON file of showings for the theaters service
//!
//! The two services default to different ports so they can run side by side.

use anyhow::Result;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub payment_listen: String,
    pub theaters_listen: String,
    pub log_level: String,
    pub log_format: String,
    /// Upper bound for a single call into a persistence port.
    pub store_timeout_ms: u64,
    /// Showings loaded into the in-memory catalog at startup.
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `STORE_TIMEOUT_MS` is set but is not an integer.
    pub fn from_env() -> Result<Self> {
        let payment_listen =
            env::var("PAYMENT_LISTEN").unwrap_or_else(|_| "localhost:2900".to_string());
        let theaters_listen =
            env::var("THEATERS_LISTEN").unwrap_or_else(|_| "localhost:2901".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let store_timeout_ms = match env::var("STORE_TIMEOUT_MS") {
            Ok(v) => v
                .parse()
                .map_err(|e| anyhow::anyhow!("STORE_TIMEOUT_MS must be an integer, got '{v}': {e}"))?,
            Err(_) => 5_000,
        };

        let catalog_path = env::var("CATALOG_PATH")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            payment_listen,
            theaters_listen,
            log_level,
            log_format,
            store_timeout_ms,
            catalog_path,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a listen address is not in `host:port` form
    /// - `log_format` is not `text` or `json`
    /// - `store_timeout_ms` is zero
    pub fn validate(&self) -> Result<()> {
        for (name, addr) in [
            ("PAYMENT_LISTEN", &self.payment_listen),
            ("THEATERS_LISTEN", &self.theaters_listen),
        ] {
            let valid = addr
                .rsplit_once(':')
                .is_some_and(|(host, port)| !host.is_empty() && port.parse::<u16>().is_ok());
            if !valid {
                anyhow::bail!("{name} must be in format 'host:port', got '{addr}'");
            }
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.store_timeout_ms == 0 {
            anyhow::bail!("STORE_TIMEOUT_MS must be greater than 0");
        }

        Ok(())
    }

    /// Deadline applied to each persistence call.
    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Payment listen address: {}", self.payment_listen);
        tracing::info!("  Theaters listen address: {}", self.theaters_listen);
        tracing::info!("  Store timeout: {}ms", self.store_timeout_ms);
        match &self.catalog_path {
            Some(path) => tracing::info!("  Catalog: {}", path.display()),
            None => tracing::info!("  Catalog: empty"),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// Expects `.env` to be already loaded (`dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
