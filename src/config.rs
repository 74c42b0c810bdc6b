//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file is honoured (loaded by `dotenvy` in `main.rs`).
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `METADATA_CONCURRENCY` - Link previews fetched in parallel per listing (default: 8, max: 64)
//! - `METADATA_TIMEOUT_SECS` - Timeout of a single preview request (default: 10)
//! - `METADATA_MAX_BODY_BYTES` - Bytes of a page read for previews (default: 1 MiB, min: 1024)
//! - `METADATA_USER_AGENT` - User agent of preview requests (default: `posts-service/<version>`)
//! - `ENRICHMENT_POLICY` - `fail_all` or `fail_soft` (default: `fail_all`)
//! - `SEED_USERS_FILE` - Optional JSON array of `{id, username, picture}` loaded at startup

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

use crate::application::enrichment::EnrichmentPolicy;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub metadata_concurrency: usize,
    pub metadata_timeout_secs: u64,
    pub metadata_max_body_bytes: usize,
    pub metadata_user_agent: String,
    /// What a listing does when one link preview fails.
    pub enrichment_policy: EnrichmentPolicy,
    pub seed_users_file: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `ENRICHMENT_POLICY` holds an unknown value.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let metadata_concurrency = parse_or("METADATA_CONCURRENCY", 8);
        let metadata_timeout_secs = parse_or("METADATA_TIMEOUT_SECS", 10);
        let metadata_max_body_bytes = parse_or("METADATA_MAX_BODY_BYTES", 1024 * 1024);

        let metadata_user_agent = env::var("METADATA_USER_AGENT")
            .unwrap_or_else(|_| format!("posts-service/{}", env!("CARGO_PKG_VERSION")));

        let enrichment_policy = match env::var("ENRICHMENT_POLICY") {
            Ok(raw) => EnrichmentPolicy::from_str(&raw)
                .map_err(anyhow::Error::msg)
                .context("Invalid ENRICHMENT_POLICY")?,
            Err(_) => EnrichmentPolicy::default(),
        };

        let seed_users_file = env::var("SEED_USERS_FILE").ok().filter(|p| !p.is_empty());

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            metadata_concurrency,
            metadata_timeout_secs,
            metadata_max_body_bytes,
            metadata_user_agent,
            enrichment_policy,
            seed_users_file,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is outside its documented range.
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.metadata_concurrency == 0 || self.metadata_concurrency > 64 {
            anyhow::bail!(
                "METADATA_CONCURRENCY must be between 1 and 64, got {}",
                self.metadata_concurrency
            );
        }

        if self.metadata_timeout_secs == 0 {
            anyhow::bail!("METADATA_TIMEOUT_SECS must be greater than 0");
        }

        if self.metadata_max_body_bytes < 1024 {
            anyhow::bail!(
                "METADATA_MAX_BODY_BYTES must be at least 1024, got {}",
                self.metadata_max_body_bytes
            );
        }

        if self.metadata_user_agent.trim().is_empty() {
            anyhow::bail!("METADATA_USER_AGENT must not be empty");
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Link previews: concurrency={} timeout={}s max_body={}B policy={:?}",
            self.metadata_concurrency,
            self.metadata_timeout_secs,
            self.metadata_max_body_bytes,
            self.enrichment_policy
        );
        match &self.seed_users_file {
            Some(path) => tracing::info!("  Seed users: {}", path),
            None => tracing::info!("  Seed users: none"),
        }
    }
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "LISTEN",
        "LOG_FORMAT",
        "METADATA_CONCURRENCY",
        "METADATA_TIMEOUT_SECS",
        "METADATA_MAX_BODY_BYTES",
        "METADATA_USER_AGENT",
        "ENRICHMENT_POLICY",
        "SEED_USERS_FILE",
    ];

    fn clear_env() {
        for var in VARS {
            // SAFETY: Tests are run serially due to #[serial], so no concurrent access
            unsafe { env::remove_var(var) };
        }
    }

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            metadata_concurrency: 8,
            metadata_timeout_secs: 10,
            metadata_max_body_bytes: 1024 * 1024,
            metadata_user_agent: "posts-service/test".to_string(),
            enrichment_policy: EnrichmentPolicy::FailAll,
            seed_users_file: None,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.metadata_concurrency = 0;
        assert!(config.validate().is_err());
        config.metadata_concurrency = 65;
        assert!(config.validate().is_err());
        config.metadata_concurrency = 8;

        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "localhost".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "127.0.0.1:8080".to_string();

        config.metadata_timeout_secs = 0;
        assert!(config.validate().is_err());
        config.metadata_timeout_secs = 10;

        config.metadata_max_body_bytes = 100;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.metadata_concurrency, 8);
        assert_eq!(config.metadata_timeout_secs, 10);
        assert_eq!(config.enrichment_policy, EnrichmentPolicy::FailAll);
        assert!(config.metadata_user_agent.starts_with("posts-service/"));
        assert!(config.seed_users_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("METADATA_CONCURRENCY", "3");
            env::set_var("ENRICHMENT_POLICY", "fail_soft");
            env::set_var("SEED_USERS_FILE", "users.json");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.metadata_concurrency, 3);
        assert_eq!(config.enrichment_policy, EnrichmentPolicy::FailSoft);
        assert_eq!(config.seed_users_file.as_deref(), Some("users.json"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unknown_policy_is_rejected() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe { env::set_var("ENRICHMENT_POLICY", "best_effort") };

        assert!(Config::from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_unparsable_number_falls_back_to_default() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe { env::set_var("METADATA_TIMEOUT_SECS", "soon") };

        let config = Config::from_env().unwrap();
        assert_eq!(config.metadata_timeout_secs, 10);

        clear_env();
    }
}
