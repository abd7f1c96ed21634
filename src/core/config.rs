// src/core/config.rs
use std::env;
use std::time::Duration;

use log::LevelFilter;

use crate::cli::Args;

// Configuration for the passphrase generator
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Word Source
    pub word_api_url: String,
    /// Verify the word API's TLS certificate. Off by default to match the
    /// upstream provider's observed behavior; enabling it is the safer
    /// choice whenever the provider presents a valid certificate.
    pub verify_tls: bool,
    pub fetch_timeout: Duration,
    pub max_fetch_attempts: usize,

    // Passphrase Generation
    pub default_min_length: usize,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "127.0.0.1".to_string(),
            web_port: 5000,

            // Word Source
            word_api_url: "https://random-word-api.vercel.app/api?words=1".to_string(),
            verify_tls: false,
            fetch_timeout: Duration::from_secs(10),
            max_fetch_attempts: 64,

            // Passphrase Generation
            default_min_length: 16,

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Web Interface
        if let Ok(address) = env::var("WEB_ADDRESS") {
            config.web_address = address;
        }

        if let Ok(val) = env::var("WEB_PORT") {
            if let Ok(port) = val.parse() {
                config.web_port = port;
            }
        }

        // Word Source
        if let Ok(url) = env::var("WORD_API_URL") {
            config.word_api_url = url;
        }

        if let Ok(val) = env::var("VERIFY_TLS") {
            if let Ok(verify) = val.parse() {
                config.verify_tls = verify;
            }
        }

        if let Ok(val) = env::var("FETCH_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse::<u64>() {
                config.fetch_timeout = Duration::from_secs(secs);
            }
        }

        if let Ok(val) = env::var("MAX_FETCH_ATTEMPTS") {
            if let Ok(attempts) = val.parse() {
                config.max_fetch_attempts = attempts;
            }
        }

        // Passphrase Generation
        if let Ok(val) = env::var("DEFAULT_MIN_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_min_length = length;
            }
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        config
    }

    // Command-line flags win over the environment
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(address) = &args.address {
            self.web_address = address.clone();
        }

        if let Some(port) = args.port {
            self.web_port = port;
        }

        if let Some(url) = &args.api_url {
            self.word_api_url = url.clone();
        }

        if args.verify_tls {
            self.verify_tls = true;
        }
    }
}
