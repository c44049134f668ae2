// src/config.rs

use std::env;
use std::net::SocketAddr;

use dotenvy::dotenv;
use thiserror::Error;

/// Number of entries a leaderboard returns when the caller gives no limit.
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;

/// Upper bound on a caller-supplied leaderboard limit.
pub const MAX_LEADERBOARD_LIMIT: usize = 100;

/// An attempt passes at or above this percentage.
pub const PASSING_PERCENTAGE: f64 = 50.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_ADDR '{value}' is not a socket address: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("SEED_SAMPLE_QUESTIONS '{0}' is not a boolean")]
    SeedFlag(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub rust_log: String,
    pub log_dir: String,
    pub cors_origin: String,
    pub seed_sample_questions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            rust_log: "info".to_string(),
            log_dir: "logs".to_string(),
            cors_origin: "http://localhost:5173".to_string(),
            seed_sample_questions: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let defaults = Self::default();

        let bind_addr = match env::var("BIND_ADDR") {
            Ok(value) => value
                .parse::<SocketAddr>()
                .map_err(|source| ConfigError::BindAddr { value, source })?,
            Err(_) => defaults.bind_addr,
        };

        let rust_log = env::var("RUST_LOG").unwrap_or(defaults.rust_log);
        let log_dir = env::var("LOG_DIR").unwrap_or(defaults.log_dir);
        let cors_origin = env::var("CORS_ORIGIN").unwrap_or(defaults.cors_origin);

        let seed_sample_questions = match env::var("SEED_SAMPLE_QUESTIONS") {
            Ok(value) => parse_flag(&value).ok_or(ConfigError::SeedFlag(value))?,
            Err(_) => defaults.seed_sample_questions,
        };

        Ok(Self {
            bind_addr,
            rust_log,
            log_dir,
            cors_origin,
            seed_sample_questions,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
