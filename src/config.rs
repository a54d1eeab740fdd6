// src/config.rs
use crate::errors::{ConvertError, Result};
use std::time::Duration;

pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash-preview-05-20";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 30 * 60;

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
}

/// Address the HTTP server binds to.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Bounds on the in-memory session store.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub max_sessions: usize,
    pub idle_timeout: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_sessions: DEFAULT_MAX_SESSIONS,
            idle_timeout: Duration::from_secs(DEFAULT_SESSION_IDLE_SECS),
        }
    }
}

/// High-level application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini: GeminiConfig,
    pub server: ServerConfig,
    pub sessions: SessionConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get("GEMINI_API_KEY").ok_or_else(|| {
            ConvertError::Config(
                "No model credential configured. Please set GEMINI_API_KEY.".to_string(),
            )
        })?;
        let api_base =
            get("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string());
        let model = get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        let host = get("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match get("SERVER_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                ConvertError::Config(format!("SERVER_PORT must be a port number, got '{}'", raw))
            })?,
            None => DEFAULT_PORT,
        };

        let max_sessions = match get("SESSION_LIMIT") {
            Some(raw) => raw.parse::<usize>().ok().filter(|n| *n > 0).ok_or_else(|| {
                ConvertError::Config(format!("SESSION_LIMIT must be a positive number, got '{}'", raw))
            })?,
            None => DEFAULT_MAX_SESSIONS,
        };
        let idle_secs = match get("SESSION_IDLE_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                ConvertError::Config(format!("SESSION_IDLE_SECS must be a number of seconds, got '{}'", raw))
            })?,
            None => DEFAULT_SESSION_IDLE_SECS,
        };

        Ok(AppConfig {
            gemini: GeminiConfig { api_base, api_key, model },
            server: ServerConfig { host, port },
            sessions: SessionConfig {
                max_sessions,
                idle_timeout: Duration::from_secs(idle_secs),
            },
        })
    }
}
