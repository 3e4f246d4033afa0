//! Runtime configuration.

use std::env;

use crate::error::ConfigError;
use crate::traits::WatchOptions;

/// Distance to a step's target point that counts as having completed it.
pub const DEFAULT_ARRIVAL_RADIUS_M: f64 = 25.0;

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationConfig {
    /// Auto-advance fires when a fix is strictly closer than this.
    pub arrival_radius_m: f64,
    /// Options for the position subscription a session opens.
    pub watch: WatchOptions,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            arrival_radius_m: DEFAULT_ARRIVAL_RADIUS_M,
            watch: WatchOptions::default(),
        }
    }
}

pub const API_KEY_VAR: &str = "EKO_GEMINI_API_KEY";
pub const BASE_URL_VAR: &str = "EKO_GEMINI_BASE_URL";
pub const MODEL_VAR: &str = "EKO_GEMINI_MODEL";
pub const TIMEOUT_VAR: &str = "EKO_GEMINI_TIMEOUT_SECS";

/// Settings for the generative-AI HTTP adapter.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
    pub timeout_secs: u64,
    /// City the prompts are anchored to.
    pub city: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
            city: "Lagos, Nigeria".to_string(),
        }
    }
}

impl GeminiConfig {
    /// Read the adapter settings from the environment. Only the API key is
    /// required.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`GeminiConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).ok_or(ConfigError::MissingVar(API_KEY_VAR))?;
        let mut config = Self {
            api_key,
            ..Self::default()
        };
        if let Some(base_url) = lookup(BASE_URL_VAR) {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(model) = lookup(MODEL_VAR) {
            config.model = model;
        }
        if let Some(timeout) = lookup(TIMEOUT_VAR) {
            config.timeout_secs = timeout.parse().map_err(|_| ConfigError::InvalidValue {
                name: TIMEOUT_VAR,
                value: timeout,
            })?;
        }
        Ok(config)
    }
}
