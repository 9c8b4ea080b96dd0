use config::{Config as Cfg, File};
use serde::Deserialize;
use std::env;

use crate::error::ApiError;

/// Default timeout for outbound Gemini calls, in milliseconds.
const DEFAULT_GEMINI_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub official_email: String,
    pub gemini: GeminiSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub model: String,
    pub timeout_ms: u64,
}

fn default_port() -> u16 {
    3000
}

impl AppConfig {
    pub fn load() -> Result<Self, ApiError> {
        dotenvy::dotenv().ok();

        let server = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()
            .map_err(|e| ApiError::Config(anyhow::Error::new(e)))?
            .try_deserialize::<ServerConfig>()
            .map_err(|e| ApiError::Config(anyhow::Error::new(e)))?;

        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(AppConfig {
            server,
            official_email: get_env("OFFICIAL_EMAIL", Some("ops@bfhl.dev"), is_prod)?,
            gemini: GeminiSettings {
                api_key: get_env("GEMINI_API_KEY", Some("test-api-key"), is_prod)?,
                model: get_env("GEMINI_TEXT_MODEL", Some("gemini-1.0-pro"), is_prod)?,
                timeout_ms: get_env(
                    "GEMINI_TIMEOUT_MS",
                    Some(&DEFAULT_GEMINI_TIMEOUT_MS.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_GEMINI_TIMEOUT_MS),
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, ApiError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(ApiError::Config(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(ApiError::Config(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
