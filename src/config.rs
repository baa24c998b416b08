use std::env;

use anyhow::{Context, Result};

/// Process configuration, read from the environment once at startup and
/// passed explicitly to the components that need it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API credential for the completion provider. Required.
    pub api_key: String,
    /// Base URL of the completion provider.
    pub api_base: String,
    /// Model identifier sent with every completion request.
    pub model: String,
    /// Sampling temperature sent with every completion request.
    pub temperature: f32,
    pub host: String,
    pub port: u16,
    /// Timeout applied to outbound completion calls, in seconds.
    pub request_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY")
            .context("Set OPENAI_API_KEY in the environment or .env")?;
        if api_key.is_empty() {
            anyhow::bail!("OPENAI_API_KEY is set but empty");
        }

        let api_base = env::var("OPENAI_API_BASE")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let model = env::var("MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let temperature = env::var("TEMPERATURE")
            .ok()
            .and_then(|v| v.parse::<f32>().ok())
            .unwrap_or(0.7);
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8080);
        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(60);

        Ok(Self {
            api_key,
            api_base,
            model,
            temperature,
            host,
            port,
            request_timeout_secs,
        })
    }
}
