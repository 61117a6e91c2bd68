use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-002";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_TIMEOUT_SECS: u64 = 120;
const DEFAULT_MAX_ATTEMPTS: u32 = 1;
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 4096;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Settings for the remote model. Fixed for the lifetime of the process.
#[derive(Clone)]
pub struct LlmSettings {
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub base_url: String,
    pub timeout: Duration,
    /// Total attempts per call when the endpoint answers 429 or 5xx.
    pub max_attempts: u32,
    pub max_output_tokens: u32,
}

// Keeps the credential out of logs.
impl std::fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmSettings")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("max_attempts", &self.max_attempts)
            .field("max_output_tokens", &self.max_output_tokens)
            .finish()
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if a required variable is missing or a value does not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmSettings,
    pub wrap_width: usize,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = lookup("GOOGLE_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .context("Required environment variable 'GOOGLE_API_KEY' is not set")?;

        let temperature: f32 = parse_or(&lookup, "LLM_TEMPERATURE", DEFAULT_TEMPERATURE)?;
        if !(0.0..=2.0).contains(&temperature) {
            bail!("LLM_TEMPERATURE must be between 0.0 and 2.0, got {temperature}");
        }

        let max_attempts: u32 = parse_or(&lookup, "LLM_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?;
        if max_attempts == 0 {
            bail!("LLM_MAX_ATTEMPTS must be at least 1");
        }

        let wrap_width: usize = parse_or(&lookup, "WRAP_WIDTH", crate::wrap::DEFAULT_WRAP_WIDTH)?;
        if wrap_width == 0 {
            bail!("WRAP_WIDTH must be at least 1");
        }

        Ok(Config {
            llm: LlmSettings {
                api_key,
                model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                temperature,
                base_url: lookup("LLM_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                timeout: Duration::from_secs(parse_or(
                    &lookup,
                    "LLM_TIMEOUT_SECS",
                    DEFAULT_TIMEOUT_SECS,
                )?),
                max_attempts,
                max_output_tokens: parse_or(
                    &lookup,
                    "LLM_MAX_OUTPUT_TOKENS",
                    DEFAULT_MAX_OUTPUT_TOKENS,
                )?,
            },
            wrap_width,
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            port: parse_or(&lookup, "PORT", 8080u16)?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        None => Ok(default),
    }
}
