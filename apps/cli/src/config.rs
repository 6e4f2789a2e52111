use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Only commands that call the hosted model load this; offline commands
/// (`extract`, `export`) run without an API key.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
