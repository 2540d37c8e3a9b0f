use anyhow::{Context, Result};
use std::env;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_ORS_BASE_URL: &str = "https://api.openrouteservice.org";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4-turbo";

/// API credentials and endpoints, read from the environment. The binary
/// loads a `.env` file first, so keys can live there during development.
#[derive(Debug, Clone)]
pub struct RideConfig {
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
    pub ors_api_key: String,
    pub ors_base_url: String,
}

impl RideConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            openai_api_key: env::var("OPENAI_API_KEY").context("OPENAI_API_KEY is not set")?,
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            ors_api_key: env::var("ORS_API_KEY").context("ORS_API_KEY is not set")?,
            ors_base_url: env::var("ORS_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_ORS_BASE_URL.to_string()),
        })
    }
}
