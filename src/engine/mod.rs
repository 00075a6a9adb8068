mod guide_api;

use crate::{
    config::{Config, GeminiSettings},
    error::Error,
};

pub struct Engine {
    client: reqwest::Client,
    gemini: GeminiSettings,
    destination: String,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(config: &Config, client: reqwest::Client) -> Self {
        tracing::info!(
            model = %config.gemini.model,
            destination = %config.destination,
            "guide engine ready"
        );

        Self {
            client,
            gemini: config.gemini.clone(),
            destination: config.destination.clone(),
        }
    }
}

/// Shared HTTP client; the request timeout lives here.
pub fn http_client(config: &Config) -> Result<reqwest::Client, Error> {
    Ok(reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()?)
}
