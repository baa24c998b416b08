use std::time::Duration;

use log::{debug, info};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AppConfig;
use crate::web::models::Message;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("completion API returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("completion API returned no choices")]
    NoChoices,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

// A client for an OpenAI-compatible chat completions API
pub struct CompletionClient {
    api_base: String,
    api_key: String,
    model: String,
    temperature: f32,
    client: Client,
}

impl CompletionClient {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        info!("Using completion API at: {}", config.api_base);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            api_base: config.api_base.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            client,
        })
    }

    /// Send the full message sequence to the provider and return the text of
    /// the first completion choice.
    pub async fn complete(&self, messages: &[Message]) -> Result<String, ProviderError> {
        let url = format!("{}/v1/chat/completions", self.api_base);
        let payload = CompletionRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
        };

        debug!("Sending {} messages to {}", messages.len(), url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            return Err(ProviderError::Status { status, body });
        }

        let completion: CompletionResponse = response.json().await?;
        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or(ProviderError::NoChoices)?;

        info!("Reply length: {} characters", choice.message.content.len());
        Ok(choice.message.content)
    }
}
