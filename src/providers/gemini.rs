// src/providers/gemini.rs

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

use crate::config::GeminiConfig;
use crate::errors::{ConvertError, Result};
use crate::providers::LlmProvider;

/// A provider for interacting with Google's Gemini models.
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

impl GeminiProvider {
    /// Creates a new `GeminiProvider`.
    pub fn new(client: Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }
}

/// Pulls `candidates[0].content.parts[0].text` out of a `generateContent` response.
pub fn extract_candidate_text(response_json: &Value) -> Result<&str> {
    if let Some(error) = response_json.get("error") {
        return Err(ConvertError::ApiResponse(error.to_string()));
    }

    let output = response_json
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.get(0))
        .and_then(|p| p.get("text"))
        .and_then(|t| t.as_str())
        .ok_or_else(|| ConvertError::MalformedResponse(response_json.to_string()))?;

    if output.is_empty() {
        return Err(ConvertError::EmptyResponse);
    }

    Ok(output)
}

impl LlmProvider for GeminiProvider {
    /// Calls the Gemini API with a given prompt and returns the candidate text and latency.
    async fn generate(&self, prompt: &str) -> Result<(String, u64)> {
        let url = self.endpoint();

        log::info!("📡 Calling Gemini model {}", self.config.model);

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
        };

        let start = Instant::now();

        // The key goes in a header so it never shows up in URLs or access logs
        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let latency_ms = start.elapsed().as_millis() as u64;

        log::info!("📥 Gemini response status: {} ({}ms)", status, latency_ms);

        if !status.is_success() {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(ConvertError::ApiError {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let response_json: Value = resp.json().await?;
        let output = extract_candidate_text(&response_json)?;

        Ok((output.to_string(), latency_ms))
    }
}
