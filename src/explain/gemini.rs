//! Gemini `generateContent` client

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::{ExplainError, Explainer, Result};
use crate::config::ExplainConfig;

pub struct GeminiExplainer {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    /// Environment variable the key was looked up in, for error messages
    api_key_env: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl GeminiExplainer {
    pub fn new(
        endpoint: String,
        model: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
                reqwest::Client::new()
            });

        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model,
            api_key,
            api_key_env: crate::config::DEFAULT_API_KEY_ENV.to_string(),
        }
    }

    /// Build from config, reading the API key from the configured variable
    pub fn from_config(config: &ExplainConfig) -> Self {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty());
        let mut explainer = Self::new(
            config.endpoint.clone(),
            config.model.clone(),
            api_key,
            Duration::from_secs(config.timeout_secs),
        );
        explainer.api_key_env = config.api_key_env.clone();
        explainer
    }

    fn prompt_for(term: &str) -> String {
        format!(
            "你是意大利驾照考试专家。请用中文在100字以内简洁解释单词 \"{}\" \
             在意大利驾照考试中的含义、相关的交通法规或常见考点。",
            term
        )
    }
}

#[async_trait]
impl Explainer for GeminiExplainer {
    async fn explain(&self, term: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ExplainError::MissingApiKey(self.api_key_env.clone()))?;

        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);
        let body = json!({
            "contents": [{ "parts": [{ "text": Self::prompt_for(term) }] }],
            "generationConfig": { "thinkingConfig": { "thinkingBudget": 0 } },
        });

        log::debug!("Requesting explanation for {:?} from {}", term, self.model);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExplainError::Status(status.as_u16()));
        }

        let parsed: GenerateResponse = response.json().await?;
        parsed.text().ok_or(ExplainError::EmptyResponse)
    }
}
