//! Explanations for vocabulary terms from a text-generation service
//!
//! Failures never reach the caller as errors: `explain_or_placeholder`
//! turns them into a fixed message that can be shown as-is.

mod gemini;

use async_trait::async_trait;
use thiserror::Error;

pub use gemini::GeminiExplainer;

/// Shown when the service could not be reached or answered with an error
pub const FAILURE_PLACEHOLDER: &str = "获取解释失败，请稍后重试。";

/// Shown when the service answered without any text
pub const EMPTY_PLACEHOLDER: &str = "暂无AI解释。";

#[derive(Error, Debug)]
pub enum ExplainError {
    #[error("API key not set (expected in ${0})")]
    MissingApiKey(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service returned status {0}")]
    Status(u16),

    #[error("Service returned no text")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, ExplainError>;

/// Source of explanatory text for a term
#[async_trait]
pub trait Explainer: Send + Sync {
    async fn explain(&self, term: &str) -> Result<String>;
}

/// Ask `explainer` about `term`, falling back to a placeholder on any failure
pub async fn explain_or_placeholder(explainer: &dyn Explainer, term: &str) -> String {
    match explainer.explain(term).await {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) | Err(ExplainError::EmptyResponse) => EMPTY_PLACEHOLDER.to_string(),
        Err(e) => {
            log::error!("Failed to fetch explanation for {:?}: {}", term, e);
            FAILURE_PLACEHOLDER.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    #[async_trait]
    impl Explainer for Fixed {
        async fn explain(&self, _term: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Failing;

    #[async_trait]
    impl Explainer for Failing {
        async fn explain(&self, _term: &str) -> Result<String> {
            Err(ExplainError::Status(503))
        }
    }

    struct Silent;

    #[async_trait]
    impl Explainer for Silent {
        async fn explain(&self, _term: &str) -> Result<String> {
            Err(ExplainError::EmptyResponse)
        }
    }

    #[tokio::test]
    async fn test_passes_text_through() {
        let text = explain_or_placeholder(&Fixed("  让行标志。\n"), "Dare precedenza").await;
        assert_eq!(text, "让行标志。");
    }

    #[tokio::test]
    async fn test_failure_becomes_placeholder() {
        let text = explain_or_placeholder(&Failing, "Casco").await;
        assert_eq!(text, FAILURE_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_empty_becomes_placeholder() {
        assert_eq!(explain_or_placeholder(&Silent, "Casco").await, EMPTY_PLACEHOLDER);
        assert_eq!(explain_or_placeholder(&Fixed("   "), "Casco").await, EMPTY_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_missing_key_becomes_placeholder() {
        let explainer = GeminiExplainer::new(
            "http://127.0.0.1:9".to_string(),
            "test-model".to_string(),
            None,
            std::time::Duration::from_secs(1),
        );
        let text = explain_or_placeholder(&explainer, "Casco").await;
        assert_eq!(text, FAILURE_PLACEHOLDER);
    }
}
