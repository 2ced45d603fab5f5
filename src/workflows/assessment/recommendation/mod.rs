mod gateway;
mod prompt;
mod templates;

pub use gateway::GenAiGateway;
pub use prompt::{
    build_prompt, needs_escalation, PromptBundle, ANXIETY_ESCALATION_THRESHOLD,
    DEPRESSION_ESCALATION_THRESHOLD,
};
pub use templates::fallback_text;

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use super::domain::{QuestionnaireAnswers, RecommendationSource, StressClass};

/// Upper bound on one external completion attempt when the configuration does
/// not say otherwise.
pub const DEFAULT_COMPLETION_TIMEOUT: Duration = Duration::from_secs(10);

/// Failures of the external text-generation call. All of them are recovered
/// locally by falling back to the static template; none crosses the provider
/// boundary.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("completion transport failed: {0}")]
    Transport(String),
    #[error("completion service returned status {code}")]
    UpstreamStatus { code: u16 },
    #[error("completion response missing expected fields: {0}")]
    MalformedResponse(String),
}

/// Swappable completion backend so the provider can be exercised with fakes
/// and new text-generation services can be adapted without touching the
/// fallback chain.
pub trait TextCompletionBackend: Send + Sync {
    fn complete(
        &self,
        prompt: PromptBundle,
    ) -> impl Future<Output = Result<String, ProviderError>> + Send;
}

/// Recommendation text together with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub text: String,
    pub source: RecommendationSource,
}

impl Recommendation {
    fn fallback(class: StressClass) -> Self {
        Self {
            text: fallback_text(class).to_string(),
            source: RecommendationSource::FallbackTemplate,
        }
    }
}

/// Tiered recommendation chain: one bounded attempt against the configured
/// backend, then the static per-class template.
///
/// The provider never retries and never fails: callers that want retries wrap
/// it, and every backend failure resolves to the template.
pub struct RecommendationProvider<B> {
    backend: Option<B>,
    timeout: Duration,
}

impl<B> RecommendationProvider<B>
where
    B: TextCompletionBackend,
{
    pub fn new(backend: B, timeout: Duration) -> Self {
        Self {
            backend: Some(backend),
            timeout,
        }
    }

    /// Provider with no external backend; every call resolves to the
    /// template.
    pub fn disabled() -> Self {
        Self {
            backend: None,
            timeout: DEFAULT_COMPLETION_TIMEOUT,
        }
    }

    pub fn from_backend(backend: Option<B>, timeout: Duration) -> Self {
        Self { backend, timeout }
    }

    /// Obtain recommendation text for an assessment. At most one external
    /// attempt; dropping the returned future cancels the in-flight call.
    pub async fn recommend(
        &self,
        class: StressClass,
        answers: &QuestionnaireAnswers,
    ) -> Recommendation {
        let Some(backend) = &self.backend else {
            return Recommendation::fallback(class);
        };

        let prompt = build_prompt(class, answers);
        match tokio::time::timeout(self.timeout, backend.complete(prompt)).await {
            Ok(Ok(text)) if !text.trim().is_empty() => Recommendation {
                text,
                source: RecommendationSource::Generated,
            },
            Ok(Ok(_)) => {
                warn!(class = class.label(), "empty completion, using template");
                Recommendation::fallback(class)
            }
            Ok(Err(error)) => {
                warn!(class = class.label(), %error, "completion failed, using template");
                Recommendation::fallback(class)
            }
            Err(_) => {
                warn!(
                    class = class.label(),
                    timeout_ms = self.timeout.as_millis() as u64,
                    "completion timed out, using template"
                );
                Recommendation::fallback(class)
            }
        }
    }
}
