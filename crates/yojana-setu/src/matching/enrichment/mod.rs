//! Optional explanation enrichment for ranked matches.
//!
//! An [`ExplanationProvider`] (typically a hosted language model) is asked to explain
//! the top matches. The call is bounded by a timeout and every failure is absorbed
//! here: the caller always gets its matches back, with or without explanations.

mod prompt;

pub use prompt::{build_prompt, parse_explanations, Explanation, PROMPT_SCHEMES};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use crate::matching::catalog::SchemeRecord;
use crate::matching::eligibility::{MatchResult, QuickMatch};
use crate::matching::profile::ApplicantProfile;

#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    #[error("explanation provider failed: {0}")]
    Provider(String),
    #[error("explanation provider timed out after {0:?}")]
    Timeout(Duration),
    #[error("malformed explanation response: {0}")]
    Malformed(String),
}

/// Completes a prompt with free text.
#[async_trait]
pub trait ExplanationProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, EnrichmentError>;
}

/// A ranked match that can carry an explanation.
pub trait Explainable {
    fn scheme(&self) -> &SchemeRecord;
    fn set_explanation(&mut self, explanation: String);
}

impl Explainable for MatchResult<'_> {
    fn scheme(&self) -> &SchemeRecord {
        self.scheme
    }

    fn set_explanation(&mut self, explanation: String) {
        self.explanation = Some(explanation);
    }
}

impl Explainable for QuickMatch<'_> {
    fn scheme(&self) -> &SchemeRecord {
        self.scheme
    }

    fn set_explanation(&mut self, explanation: String) {
        self.explanation = Some(explanation);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum EnrichmentOutcome {
    /// Number of matches that received an explanation.
    Applied(usize),
    Skipped(String),
}

#[derive(Clone)]
pub struct Enricher {
    provider: Arc<dyn ExplanationProvider>,
    timeout: Duration,
}

impl std::fmt::Debug for Enricher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Enricher")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Enricher {
    pub fn new(provider: Arc<dyn ExplanationProvider>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Attaches explanations in place. Matches are left untouched unless the
    /// provider answers in time with parseable JSON.
    pub async fn enrich<M>(
        &self,
        query: &str,
        profile: &ApplicantProfile,
        matches: &mut [M],
    ) -> EnrichmentOutcome
    where
        M: Explainable + Send,
    {
        if matches.is_empty() {
            return EnrichmentOutcome::Skipped("no matches to explain".to_string());
        }

        let prompt = build_prompt(query, profile, matches);
        let explanations = match self.request(&prompt).await {
            Ok(explanations) => explanations,
            Err(error) => {
                warn!(error = %error, "skipping match explanations");
                return EnrichmentOutcome::Skipped(error.to_string());
            }
        };

        let addressable = matches.len().min(PROMPT_SCHEMES);
        let mut applied = 0;
        for explanation in explanations {
            let Some(index) = explanation.scheme_index.checked_sub(1) else {
                continue;
            };
            if index < addressable {
                matches[index].set_explanation(explanation.text);
                applied += 1;
            }
        }

        debug!(applied, "attached match explanations");
        EnrichmentOutcome::Applied(applied)
    }

    async fn request(&self, prompt: &str) -> Result<Vec<Explanation>, EnrichmentError> {
        let raw = tokio::time::timeout(self.timeout, self.provider.complete(prompt))
            .await
            .map_err(|_| EnrichmentError::Timeout(self.timeout))??;
        parse_explanations(&raw)
    }
}
