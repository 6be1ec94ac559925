use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::response::Response;
use axum::Router;
use serde_json::Value;

use crate::matching::catalog::{AdminLevel, SchemeCatalog, SchemeRecord};
use crate::matching::eligibility::EligibilityEngine;
use crate::matching::enrichment::{EnrichmentError, Enricher, ExplanationProvider};
use crate::matching::profile::{extract, ApplicantProfile};
use crate::matching::{recommendation_router, RecommendationService};

pub(super) const FARMER_QUERY: &str =
    "I am a 25 year old female farmer from Maharashtra with 2 acres land and income of 1.5 lakh";
pub(super) const WIDOW_QUERY: &str = "I am a 65 year old SC widow from Bihar BPL";
pub(super) const AMBIGUOUS_QUERY: &str = "I am a woman";

pub(super) fn farmer_profile() -> ApplicantProfile {
    extract(FARMER_QUERY)
}

pub(super) fn widow_profile() -> ApplicantProfile {
    extract(WIDOW_QUERY)
}

pub(super) fn sample_catalog() -> Arc<SchemeCatalog> {
    Arc::new(SchemeCatalog::sample())
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::default()
}

pub(super) fn young_farmer_scheme() -> SchemeRecord {
    SchemeRecord::new("Young Farmer Scheme")
        .with_eligibility("Farmers aged 18 to 40 years, small/marginal landholding")
}

pub(super) fn central_scheme(name: &str, eligibility: &str) -> SchemeRecord {
    SchemeRecord::new(name)
        .with_eligibility(eligibility)
        .with_level(AdminLevel::Central)
}

pub(super) fn build_service() -> RecommendationService {
    RecommendationService::new(sample_catalog(), engine())
}

pub(super) fn service_with_provider<P>(provider: P, timeout: Duration) -> RecommendationService
where
    P: ExplanationProvider + 'static,
{
    build_service().with_enricher(Enricher::new(Arc::new(provider), timeout))
}

pub(super) fn router_with_service(service: RecommendationService) -> Router {
    recommendation_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Provider returning a fixed answer and counting calls.
#[derive(Default)]
pub(super) struct ScriptedProvider {
    pub(super) answer: String,
    pub(super) calls: Arc<AtomicUsize>,
}

impl ScriptedProvider {
    pub(super) fn answering(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl ExplanationProvider for ScriptedProvider {
    async fn complete(&self, prompt: &str) -> Result<String, EnrichmentError> {
        assert!(prompt.contains("USER PROFILE:"));
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.answer.clone())
    }
}

pub(super) struct FailingProvider;

#[async_trait]
impl ExplanationProvider for FailingProvider {
    async fn complete(&self, _prompt: &str) -> Result<String, EnrichmentError> {
        Err(EnrichmentError::Provider("quota exceeded".to_string()))
    }
}

pub(super) struct SlowProvider(pub(super) Duration);

#[async_trait]
impl ExplanationProvider for SlowProvider {
    async fn complete(&self, _prompt: &str) -> Result<String, EnrichmentError> {
        tokio::time::sleep(self.0).await;
        Ok(r#"{"explanations": []}"#.to_string())
    }
}
