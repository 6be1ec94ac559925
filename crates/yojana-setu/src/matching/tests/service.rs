use std::sync::atomic::Ordering;
use std::time::Duration;

use super::common::*;
use crate::matching::enrichment::EnrichmentOutcome;
use crate::matching::{Matches, ScoringPath};

const EXPLANATIONS: &str = r#"```json
{"explanations": [
  {"scheme_index": 1, "text": "Because you are a young farmer in Maharashtra."},
  {"scheme_index": 2, "text": "Because you are a woman starting out."},
  {"scheme_index": 7, "text": "Out of range."}
]}
```"#;

#[tokio::test]
async fn detailed_query_takes_full_path() {
    let service = build_service();
    let recommendation = service.recommend(FARMER_QUERY).await;

    assert_eq!(recommendation.path, ScoringPath::Full);
    assert_eq!(recommendation.query, FARMER_QUERY);
    assert_eq!(
        recommendation.summary,
        "25 years old, female, farmer, from maharashtra, income ₹1.5 lakh, 2 acres land"
    );
    assert_eq!(recommendation.matches.len(), 6);
    assert_eq!(
        recommendation.matches.scheme_names()[0],
        "Yuva Kisan Protsahan Yojana"
    );
    assert!(recommendation.enrichment.is_none());
}

#[tokio::test]
async fn ambiguous_query_takes_quick_path() {
    let service = build_service();
    let recommendation = service.recommend(AMBIGUOUS_QUERY).await;

    assert_eq!(recommendation.path, ScoringPath::Quick);
    assert!(matches!(recommendation.matches, Matches::Quick(ref results) if results.len() == 4));
}

#[tokio::test]
async fn empty_query_yields_empty_recommendation() {
    let service = build_service();
    let recommendation = service.recommend("").await;

    assert_eq!(recommendation.path, ScoringPath::Quick);
    assert!(recommendation.matches.is_empty());
    assert_eq!(recommendation.summary, "No specific details provided");
}

#[tokio::test]
async fn request_limit_overrides_default() {
    let service = build_service();

    let limited = service.recommend_with_limit(FARMER_QUERY, Some(2)).await;
    assert_eq!(
        limited.matches.scheme_names(),
        vec!["Yuva Kisan Protsahan Yojana", "Mahila Udyam Nidhi"]
    );

    let configured = build_service().with_limits(3, 1);
    assert_eq!(configured.recommend(FARMER_QUERY).await.matches.len(), 3);
    assert_eq!(configured.recommend(AMBIGUOUS_QUERY).await.matches.len(), 1);
}

#[tokio::test]
async fn explanations_attach_to_prompted_matches_only() {
    let provider = ScriptedProvider::answering(EXPLANATIONS);
    let calls = provider.calls.clone();
    let service = service_with_provider(provider, Duration::from_secs(2));

    let recommendation = service.recommend(FARMER_QUERY).await;

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(recommendation.enrichment, Some(EnrichmentOutcome::Applied(2)));
    let Matches::Scored(results) = &recommendation.matches else {
        panic!("expected scored matches");
    };
    assert_eq!(
        results[0].explanation.as_deref(),
        Some("Because you are a young farmer in Maharashtra.")
    );
    assert!(results[1].explanation.is_some());
    assert!(results[2..].iter().all(|result| result.explanation.is_none()));
}

#[tokio::test]
async fn enrichment_never_reorders_matches() {
    let plain = build_service();
    let enriched = service_with_provider(
        ScriptedProvider::answering(EXPLANATIONS),
        Duration::from_secs(2),
    );

    let before = plain.recommend(WIDOW_QUERY).await;
    let after = enriched.recommend(WIDOW_QUERY).await;

    assert_eq!(before.matches.scheme_names(), after.matches.scheme_names());
}

#[tokio::test]
async fn provider_failure_is_absorbed() {
    let service = service_with_provider(FailingProvider, Duration::from_secs(2));
    let recommendation = service.recommend(FARMER_QUERY).await;

    assert_eq!(recommendation.matches.len(), 6);
    assert_eq!(
        recommendation.enrichment,
        Some(EnrichmentOutcome::Skipped(
            "explanation provider failed: quota exceeded".to_string()
        ))
    );
}

#[tokio::test]
async fn slow_provider_times_out() {
    let service = service_with_provider(
        SlowProvider(Duration::from_millis(500)),
        Duration::from_millis(20),
    );
    let recommendation = service.recommend(FARMER_QUERY).await;

    let Some(EnrichmentOutcome::Skipped(detail)) = &recommendation.enrichment else {
        panic!("expected skipped enrichment");
    };
    assert!(detail.contains("timed out"));
    assert_eq!(recommendation.matches.len(), 6);
}

#[tokio::test]
async fn malformed_answer_is_skipped() {
    let service = service_with_provider(
        ScriptedProvider::answering("Here you go: farmers qualify."),
        Duration::from_secs(2),
    );
    let recommendation = service.recommend(FARMER_QUERY).await;

    let Some(EnrichmentOutcome::Skipped(detail)) = &recommendation.enrichment else {
        panic!("expected skipped enrichment");
    };
    assert!(detail.starts_with("malformed explanation response"));
}

#[tokio::test]
async fn nothing_to_explain_skips_the_provider() {
    let provider = ScriptedProvider::answering(EXPLANATIONS);
    let calls = provider.calls.clone();
    let service = service_with_provider(provider, Duration::from_secs(2));

    let recommendation = service.recommend("").await;

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        recommendation.enrichment,
        Some(EnrichmentOutcome::Skipped("no matches to explain".to_string()))
    );
}

#[tokio::test]
async fn configured_deadline_applies_to_providers() {
    use std::sync::Arc;

    use crate::config::MatchingConfig;
    use crate::matching::RecommendationService;

    let config = MatchingConfig {
        enrichment_timeout: Duration::from_millis(20),
        ..MatchingConfig::default()
    };
    let service = RecommendationService::from_config(sample_catalog(), &config)
        .with_provider(Arc::new(SlowProvider(Duration::from_millis(500))));

    let recommendation = service.recommend(WIDOW_QUERY).await;

    assert!(matches!(
        recommendation.enrichment,
        Some(EnrichmentOutcome::Skipped(ref detail)) if detail.contains("timed out")
    ));
}

#[tokio::test]
async fn configured_service_without_provider_skips_enrichment() {
    use crate::config::MatchingConfig;
    use crate::matching::RecommendationService;

    let config = MatchingConfig {
        enrichment_timeout: Duration::from_millis(20),
        ..MatchingConfig::default()
    };
    let service = RecommendationService::from_config(sample_catalog(), &config);
    assert!(!service.enriches());

    let recommendation = service.recommend(WIDOW_QUERY).await;
    assert!(recommendation.enrichment.is_none());
    assert!(!recommendation.matches.is_empty());

    let service =
        service.with_provider(std::sync::Arc::new(SlowProvider(Duration::from_millis(1))));
    assert!(service.enriches());
}
