use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::info;

use super::catalog::SchemeCatalog;
use super::eligibility::{EligibilityEngine, MatchResult, QuickMatch};
use super::enrichment::{Enricher, EnrichmentOutcome, ExplanationProvider};
use super::profile::{ApplicantProfile, DetailLevel, ProfileExtractor};
use crate::config::MatchingConfig;

/// Which scorer handled a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPath {
    Full,
    Quick,
}

impl ScoringPath {
    pub fn as_str(self) -> &'static str {
        match self {
            ScoringPath::Full => "full",
            ScoringPath::Quick => "quick",
        }
    }

    pub fn for_detail(detail: DetailLevel) -> Self {
        match detail {
            DetailLevel::Detailed | DetailLevel::Partial => ScoringPath::Full,
            DetailLevel::Ambiguous => ScoringPath::Quick,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Matches<'a> {
    Scored(Vec<MatchResult<'a>>),
    Quick(Vec<QuickMatch<'a>>),
}

impl Matches<'_> {
    pub fn len(&self) -> usize {
        match self {
            Matches::Scored(results) => results.len(),
            Matches::Quick(results) => results.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Scheme names in ranked order.
    pub fn scheme_names(&self) -> Vec<&str> {
        match self {
            Matches::Scored(results) => results
                .iter()
                .map(|result| result.scheme.name.as_str())
                .collect(),
            Matches::Quick(results) => results
                .iter()
                .map(|result| result.scheme.name.as_str())
                .collect(),
        }
    }
}

/// Result of one recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    pub query: String,
    pub profile: ApplicantProfile,
    pub summary: String,
    pub path: ScoringPath,
    pub matches: Matches<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichment: Option<EnrichmentOutcome>,
}

/// Service composing the extractor, the scheme catalog, the eligibility engine and
/// the optional enricher.
#[derive(Debug)]
pub struct RecommendationService {
    catalog: Arc<SchemeCatalog>,
    extractor: ProfileExtractor,
    engine: EligibilityEngine,
    full_limit: usize,
    quick_limit: usize,
    enrichment_timeout: Duration,
    enricher: Option<Enricher>,
}

impl RecommendationService {
    pub fn new(catalog: Arc<SchemeCatalog>, engine: EligibilityEngine) -> Self {
        let defaults = MatchingConfig::default();
        Self {
            catalog,
            extractor: ProfileExtractor::new(),
            engine,
            full_limit: defaults.full_limit,
            quick_limit: defaults.quick_limit,
            enrichment_timeout: defaults.enrichment_timeout,
            enricher: None,
        }
    }

    pub fn from_config(catalog: Arc<SchemeCatalog>, config: &MatchingConfig) -> Self {
        let mut service = Self::new(catalog, EligibilityEngine::default())
            .with_limits(config.full_limit, config.quick_limit);
        service.enrichment_timeout = config.enrichment_timeout;
        service
    }

    pub fn with_limits(mut self, full_limit: usize, quick_limit: usize) -> Self {
        self.full_limit = full_limit;
        self.quick_limit = quick_limit;
        self
    }

    pub fn with_enricher(mut self, enricher: Enricher) -> Self {
        self.enricher = Some(enricher);
        self
    }

    /// Enriches through `provider` under the configured enrichment deadline.
    pub fn with_provider(self, provider: Arc<dyn ExplanationProvider>) -> Self {
        let enricher = Enricher::new(provider, self.enrichment_timeout);
        self.with_enricher(enricher)
    }

    /// Whether an explanation provider is attached.
    pub fn enriches(&self) -> bool {
        self.enricher.is_some()
    }

    pub fn catalog(&self) -> &SchemeCatalog {
        &self.catalog
    }

    pub fn extract(&self, text: &str) -> ApplicantProfile {
        self.extractor.extract(text)
    }

    /// Extract, score with the path the profile's detail level calls for, then
    /// enrich when a provider is configured.
    pub async fn recommend(&self, query: &str) -> Recommendation<'_> {
        self.recommend_with_limit(query, None).await
    }

    /// As [`RecommendationService::recommend`], overriding the path's default limit.
    pub async fn recommend_with_limit(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Recommendation<'_> {
        let profile = self.extract(query);
        let path = ScoringPath::for_detail(profile.detail_level());

        let mut matches = match path {
            ScoringPath::Full => Matches::Scored(self.engine.score(
                self.catalog.iter(),
                &profile,
                limit.unwrap_or(self.full_limit),
            )),
            ScoringPath::Quick => Matches::Quick(self.engine.quick_filter(
                self.catalog.iter(),
                &profile,
                limit.unwrap_or(self.quick_limit),
            )),
        };

        let enrichment = match &self.enricher {
            Some(enricher) => Some(match &mut matches {
                Matches::Scored(results) => enricher.enrich(query, &profile, results).await,
                Matches::Quick(results) => enricher.enrich(query, &profile, results).await,
            }),
            None => None,
        };

        info!(
            detail = ?profile.detail_level(),
            path = ?path,
            fields = profile.extracted_fields().len(),
            matches = matches.len(),
            "computed scheme recommendation"
        );

        Recommendation {
            query: query.to_string(),
            summary: profile.summary(),
            profile,
            path,
            matches,
            enrichment,
        }
    }
}
