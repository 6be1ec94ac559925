//! Profile extraction, scheme scoring and the recommendation workflow built on them.
//!
//! Extraction and scoring are pure and synchronous. The only asynchronous step is
//! the optional explanation enrichment, which never changes which schemes are
//! returned or in what order.

pub mod catalog;
pub mod eligibility;
pub mod enrichment;
pub mod profile;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{AdminLevel, CatalogError, SchemeCatalog, SchemeRecord};
pub use eligibility::{
    Criterion, EligibilityConfig, EligibilityEngine, MatchResult, QuickFilterConfig, QuickMatch,
};
pub use enrichment::{
    Enricher, EnrichmentError, EnrichmentOutcome, Explainable, ExplanationProvider,
};
pub use profile::{
    extract, ApplicantProfile, Caste, DetailLevel, EducationLevel, Gender, IncomeLevel,
    IndianState, Occupation, ProfileExtractor, ProfileField,
};
pub use router::recommendation_router;
pub use service::{Matches, Recommendation, RecommendationService, ScoringPath};
