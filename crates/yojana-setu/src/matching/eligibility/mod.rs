//! Weighted, multi-criterion eligibility scoring and the lightweight quick filter.

mod age;
mod config;
mod policy;
mod quick;
mod rules;
pub mod taxonomy;

pub use age::{parse_requirement, AgeRequirement};
pub use config::{EligibilityConfig, QuickFilterConfig};

use serde::Serialize;
use tracing::debug;

use crate::matching::catalog::SchemeRecord;
use crate::matching::profile::ApplicantProfile;
use rules::{RuleInput, SchemeText};

/// Criterion vocabulary reported in [`MatchResult::matched_criteria`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Occupation,
    Gender,
    Age,
    Caste,
    Income,
    State,
    Senior,
    Disability,
    Widow,
    Land,
    Education,
}

impl Criterion {
    pub fn as_str(self) -> &'static str {
        match self {
            Criterion::Occupation => "occupation",
            Criterion::Gender => "gender",
            Criterion::Age => "age",
            Criterion::Caste => "caste",
            Criterion::Income => "income",
            Criterion::State => "state",
            Criterion::Senior => "senior",
            Criterion::Disability => "disability",
            Criterion::Widow => "widow",
            Criterion::Land => "land",
            Criterion::Education => "education",
        }
    }
}

/// A scheme scored against a profile. `reasons[i]` explains `matched_criteria[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    pub scheme: &'a SchemeRecord,
    /// Raw score clamped at zero.
    pub score: i32,
    pub max_score: i32,
    pub percentage: u8,
    pub matched_criteria: Vec<Criterion>,
    pub reasons: Vec<String>,
    pub match_count: usize,
    pub penalty_applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Quick filter hit for ambiguous profiles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickMatch<'a> {
    pub scheme: &'a SchemeRecord,
    pub score: i32,
    pub percentage: u8,
    pub reasons: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Stateless scorer applying an [`EligibilityConfig`] to profiles and schemes.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEngine {
    config: EligibilityConfig,
}

impl EligibilityEngine {
    pub fn new(config: EligibilityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EligibilityConfig {
        &self.config
    }

    /// Scores a single scheme without filtering it out.
    pub fn evaluate<'a>(
        &self,
        scheme: &'a SchemeRecord,
        profile: &ApplicantProfile,
    ) -> MatchResult<'a> {
        let text = SchemeText::full(scheme);
        let tally = rules::score_scheme(&RuleInput {
            profile,
            scheme: &text,
            config: &self.config,
        });

        let score = tally.score.max(0);
        let match_count = tally.criteria.len();
        MatchResult {
            scheme,
            score,
            max_score: self.config.max_score,
            percentage: policy::percentage(score, match_count, self.config.max_score),
            matched_criteria: tally.criteria,
            reasons: tally.reasons,
            match_count,
            penalty_applied: tally.penalty_applied,
            explanation: None,
        }
    }

    /// Full scoring path: every scheme is evaluated, unreportable results dropped,
    /// the rest ranked and truncated to `limit`.
    pub fn score<'a, I>(
        &self,
        schemes: I,
        profile: &ApplicantProfile,
        limit: usize,
    ) -> Vec<MatchResult<'a>>
    where
        I: IntoIterator<Item = &'a SchemeRecord>,
    {
        let mut results: Vec<MatchResult<'a>> = schemes
            .into_iter()
            .map(|scheme| self.evaluate(scheme, profile))
            .filter(policy::is_reportable)
            .collect();
        let candidates = results.len();

        policy::rank(&mut results, limit);
        debug!(candidates, returned = results.len(), "scored scheme catalog");
        results
    }

    /// Quick path for ambiguous profiles: relevance only, no penalties, percentage
    /// capped, ranked by relevance.
    pub fn quick_filter<'a, I>(
        &self,
        schemes: I,
        profile: &ApplicantProfile,
        limit: usize,
    ) -> Vec<QuickMatch<'a>>
    where
        I: IntoIterator<Item = &'a SchemeRecord>,
    {
        let quick = &self.config.quick;
        let mut results: Vec<QuickMatch<'a>> = schemes
            .into_iter()
            .filter_map(|scheme| {
                let (score, reasons) =
                    quick::relevance(profile, &SchemeText::brief(scheme), quick);
                (score > 0).then(|| QuickMatch {
                    scheme,
                    score,
                    percentage: score.clamp(0, i32::from(quick.percentage_cap)) as u8,
                    reasons,
                    explanation: None,
                })
            })
            .collect();
        let candidates = results.len();

        results.sort_by_key(|result| std::cmp::Reverse(result.score));
        results.truncate(limit);
        debug!(candidates, returned = results.len(), "quick-filtered scheme catalog");
        results
    }
}
