use super::config::QuickFilterConfig;
use super::rules::SchemeText;
use super::taxonomy::{
    caste_keywords, gender_keywords, occupation_keywords, BPL_KEYWORDS, DISABILITY_KEYWORDS,
    SENIOR_KEYWORDS,
};
use crate::matching::profile::ApplicantProfile;

/// Penalty-free relevance used when the profile says too little to score.
pub(crate) fn relevance(
    profile: &ApplicantProfile,
    scheme: &SchemeText,
    config: &QuickFilterConfig,
) -> (i32, Vec<String>) {
    let text = &scheme.searchable;
    let mut score = 0;
    let mut reasons = Vec::new();

    if let Some(occupation) = profile.occupation() {
        let matches = occupation_keywords(occupation).count_in(text);
        if matches > 0 {
            score += config.occupation_base + config.occupation_per_keyword * matches as i32;
            reasons.push(format!("Related to {}", occupation.as_str()));
        }
    }

    if let Some(gender) = profile.gender() {
        if gender_keywords(gender).any_in(text) {
            score += config.gender;
            reasons.push(format!("For {}", gender.audience()));
        }
    }

    if let Some(caste) = profile.caste() {
        if caste_keywords(caste).any_in(text) {
            score += config.caste;
            reasons.push(format!("For {} category", caste.as_str().to_uppercase()));
        }
    }

    if profile.is_bpl() && BPL_KEYWORDS.any_in(text) {
        score += config.bpl;
        reasons.push("For BPL families".to_string());
    }
    if profile.is_senior_citizen() && SENIOR_KEYWORDS.any_in(text) {
        score += config.senior;
        reasons.push("For senior citizens".to_string());
    }
    if profile.is_disabled() && DISABILITY_KEYWORDS.any_in(text) {
        score += config.disability;
        reasons.push("For persons with disabilities".to_string());
    }

    (score, reasons)
}
