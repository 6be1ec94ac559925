use super::age::parse_requirement;
use super::config::EligibilityConfig;
use super::taxonomy::{
    caste_keywords, education_keywords, gender_keywords, occupation_keywords,
    opposite_gender_terms, KeywordSet, Term, BPL_KEYWORDS, DISABILITY_KEYWORDS,
    EDUCATION_SCHEME_KEYWORDS, LAND_HOLDING_KEYWORDS, LOW_INCOME_KEYWORDS, RESERVED_CASTES,
    SENIOR_KEYWORDS, WIDOW_KEYWORDS,
};
use super::Criterion;
use crate::matching::catalog::{AdminLevel, SchemeRecord};
use crate::matching::profile::{ApplicantProfile, Occupation};

/// Lower-cased scheme text prepared once per scheme.
pub(crate) struct SchemeText {
    pub(crate) searchable: String,
    pub(crate) eligibility: String,
    pub(crate) level: AdminLevel,
}

impl SchemeText {
    /// Name, eligibility, category, tags and details.
    pub(crate) fn full(scheme: &SchemeRecord) -> Self {
        Self::build(scheme, true)
    }

    /// Same as [`SchemeText::full`] without the long details section.
    pub(crate) fn brief(scheme: &SchemeRecord) -> Self {
        Self::build(scheme, false)
    }

    fn build(scheme: &SchemeRecord, with_details: bool) -> Self {
        let mut searchable = format!(
            "{} {} {} {}",
            scheme.name, scheme.eligibility, scheme.category, scheme.tags
        );
        if with_details {
            searchable.push(' ');
            searchable.push_str(&scheme.details);
        }

        Self {
            searchable: searchable.to_lowercase(),
            eligibility: scheme.eligibility.to_lowercase(),
            level: scheme.level,
        }
    }
}

/// Signed contribution of one rule; a rule may both match and penalise.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct RuleOutcome {
    pub(crate) delta: i32,
    pub(crate) matched: Option<(Criterion, String)>,
    pub(crate) penalty: bool,
}

impl RuleOutcome {
    fn matched(criterion: Criterion, points: i32, reason: String) -> Self {
        Self {
            delta: points,
            matched: Some((criterion, reason)),
            penalty: false,
        }
    }

    fn penalty(points: i32) -> Self {
        Self {
            delta: -points,
            matched: None,
            penalty: true,
        }
    }
}

pub(crate) struct RuleInput<'a> {
    pub(crate) profile: &'a ApplicantProfile,
    pub(crate) scheme: &'a SchemeText,
    pub(crate) config: &'a EligibilityConfig,
}

type Rule = fn(&RuleInput<'_>) -> Option<RuleOutcome>;

/// Evaluation order is the order criteria appear in a result.
const RULES: [Rule; 11] = [
    occupation, gender, age, caste, income, state, senior, disability, widow, land, education,
];

/// Accumulated result of running every rule against one scheme.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct Tally {
    pub(crate) score: i32,
    pub(crate) criteria: Vec<Criterion>,
    pub(crate) reasons: Vec<String>,
    pub(crate) penalty_applied: bool,
}

pub(crate) fn score_scheme(input: &RuleInput<'_>) -> Tally {
    RULES
        .iter()
        .filter_map(|rule| rule(input))
        .fold(Tally::default(), |mut tally, outcome| {
            tally.score += outcome.delta;
            tally.penalty_applied |= outcome.penalty;
            if let Some((criterion, reason)) = outcome.matched {
                tally.criteria.push(criterion);
                tally.reasons.push(reason);
            }
            tally
        })
}

fn occupation(input: &RuleInput<'_>) -> Option<RuleOutcome> {
    let occupation = input.profile.occupation()?;
    let matches = occupation_keywords(occupation).count_in(&input.scheme.searchable);
    if matches == 0 {
        return None;
    }

    let config = input.config;
    let points = (config.occupation_base + config.occupation_per_keyword * matches as i32)
        .min(config.critical_weight);
    Some(RuleOutcome::matched(
        Criterion::Occupation,
        points,
        format!(
            "Related to {} ({matches} matching terms)",
            occupation.as_str()
        ),
    ))
}

fn gender(input: &RuleInput<'_>) -> Option<RuleOutcome> {
    let gender = input.profile.gender()?;
    let text = &input.scheme.searchable;
    let for_this = gender_keywords(gender).any_in(text);
    let for_opposite = opposite_gender_terms(gender).any(|term| term.found_in(text));

    match (for_this, for_opposite) {
        (true, false) => Some(RuleOutcome::matched(
            Criterion::Gender,
            input.config.critical_weight,
            format!("Specifically for {}", gender.audience()),
        )),
        (false, true) => Some(RuleOutcome::penalty(input.config.opposite_gender_penalty)),
        _ => None,
    }
}

fn age(input: &RuleInput<'_>) -> Option<RuleOutcome> {
    let age = input.profile.age()?;
    if input.scheme.eligibility.is_empty() {
        return None;
    }
    let requirement = parse_requirement(&input.scheme.eligibility)?;

    if requirement.admits(age) {
        Some(RuleOutcome::matched(
            Criterion::Age,
            input.config.important_weight,
            requirement.reason(age),
        ))
    } else {
        Some(RuleOutcome::penalty(input.config.age_penalty))
    }
}

fn caste(input: &RuleInput<'_>) -> Option<RuleOutcome> {
    let caste = input.profile.caste()?;
    let eligibility = &input.scheme.eligibility;

    let mut outcome = if caste_keywords(caste).any_in(&input.scheme.searchable) {
        RuleOutcome::matched(
            Criterion::Caste,
            input.config.important_weight,
            format!("For {} category", caste.as_str().to_uppercase()),
        )
    } else {
        RuleOutcome::default()
    };

    let reserved_for_other = RESERVED_CASTES
        .iter()
        .filter(|other| **other != caste)
        .any(|other| {
            caste_keywords(*other).terms().any(|term: Term| {
                term.found_after("only", eligibility)
                    || term.found_after("exclusively for", eligibility)
            })
        });
    if reserved_for_other {
        outcome.delta -= input.config.caste_exclusion_penalty;
        outcome.penalty = true;
    }

    (outcome != RuleOutcome::default()).then_some(outcome)
}

fn income(input: &RuleInput<'_>) -> Option<RuleOutcome> {
    if !input.profile.is_economically_weak() {
        return None;
    }
    let text = &input.scheme.searchable;
    (BPL_KEYWORDS.any_in(text) || LOW_INCOME_KEYWORDS.any_in(text)).then(|| {
        RuleOutcome::matched(
            Criterion::Income,
            input.config.important_weight,
            "For economically weaker sections".to_string(),
        )
    })
}

fn state(input: &RuleInput<'_>) -> Option<RuleOutcome> {
    let state = input.profile.state()?;
    let relevant = input.config.relevant_weight;

    if input.scheme.level == AdminLevel::Central {
        Some(RuleOutcome::matched(
            Criterion::State,
            relevant,
            "Central scheme (available nationwide)".to_string(),
        ))
    } else if Term::Word(state.name()).found_in(&input.scheme.searchable) {
        Some(RuleOutcome::matched(
            Criterion::State,
            relevant,
            format!("Available in {}", state.name()),
        ))
    } else if input.scheme.level == AdminLevel::State {
        Some(RuleOutcome::penalty(input.config.other_state_penalty))
    } else {
        None
    }
}

fn flag_rule(
    input: &RuleInput<'_>,
    flagged: bool,
    keywords: KeywordSet,
    criterion: Criterion,
    reason: &str,
) -> Option<RuleOutcome> {
    (flagged && keywords.any_in(&input.scheme.searchable)).then(|| {
        RuleOutcome::matched(criterion, input.config.relevant_weight, reason.to_string())
    })
}

fn senior(input: &RuleInput<'_>) -> Option<RuleOutcome> {
    flag_rule(
        input,
        input.profile.is_senior_citizen(),
        SENIOR_KEYWORDS,
        Criterion::Senior,
        "For senior citizens",
    )
}

fn disability(input: &RuleInput<'_>) -> Option<RuleOutcome> {
    flag_rule(
        input,
        input.profile.is_disabled(),
        DISABILITY_KEYWORDS,
        Criterion::Disability,
        "For persons with disabilities",
    )
}

fn widow(input: &RuleInput<'_>) -> Option<RuleOutcome> {
    flag_rule(
        input,
        input.profile.is_widow(),
        WIDOW_KEYWORDS,
        Criterion::Widow,
        "For widows",
    )
}

fn land(input: &RuleInput<'_>) -> Option<RuleOutcome> {
    if input.profile.occupation() != Some(Occupation::Farmer) {
        return None;
    }
    let acres = input.profile.land_size()?;
    if !LAND_HOLDING_KEYWORDS.any_in(&input.scheme.searchable) {
        return None;
    }

    let config = input.config;
    if acres <= config.marginal_land_acres {
        Some(RuleOutcome::matched(
            Criterion::Land,
            config.relevant_weight,
            format!("Marginal farmer with {acres} acres"),
        ))
    } else if acres <= config.small_land_acres {
        Some(RuleOutcome::matched(
            Criterion::Land,
            config.small_land_points(),
            format!("Small farmer with {acres} acres"),
        ))
    } else {
        None
    }
}

fn education(input: &RuleInput<'_>) -> Option<RuleOutcome> {
    let level = input.profile.education_level()?;
    let text = &input.scheme.searchable;
    let tier_match = education_keywords(level).any_in(text);
    let student_scheme = input.profile.occupation() == Some(Occupation::Student)
        && EDUCATION_SCHEME_KEYWORDS.any_in(text);

    (tier_match || student_scheme).then(|| {
        RuleOutcome::matched(
            Criterion::Education,
            input.config.important_weight,
            format!("For {} students", level.student_label()),
        )
    })
}
