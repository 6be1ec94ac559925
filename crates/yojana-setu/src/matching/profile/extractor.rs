use regex::{Captures, Regex};
use tracing::debug;

use super::patterns::{
    IncomeRule, LandRule, AGE, BPL, CASTE, DISABILITY, EDUCATION, GENDER, HECTARE_IN_ACRES,
    INCOME, LAND, OCCUPATION, SENIOR, STATE, WIDOW,
};
use super::{ApplicantProfile, ProfileBuilder};

const LAKH: f64 = 100_000.0;
const SENIOR_AGE: u32 = 60;

/// Turns free text into an [`ApplicantProfile`] by walking the pattern tables in
/// field order. Extraction never fails; unrecognised text yields an empty profile.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProfileExtractor;

impl ProfileExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, text: &str) -> ApplicantProfile {
        let lowered = text.to_lowercase();
        let mut builder = ApplicantProfile::builder(text);

        let age = extract_age(text);
        if let Some(age) = age {
            builder = builder.age(age);
        }
        if let Some(gender) = first_match(&GENDER, &lowered) {
            builder = builder.gender(gender);
        }
        if let Some(occupation) = first_match(&OCCUPATION, &lowered) {
            builder = builder.occupation(occupation);
        }
        builder = apply_income(builder, text);
        if let Some(caste) = first_match(&CASTE, &lowered) {
            builder = builder.caste(caste);
        }
        if let Some(state) = STATE
            .iter()
            .find(|rule| {
                rule.name.is_match(&lowered)
                    || rule
                        .abbreviation
                        .as_ref()
                        .is_some_and(|abbreviation| abbreviation.is_match(text))
            })
            .map(|rule| rule.state)
        {
            builder = builder.state(state);
        }
        if let Some(acres) = extract_land(text) {
            builder = builder.land_size(acres);
        }

        if DISABILITY.is_match(&lowered) {
            builder = builder.disabled();
        }
        if WIDOW.is_match(&lowered) {
            builder = builder.widow();
        }
        if SENIOR.is_match(&lowered) || age.is_some_and(|age| age >= SENIOR_AGE) {
            builder = builder.senior_citizen();
        }
        if BPL.is_match(&lowered) {
            builder = builder.below_poverty_line();
        }

        if let Some(level) = first_match(&EDUCATION, &lowered) {
            builder = builder.education_level(level);
        }

        let profile = builder.build();
        debug!(
            fields = profile.extracted_fields().len(),
            detail = ?profile.detail_level(),
            "extracted applicant profile"
        );
        profile
    }
}

/// Convenience wrapper around [`ProfileExtractor::extract`].
pub fn extract(text: &str) -> ApplicantProfile {
    ProfileExtractor.extract(text)
}

fn first_match<T: Copy>(table: &[(T, Regex)], text: &str) -> Option<T> {
    table
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(value, _)| *value)
}

fn extract_age(text: &str) -> Option<u32> {
    AGE.iter()
        .find_map(|pattern| pattern.captures(text))
        .and_then(|captures| captures.get(1))
        .and_then(|age| age.as_str().parse().ok())
}

fn parse_number(captures: &Captures<'_>) -> Option<f64> {
    captures
        .get(1)
        .and_then(|number| number.as_str().replace(',', "").parse().ok())
}

fn apply_income(builder: ProfileBuilder, text: &str) -> ProfileBuilder {
    for rule in INCOME.iter() {
        match rule {
            IncomeRule::Amount(pattern) => {
                let Some(captures) = pattern.captures(text) else {
                    continue;
                };
                let Some(mut amount) = parse_number(&captures) else {
                    return builder;
                };
                if captures.name("unit").is_some() {
                    amount *= LAKH;
                }
                return builder.income(amount);
            }
            IncomeRule::PovertyKeyword(pattern) => {
                if pattern.is_match(text) {
                    return builder.income_below_poverty_line();
                }
            }
        }
    }
    builder
}

fn extract_land(text: &str) -> Option<f64> {
    LAND.iter().find_map(|rule| match rule {
        LandRule::Acres(pattern) => pattern
            .captures(text)
            .and_then(|captures| parse_number(&captures)),
        LandRule::Hectares(pattern) => pattern
            .captures(text)
            .and_then(|captures| parse_number(&captures))
            .map(|hectares| hectares * HECTARE_IN_ACRES),
        LandRule::Fixed(pattern, acres) => pattern.is_match(text).then_some(*acres),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::profile::{
        Caste, DetailLevel, EducationLevel, Gender, IncomeLevel, IndianState, Occupation,
        ProfileField,
    };

    #[test]
    fn detailed_farmer_profile() {
        let profile = extract(
            "I am a 25 year old female farmer from Maharashtra with 2 acres land and income of 1.5 lakh",
        );

        assert_eq!(profile.age(), Some(25));
        assert_eq!(profile.gender(), Some(Gender::Female));
        assert_eq!(profile.occupation(), Some(Occupation::Farmer));
        assert_eq!(profile.state(), Some(IndianState::Maharashtra));
        assert_eq!(profile.income(), Some(150_000.0));
        assert_eq!(profile.income_level(), Some(IncomeLevel::Bpl));
        assert!(!profile.is_bpl());
        assert_eq!(profile.land_size(), Some(2.0));
        assert_eq!(profile.detail_level(), DetailLevel::Detailed);
        assert!(profile.extracted_fields().len() >= 5);
        assert_eq!(profile.education_level(), None);
    }

    #[test]
    fn senior_widow_with_bpl_keyword() {
        let profile = extract("I am a 65 year old SC widow from Bihar BPL");

        assert_eq!(profile.age(), Some(65));
        assert_eq!(profile.caste(), Some(Caste::Sc));
        assert_eq!(profile.state(), Some(IndianState::Bihar));
        assert!(profile.is_widow());
        assert!(profile.is_bpl());
        assert!(profile.is_senior_citizen());
        assert_eq!(profile.gender(), Some(Gender::Female));
        assert_eq!(
            profile.extracted_fields(),
            &[
                ProfileField::Age,
                ProfileField::Gender,
                ProfileField::Income,
                ProfileField::Caste,
                ProfileField::State,
                ProfileField::Widow,
                ProfileField::Senior,
                ProfileField::Bpl,
            ]
        );
    }

    #[test]
    fn single_gender_word_is_ambiguous() {
        let profile = extract("I am a woman");

        assert_eq!(profile.gender(), Some(Gender::Female));
        assert_eq!(profile.extracted_fields(), &[ProfileField::Gender]);
        assert_eq!(profile.detail_level(), DetailLevel::Ambiguous);
    }

    #[test]
    fn empty_text_yields_empty_profile() {
        let profile = extract("");

        assert!(profile.extracted_fields().is_empty());
        assert_eq!(profile.detail_level(), DetailLevel::Ambiguous);
        assert!(!profile.is_senior_citizen());
    }

    #[test]
    fn first_age_shape_wins() {
        assert_eq!(extract("my age is 42").age(), Some(42));
        assert_eq!(extract("I am 30, my father is 60 years old").age(), Some(60));
        assert_eq!(extract("I am 19").age(), Some(19));
    }

    #[test]
    fn senior_inferred_from_age_alone() {
        let profile = extract("I am 70 years old");

        assert!(profile.is_senior_citizen());
        assert_eq!(
            profile.extracted_fields(),
            &[ProfileField::Age, ProfileField::Senior]
        );
    }

    #[test]
    fn female_words_are_not_read_as_male() {
        assert_eq!(extract("female").gender(), Some(Gender::Female));
        assert_eq!(extract("women").gender(), Some(Gender::Female));
        assert_eq!(extract("a young man").gender(), Some(Gender::Male));
    }

    #[test]
    fn income_amounts_and_units() {
        let rupees = extract("my income is Rs. 3,50,000 per year");
        assert_eq!(rupees.income(), Some(350_000.0));
        assert_eq!(rupees.income_level(), Some(IncomeLevel::Low));

        let lakh = extract("we earn about 12 lakhs");
        assert_eq!(lakh.income(), Some(1_200_000.0));
        assert_eq!(lakh.income_level(), Some(IncomeLevel::High));

        let bare = extract("family makes 6 lakh");
        assert_eq!(bare.income(), Some(600_000.0));
        assert_eq!(bare.income_level(), Some(IncomeLevel::Middle));
    }

    #[test]
    fn poverty_phrase_sets_income_and_bpl() {
        let profile = extract("low income family");

        assert_eq!(profile.income(), None);
        assert_eq!(profile.income_level(), Some(IncomeLevel::Bpl));
        assert!(profile.is_bpl());
        assert!(profile.has_field(ProfileField::Income));
        assert!(profile.has_field(ProfileField::Bpl));
    }

    #[test]
    fn land_units_are_normalized_to_acres() {
        let hectares = extract("I own 2 hectares");
        assert!((hectares.land_size().unwrap_or_default() - 4.94).abs() < 1e-9);

        assert_eq!(extract("small farmer").land_size(), Some(1.0));
        assert_eq!(extract("marginal land holder").land_size(), Some(1.0));
        assert_eq!(extract("I am landless").land_size(), Some(0.0));
    }

    #[test]
    fn state_abbreviations_require_upper_case() {
        assert_eq!(
            extract("farmer from UP").state(),
            Some(IndianState::UttarPradesh)
        );
        assert_eq!(extract("I grew up in a village").state(), None);
        assert_eq!(extract("living in Bengaluru").state(), Some(IndianState::Karnataka));
    }

    #[test]
    fn highest_education_tier_wins() {
        assert_eq!(
            extract("I passed higher secondary").education_level(),
            Some(EducationLevel::HigherSecondary)
        );
        assert_eq!(
            extract("I finished 10th").education_level(),
            Some(EducationLevel::Secondary)
        );
        assert_eq!(
            extract("doing my MBA").education_level(),
            Some(EducationLevel::Postgraduate)
        );
        assert_eq!(
            extract("2nd year degree").education_level(),
            Some(EducationLevel::Undergraduate)
        );
        assert_eq!(extract("from Maharashtra").education_level(), None);
    }

    #[test]
    fn mixed_mentions_report_the_highest_tier() {
        assert_eq!(
            extract("I passed 10th and then did an ITI diploma").education_level(),
            Some(EducationLevel::Diploma)
        );
        assert_eq!(
            extract("studied till 5th, now doing a degree").education_level(),
            Some(EducationLevel::Undergraduate)
        );
        assert_eq!(
            extract("completed 12th, now in 1st year of graduation").education_level(),
            Some(EducationLevel::Undergraduate)
        );
    }

    #[test]
    fn kannada_keywords_are_recognised() {
        let profile = extract("ನಾನು ರೈತ ಮಹಿಳೆ");

        assert_eq!(profile.occupation(), Some(Occupation::Farmer));
        assert_eq!(profile.gender(), Some(Gender::Female));
    }

    #[test]
    fn special_conditions_are_independent() {
        let profile = extract("disabled widow receiving pension");

        assert!(profile.is_disabled());
        assert!(profile.is_widow());
        assert!(profile.is_senior_citizen());
    }
}
