//! Structured applicant profile derived from free text.
//!
//! A profile is built once per query through [`ProfileBuilder`] and is read-only
//! afterwards. The detail level is never stored independently: the builder derives it
//! from the number of distinct fields recorded.

mod extractor;
mod patterns;
mod summary;

pub use extractor::{extract, ProfileExtractor};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn opposite(self) -> Self {
        match self {
            Gender::Female => Gender::Male,
            Gender::Male => Gender::Female,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
        }
    }

    /// Plural audience label used in match reasons ("for women").
    pub fn audience(self) -> &'static str {
        match self {
            Gender::Female => "women",
            Gender::Male => "men",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupation {
    Farmer,
    Student,
    Unemployed,
    Worker,
    Artisan,
    Fisherman,
    Entrepreneur,
    Teacher,
    Healthcare,
}

impl Occupation {
    pub fn as_str(self) -> &'static str {
        match self {
            Occupation::Farmer => "farmer",
            Occupation::Student => "student",
            Occupation::Unemployed => "unemployed",
            Occupation::Worker => "worker",
            Occupation::Artisan => "artisan",
            Occupation::Fisherman => "fisherman",
            Occupation::Entrepreneur => "entrepreneur",
            Occupation::Teacher => "teacher",
            Occupation::Healthcare => "healthcare",
        }
    }
}

/// Income bracket derived from a normalized annual amount or a poverty keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeLevel {
    Bpl,
    Low,
    Middle,
    High,
}

impl IncomeLevel {
    pub fn from_amount(amount: f64) -> Self {
        if amount <= 200_000.0 {
            IncomeLevel::Bpl
        } else if amount <= 500_000.0 {
            IncomeLevel::Low
        } else if amount <= 1_000_000.0 {
            IncomeLevel::Middle
        } else {
            IncomeLevel::High
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Caste {
    Sc,
    St,
    Obc,
    General,
    Minority,
}

impl Caste {
    pub const ALL: [Caste; 5] = [
        Caste::Sc,
        Caste::St,
        Caste::Obc,
        Caste::General,
        Caste::Minority,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Caste::Sc => "sc",
            Caste::St => "st",
            Caste::Obc => "obc",
            Caste::General => "general",
            Caste::Minority => "minority",
        }
    }
}

/// States and union territories recognised by the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndianState {
    #[serde(rename = "andhra pradesh")]
    AndhraPradesh,
    #[serde(rename = "arunachal pradesh")]
    ArunachalPradesh,
    #[serde(rename = "assam")]
    Assam,
    #[serde(rename = "bihar")]
    Bihar,
    #[serde(rename = "chhattisgarh")]
    Chhattisgarh,
    #[serde(rename = "goa")]
    Goa,
    #[serde(rename = "gujarat")]
    Gujarat,
    #[serde(rename = "haryana")]
    Haryana,
    #[serde(rename = "himachal pradesh")]
    HimachalPradesh,
    #[serde(rename = "jharkhand")]
    Jharkhand,
    #[serde(rename = "karnataka")]
    Karnataka,
    #[serde(rename = "kerala")]
    Kerala,
    #[serde(rename = "madhya pradesh")]
    MadhyaPradesh,
    #[serde(rename = "maharashtra")]
    Maharashtra,
    #[serde(rename = "manipur")]
    Manipur,
    #[serde(rename = "meghalaya")]
    Meghalaya,
    #[serde(rename = "mizoram")]
    Mizoram,
    #[serde(rename = "nagaland")]
    Nagaland,
    #[serde(rename = "odisha")]
    Odisha,
    #[serde(rename = "punjab")]
    Punjab,
    #[serde(rename = "rajasthan")]
    Rajasthan,
    #[serde(rename = "sikkim")]
    Sikkim,
    #[serde(rename = "tamil nadu")]
    TamilNadu,
    #[serde(rename = "telangana")]
    Telangana,
    #[serde(rename = "tripura")]
    Tripura,
    #[serde(rename = "uttar pradesh")]
    UttarPradesh,
    #[serde(rename = "uttarakhand")]
    Uttarakhand,
    #[serde(rename = "west bengal")]
    WestBengal,
    #[serde(rename = "delhi")]
    Delhi,
    #[serde(rename = "puducherry")]
    Puducherry,
    #[serde(rename = "jammu and kashmir")]
    JammuAndKashmir,
}

impl IndianState {
    /// Lower-case canonical name, also the text searched for in scheme descriptions.
    pub fn name(self) -> &'static str {
        match self {
            IndianState::AndhraPradesh => "andhra pradesh",
            IndianState::ArunachalPradesh => "arunachal pradesh",
            IndianState::Assam => "assam",
            IndianState::Bihar => "bihar",
            IndianState::Chhattisgarh => "chhattisgarh",
            IndianState::Goa => "goa",
            IndianState::Gujarat => "gujarat",
            IndianState::Haryana => "haryana",
            IndianState::HimachalPradesh => "himachal pradesh",
            IndianState::Jharkhand => "jharkhand",
            IndianState::Karnataka => "karnataka",
            IndianState::Kerala => "kerala",
            IndianState::MadhyaPradesh => "madhya pradesh",
            IndianState::Maharashtra => "maharashtra",
            IndianState::Manipur => "manipur",
            IndianState::Meghalaya => "meghalaya",
            IndianState::Mizoram => "mizoram",
            IndianState::Nagaland => "nagaland",
            IndianState::Odisha => "odisha",
            IndianState::Punjab => "punjab",
            IndianState::Rajasthan => "rajasthan",
            IndianState::Sikkim => "sikkim",
            IndianState::TamilNadu => "tamil nadu",
            IndianState::Telangana => "telangana",
            IndianState::Tripura => "tripura",
            IndianState::UttarPradesh => "uttar pradesh",
            IndianState::Uttarakhand => "uttarakhand",
            IndianState::WestBengal => "west bengal",
            IndianState::Delhi => "delhi",
            IndianState::Puducherry => "puducherry",
            IndianState::JammuAndKashmir => "jammu and kashmir",
        }
    }
}

/// Education tiers, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    Primary,
    Middle,
    Secondary,
    HigherSecondary,
    Undergraduate,
    Postgraduate,
    Diploma,
    Phd,
}

impl EducationLevel {
    pub fn label(self) -> &'static str {
        match self {
            EducationLevel::Primary => "Primary school",
            EducationLevel::Middle => "Middle school",
            EducationLevel::Secondary => "10th class/SSLC",
            EducationLevel::HigherSecondary => "12th class/PUC",
            EducationLevel::Undergraduate => "Undergraduate/Degree",
            EducationLevel::Postgraduate => "Postgraduate/Masters",
            EducationLevel::Diploma => "Diploma/ITI",
            EducationLevel::Phd => "PhD/Doctorate",
        }
    }

    /// Shorter label used in match reasons ("For 10th class students").
    pub fn student_label(self) -> &'static str {
        match self {
            EducationLevel::Primary => "Primary school",
            EducationLevel::Middle => "Middle school",
            EducationLevel::Secondary => "10th class",
            EducationLevel::HigherSecondary => "12th class",
            EducationLevel::Undergraduate => "Degree/Graduation",
            EducationLevel::Postgraduate => "Post-graduation",
            EducationLevel::Diploma => "Diploma/ITI",
            EducationLevel::Phd => "PhD",
        }
    }
}

/// Coarse classifier of how much a profile says about the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailLevel {
    Ambiguous,
    Partial,
    Detailed,
}

impl DetailLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            DetailLevel::Ambiguous => "ambiguous",
            DetailLevel::Partial => "partial",
            DetailLevel::Detailed => "detailed",
        }
    }

    pub fn from_field_count(count: usize) -> Self {
        if count >= 4 {
            DetailLevel::Detailed
        } else if count >= 2 {
            DetailLevel::Partial
        } else {
            DetailLevel::Ambiguous
        }
    }
}

/// Canonical names recorded in [`ApplicantProfile::extracted_fields`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Age,
    Gender,
    Occupation,
    Income,
    Caste,
    State,
    Land,
    Disability,
    Widow,
    Senior,
    Bpl,
    Education,
}

impl ProfileField {
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileField::Age => "age",
            ProfileField::Gender => "gender",
            ProfileField::Occupation => "occupation",
            ProfileField::Income => "income",
            ProfileField::Caste => "caste",
            ProfileField::State => "state",
            ProfileField::Land => "land",
            ProfileField::Disability => "disability",
            ProfileField::Widow => "widow",
            ProfileField::Senior => "senior",
            ProfileField::Bpl => "bpl",
            ProfileField::Education => "education",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicantProfile {
    raw_input: String,
    age: Option<u32>,
    gender: Option<Gender>,
    occupation: Option<Occupation>,
    income: Option<f64>,
    income_level: Option<IncomeLevel>,
    caste: Option<Caste>,
    state: Option<IndianState>,
    land_size: Option<f64>,
    education_level: Option<EducationLevel>,
    is_disabled: bool,
    is_widow: bool,
    is_senior_citizen: bool,
    is_bpl: bool,
    detail_level: DetailLevel,
    extracted_fields: Vec<ProfileField>,
}

impl ApplicantProfile {
    pub fn builder(raw_input: impl Into<String>) -> ProfileBuilder {
        ProfileBuilder::new(raw_input)
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn occupation(&self) -> Option<Occupation> {
        self.occupation
    }

    /// Annual income in rupees after lakh normalization.
    pub fn income(&self) -> Option<f64> {
        self.income
    }

    pub fn income_level(&self) -> Option<IncomeLevel> {
        self.income_level
    }

    pub fn caste(&self) -> Option<Caste> {
        self.caste
    }

    pub fn state(&self) -> Option<IndianState> {
        self.state
    }

    /// Land holding in acres.
    pub fn land_size(&self) -> Option<f64> {
        self.land_size
    }

    pub fn education_level(&self) -> Option<EducationLevel> {
        self.education_level
    }

    pub fn is_disabled(&self) -> bool {
        self.is_disabled
    }

    pub fn is_widow(&self) -> bool {
        self.is_widow
    }

    pub fn is_senior_citizen(&self) -> bool {
        self.is_senior_citizen
    }

    pub fn is_bpl(&self) -> bool {
        self.is_bpl
    }

    /// True when the applicant is flagged BPL or falls in the bpl/low income brackets.
    pub fn is_economically_weak(&self) -> bool {
        self.is_bpl
            || matches!(
                self.income_level,
                Some(IncomeLevel::Bpl) | Some(IncomeLevel::Low)
            )
    }

    pub fn detail_level(&self) -> DetailLevel {
        self.detail_level
    }

    /// Field names in the order they were extracted, without duplicates.
    pub fn extracted_fields(&self) -> &[ProfileField] {
        &self.extracted_fields
    }

    pub fn has_field(&self, field: ProfileField) -> bool {
        self.extracted_fields.contains(&field)
    }
}

/// Accumulates extracted values and records each field name once, in call order.
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    profile: ApplicantProfile,
}

impl ProfileBuilder {
    pub fn new(raw_input: impl Into<String>) -> Self {
        Self {
            profile: ApplicantProfile {
                raw_input: raw_input.into(),
                age: None,
                gender: None,
                occupation: None,
                income: None,
                income_level: None,
                caste: None,
                state: None,
                land_size: None,
                education_level: None,
                is_disabled: false,
                is_widow: false,
                is_senior_citizen: false,
                is_bpl: false,
                detail_level: DetailLevel::Ambiguous,
                extracted_fields: Vec::new(),
            },
        }
    }

    fn record(&mut self, field: ProfileField) {
        if !self.profile.extracted_fields.contains(&field) {
            self.profile.extracted_fields.push(field);
        }
    }

    pub fn age(mut self, age: u32) -> Self {
        self.profile.age = Some(age);
        self.record(ProfileField::Age);
        self
    }

    pub fn gender(mut self, gender: Gender) -> Self {
        self.profile.gender = Some(gender);
        self.record(ProfileField::Gender);
        self
    }

    pub fn occupation(mut self, occupation: Occupation) -> Self {
        self.profile.occupation = Some(occupation);
        self.record(ProfileField::Occupation);
        self
    }

    /// Numeric income; the bracket follows from the amount.
    pub fn income(mut self, amount: f64) -> Self {
        self.profile.income = Some(amount);
        self.profile.income_level = Some(IncomeLevel::from_amount(amount));
        self.record(ProfileField::Income);
        self
    }

    /// Poverty keyword found while looking for income.
    pub fn income_below_poverty_line(mut self) -> Self {
        self.profile.income_level = Some(IncomeLevel::Bpl);
        self.profile.is_bpl = true;
        self.record(ProfileField::Income);
        self
    }

    pub fn caste(mut self, caste: Caste) -> Self {
        self.profile.caste = Some(caste);
        self.record(ProfileField::Caste);
        self
    }

    pub fn state(mut self, state: IndianState) -> Self {
        self.profile.state = Some(state);
        self.record(ProfileField::State);
        self
    }

    /// Land holding in acres.
    pub fn land_size(mut self, acres: f64) -> Self {
        self.profile.land_size = Some(acres);
        self.record(ProfileField::Land);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.profile.is_disabled = true;
        self.record(ProfileField::Disability);
        self
    }

    pub fn widow(mut self) -> Self {
        self.profile.is_widow = true;
        self.record(ProfileField::Widow);
        self
    }

    pub fn senior_citizen(mut self) -> Self {
        self.profile.is_senior_citizen = true;
        self.record(ProfileField::Senior);
        self
    }

    /// Standalone BPL keyword; overrides any numeric bracket.
    pub fn below_poverty_line(mut self) -> Self {
        self.profile.is_bpl = true;
        self.profile.income_level = Some(IncomeLevel::Bpl);
        self.record(ProfileField::Bpl);
        self
    }

    pub fn education_level(mut self, level: EducationLevel) -> Self {
        self.profile.education_level = Some(level);
        self.record(ProfileField::Education);
        self
    }

    pub fn build(mut self) -> ApplicantProfile {
        self.profile.detail_level =
            DetailLevel::from_field_count(self.profile.extracted_fields.len());
        self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_level_follows_field_count() {
        assert_eq!(DetailLevel::from_field_count(0), DetailLevel::Ambiguous);
        assert_eq!(DetailLevel::from_field_count(1), DetailLevel::Ambiguous);
        assert_eq!(DetailLevel::from_field_count(2), DetailLevel::Partial);
        assert_eq!(DetailLevel::from_field_count(3), DetailLevel::Partial);
        assert_eq!(DetailLevel::from_field_count(4), DetailLevel::Detailed);
        assert_eq!(DetailLevel::from_field_count(11), DetailLevel::Detailed);
    }

    #[test]
    fn income_brackets_use_inclusive_upper_bounds() {
        assert_eq!(IncomeLevel::from_amount(0.0), IncomeLevel::Bpl);
        assert_eq!(IncomeLevel::from_amount(200_000.0), IncomeLevel::Bpl);
        assert_eq!(IncomeLevel::from_amount(200_001.0), IncomeLevel::Low);
        assert_eq!(IncomeLevel::from_amount(500_000.0), IncomeLevel::Low);
        assert_eq!(IncomeLevel::from_amount(1_000_000.0), IncomeLevel::Middle);
        assert_eq!(IncomeLevel::from_amount(1_000_001.0), IncomeLevel::High);
    }

    #[test]
    fn builder_records_each_field_once() {
        let profile = ApplicantProfile::builder("test")
            .income_below_poverty_line()
            .below_poverty_line()
            .below_poverty_line()
            .state(IndianState::Bihar)
            .build();

        assert_eq!(
            profile.extracted_fields(),
            &[ProfileField::Income, ProfileField::Bpl, ProfileField::State]
        );
        assert_eq!(profile.detail_level(), DetailLevel::Partial);
        assert!(profile.is_bpl());
        assert_eq!(profile.income_level(), Some(IncomeLevel::Bpl));
    }

    #[test]
    fn poverty_keyword_overrides_numeric_bracket() {
        let profile = ApplicantProfile::builder("test")
            .income(900_000.0)
            .below_poverty_line()
            .build();

        assert_eq!(profile.income(), Some(900_000.0));
        assert_eq!(profile.income_level(), Some(IncomeLevel::Bpl));
        assert!(profile.is_economically_weak());
    }

    #[test]
    fn serializes_with_snake_case_names() {
        let profile = ApplicantProfile::builder("I am from Tamil Nadu")
            .state(IndianState::TamilNadu)
            .education_level(EducationLevel::HigherSecondary)
            .build();
        let value = serde_json::to_value(&profile).expect("profile serializes");

        assert_eq!(value["state"], "tamil nadu");
        assert_eq!(value["education_level"], "higher_secondary");
        assert_eq!(value["detail_level"], "partial");
        assert_eq!(
            value["extracted_fields"],
            serde_json::json!(["state", "education"])
        );
    }
}
