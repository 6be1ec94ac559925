/// Point values for the full scoring rubric.
#[derive(Debug, Clone, PartialEq)]
pub struct EligibilityConfig {
    /// Denominator for the percentage; a fixed constant, not the sum of the weights.
    pub max_score: i32,
    pub critical_weight: i32,
    pub important_weight: i32,
    pub relevant_weight: i32,
    pub occupation_base: i32,
    pub occupation_per_keyword: i32,
    pub opposite_gender_penalty: i32,
    pub age_penalty: i32,
    pub caste_exclusion_penalty: i32,
    pub other_state_penalty: i32,
    pub marginal_land_acres: f64,
    pub small_land_acres: f64,
    /// Share of the relevant weight granted to small (not marginal) holdings.
    pub small_land_percent: i32,
    pub quick: QuickFilterConfig,
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            max_score: 200,
            critical_weight: 50,
            important_weight: 30,
            relevant_weight: 20,
            occupation_base: 20,
            occupation_per_keyword: 10,
            opposite_gender_penalty: 30,
            age_penalty: 20,
            caste_exclusion_penalty: 25,
            other_state_penalty: 15,
            marginal_land_acres: 2.0,
            small_land_acres: 5.0,
            small_land_percent: 70,
            quick: QuickFilterConfig::default(),
        }
    }
}

impl EligibilityConfig {
    pub(crate) fn small_land_points(&self) -> i32 {
        self.relevant_weight * self.small_land_percent / 100
    }
}

/// Relevance points for the penalty-free quick filter.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickFilterConfig {
    pub occupation_base: i32,
    pub occupation_per_keyword: i32,
    pub gender: i32,
    pub caste: i32,
    pub bpl: i32,
    pub senior: i32,
    pub disability: i32,
    pub percentage_cap: u8,
}

impl Default for QuickFilterConfig {
    fn default() -> Self {
        Self {
            occupation_base: 30,
            occupation_per_keyword: 5,
            gender: 25,
            caste: 20,
            bpl: 20,
            senior: 15,
            disability: 15,
            percentage_cap: 75,
        }
    }
}
