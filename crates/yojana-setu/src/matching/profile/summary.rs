use super::ApplicantProfile;

const EMPTY_SUMMARY: &str = "No specific details provided";

impl ApplicantProfile {
    /// One-line, comma separated description used in logs, prompts and responses.
    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if let Some(age) = self.age.filter(|age| *age > 0) {
            parts.push(format!("{age} years old"));
        }
        if let Some(gender) = self.gender {
            parts.push(gender.as_str().to_owned());
        }
        if let Some(occupation) = self.occupation {
            parts.push(occupation.as_str().to_owned());
        }
        if let Some(level) = self.education_level {
            parts.push(level.label().to_owned());
        }
        if let Some(caste) = self.caste {
            parts.push(caste.as_str().to_uppercase());
        }
        if let Some(state) = self.state {
            parts.push(format!("from {}", state.name()));
        }
        if let Some(income) = self.income.filter(|income| *income > 0.0) {
            parts.push(format!("income ₹{:.1} lakh", income / 100_000.0));
        }
        if let Some(acres) = self.land_size.filter(|acres| *acres > 0.0) {
            parts.push(format!("{acres} acres land"));
        }
        if self.is_bpl {
            parts.push("BPL".to_owned());
        }
        if self.is_disabled {
            parts.push("Person with disability".to_owned());
        }
        if self.is_widow {
            parts.push("Widow".to_owned());
        }
        if self.is_senior_citizen {
            parts.push("Senior citizen".to_owned());
        }

        if parts.is_empty() {
            EMPTY_SUMMARY.to_owned()
        } else {
            parts.join(", ")
        }
    }
}
