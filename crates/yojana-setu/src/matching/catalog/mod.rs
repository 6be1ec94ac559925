//! Scheme records and the in-memory catalog the scorer ranks.

mod loader;

pub use loader::CatalogError;

use serde::{Deserialize, Deserializer, Serialize};
use std::slice;

/// Administrative level a scheme is run at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "Option<String>")]
pub enum AdminLevel {
    Central,
    State,
    #[default]
    Other,
}

impl AdminLevel {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("central") {
            AdminLevel::Central
        } else if value.eq_ignore_ascii_case("state") {
            AdminLevel::State
        } else {
            AdminLevel::Other
        }
    }
}

impl From<Option<String>> for AdminLevel {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map_or(AdminLevel::Other, Self::parse)
    }
}

/// Reads a text column where `null` stands for an empty value.
fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One assistance scheme. Every text field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemeRecord {
    pub id: Option<u64>,
    #[serde(alias = "scheme_name", deserialize_with = "text_or_empty")]
    pub name: String,
    #[serde(deserialize_with = "text_or_empty")]
    pub slug: String,
    #[serde(deserialize_with = "text_or_empty")]
    pub details: String,
    #[serde(deserialize_with = "text_or_empty")]
    pub benefits: String,
    #[serde(deserialize_with = "text_or_empty")]
    pub eligibility: String,
    #[serde(deserialize_with = "text_or_empty")]
    pub application: String,
    #[serde(deserialize_with = "text_or_empty")]
    pub documents: String,
    pub level: AdminLevel,
    #[serde(alias = "schemeCategory", deserialize_with = "text_or_empty")]
    pub category: String,
    /// Comma separated tags as published.
    #[serde(deserialize_with = "text_or_empty")]
    pub tags: String,
}

impl SchemeRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_eligibility(mut self, eligibility: impl Into<String>) -> Self {
        self.eligibility = eligibility.into();
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = details.into();
        self
    }

    pub fn with_benefits(mut self, benefits: impl Into<String>) -> Self {
        self.benefits = benefits.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    pub fn with_level(mut self, level: AdminLevel) -> Self {
        self.level = level;
        self
    }

    pub fn tag_list(&self) -> impl Iterator<Item = &str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }
}

/// Ordered, read-only collection of schemes plus the number of rows dropped on load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemeCatalog {
    schemes: Vec<SchemeRecord>,
    skipped: usize,
}

impl SchemeCatalog {
    pub fn new(schemes: Vec<SchemeRecord>) -> Self {
        Self {
            schemes,
            skipped: 0,
        }
    }

    pub fn schemes(&self) -> &[SchemeRecord] {
        &self.schemes
    }

    pub fn iter(&self) -> slice::Iter<'_, SchemeRecord> {
        self.schemes.iter()
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Rows without a scheme name that were left out while loading.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<'a> IntoIterator for &'a SchemeCatalog {
    type Item = &'a SchemeRecord;
    type IntoIter = slice::Iter<'a, SchemeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_level_parses_case_insensitively() {
        assert_eq!(AdminLevel::parse("Central"), AdminLevel::Central);
        assert_eq!(AdminLevel::parse(" STATE "), AdminLevel::State);
        assert_eq!(AdminLevel::parse("district"), AdminLevel::Other);
        assert_eq!(AdminLevel::parse(""), AdminLevel::Other);
    }

    #[test]
    fn record_deserializes_with_source_column_names() {
        let record: SchemeRecord = serde_json::from_str(
            r#"{"scheme_name": "Kisan Credit", "schemeCategory": "Agriculture", "level": "central"}"#,
        )
        .expect("record parses");

        assert_eq!(record.name, "Kisan Credit");
        assert_eq!(record.category, "Agriculture");
        assert_eq!(record.level, AdminLevel::Central);
        assert!(record.eligibility.is_empty());
        assert_eq!(record.id, None);
    }

    #[test]
    fn null_columns_read_as_empty() {
        let record: SchemeRecord = serde_json::from_str(
            r#"{"name": "Kisan", "eligibility": null, "tags": null, "level": null}"#,
        )
        .expect("record parses");

        assert_eq!(record.name, "Kisan");
        assert!(record.eligibility.is_empty());
        assert!(record.tags.is_empty());
        assert_eq!(record.level, AdminLevel::Other);
    }

    #[test]
    fn tag_list_skips_blank_entries() {
        let record = SchemeRecord::new("x").with_tags("Farmer, Loan,, ");
        assert_eq!(record.tag_list().collect::<Vec<_>>(), vec!["Farmer", "Loan"]);
    }
}
