use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::{SchemeCatalog, SchemeRecord};

const SAMPLE_CATALOG: &str = include_str!("sample.json");

/// Error raised while loading a scheme catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read scheme catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid scheme CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid scheme JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported catalog format for {} (expected .json or .csv)", path.display())]
    UnsupportedFormat { path: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogFormat {
    Json,
    Csv,
}

impl CatalogFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        if extension.eq_ignore_ascii_case("json") {
            Some(CatalogFormat::Json)
        } else if extension.eq_ignore_ascii_case("csv") {
            Some(CatalogFormat::Csv)
        } else {
            None
        }
    }
}

impl SchemeCatalog {
    /// Loads a `.json` array of records or a `.csv` export, chosen by extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let format =
            CatalogFormat::from_path(path).ok_or_else(|| CatalogError::UnsupportedFormat {
                path: path.to_path_buf(),
            })?;
        let file = std::fs::File::open(path)?;

        let catalog = match format {
            CatalogFormat::Json => Self::from_json_reader(file)?,
            CatalogFormat::Csv => Self::from_csv_reader(file)?,
        };

        info!(
            path = %path.display(),
            schemes = catalog.len(),
            skipped = catalog.skipped(),
            "loaded scheme catalog"
        );
        if catalog.skipped() > 0 {
            warn!(
                skipped = catalog.skipped(),
                "scheme rows without a name were ignored"
            );
        }

        Ok(catalog)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let records: Vec<SchemeRecord> = serde_json::from_reader(reader)?;
        Ok(Self::from_records(records))
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);
        let mut records = Vec::new();

        for record in csv_reader.deserialize::<SchemeRecord>() {
            records.push(record?);
        }

        Ok(Self::from_records(records))
    }

    /// Small built-in catalog covering the common applicant groups.
    pub fn sample() -> Self {
        let records: Vec<SchemeRecord> =
            serde_json::from_str(SAMPLE_CATALOG).expect("built-in sample catalog is valid JSON");
        Self::from_records(records)
    }

    fn from_records(records: Vec<SchemeRecord>) -> Self {
        let total = records.len();
        let schemes: Vec<SchemeRecord> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| {
                let record = clean_record(record);
                if record.name.is_empty() {
                    return None;
                }
                Some(SchemeRecord {
                    id: record.id.or(Some(index as u64 + 1)),
                    ..record
                })
            })
            .collect();

        Self {
            skipped: total - schemes.len(),
            schemes,
        }
    }
}

fn clean_record(record: SchemeRecord) -> SchemeRecord {
    SchemeRecord {
        id: record.id,
        name: clean_text(&record.name),
        slug: clean_text(&record.slug),
        details: clean_text(&record.details),
        benefits: clean_text(&record.benefits),
        eligibility: clean_text(&record.eligibility),
        application: clean_text(&record.application),
        documents: clean_text(&record.documents),
        level: record.level,
        category: clean_text(&record.category),
        tags: clean_text(&record.tags),
    }
}

/// Collapses runs of whitespace and drops quotes wrapped around the value.
fn clean_text(value: &str) -> String {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.trim_matches('"').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::catalog::AdminLevel;

    #[test]
    fn clean_text_collapses_whitespace_and_quotes() {
        assert_eq!(clean_text("  \"Farmers   aged\n18\"  "), "Farmers aged 18");
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn csv_rows_use_export_column_names() {
        let data = "\
scheme_name,slug,details,benefits,eligibility,application,documents,level,schemeCategory,tags
Kisan Support,kisan-support,Income support,\"Rs 6000 per year\",Small farmers,Online,Aadhaar,Central,Agriculture,\"Farmer, Income\"
,missing-name,,,,,,State,,
";
        let catalog = SchemeCatalog::from_csv_reader(data.as_bytes()).expect("csv parses");

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.skipped(), 1);
        let scheme = &catalog.schemes()[0];
        assert_eq!(scheme.id, Some(1));
        assert_eq!(scheme.name, "Kisan Support");
        assert_eq!(scheme.level, AdminLevel::Central);
        assert_eq!(scheme.category, "Agriculture");
        assert_eq!(scheme.tags, "Farmer, Income");
    }

    #[test]
    fn json_records_keep_explicit_ids() {
        let data = r#"[{"id": 42, "name": "Widow Pension", "level": "State"}, {"name": ""}]"#;
        let catalog = SchemeCatalog::from_json_reader(data.as_bytes()).expect("json parses");

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.skipped(), 1);
        assert_eq!(catalog.schemes()[0].id, Some(42));
        assert_eq!(catalog.schemes()[0].level, AdminLevel::State);
    }

    #[test]
    fn json_nulls_do_not_reject_the_catalog() {
        let data = r#"[
            {"name": "Widow Pension", "eligibility": null, "level": "State"},
            {"name": "Kisan", "level": null, "details": null},
            {"name": null, "level": "Central"}
        ]"#;
        let catalog = SchemeCatalog::from_json_reader(data.as_bytes()).expect("json parses");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.skipped(), 1);
        let pension = &catalog.schemes()[0];
        assert_eq!(pension.level, AdminLevel::State);
        assert!(pension.eligibility.is_empty());
        let kisan = &catalog.schemes()[1];
        assert_eq!(kisan.level, AdminLevel::Other);
        assert!(kisan.details.is_empty());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let error = SchemeCatalog::from_path("schemes.xlsx").expect_err("format rejected");
        assert!(matches!(error, CatalogError::UnsupportedFormat { .. }));
    }

    #[test]
    fn sample_catalog_loads() {
        let catalog = SchemeCatalog::sample();
        assert!(catalog.len() >= 10);
        assert_eq!(catalog.skipped(), 0);
        assert!(catalog.iter().all(|scheme| scheme.id.is_some()));
    }
}
