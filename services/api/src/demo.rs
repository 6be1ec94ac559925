use crate::infra::load_catalog;
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use yojana_setu::config::AppConfig;
use yojana_setu::error::AppError;
use yojana_setu::matching::router::ProfileResponse;
use yojana_setu::matching::{
    extract, ApplicantProfile, EligibilityEngine, Matches, Recommendation, RecommendationService,
};
use yojana_setu::telemetry;

const DEMO_QUERIES: [&str; 4] = [
    "I am a 25 year old female farmer from Maharashtra with 2 acres land and income of 1.5 lakh",
    "I am a 65 year old SC widow from Bihar BPL",
    "I am a 19 year old student in 12th class from Tamil Nadu",
    "I am a woman",
];

#[derive(Args, Debug)]
pub(crate) struct ProfileArgs {
    /// Free-text description of the applicant
    pub(crate) text: String,
    /// Print JSON instead of a readable summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct MatchArgs {
    /// Free-text description of the applicant
    pub(crate) query: String,
    /// Scheme catalog (.json or .csv); defaults to YOJANA_CATALOG_PATH or the built-in sample
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Maximum number of schemes to list
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Print JSON instead of a readable listing
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Maximum number of schemes to list per query
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Print JSON instead of a readable listing
    #[arg(long)]
    pub(crate) json: bool,
}

/// JSON envelope for `match` and `demo` output.
#[derive(Debug, Serialize)]
pub(crate) struct MatchReport<'r, 'a> {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) catalog_schemes: usize,
    pub(crate) recommendation: &'r Recommendation<'a>,
}

impl<'r, 'a> MatchReport<'r, 'a> {
    pub(crate) fn new(catalog_schemes: usize, recommendation: &'r Recommendation<'a>) -> Self {
        Self {
            generated_at: Utc::now(),
            catalog_schemes,
            recommendation,
        }
    }
}

pub(crate) fn run_profile(args: ProfileArgs) -> Result<(), AppError> {
    let profile = extract(&args.text);

    if args.json {
        print_json(&ProfileResponse {
            summary: profile.summary(),
            profile,
        })
    } else {
        println!("{}", render_profile(&profile));
        Ok(())
    }
}

pub(crate) async fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let MatchArgs {
        query,
        catalog,
        limit,
        json,
    } = args;

    let mut config = AppConfig::load()?;
    if let Some(catalog) = catalog {
        config.matching.catalog_path = Some(catalog);
    }
    telemetry::init(&config.telemetry)?;

    let catalog = load_catalog(config.matching.catalog_path.as_deref())?;
    let service = RecommendationService::from_config(catalog, &config.matching);
    let recommendation = service.recommend_with_limit(&query, limit).await;

    if json {
        print_json(&MatchReport::new(service.catalog().len(), &recommendation))
    } else {
        println!("{}", render_recommendation(&recommendation));
        Ok(())
    }
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let catalog = load_catalog(None)?;
    let service = RecommendationService::new(catalog, EligibilityEngine::default());

    if !args.json {
        println!(
            "Scheme matching demo ({} schemes in the built-in catalog)",
            service.catalog().len()
        );
    }

    for query in DEMO_QUERIES {
        let recommendation = service.recommend_with_limit(query, args.limit).await;
        if args.json {
            print_json(&MatchReport::new(service.catalog().len(), &recommendation))?;
        } else {
            println!("\n{}", render_recommendation(&recommendation));
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let rendered = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn render_profile(profile: &ApplicantProfile) -> String {
    let fields = profile
        .extracted_fields()
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>();
    let fields = if fields.is_empty() {
        "none".to_string()
    } else {
        fields.join(", ")
    };

    format!(
        "Profile: {}\nDetail level: {}\nFields: {}",
        profile.summary(),
        profile.detail_level().as_str(),
        fields
    )
}

pub(crate) fn render_recommendation(recommendation: &Recommendation<'_>) -> String {
    let mut lines = vec![
        format!("Query: {}", recommendation.query),
        render_profile(&recommendation.profile),
        format!("Scoring path: {}", recommendation.path.as_str()),
    ];

    match &recommendation.matches {
        matches if matches.is_empty() => lines.push("No matching schemes found.".to_string()),
        Matches::Scored(results) => {
            for (rank, result) in results.iter().enumerate() {
                lines.push(format!(
                    "{}. {} ({}% match, {} criteria)",
                    rank + 1,
                    result.scheme.name,
                    result.percentage,
                    result.match_count
                ));
                lines.extend(result.reasons.iter().map(|reason| format!("   - {reason}")));
                if let Some(explanation) = &result.explanation {
                    lines.push(format!("   > {explanation}"));
                }
            }
        }
        Matches::Quick(results) => {
            for (rank, result) in results.iter().enumerate() {
                lines.push(format!(
                    "{}. {} ({}% relevance)",
                    rank + 1,
                    result.scheme.name,
                    result.percentage
                ));
                lines.extend(result.reasons.iter().map(|reason| format!("   - {reason}")));
                if let Some(explanation) = &result.explanation {
                    lines.push(format!("   > {explanation}"));
                }
            }
        }
    }

    lines.join("\n")
}
