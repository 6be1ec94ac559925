use serde::Deserialize;

use super::{EnrichmentError, Explainable};
use crate::matching::profile::ApplicantProfile;

/// Number of top matches described to the provider.
pub const PROMPT_SCHEMES: usize = 3;
const EXCERPT_CHARS: usize = 300;

/// Explanation addressed to a 1-based position among the prompted schemes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Explanation {
    pub scheme_index: usize,
    pub text: String,
}

#[derive(Debug, Deserialize)]
struct ExplanationResponse {
    #[serde(default)]
    explanations: Vec<Explanation>,
}

fn excerpt(text: &str) -> String {
    let mut excerpt: String = text.chars().take(EXCERPT_CHARS).collect();
    if excerpt.len() < text.len() {
        excerpt.push_str("...");
    }
    excerpt
}

pub fn build_prompt<M: Explainable>(
    query: &str,
    profile: &ApplicantProfile,
    matches: &[M],
) -> String {
    let schemes = matches
        .iter()
        .take(PROMPT_SCHEMES)
        .enumerate()
        .map(|(index, matched)| {
            let scheme = matched.scheme();
            format!(
                "SCHEME {}: {}\n   - Benefits: {}\n   - Eligibility: {}",
                index + 1,
                scheme.name,
                excerpt(&scheme.benefits),
                excerpt(&scheme.eligibility),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        r#"You are a helpful government scheme advisor.

USER MESSAGE: {query}
USER PROFILE: {summary}

I have identified these potential schemes for them:

{schemes}

TASK:
For each scheme, provide a 1-sentence SIMPLE explanation of why this specific user is eligible.
Focus on their specific details (e.g. "Because you are a female farmer..." or "Since you are a student...").

Format as JSON:
{{
  "explanations": [
    {{ "scheme_index": 1, "text": "Explanation for first scheme..." }},
    {{ "scheme_index": 2, "text": "Explanation for second scheme..." }}
  ]
}}
Respond ONLY with JSON."#,
        summary = profile.summary(),
    )
}

/// Parses the provider answer, tolerating a surrounding Markdown code fence.
pub fn parse_explanations(raw: &str) -> Result<Vec<Explanation>, EnrichmentError> {
    let mut body = raw.trim();
    body = body.strip_prefix("```json").unwrap_or(body);
    body = body.strip_prefix("```").unwrap_or(body);
    body = body.strip_suffix("```").unwrap_or(body);

    let response: ExplanationResponse = serde_json::from_str(body.trim())
        .map_err(|err| EnrichmentError::Malformed(err.to_string()))?;
    Ok(response.explanations)
}
