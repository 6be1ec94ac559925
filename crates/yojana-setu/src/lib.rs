//! Applicant profile extraction and government scheme eligibility scoring.
//!
//! The [`matching`] module holds the core: free text is turned into an
//! [`ApplicantProfile`](matching::profile::ApplicantProfile) by the pattern based
//! extractor, and the eligibility engine ranks a scheme catalog against that profile.

pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
