use std::cmp::Reverse;

use super::MatchResult;

const SINGLE_CRITERION_CAP: i32 = 60;

/// Converts a clamped raw score into the reported confidence percentage.
///
/// The base is the score against the fixed maximum; results backed by several
/// criteria get a bonus up to a ceiling per tier, and single-criterion results are
/// capped regardless of their score.
pub(crate) fn percentage(score: i32, match_count: usize, max_score: i32) -> u8 {
    if match_count == 0 || max_score <= 0 {
        return 0;
    }

    let mut percent = (f64::from(score) / f64::from(max_score) * 100.0).round() as i32;
    percent = match match_count {
        4.. => (percent + 15).min(95),
        3 => (percent + 10).min(90),
        2 => (percent + 5).min(85),
        _ => percent,
    };
    if match_count == 1 {
        percent = percent.min(SINGLE_CRITERION_CAP);
    }

    percent.clamp(0, 100) as u8
}

/// Only results with at least one criterion and a positive score are reported.
pub(crate) fn is_reportable(result: &MatchResult<'_>) -> bool {
    result.match_count > 0 && result.score > 0
}

/// Percentage, then criteria count, then raw score, all descending. Equal results
/// keep catalog order.
pub(crate) fn rank(results: &mut Vec<MatchResult<'_>>, limit: usize) {
    results.sort_by_key(|result| {
        Reverse((result.percentage, result.match_count, result.score))
    });
    results.truncate(limit);
}
