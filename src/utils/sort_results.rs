use crate::models::ScoredCandidate;
use std::cmp::Ordering;

/// Sorts scored candidates from most to least similar.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by score in descending order (higher similarity first).
/// - **Secondary:** If two candidates have the same score, sorts by user in ascending
///   lexicographical order for deterministic ordering.
///
/// NaN scores rank below every other score, including negative ones, and are ordered among
/// themselves by user. The resulting order is total, so sorting never panics.
///
/// ### Example:
/// ```rust
/// use author_sniffer::{sort_scored_candidates, ScoredCandidate};
///
/// let sorted = sort_scored_candidates(vec![
///     ScoredCandidate::new(0.5, "carol"),
///     ScoredCandidate::new(0.9, "bob"),
///     ScoredCandidate::new(0.9, "alice"),
/// ]);
///
/// let users: Vec<&str> = sorted.iter().map(|c| c.user.as_str()).collect();
/// assert_eq!(users, vec!["alice", "bob", "carol"]);
/// ```
pub fn sort_scored_candidates(mut candidates: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    candidates.sort_by(|a, b| {
        compare_scores_descending(a.score, b.score) // Sort by score (descending, NaN last)
            .then_with(|| a.user.cmp(&b.user)) // Secondary sort by user (ascending)
    });

    candidates
}

fn compare_scores_descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        // Non-NaN floats are totally ordered; `0.0` and `-0.0` stay tied
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
