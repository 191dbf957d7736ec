use crate::models::{Error, ScoredCandidate};
use crate::types::UserId;
use crate::utils::{dedup_vector, sort_scored_candidates};
use std::fmt;
use std::str::FromStr;

/// Chooses which users to recommend from a fully scored candidate list.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// The single most similar user.
    TopOne,
    /// The two most similar, distinct users.
    TopTwo,
    /// The `n` most similar, distinct users.
    TopN(usize),
}

impl SelectionPolicy {
    /// Maximum number of users this policy recommends.
    pub fn limit(&self) -> usize {
        match self {
            SelectionPolicy::TopOne => 1,
            SelectionPolicy::TopTwo => 2,
            SelectionPolicy::TopN(n) => *n,
        }
    }

    /// Applies the policy to `candidates`, which are left untouched.
    ///
    /// Candidates are ranked by descending score with ties broken by ascending user, and the
    /// first `limit()` distinct users are returned. Fewer users are returned when fewer
    /// candidates exist.
    pub fn select(&self, candidates: &[ScoredCandidate]) -> Vec<UserId> {
        let ranked_users: Vec<UserId> = sort_scored_candidates(candidates.to_vec())
            .into_iter()
            .map(|candidate| candidate.user)
            .collect();

        dedup_vector(&ranked_users)
            .into_iter()
            .take(self.limit())
            .collect()
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionPolicy::TopOne => write!(f, "top1"),
            SelectionPolicy::TopTwo => write!(f, "top2"),
            SelectionPolicy::TopN(n) => write!(f, "top{}", n),
        }
    }
}

impl FromStr for SelectionPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = s
            .trim()
            .to_lowercase()
            .strip_prefix("top")
            .and_then(|n| n.parse::<usize>().ok())
            .ok_or_else(|| Error::ParserError(format!("Unknown selection policy: {}", s)))?;

        Ok(match n {
            1 => SelectionPolicy::TopOne,
            2 => SelectionPolicy::TopTwo,
            n => SelectionPolicy::TopN(n),
        })
    }
}
