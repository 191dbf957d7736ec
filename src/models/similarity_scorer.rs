use crate::models::Error;
use crate::types::{CategoryTable, UserId};
use crate::utils::{cosine_similarity_from_parts, dot_product, squared_magnitude};
use log::{debug, warn};

/// How a cosine similarity involving an all-zero vector is handled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZeroMagnitudePolicy {
    /// The similarity is defined as `0.0`.
    ScoreAsZero,
    /// Scoring fails with `Error::DegenerateVectorError`.
    Fail,
}

/// A `(similarity, user)` pair produced for a single query.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub score: f64,
    pub user: UserId,
}

impl ScoredCandidate {
    pub fn new(score: f64, user: impl Into<UserId>) -> Self {
        Self {
            score,
            user: user.into(),
        }
    }
}

/// Scores a query vector against every category vector with cosine similarity
/// (higher is more similar).
///
/// Category magnitudes are computed once, up front, since the table is shared read-only
/// across every query.
pub struct SimilarityScorer<'a> {
    category_table: &'a CategoryTable,
    category_magnitudes_sq: Vec<u64>,
    zero_magnitude_policy: ZeroMagnitudePolicy,
}

impl<'a> SimilarityScorer<'a> {
    pub fn new(
        category_table: &'a CategoryTable,
        zero_magnitude_policy: ZeroMagnitudePolicy,
    ) -> Self {
        let category_magnitudes_sq: Vec<u64> = category_table
            .iter()
            .map(|(user, category_vector)| {
                let magnitude_sq = squared_magnitude(category_vector);
                if magnitude_sq == 0 {
                    warn!("Category vector for user \"{}\" has zero magnitude", user);
                }
                magnitude_sq
            })
            .collect();

        Self {
            category_table,
            category_magnitudes_sq,
            zero_magnitude_policy,
        }
    }

    /// Returns one candidate per category vector, in ascending `UserId` order.
    ///
    /// An empty category table yields an empty list; deciding whether that is an error is
    /// left to the `Classifier`.
    pub fn score(&self, query_vector: &[u32]) -> Result<Vec<ScoredCandidate>, Error> {
        let query_magnitude_sq = squared_magnitude(query_vector);

        if query_magnitude_sq == 0 {
            match self.zero_magnitude_policy {
                ZeroMagnitudePolicy::Fail if !self.category_table.is_empty() => {
                    return Err(Error::DegenerateVectorError(
                        "query vector has zero magnitude".to_string(),
                    ));
                }
                _ => debug!("Query vector has zero magnitude"),
            }
        }

        self.category_table
            .iter()
            .zip(&self.category_magnitudes_sq)
            .map(|((user, category_vector), &category_magnitude_sq)| {
                if category_vector.len() != query_vector.len() {
                    return Err(Error::DimensionMismatchError(format!(
                        "category vector for \"{}\" has length {}, query vector has length {}",
                        user,
                        category_vector.len(),
                        query_vector.len()
                    )));
                }

                let score = match cosine_similarity_from_parts(
                    dot_product(category_vector, query_vector),
                    category_magnitude_sq,
                    query_magnitude_sq,
                ) {
                    Some(score) => score,
                    None => match self.zero_magnitude_policy {
                        ZeroMagnitudePolicy::ScoreAsZero => 0.0,
                        ZeroMagnitudePolicy::Fail => {
                            return Err(Error::DegenerateVectorError(format!(
                                "category vector for \"{}\" has zero magnitude",
                                user
                            )));
                        }
                    },
                };

                Ok(ScoredCandidate::new(score, user.clone()))
            })
            .collect()
    }

    pub fn category_count(&self) -> usize {
        self.category_table.len()
    }
}
