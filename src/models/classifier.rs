use crate::models::{
    ClassifierConfig, Error, ScoredCandidate, SelectionPolicy, SimilarityScorer, Vectorizer,
    VocabularyIndex,
};
use crate::types::{CategoryTable, CountVector, TokenRef, UserId};
use crate::utils::sort_scored_candidates;

/// Predicts the most likely author(s) of a title.
///
/// Holds only shared references to the vocabulary and the category table, neither of which is
/// ever mutated, so one instance can serve any number of queries.
pub struct Classifier<'a> {
    vectorizer: Vectorizer<'a>,
    similarity_scorer: SimilarityScorer<'a>,
    selection_policy: SelectionPolicy,
}

impl<'a> Classifier<'a> {
    pub fn new(
        vocabulary_index: &'a VocabularyIndex,
        category_table: &'a CategoryTable,
        config: &ClassifierConfig,
    ) -> Self {
        Self {
            vectorizer: Vectorizer::new(vocabulary_index),
            similarity_scorer: SimilarityScorer::new(category_table, config.zero_magnitude_policy),
            selection_policy: config.selection_policy,
        }
    }

    /// Classifies a query vector with the configured selection policy.
    pub fn classify(&self, query_vector: &[u32]) -> Result<Vec<UserId>, Error> {
        self.classify_with_policy(query_vector, self.selection_policy)
    }

    pub fn classify_with_policy(
        &self,
        query_vector: &[u32],
        selection_policy: SelectionPolicy,
    ) -> Result<Vec<UserId>, Error> {
        let candidates = self.score(query_vector)?;

        Ok(selection_policy.select(&candidates))
    }

    /// Tokenizes and vectorizes `text`, then classifies it.
    pub fn classify_text(&self, text: &TokenRef) -> Result<Vec<UserId>, Error> {
        let query_vector = self.vectorize_text(text)?;

        self.classify(&query_vector)
    }

    /// All candidates for `query_vector`, most similar first.
    pub fn rank(&self, query_vector: &[u32]) -> Result<Vec<ScoredCandidate>, Error> {
        Ok(sort_scored_candidates(self.score(query_vector)?))
    }

    pub fn vectorize_text(&self, text: &TokenRef) -> Result<CountVector, Error> {
        self.vectorizer.vectorize_text(text)
    }

    pub fn selection_policy(&self) -> SelectionPolicy {
        self.selection_policy
    }

    fn score(&self, query_vector: &[u32]) -> Result<Vec<ScoredCandidate>, Error> {
        if self.similarity_scorer.category_count() == 0 {
            return Err(Error::EmptyCategoryTableError);
        }

        self.similarity_scorer.score(query_vector)
    }
}
