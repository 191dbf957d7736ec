mod config;
pub use config::DEFAULT_CLASSIFIER_CONFIG;
mod constants;
pub use constants::{DEFAULT_MAX_NGRAM_ORDER, DEFAULT_PROGRESS_INTERVAL};
pub mod models;
pub use models::{
    CategoryProfileBuilder, Classifier, ClassifierConfig, Error, EvaluationAccumulator,
    EvaluationMetrics, NGramExtractor, ScoredCandidate, SelectionPolicy, SimilarityScorer,
    Tokenizer, Vectorizer, VocabularyIndex, ZeroMagnitudePolicy,
};
pub mod types;
pub use types::{
    CategoryTable, CountVector, LabeledTitle, NGram, NGramIndex, Token, TokenId, TokenRef,
    UserId, UserTitleTable,
};
mod utils;
pub use utils::{
    cosine_similarity, group_titles_by_user, read_labeled_titles_from_file,
    read_labeled_titles_from_string, sort_scored_candidates,
};

use log::info;
use std::collections::HashSet;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Builds the vocabulary over every text that will ever be vectorized.
///
/// Any text later passed to a `Vectorizer` must be covered by `all_texts`, which is why an
/// evaluation run includes its held-out titles here. Whether to do so is the caller's choice.
pub fn build_vocabulary(all_texts: &[Vec<Token>], max_ngram_order: usize) -> VocabularyIndex {
    VocabularyIndex::from_token_sequences(all_texts, max_ngram_order)
}

pub fn build_category_table(
    vocabulary_index: &VocabularyIndex,
    user_title_table: &UserTitleTable,
) -> Result<CategoryTable, Error> {
    CategoryProfileBuilder::new(vocabulary_index).build(user_title_table)
}

/// Scores `query_vector` against every category and applies `selection_policy`.
///
/// Zero-magnitude vectors score `0.0`; use a `Classifier` configured with
/// `ZeroMagnitudePolicy::Fail` to reject them instead.
pub fn classify(
    category_table: &CategoryTable,
    query_vector: &[u32],
    selection_policy: SelectionPolicy,
) -> Result<Vec<UserId>, Error> {
    if category_table.is_empty() {
        return Err(Error::EmptyCategoryTableError);
    }

    let similarity_scorer = SimilarityScorer::new(
        category_table,
        DEFAULT_CLASSIFIER_CONFIG.zero_magnitude_policy,
    );
    let candidates = similarity_scorer.score(query_vector)?;

    Ok(selection_policy.select(&candidates))
}

pub fn evaluate_step(
    accumulator: &mut EvaluationAccumulator,
    true_user: &str,
    predicted_users: &[UserId],
    all_users: &HashSet<UserId>,
) -> Result<(), Error> {
    accumulator.record(true_user, predicted_users, all_users)
}

pub fn finalize_metrics(accumulator: &mut EvaluationAccumulator) -> EvaluationMetrics {
    accumulator.finalize()
}

/// Trains on `training` and evaluates every title of `validation`, in order.
///
/// The vocabulary is built from the grouped titles of both splits, category vectors from the
/// training split only, and the known users are the distinct users of the validation split.
/// Every `progress_interval` examples (`0` disables it) the running metrics are logged.
pub fn evaluate_labeled_titles(
    training: &[LabeledTitle],
    validation: &[LabeledTitle],
    config: &ClassifierConfig,
    progress_interval: usize,
) -> Result<EvaluationMetrics, Error> {
    let training_title_table = group_titles_by_user(training);
    let validation_title_table = group_titles_by_user(validation);

    info!(
        "Training users: {}, validation users: {}",
        training_title_table.len(),
        validation_title_table.len()
    );

    info!("Building vocabulary...");
    let tokenizer = Tokenizer::verbatim_doc_parser();
    let all_texts: Vec<Vec<Token>> = training_title_table
        .values()
        .chain(validation_title_table.values())
        .map(|text| tokenizer.tokenize(text))
        .collect();
    let vocabulary_index = build_vocabulary(&all_texts, config.max_ngram_order);
    drop(all_texts);

    info!("Building category vectors...");
    let category_table = build_category_table(&vocabulary_index, &training_title_table)?;

    let classifier = Classifier::new(&vocabulary_index, &category_table, config);
    let all_users: HashSet<UserId> = validation_title_table.into_keys().collect();
    let mut accumulator = EvaluationAccumulator::new();

    info!(
        "Classifying {} validation titles ({})...",
        validation.len(),
        config.selection_policy
    );

    for (index, (title, user)) in validation.iter().enumerate() {
        let predictions = classifier.classify_text(title)?;
        evaluate_step(&mut accumulator, user, &predictions, &all_users)?;

        let processed = index + 1;
        if progress_interval > 0 && processed % progress_interval == 0 {
            info!(
                "Finished {} iterations out of a total of {}",
                processed,
                validation.len()
            );
            info!("{}", accumulator.metrics());
        }
    }

    Ok(finalize_metrics(&mut accumulator))
}
