pub mod category_profile_builder;
pub use category_profile_builder::CategoryProfileBuilder;

pub mod classifier;
pub use classifier::Classifier;

pub mod config;
pub use config::ClassifierConfig;

pub mod error;
pub use error::Error;

pub mod evaluation_accumulator;
pub use evaluation_accumulator::EvaluationAccumulator;

pub mod evaluation_metrics;
pub use evaluation_metrics::EvaluationMetrics;

pub mod n_gram_extractor;
pub use n_gram_extractor::NGramExtractor;

pub mod selection_policy;
pub use selection_policy::SelectionPolicy;

pub mod similarity_scorer;
pub use similarity_scorer::{ScoredCandidate, SimilarityScorer, ZeroMagnitudePolicy};

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod vectorizer;
pub use vectorizer::Vectorizer;

pub mod vocabulary_index;
pub use vocabulary_index::VocabularyIndex;
