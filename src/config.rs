use crate::constants::DEFAULT_MAX_NGRAM_ORDER;
use crate::models::{ClassifierConfig, SelectionPolicy, ZeroMagnitudePolicy};

pub const DEFAULT_CLASSIFIER_CONFIG: &ClassifierConfig = &ClassifierConfig {
    max_ngram_order: DEFAULT_MAX_NGRAM_ORDER,
    selection_policy: SelectionPolicy::TopOne,
    zero_magnitude_policy: ZeroMagnitudePolicy::ScoreAsZero,
};
