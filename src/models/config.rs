use crate::models::{SelectionPolicy, ZeroMagnitudePolicy};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    pub max_ngram_order: usize,
    pub selection_policy: SelectionPolicy,
    pub zero_magnitude_policy: ZeroMagnitudePolicy,
}
