/// Highest n-gram order extracted when none is configured (unigrams, bigrams and trigrams).
pub const DEFAULT_MAX_NGRAM_ORDER: usize = 3;

/// Number of validation examples between progress reports during an evaluation run.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 50;

pub const TITLE_COLUMN_HEADER: &str = "title";
pub const USER_COLUMN_HEADER: &str = "user";
