use std::collections::BTreeMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a token as an owned `String`. Tokens are the whitespace-separated units of a title.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// A unique identifier for a distinct token within a `VocabularyIndex`.
pub type TokenId = usize;

/// An ordered run of one or more consecutive tokens.
///
/// Two n-grams are equal only if their token sequences are equal, so n-grams of different
/// orders are always distinct even when their content overlaps.
pub type NGram = Vec<Token>;

/// A slot in a `VocabularyIndex`, in the range `[0, vocabulary_size)`.
pub type NGramIndex = usize;

/// Identifies the author ("user") a title is attributed to.
pub type UserId = String;

/// A dense n-gram count vector. `vector[i]` is the number of occurrences of the n-gram
/// assigned index `i` in the source text.
pub type CountVector = Vec<u32>;

/// Maps each user to their aggregate category vector.
///
/// A `BTreeMap` is used so that iteration order (and therefore score tie-breaking) is
/// ascending by `UserId` and identical across runs.
pub type CategoryTable = BTreeMap<UserId, CountVector>;

/// A single `(title, user)` record.
pub type LabeledTitle = (String, UserId);

/// Maps each user to the space-joined concatenation of all of their titles.
pub type UserTitleTable = BTreeMap<UserId, String>;
