use crate::models::{NGramExtractor, Tokenizer};
use crate::types::{NGram, NGramIndex, Token, TokenId, TokenRef};
use log::debug;
use std::collections::HashMap;

/// Assigns each distinct n-gram of a corpus a unique, contiguous index.
///
/// Indices are handed out in order of first appearance while enumerating the corpus n-grams,
/// so the mapping is injective, covers exactly `[0, len())`, and is reproducible for the same
/// corpus. The index is immutable once built; there is no incremental update.
///
/// Tokens are interned to `TokenId`s and n-grams are keyed by their id sequences, so a lookup
/// can borrow a slice of ids instead of building an owned n-gram.
#[derive(Debug, Clone)]
pub struct VocabularyIndex {
    /// A map of distinct tokens to their unique IDs.
    token_map: HashMap<Token, TokenId>,

    /// A map of n-grams, as token ID sequences, to their unique indices.
    gram_map: HashMap<Vec<TokenId>, NGramIndex>,

    /// The n-gram assigned to each index, i.e. the reverse of `gram_map`.
    reverse_gram_map: Vec<NGram>,

    /// The extractor used to build the index. Vectorization must use the same one.
    n_gram_extractor: NGramExtractor,
}

impl VocabularyIndex {
    /// Builds the index from a single token sequence representing the whole corpus.
    ///
    /// N-grams spanning the boundary between two concatenated texts are indexed as well,
    /// since the corpus is treated as one sequence. An empty corpus yields an empty index.
    pub fn build<S: AsRef<TokenRef>>(corpus_tokens: &[S], max_order: usize) -> Self {
        let mut vocabulary_index = Self::empty(max_order);

        let grams = vocabulary_index.n_gram_extractor.extract(corpus_tokens);
        for gram in grams {
            vocabulary_index.upsert_gram(gram);
        }

        debug!(
            "Built vocabulary of {} n-grams from {} corpus tokens",
            vocabulary_index.len(),
            corpus_tokens.len()
        );

        vocabulary_index
    }

    /// Builds the index from several token sequences, extracting n-grams from each one
    /// separately so that no n-gram spans two texts.
    pub fn from_token_sequences(token_sequences: &[Vec<Token>], max_order: usize) -> Self {
        let mut vocabulary_index = Self::empty(max_order);

        for tokens in token_sequences {
            for gram in vocabulary_index.n_gram_extractor.extract(tokens) {
                vocabulary_index.upsert_gram(gram);
            }
        }

        debug!(
            "Built vocabulary of {} n-grams from {} texts",
            vocabulary_index.len(),
            token_sequences.len()
        );

        vocabulary_index
    }

    /// Tokenizes each text on whitespace, then behaves as `from_token_sequences`.
    pub fn from_texts<S: AsRef<TokenRef>>(texts: &[S], max_order: usize) -> Self {
        let tokenizer = Tokenizer::verbatim_doc_parser();
        let token_sequences: Vec<Vec<Token>> = texts
            .iter()
            .map(|text| tokenizer.tokenize(text.as_ref()))
            .collect();

        Self::from_token_sequences(&token_sequences, max_order)
    }

    fn empty(max_order: usize) -> Self {
        Self {
            token_map: HashMap::new(),
            gram_map: HashMap::new(),
            reverse_gram_map: Vec::new(),
            n_gram_extractor: NGramExtractor::new(max_order),
        }
    }

    /// Adds a token if it isn't already present and returns its unique ID.
    fn upsert_token(&mut self, token: &TokenRef) -> TokenId {
        if let Some(&token_id) = self.token_map.get(token) {
            token_id
        } else {
            let token_id = self.token_map.len();
            self.token_map.insert(token.to_string(), token_id);
            token_id
        }
    }

    /// Adds an n-gram if it isn't already present and returns its index.
    fn upsert_gram(&mut self, gram: NGram) -> NGramIndex {
        let token_ids: Vec<TokenId> = gram.iter().map(|token| self.upsert_token(token)).collect();

        if let Some(&index) = self.gram_map.get(&token_ids) {
            index
        } else {
            let index = self.reverse_gram_map.len();
            self.reverse_gram_map.push(gram);
            self.gram_map.insert(token_ids, index);
            index
        }
    }

    /// Gets the ID of a token, or `None` if it occurs in no indexed n-gram.
    pub fn get_token_id(&self, token: &TokenRef) -> Option<TokenId> {
        self.token_map.get(token).copied()
    }

    /// Gets the index for an n-gram, or `None` if it was never seen while building.
    pub fn get_gram_index(&self, gram: &[Token]) -> Option<NGramIndex> {
        let token_ids = gram
            .iter()
            .map(|token| self.get_token_id(token))
            .collect::<Option<Vec<TokenId>>>()?;

        self.get_gram_index_by_token_ids(&token_ids)
    }

    /// Gets the index for an n-gram given as a sequence of token IDs.
    pub fn get_gram_index_by_token_ids(&self, token_ids: &[TokenId]) -> Option<NGramIndex> {
        self.gram_map.get(token_ids).copied()
    }

    /// Retrieves the n-gram assigned to `index`.
    pub fn get_gram_by_index(&self, index: NGramIndex) -> Option<&NGram> {
        self.reverse_gram_map.get(index)
    }

    /// Iterates `(index, n-gram)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (NGramIndex, &NGram)> {
        self.reverse_gram_map.iter().enumerate()
    }

    /// The vocabulary size, which is also the dimensionality of every count vector.
    pub fn len(&self) -> usize {
        self.reverse_gram_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reverse_gram_map.is_empty()
    }

    pub fn n_gram_extractor(&self) -> &NGramExtractor {
        &self.n_gram_extractor
    }

    pub fn max_order(&self) -> usize {
        self.n_gram_extractor.max_order()
    }
}
