use crate::models::{Error, Tokenizer, VocabularyIndex};
use crate::types::{CountVector, TokenId, TokenRef};

/// Converts token sequences into count vectors over a shared `VocabularyIndex`.
pub struct Vectorizer<'a> {
    vocabulary_index: &'a VocabularyIndex,
    tokenizer: Tokenizer,
}

impl<'a> Vectorizer<'a> {
    pub fn new(vocabulary_index: &'a VocabularyIndex) -> Self {
        Self {
            vocabulary_index,
            tokenizer: Tokenizer::verbatim_doc_parser(),
        }
    }

    /// Builds a fresh count vector of length `vocabulary_index.len()`.
    ///
    /// Every n-gram extracted from `tokens` increments its slot by one. An n-gram absent from
    /// the vocabulary fails with `Error::OutOfVocabularyError`; the vector is never resized and
    /// unknown grams are never skipped.
    pub fn vectorize<S: AsRef<TokenRef>>(&self, tokens: &[S]) -> Result<CountVector, Error> {
        let n_gram_extractor = self.vocabulary_index.n_gram_extractor();
        let mut vector: CountVector = vec![0; self.vocabulary_index.len()];

        // `None` marks a token that occurs in no indexed n-gram
        let token_ids: Vec<Option<TokenId>> = tokens
            .iter()
            .map(|token| self.vocabulary_index.get_token_id(token.as_ref()))
            .collect();

        let mut gram_token_ids: Vec<TokenId> = Vec::with_capacity(n_gram_extractor.max_order());

        for (window, id_window) in n_gram_extractor
            .windows(tokens)
            .zip(n_gram_extractor.windows(token_ids.as_slice()))
        {
            gram_token_ids.clear();
            gram_token_ids.extend(id_window.iter().map_while(|token_id| *token_id));

            let index = if gram_token_ids.len() == id_window.len() {
                self.vocabulary_index
                    .get_gram_index_by_token_ids(&gram_token_ids)
            } else {
                None
            };

            let index = index.ok_or_else(|| Error::OutOfVocabularyError(join_tokens(window)))?;

            vector[index] += 1;
        }

        Ok(vector)
    }

    /// Splits `text` on whitespace and vectorizes the resulting tokens.
    pub fn vectorize_text(&self, text: &TokenRef) -> Result<CountVector, Error> {
        let tokens = self.tokenizer.tokenize_refs(text);

        self.vectorize(tokens.as_slice())
    }

    pub fn vocabulary_index(&self) -> &'a VocabularyIndex {
        self.vocabulary_index
    }
}

fn join_tokens<S: AsRef<TokenRef>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|token| token.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
}
