use crate::types::{Token, TokenRef};

/// Splits titles into tokens.
///
/// Note: This explicitly does not modify the case of the text, nor does it strip punctuation.
#[derive(Debug, Default, Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Configuration for minimal processing: whitespace splitting only.
    pub fn verbatim_doc_parser() -> Self {
        Self
    }

    /// Tokenizer function to split the text into individual tokens.
    ///
    /// Runs of spaces, tabs and line breaks all act as a single separator, and leading or
    /// trailing whitespace never produces empty tokens.
    pub fn tokenize(&self, text: &TokenRef) -> Vec<Token> {
        text.split_whitespace() // Split into words
            .map(|word| word.to_string())
            .collect()
    }

    /// Same as `tokenize`, but borrows the tokens from `text`.
    pub fn tokenize_refs<'a>(&self, text: &'a TokenRef) -> Vec<&'a TokenRef> {
        text.split_whitespace().collect()
    }
}
