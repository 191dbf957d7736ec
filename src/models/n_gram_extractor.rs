use crate::types::{NGram, TokenRef};

/// Extracts every n-gram of order `1..=max_order` from a token sequence.
#[derive(Debug, Copy, Clone)]
pub struct NGramExtractor {
    max_order: usize,
}

impl NGramExtractor {
    pub fn new(max_order: usize) -> Self {
        Self { max_order }
    }

    pub fn max_order(&self) -> usize {
        self.max_order
    }

    /// Returns the multiset of all n-grams of order 1 through `max_order`.
    ///
    /// Duplicates are retained. Order-1 grams come first, then order-2, and so on; within an
    /// order, grams follow their position in `tokens`.
    ///
    /// # Example
    /// ```
    /// use author_sniffer::NGramExtractor;
    ///
    /// let grams = NGramExtractor::new(2).extract(&["a", "b", "a"]);
    /// assert_eq!(grams.len(), 5);
    /// assert_eq!(grams[3], vec!["a".to_string(), "b".to_string()]);
    /// ```
    pub fn extract<S: AsRef<TokenRef>>(&self, tokens: &[S]) -> Vec<NGram> {
        self.windows(tokens)
            .map(|window| window.iter().map(|token| token.as_ref().to_string()).collect())
            .collect()
    }

    /// Borrowed sliding windows over `items`, in the same order `extract` produces n-grams.
    ///
    /// Works over any item type, so parallel sequences (such as tokens and their ids) can be
    /// walked in lockstep without allocating an owned n-gram per window.
    pub fn windows<'t, T>(&self, items: &'t [T]) -> impl Iterator<Item = &'t [T]> + 't {
        (1..=self.max_order).flat_map(move |order| items.windows(order))
    }

    /// Returns the n-grams of exactly `order` tokens, one per sliding window.
    ///
    /// A sequence shorter than `order` (or an `order` of zero) yields no n-grams.
    pub fn extract_order<S: AsRef<TokenRef>>(tokens: &[S], order: usize) -> Vec<NGram> {
        if order == 0 || tokens.len() < order {
            return vec![];
        }

        tokens
            .windows(order)
            .map(|window| window.iter().map(|token| token.as_ref().to_string()).collect())
            .collect()
    }

    /// Number of n-grams `extract` would produce for a sequence of `token_count` tokens.
    pub fn count_for_length(&self, token_count: usize) -> usize {
        (1..=self.max_order)
            .map(|order| token_count.saturating_sub(order - 1))
            .sum()
    }
}
