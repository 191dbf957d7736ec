use crate::models::{Error, Vectorizer, VocabularyIndex};
use crate::types::{CategoryTable, UserTitleTable};
use log::debug;

/// Builds one category vector per user from their concatenated training titles.
pub struct CategoryProfileBuilder<'a> {
    vectorizer: Vectorizer<'a>,
}

impl<'a> CategoryProfileBuilder<'a> {
    pub fn new(vocabulary_index: &'a VocabularyIndex) -> Self {
        Self {
            vectorizer: Vectorizer::new(vocabulary_index),
        }
    }

    /// Vectorizes every user's concatenated text.
    ///
    /// Exactly one vector is produced per key of `user_title_table`. Users whose text is empty
    /// (or whitespace only) get an all-zero vector rather than being dropped.
    pub fn build(&self, user_title_table: &UserTitleTable) -> Result<CategoryTable, Error> {
        let mut category_table = CategoryTable::new();

        for (user, text) in user_title_table {
            let category_vector = self.vectorizer.vectorize_text(text)?;
            category_table.insert(user.clone(), category_vector);
        }

        debug!(
            "Built {} category vectors of dimension {}",
            category_table.len(),
            self.vectorizer.vocabulary_index().len()
        );

        Ok(category_table)
    }
}
