#![allow(dead_code)] // Not every helper is used by every test binary

use author_sniffer::{
    build_category_table, build_vocabulary, group_titles_by_user, read_labeled_titles_from_file,
    CategoryTable, LabeledTitle, Token, Tokenizer, VocabularyIndex,
};

pub mod constants {
    pub const TEST_TRAINING_CSV_PATH: &str = "tests/test_data_files/training_titles.csv";
    pub const TEST_VALIDATION_CSV_PATH: &str = "tests/test_data_files/validation_titles.csv";
    pub const TEST_VALIDATION_GZ_PATH: &str = "tests/test_data_files/validation_titles.csv.gz";

    pub const FLOAT_TOLERANCE: f64 = 1e-9;
}

/// Utility to load labeled titles from a CSV file for testing and benchmarking.
pub fn load_labeled_titles(file_path: &str) -> Vec<LabeledTitle> {
    read_labeled_titles_from_file(file_path).expect("Failed to load labeled titles from CSV")
}

/// Whitespace-tokenizes `text`.
pub fn tokens(text: &str) -> Vec<Token> {
    Tokenizer::verbatim_doc_parser().tokenize(text)
}

pub fn assert_approx_eq(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < constants::FLOAT_TOLERANCE,
        "Expected {}, but got {}",
        expected,
        actual
    );
}

/// Builds a vocabulary over all `texts` and category vectors for `(user, text)` pairs,
/// where each text is taken as the user's already concatenated titles.
pub fn build_fixture(
    categories: &[(&str, &str)],
    extra_texts: &[&str],
    max_order: usize,
) -> (VocabularyIndex, CategoryTable) {
    let labeled_titles: Vec<LabeledTitle> = categories
        .iter()
        .map(|(user, text)| (text.to_string(), user.to_string()))
        .collect();
    let user_title_table = group_titles_by_user(&labeled_titles);

    let all_texts: Vec<Vec<Token>> = user_title_table
        .values()
        .map(|text| tokens(text))
        .chain(extra_texts.iter().map(|text| tokens(text)))
        .collect();

    let vocabulary_index = build_vocabulary(&all_texts, max_order);
    let category_table = build_category_table(&vocabulary_index, &user_title_table)
        .expect("Failed to build category table");

    (vocabulary_index, category_table)
}
