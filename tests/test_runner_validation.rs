#[path = "../test_utils/lib.rs"]
mod test_utils;

use author_sniffer::{
    evaluate_labeled_titles, group_titles_by_user, read_labeled_titles_from_file,
    read_labeled_titles_from_string, ClassifierConfig, Error, SelectionPolicy,
    DEFAULT_CLASSIFIER_CONFIG, DEFAULT_PROGRESS_INTERVAL,
};
use test_utils::constants::{
    TEST_TRAINING_CSV_PATH, TEST_VALIDATION_CSV_PATH, TEST_VALIDATION_GZ_PATH,
};
use test_utils::{assert_approx_eq, load_labeled_titles};

#[cfg(test)]
mod read_labeled_titles_tests {
    use super::*;

    #[test]
    fn test_reads_title_and_user_columns() {
        let training = load_labeled_titles(TEST_TRAINING_CSV_PATH);

        assert_eq!(training.len(), 6);
        assert_eq!(
            training[0],
            (
                "fearless concurrency in rust".to_string(),
                "alice".to_string()
            )
        );
    }

    #[test]
    fn test_gzipped_file_matches_plain_file() {
        let plain = load_labeled_titles(TEST_VALIDATION_CSV_PATH);
        let gzipped = load_labeled_titles(TEST_VALIDATION_GZ_PATH);

        assert_eq!(plain.len(), 4);
        assert_eq!(plain, gzipped);
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let labeled_titles =
            read_labeled_titles_from_string("user,extra,title\nbob,1,hello world\n").unwrap();

        assert_eq!(
            labeled_titles,
            vec![("hello world".to_string(), "bob".to_string())]
        );
    }

    #[test]
    fn test_missing_column_fails() {
        assert!(matches!(
            read_labeled_titles_from_string("title,author\nhello,bob\n"),
            Err(Error::ParserError(_))
        ));
    }

    #[test]
    fn test_short_record_fails() {
        assert!(matches!(
            read_labeled_titles_from_string("title,user\nhello\n"),
            Err(Error::ParserError(_))
        ));
    }

    #[test]
    fn test_missing_file_fails() {
        assert!(matches!(
            read_labeled_titles_from_file("tests/test_data_files/does_not_exist.csv"),
            Err(Error::IoError(_))
        ));
    }

    #[test]
    fn test_group_titles_by_user() {
        let training = load_labeled_titles(TEST_TRAINING_CSV_PATH);
        let user_title_table = group_titles_by_user(&training);

        assert_eq!(user_title_table.len(), 3);
        assert_eq!(
            user_title_table["alice"],
            "fearless concurrency in rust borrow checker tips"
        );
        assert_eq!(
            user_title_table["carol"],
            "tomato garden diary growing tomato plants"
        );
    }
}

#[cfg(test)]
mod evaluation_run_tests {
    use super::*;

    #[test]
    fn test_top_one_run() {
        let training = load_labeled_titles(TEST_TRAINING_CSV_PATH);
        let validation = load_labeled_titles(TEST_VALIDATION_CSV_PATH);

        let metrics = evaluate_labeled_titles(
            &training,
            &validation,
            DEFAULT_CLASSIFIER_CONFIG,
            DEFAULT_PROGRESS_INTERVAL,
        )
        .unwrap();

        // "rust bread" ties alice and bob; alice wins the tie and misses
        assert_eq!(metrics.total_examples, 4);
        assert_eq!(metrics.true_positives, 3);
        assert_eq!(metrics.false_positives, 1);
        assert_eq!(metrics.false_negatives, 1);
        assert_eq!(metrics.true_negatives, 7);
        assert_approx_eq(metrics.precision.unwrap(), 0.75);
        assert_approx_eq(metrics.recall.unwrap(), 0.75);
        assert_approx_eq(metrics.f1_score.unwrap(), 0.75);
    }

    #[test]
    fn test_top_two_run() {
        let training = load_labeled_titles(TEST_TRAINING_CSV_PATH);
        let validation = load_labeled_titles(TEST_VALIDATION_GZ_PATH);

        let config = ClassifierConfig {
            selection_policy: SelectionPolicy::TopTwo,
            ..*DEFAULT_CLASSIFIER_CONFIG
        };

        let metrics = evaluate_labeled_titles(&training, &validation, &config, 1).unwrap();

        assert_eq!(metrics.true_positives, 4);
        assert_eq!(metrics.false_positives, 4);
        assert_eq!(metrics.false_negatives, 0);
        assert_eq!(metrics.true_negatives, 4);
        assert_approx_eq(metrics.precision.unwrap(), 0.5);
        assert_approx_eq(metrics.recall.unwrap(), 1.0);
        assert_approx_eq(metrics.f1_score.unwrap(), 2.0 / 3.0);
    }

    #[test]
    fn test_empty_validation_reports_undefined_metrics() {
        let training = load_labeled_titles(TEST_TRAINING_CSV_PATH);

        let metrics =
            evaluate_labeled_titles(&training, &[], DEFAULT_CLASSIFIER_CONFIG, 0).unwrap();

        assert_eq!(metrics.total_examples, 0);
        assert_eq!(metrics.precision, None);
        assert_eq!(metrics.recall, None);
        assert_eq!(metrics.f1_score, None);
    }

    #[test]
    fn test_empty_training_fails() {
        let validation = load_labeled_titles(TEST_VALIDATION_CSV_PATH);

        assert!(matches!(
            evaluate_labeled_titles(&[], &validation, DEFAULT_CLASSIFIER_CONFIG, 0),
            Err(Error::EmptyCategoryTableError)
        ));
    }
}
