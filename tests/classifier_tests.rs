#[path = "../test_utils/lib.rs"]
mod test_utils;

use author_sniffer::{
    classify, sort_scored_candidates, CategoryTable, Classifier, ClassifierConfig, Error,
    ScoredCandidate, SelectionPolicy, Vectorizer, ZeroMagnitudePolicy, DEFAULT_CLASSIFIER_CONFIG,
};
use std::collections::HashSet;
use test_utils::build_fixture;

fn candidates(entries: &[(f64, &str)]) -> Vec<ScoredCandidate> {
    entries
        .iter()
        .map(|(score, user)| ScoredCandidate::new(*score, *user))
        .collect()
}

#[cfg(test)]
mod selection_policy_tests {
    use super::*;

    #[test]
    fn test_top_one_picks_maximum() {
        let scored = candidates(&[(0.2, "a"), (0.9, "b"), (0.4, "c")]);
        assert_eq!(SelectionPolicy::TopOne.select(&scored), vec!["b"]);
    }

    #[test]
    fn test_top_one_tie_break_is_first_user() {
        let scored = candidates(&[(0.5, "b"), (0.8, "d"), (0.8, "c"), (0.1, "a")]);
        assert_eq!(SelectionPolicy::TopOne.select(&scored), vec!["c"]);
    }

    #[test]
    fn test_top_two_is_ordered_by_score() {
        let scored = candidates(&[(0.2, "a"), (0.9, "b"), (0.4, "c")]);
        assert_eq!(SelectionPolicy::TopTwo.select(&scored), vec!["b", "c"]);
    }

    #[test]
    fn test_top_two_never_duplicates_on_ties() {
        let scored = candidates(&[(0.7, "x"), (0.7, "y"), (0.7, "z")]);
        let selected = SelectionPolicy::TopTwo.select(&scored);

        assert_eq!(selected, vec!["x", "y"]);
        assert_eq!(selected.iter().collect::<HashSet<_>>().len(), 2);
    }

    #[test]
    fn test_top_two_never_duplicates_repeated_user() {
        let scored = candidates(&[(0.9, "x"), (0.9, "x"), (0.3, "y")]);
        assert_eq!(SelectionPolicy::TopTwo.select(&scored), vec!["x", "y"]);
    }

    #[test]
    fn test_fewer_candidates_than_limit() {
        let scored = candidates(&[(0.3, "only")]);
        assert_eq!(SelectionPolicy::TopTwo.select(&scored), vec!["only"]);
        assert_eq!(SelectionPolicy::TopN(5).select(&scored), vec!["only"]);
        assert!(SelectionPolicy::TopN(0).select(&scored).is_empty());
    }

    #[test]
    fn test_nan_scores_rank_last() {
        let scored = candidates(&[(f64::NAN, "a"), (0.5, "b"), (-0.5, "c")]);
        assert_eq!(SelectionPolicy::TopN(3).select(&scored), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_many_scattered_nan_scores_sort_without_panicking() {
        let scored: Vec<ScoredCandidate> = (0..200)
            .map(|i| {
                let score = if i % 3 == 0 {
                    f64::NAN
                } else {
                    ((i * 37) % 101) as f64 / 100.0
                };
                ScoredCandidate::new(score, format!("user{:03}", i))
            })
            .collect();

        assert_eq!(SelectionPolicy::TopTwo.select(&scored).len(), 2);

        let sorted = sort_scored_candidates(scored);
        let first_nan = sorted
            .iter()
            .position(|candidate| candidate.score.is_nan())
            .unwrap();

        assert_eq!(first_nan, 200 - 67);
        assert!(sorted[first_nan..].iter().all(|c| c.score.is_nan()));
        assert!(sorted[..first_nan]
            .windows(2)
            .all(|pair| pair[0].score >= pair[1].score));
        assert!(sorted[first_nan..]
            .windows(2)
            .all(|pair| pair[0].user < pair[1].user));
    }

    #[test]
    fn test_select_leaves_candidates_untouched() {
        let scored = candidates(&[(0.1, "a"), (0.9, "b")]);
        let before = scored.clone();
        SelectionPolicy::TopOne.select(&scored);
        assert_eq!(scored, before);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("top1".parse::<SelectionPolicy>().unwrap(), SelectionPolicy::TopOne);
        assert_eq!("TOP2".parse::<SelectionPolicy>().unwrap(), SelectionPolicy::TopTwo);
        assert_eq!("top7".parse::<SelectionPolicy>().unwrap(), SelectionPolicy::TopN(7));

        assert!(matches!(
            "best".parse::<SelectionPolicy>(),
            Err(Error::ParserError(_))
        ));
        assert!("top".parse::<SelectionPolicy>().is_err());

        for policy in [
            SelectionPolicy::TopOne,
            SelectionPolicy::TopTwo,
            SelectionPolicy::TopN(4),
        ] {
            assert_eq!(policy.to_string().parse::<SelectionPolicy>().unwrap(), policy);
        }
    }
}

#[cfg(test)]
mod classifier_tests {
    use super::*;

    #[test]
    fn test_end_to_end_tie_break() {
        let (vocabulary_index, category_table) =
            build_fixture(&[("X", "a b c"), ("Y", "b c d")], &[], 1);

        let query_vector = Vectorizer::new(&vocabulary_index)
            .vectorize_text("b c")
            .unwrap();

        // X and Y tie at 2 / sqrt(6); X comes first
        assert_eq!(
            classify(&category_table, &query_vector, SelectionPolicy::TopOne).unwrap(),
            vec!["X"]
        );
        assert_eq!(
            classify(&category_table, &query_vector, SelectionPolicy::TopTwo).unwrap(),
            vec!["X", "Y"]
        );
    }

    #[test]
    fn test_classify_text() {
        let (vocabulary_index, category_table) = build_fixture(
            &[
                ("alice", "fearless concurrency in rust"),
                ("bob", "sourdough starter basics"),
            ],
            &["rust starter"],
            3,
        );

        let classifier =
            Classifier::new(&vocabulary_index, &category_table, DEFAULT_CLASSIFIER_CONFIG);

        assert_eq!(classifier.classify_text("concurrency in rust").unwrap(), vec!["alice"]);
        assert_eq!(classifier.classify_text("starter basics").unwrap(), vec!["bob"]);

        // One shared unigram each; bob's shorter profile makes it the closer match
        assert_eq!(classifier.classify_text("rust starter").unwrap(), vec!["bob"]);
        assert!(matches!(
            classifier.classify_text("unseen words"),
            Err(Error::OutOfVocabularyError(_))
        ));
    }

    #[test]
    fn test_rank_orders_all_candidates() {
        let (vocabulary_index, category_table) = build_fixture(
            &[("a", "x y"), ("b", "x"), ("c", "z")],
            &[],
            1,
        );

        let classifier =
            Classifier::new(&vocabulary_index, &category_table, DEFAULT_CLASSIFIER_CONFIG);
        let query_vector = classifier.vectorize_text("x").unwrap();

        let ranked: Vec<String> = classifier
            .rank(&query_vector)
            .unwrap()
            .into_iter()
            .map(|candidate| candidate.user)
            .collect();
        assert_eq!(ranked, vec!["b", "a", "c"]);

        assert_eq!(
            classifier
                .classify_with_policy(&query_vector, SelectionPolicy::TopTwo)
                .unwrap(),
            vec!["b", "a"]
        );
    }

    #[test]
    fn test_configured_policy_is_used() {
        let (vocabulary_index, category_table) =
            build_fixture(&[("a", "x y"), ("b", "x")], &[], 1);

        let config = ClassifierConfig {
            selection_policy: SelectionPolicy::TopTwo,
            ..*DEFAULT_CLASSIFIER_CONFIG
        };
        let classifier = Classifier::new(&vocabulary_index, &category_table, &config);

        assert_eq!(classifier.selection_policy(), SelectionPolicy::TopTwo);
        assert_eq!(classifier.classify_text("y").unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_empty_category_table_fails() {
        let table = CategoryTable::new();

        assert!(matches!(
            classify(&table, &[], SelectionPolicy::TopOne),
            Err(Error::EmptyCategoryTableError)
        ));

        let (vocabulary_index, _) = build_fixture(&[], &["a"], 1);
        let classifier = Classifier::new(&vocabulary_index, &table, DEFAULT_CLASSIFIER_CONFIG);
        assert!(matches!(
            classifier.classify_text("a"),
            Err(Error::EmptyCategoryTableError)
        ));
    }

    #[test]
    fn test_zero_query_with_fail_policy() {
        let (vocabulary_index, category_table) = build_fixture(&[("a", "x")], &[], 1);

        let config = ClassifierConfig {
            zero_magnitude_policy: ZeroMagnitudePolicy::Fail,
            ..*DEFAULT_CLASSIFIER_CONFIG
        };
        let classifier = Classifier::new(&vocabulary_index, &category_table, &config);

        assert!(matches!(
            classifier.classify_text(""),
            Err(Error::DegenerateVectorError(_))
        ));

        // The default convention scores it as zero instead
        let classifier =
            Classifier::new(&vocabulary_index, &category_table, DEFAULT_CLASSIFIER_CONFIG);
        assert_eq!(classifier.classify_text("").unwrap(), vec!["a"]);
    }
}
