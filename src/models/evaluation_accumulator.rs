use crate::models::{Error, EvaluationMetrics};
use crate::types::UserId;
use std::collections::HashSet;

/// Tallies a confusion matrix over a stream of validation examples.
///
/// The accumulator stays open until `finalize` is called; after that, `record` and `merge`
/// fail, while the metric getters remain available.
#[derive(Debug, Default, Clone)]
pub struct EvaluationAccumulator {
    true_positives: usize,
    true_negatives: usize,
    false_positives: usize,
    false_negatives: usize,
    total_examples: usize,
    is_finalized: bool,
}

impl EvaluationAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one validation example.
    ///
    /// Each predicted user counts as a true positive if it is `true_user` and a false positive
    /// otherwise. Each user of `all_users` that was not predicted counts as a false negative if
    /// it is `true_user` and a true negative otherwise.
    pub fn record(
        &mut self,
        true_user: &str,
        predictions: &[UserId],
        all_users: &HashSet<UserId>,
    ) -> Result<(), Error> {
        if self.is_finalized {
            return Err(Error::AccumulatorFinalizedError);
        }

        for prediction in predictions {
            if prediction == true_user {
                // should recommend, did recommend
                self.true_positives += 1;
            } else {
                // should not recommend, did recommend
                self.false_positives += 1;
            }
        }

        let predicted: HashSet<&UserId> = predictions.iter().collect();

        for not_predicted in all_users.iter().filter(|user| !predicted.contains(user)) {
            if not_predicted == true_user {
                // should recommend, did not recommend
                self.false_negatives += 1;
            } else {
                // should not recommend, did not recommend
                self.true_negatives += 1;
            }
        }

        self.total_examples += 1;

        Ok(())
    }

    /// Adds the counters of `other`, e.g. a partial tally from another worker.
    pub fn merge(&mut self, other: &EvaluationAccumulator) -> Result<(), Error> {
        if self.is_finalized {
            return Err(Error::AccumulatorFinalizedError);
        }

        self.true_positives += other.true_positives;
        self.true_negatives += other.true_negatives;
        self.false_positives += other.false_positives;
        self.false_negatives += other.false_negatives;
        self.total_examples += other.total_examples;

        Ok(())
    }

    pub fn precision(&self) -> Result<f64, Error> {
        ratio(
            self.true_positives,
            self.true_positives + self.false_positives,
            "precision",
        )
    }

    pub fn recall(&self) -> Result<f64, Error> {
        ratio(
            self.true_positives,
            self.true_positives + self.false_negatives,
            "recall",
        )
    }

    /// Harmonic mean of precision and recall.
    ///
    /// Undefined when either input is undefined or when both are zero.
    pub fn f1_score(&self) -> Result<f64, Error> {
        let precision = self.precision()?;
        let recall = self.recall()?;

        if precision + recall == 0.0 {
            return Err(Error::UndefinedMetricError("f1".to_string()));
        }

        Ok(2.0 * (precision * recall) / (precision + recall))
    }

    /// Derives the current metrics without ending the run.
    pub fn metrics(&self) -> EvaluationMetrics {
        EvaluationMetrics {
            true_positives: self.true_positives,
            true_negatives: self.true_negatives,
            false_positives: self.false_positives,
            false_negatives: self.false_negatives,
            total_examples: self.total_examples,
            precision: self.precision().ok(),
            recall: self.recall().ok(),
            f1_score: self.f1_score().ok(),
        }
    }

    /// Ends the run and returns the final metrics. Calling it again returns the same values.
    pub fn finalize(&mut self) -> EvaluationMetrics {
        self.is_finalized = true;

        self.metrics()
    }

    pub fn is_finalized(&self) -> bool {
        self.is_finalized
    }

    pub fn true_positives(&self) -> usize {
        self.true_positives
    }

    pub fn true_negatives(&self) -> usize {
        self.true_negatives
    }

    pub fn false_positives(&self) -> usize {
        self.false_positives
    }

    pub fn false_negatives(&self) -> usize {
        self.false_negatives
    }

    pub fn total_examples(&self) -> usize {
        self.total_examples
    }
}

fn ratio(numerator: usize, denominator: usize, metric: &str) -> Result<f64, Error> {
    if denominator == 0 {
        return Err(Error::UndefinedMetricError(metric.to_string()));
    }

    Ok(numerator as f64 / denominator as f64)
}
