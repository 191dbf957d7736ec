use std::fmt;

/// A snapshot of an evaluation run.
///
/// A metric is `None` when its denominator is zero and it is therefore undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationMetrics {
    pub true_positives: usize,
    pub true_negatives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub total_examples: usize,
    pub precision: Option<f64>,
    pub recall: Option<f64>,
    pub f1_score: Option<f64>,
}

fn fmt_metric(metric: Option<f64>) -> String {
    match metric {
        Some(value) => format!("{:.4}", value),
        None => "undefined".to_string(),
    }
}

impl fmt::Display for EvaluationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EvaluationMetrics (\n\texamples: {},\n\tprecision: {},\n\trecall: {},\n\tf1_score: {},\n\ttrue_positives: {},\n\ttrue_negatives: {},\n\tfalse_positives: {},\n\tfalse_negatives: {}\n)",
            self.total_examples,
            fmt_metric(self.precision),
            fmt_metric(self.recall),
            fmt_metric(self.f1_score),
            self.true_positives,
            self.true_negatives,
            self.false_positives,
            self.false_negatives
        )
    }
}
