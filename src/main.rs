use author_sniffer::{
    evaluate_labeled_titles, read_labeled_titles_from_file, ClassifierConfig, Error,
    EvaluationMetrics, SelectionPolicy, DEFAULT_CLASSIFIER_CONFIG, DEFAULT_PROGRESS_INTERVAL,
};
use log::{error, info};
use std::env;

const USAGE: &str =
    "Usage: author-sniffer-cli <training.csv[.gz]> <validation.csv[.gz]> [top1|top2|topN] [max_order]";

fn main() {
    // Initialize the logger
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    match run(&args) {
        Ok(metrics) => {
            if let Some(precision) = metrics.precision {
                println!("Correct guess {:.2}% of the time", precision * 100.0);
            }
            println!("precision is {}", format_metric(metrics.precision));
            println!("recall is {}", format_metric(metrics.recall));
            println!("F1 score {}", format_metric(metrics.f1_score));
            println!("True positives {}", metrics.true_positives);
            println!("True negatives {}", metrics.true_negatives);
            println!("False negatives {}", metrics.false_negatives);
            println!("False positives {}", metrics.false_positives);
        }
        Err(e) => {
            error!("Error evaluating titles: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<EvaluationMetrics, Error> {
    let (training_path, validation_path) = match args {
        [training_path, validation_path, ..] if args.len() <= 4 => {
            (training_path, validation_path)
        }
        _ => return Err(Error::ParserError(USAGE.to_string())),
    };

    let mut config: ClassifierConfig = *DEFAULT_CLASSIFIER_CONFIG;

    if let Some(selection_policy) = args.get(2) {
        config.selection_policy = selection_policy.parse::<SelectionPolicy>()?;
    }

    if let Some(max_order) = args.get(3) {
        config.max_ngram_order = max_order
            .parse()
            .map_err(|_| Error::ParserError(format!("Invalid max order: {}", max_order)))?;
    }

    info!("Reading training titles from {}", training_path);
    let training = read_labeled_titles_from_file(training_path)?;

    info!("Reading validation titles from {}", validation_path);
    let validation = read_labeled_titles_from_file(validation_path)?;

    evaluate_labeled_titles(
        &training,
        &validation,
        &config,
        DEFAULT_PROGRESS_INTERVAL,
    )
}

fn format_metric(metric: Option<f64>) -> String {
    metric.map_or_else(|| "undefined".to_string(), |value| value.to_string())
}
