use std::fmt;

#[derive(Debug)]
pub enum Error {
    OutOfVocabularyError(String),
    DegenerateVectorError(String),
    EmptyCategoryTableError,
    UndefinedMetricError(String),
    DimensionMismatchError(String),
    AccumulatorFinalizedError,
    ParserError(String),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfVocabularyError(gram) => {
                write!(f, "Out of Vocabulary Error: n-gram \"{}\" is not indexed", gram)
            }
            Error::DegenerateVectorError(msg) => write!(f, "Degenerate Vector Error: {}", msg),
            Error::EmptyCategoryTableError => {
                write!(f, "Empty Category Table Error: no category vectors to classify against")
            }
            Error::UndefinedMetricError(metric) => {
                write!(f, "Undefined Metric Error: {} has a zero denominator", metric)
            }
            Error::DimensionMismatchError(msg) => write!(f, "Dimension Mismatch Error: {}", msg),
            Error::AccumulatorFinalizedError => {
                write!(f, "Accumulator Finalized Error: no updates allowed after finalization")
            }
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        Error::ParserError(err.to_string())
    }
}
