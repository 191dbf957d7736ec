use crate::constants::{TITLE_COLUMN_HEADER, USER_COLUMN_HEADER};
use crate::models::Error;
use crate::types::LabeledTitle;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

pub fn read_labeled_titles_from_string(csv: &str) -> Result<Vec<LabeledTitle>, Error> {
    // Use a cursor to simulate a file reader from the string
    read_labeled_titles(Cursor::new(csv))
}

/// Reads `(title, user)` records from a CSV file, gunzipping it first when the path ends
/// in `.gz`.
pub fn read_labeled_titles_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<LabeledTitle>, Error> {
    let path = path.as_ref();
    let file = BufReader::new(File::open(path)?);

    if path.extension().is_some_and(|extension| extension == "gz") {
        read_labeled_titles(GzDecoder::new(file))
    } else {
        read_labeled_titles(file)
    }
}

fn read_labeled_titles<R: Read>(reader: R) -> Result<Vec<LabeledTitle>, Error> {
    let mut labeled_titles = Vec::new();

    let mut reader = ReaderBuilder::new()
        .has_headers(true) // Ensure headers are expected
        .flexible(true)
        .from_reader(reader);

    // Extract column headers
    let headers = reader
        .headers()
        .map_err(|e| Error::ParserError(format!("Failed to read headers: {}", e)))?
        .clone();

    let column_position = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| Error::ParserError(format!("Missing '{}' column", name)))
    };

    let title_position = column_position(TITLE_COLUMN_HEADER)?;
    let user_position = column_position(USER_COLUMN_HEADER)?;

    for record in reader.records() {
        let record = record?;

        let title = record
            .get(title_position)
            .ok_or_else(|| Error::ParserError(format!("Missing '{}' field", TITLE_COLUMN_HEADER)))?;

        let user = record
            .get(user_position)
            .ok_or_else(|| Error::ParserError(format!("Missing '{}' field", USER_COLUMN_HEADER)))?;

        labeled_titles.push((title.to_string(), user.to_string()));
    }

    Ok(labeled_titles)
}
