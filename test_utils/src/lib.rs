use csv::Reader;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Loads `word -> expected stem` pairs from a fixture file for testing.
///
/// One pair per line, separated by whitespace; blank lines and lines starting with `#`
/// are skipped.
pub fn load_stem_pairs(file_path: &Path) -> Vec<(String, String)> {
    let content = fs::read_to_string(file_path).expect("Failed to read stem fixture file");

    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some(word), Some(stem)) => Some((word.to_string(), stem.to_string())),
                _ => panic!("Malformed stem fixture line: {:?}", line),
            }
        })
        .collect()
}

/// Loads raw `word,polarity` rows from a sentiment lexicon CSV, for cross-checking the
/// library's own loader.
pub fn load_sentiment_rows(file_path: &Path) -> Result<Vec<(String, String)>, Box<dyn Error>> {
    let mut reader = Reader::from_path(file_path)?;
    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record?;
        if record.len() == 2 {
            let word = record.get(0).unwrap().trim().to_lowercase();
            let polarity = record.get(1).unwrap().trim().to_lowercase();
            rows.push((word, polarity));
        } else {
            eprintln!("Skipping invalid row: {:?}", record);
        }
    }

    Ok(rows)
}
