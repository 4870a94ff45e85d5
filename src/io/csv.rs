use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::path::Path;

use crate::error::{Error, Result};

/// True labels and two-column scored rows loaded from a file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoredData {
    pub y_true: Vec<f64>,
    /// `[1 - score, score]` per row
    pub y_predict: Vec<[f64; 2]>,
}

impl ScoredData {
    pub fn len(&self) -> usize {
        self.y_true.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y_true.is_empty()
    }
}

/// Read labels and scores from a headered CSV file
///
/// # Arguments
/// * `path` - CSV file path
/// * `label_column` - Header of the true-label column
/// * `score_column` - Header of the score column
pub fn read_scored_csv<P: AsRef<Path>>(
    path: P,
    label_column: &str,
    score_column: &str,
) -> Result<ScoredData> {
    let file = File::open(path.as_ref()).map_err(Error::Io)?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = rdr.headers().map_err(Error::Csv)?.clone();
    let label_idx = column_index(&headers, label_column)?;
    let score_idx = column_index(&headers, score_column)?;

    let mut data = ScoredData::default();
    for (row, result) in rdr.records().enumerate() {
        let record = result.map_err(Error::Csv)?;
        // Header is line 1
        let line = row + 2;
        let label = parse_cell(&record, label_idx, label_column, line)?;
        let score = parse_cell(&record, score_idx, score_column, line)?;

        data.y_true.push(label);
        data.y_predict.push([1.0 - score, score]);
    }

    log::debug!(
        "read {} scored rows from {}",
        data.len(),
        path.as_ref().display()
    );

    Ok(data)
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| Error::InvalidArgument(format!("Column not found: {}", name)))
}

fn parse_cell(record: &StringRecord, idx: usize, column: &str, line: usize) -> Result<f64> {
    let cell = record.get(idx).unwrap_or("");
    cell.parse::<f64>().map_err(|_| {
        Error::InvalidArgument(format!(
            "Invalid number '{}' in column {} at line {}",
            cell, column, line
        ))
    })
}
