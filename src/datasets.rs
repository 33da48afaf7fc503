//! Loading labeled and unlabeled rows from delimited text, and feature scaling.
use anyhow::{anyhow, Context, Result};
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// A training row split into its class label and feature vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub label: usize,
    pub features: Vec<f64>,
}

impl Example {
    pub fn new(label: usize, features: Vec<f64>) -> Self {
        Self { label, features }
    }
}

/// One-hot encode
pub fn one_hot(label: usize, num_classes: usize) -> Vec<f64> {
    let mut v = vec![0.0; num_classes];
    if label < num_classes {
        v[label] = 1.0;
    }
    v
}

/// Reads numeric rows from a CSV file with one header line.
///
/// Paths ending in `.gz` are decompressed on the fly. At most `limit` records
/// are read when a limit is given.
pub fn load_rows<P: AsRef<Path>>(path: P, limit: Option<usize>) -> Result<Vec<Vec<f64>>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let rows = if path.extension().is_some_and(|ext| ext == "gz") {
        load_rows_from_reader(GzDecoder::new(reader), limit)
    } else {
        load_rows_from_reader(reader, limit)
    }
    .with_context(|| format!("Failed to read {}", path.display()))?;
    info!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Same as [`load_rows`] over any reader. Fields that do not parse as numbers
/// become `0.0`.
pub fn load_rows_from_reader<R: Read>(reader: R, limit: Option<usize>) -> Result<Vec<Vec<f64>>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let mut rows = Vec::new();
    let mut coerced = 0usize;

    for result in rdr.byte_records() {
        if limit.is_some_and(|l| rows.len() >= l) {
            break;
        }
        let record = result.map_err(|e| anyhow!("CSV parse error: {}", e))?;
        let row: Vec<f64> = record
            .iter()
            .enumerate()
            .map(|(col, field)| {
                parse_field(field).unwrap_or_else(|| {
                    debug!(
                        "record {} column {}: {:?} is not a number, using 0",
                        rows.len(),
                        col,
                        String::from_utf8_lossy(field)
                    );
                    coerced += 1;
                    0.0
                })
            })
            .collect();
        rows.push(row);
        if rows.len() % 1000 == 0 {
            info!("Read {} records", rows.len());
        }
    }
    if coerced > 0 {
        warn!("{} unparsable fields were read as 0", coerced);
    }
    Ok(rows)
}

/// Numeric value of a raw field; `None` for non-UTF-8 bytes or non-numbers.
fn parse_field(field: &[u8]) -> Option<f64> {
    std::str::from_utf8(field).ok().and_then(|s| s.trim().parse().ok())
}

/// Splits `[label, f1, .., fn]` rows into examples, checking width and label range.
pub fn split_labeled(rows: Vec<Vec<f64>>, num_inputs: usize, num_classes: usize) -> Result<Vec<Example>> {
    rows.into_iter()
        .enumerate()
        .map(|(i, mut row)| {
            if row.len() != num_inputs + 1 {
                return Err(anyhow!(
                    "row {}: expected {} columns (label + {} features), got {}",
                    i,
                    num_inputs + 1,
                    num_inputs,
                    row.len()
                ));
            }
            let raw = row[0];
            if !(raw.is_finite() && raw >= 0.0 && raw.fract() == 0.0 && raw < num_classes as f64) {
                return Err(anyhow!("row {}: label {} is not a class in 0..{}", i, raw, num_classes));
            }
            let features = row.split_off(1);
            Ok(Example::new(raw as usize, features))
        })
        .collect()
}

/// Checks that every unlabeled row has exactly `num_inputs` features.
pub fn features_only(rows: Vec<Vec<f64>>, num_inputs: usize) -> Result<Vec<Vec<f64>>> {
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != num_inputs) {
        return Err(anyhow!(
            "row {}: expected {} features, got {}",
            i,
            num_inputs,
            row.len()
        ));
    }
    Ok(rows)
}

/// Divides every column but the label (column 0) by `max_value`, in place.
pub fn normalize(rows: &mut [Vec<f64>], max_value: f64) {
    for row in rows.iter_mut() {
        for value in row.iter_mut().skip(1) {
            *value /= max_value;
        }
    }
}

/// Divides every column of unlabeled rows by `max_value`, in place.
pub fn normalize_features(rows: &mut [Vec<f64>], max_value: f64) {
    for row in rows.iter_mut() {
        for value in row.iter_mut() {
            *value /= max_value;
        }
    }
}
