use itertools::Itertools;
use thiserror::Error;

use crate::models::fear_greed::{FearGreedData, IndexRecord};

#[derive(Debug, Error, PartialEq)]
pub enum NormalizeError {
    #[error("record {index}: timestamp {raw:?} is not an integer")]
    InvalidTimestamp { index: usize, raw: String },

    #[error("record {index}: value {raw:?} is not a finite number")]
    InvalidValue { index: usize, raw: String },
}

/// Converts raw API records into canonical records sorted by time, oldest first.
///
/// Records sharing a timestamp keep their input order. The first record that fails
/// to convert aborts the whole batch.
pub fn normalize(raw: &[FearGreedData]) -> Result<Vec<IndexRecord>, NormalizeError> {
    let records = raw
        .iter()
        .enumerate()
        .map(|(index, item)| to_record(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(records.into_iter().sorted_by_key(|r| r.time).collect())
}

fn to_record(index: usize, item: &FearGreedData) -> Result<IndexRecord, NormalizeError> {
    let time = item
        .timestamp
        .trim()
        .parse::<i64>()
        .map_err(|_| NormalizeError::InvalidTimestamp {
            index,
            raw: item.timestamp.clone(),
        })?;

    let value = item
        .value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| NormalizeError::InvalidValue {
            index,
            raw: item.value.clone(),
        })?;

    Ok(IndexRecord {
        time,
        value,
        classification: item.value_classification.clone(),
    })
}
