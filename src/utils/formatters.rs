use chrono::DateTime;

use crate::models::fear_greed::IndexRecord;

/// Formats a Unix timestamp (seconds) as a UTC calendar date.
/// Returns "N/A" if the timestamp is out of range
pub fn format_timestamp(ts: i64) -> String {
    DateTime::from_timestamp(ts, 0)
        .map_or("N/A".to_string(), |dt| dt.format("%Y-%m-%d").to_string())
}

/// One-line summary of a record for the run log, e.g. `2024-01-01 = 25.5 (Fear)`
pub fn format_record(record: &IndexRecord) -> String {
    format!(
        "{} = {} ({})",
        format_timestamp(record.time),
        record.value,
        record.classification
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_dates_in_utc() {
        assert_eq!(format_timestamp(0), "1970-01-01");
        assert_eq!(format_timestamp(1_704_067_200), "2024-01-01");
        assert_eq!(format_timestamp(i64::MAX), "N/A");
    }

    #[test]
    fn formats_record_summary() {
        let record = IndexRecord {
            time: 1_704_067_200,
            value: 25.5,
            classification: "Fear".to_string(),
        };
        assert_eq!(format_record(&record), "2024-01-01 = 25.5 (Fear)");
    }
}
