use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct FearGreedResponse {
    #[serde(default)]
    pub name: Option<String>,
    pub data: Vec<FearGreedData>,
    #[serde(default)]
    pub metadata: Option<FearGreedMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct FearGreedMetadata {
    #[serde(default)]
    pub error: Option<String>,
}

/// A single data point as the alternative.me API returns it: every field is a string.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FearGreedData {
    pub timestamp: String,
    pub value: String,
    pub value_classification: String,
}

/// Canonical, typed form of a data point as it is written to disk.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct IndexRecord {
    pub time: i64,
    pub value: f64,
    #[serde(rename = "value_classification")]
    pub classification: String,
}
