use crate::model::field::MetadataField;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Sample identifier to the fields that raised a problem for it.
pub type SampleIdToFields = BTreeMap<String, BTreeSet<MetadataField>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningCode {
    AutoCorrect,
    ExtraneousEntry,
    AbsentSample,
    MissingData,
    BadFormatData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
}

/// The raw classification behind a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WarningPayload {
    SampleIds(Vec<String>),
    SampleFields(SampleIdToFields),
}

/// A table of affected samples, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemTable {
    pub preamble: Vec<String>,
    pub column_headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarningReport {
    pub code: WarningCode,
    pub title: String,
    pub severity: Severity,
    pub count: usize,
    pub payload: WarningPayload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<ProblemTable>,
}
