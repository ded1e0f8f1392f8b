//! Parsing of uploaded metadata files into webform metadata.
//!
//! The file is a delimited text file whose header row carries display labels
//! (see `FieldCatalog`). Each row starts from the empty template for its
//! sample and is overlaid with the non-blank cells. Rows are validated in
//! parallel; format problems are collected per sample instead of failing the
//! whole file.

use chrono::NaiveDate;
use common::model::field::FieldKind;
use common::model::warning::SampleIdToFields;
use common::model::{EditableMetadata, MetadataField, MetadataMapping, MetadataValue};
use common::reconcile::Reconciler;
use common::{Error, FieldCatalog, Result};
use log::{debug, warn};
use rayon::prelude::*;
use regex::Regex;
use std::collections::BTreeSet;

const DELIMITERS: [u8; 3] = [b'\t', b',', b';'];
const MAX_ID_LENGTH: usize = 120;

/// Result of reading a metadata file, before it is compared with the samples
/// imported in the previous step.
#[derive(Debug, Default)]
pub(crate) struct ParsedFile {
    pub metadata: MetadataMapping,
    pub auto_corrected: Vec<String>,
    pub bad_format: SampleIdToFields,
}

struct ParsedRow {
    sample_id: String,
    metadata: EditableMetadata,
    bad_format: BTreeSet<MetadataField>,
    auto_corrected: bool,
}

/// Format rules for identifiers and dates.
pub(crate) struct FormatValidator {
    id_re: Regex,
    date_re: Regex,
}

impl FormatValidator {
    pub fn new() -> Result<Self> {
        let regex = |pattern: &str| {
            Regex::new(pattern).map_err(|e| Error::Parse(format!("Regex error: {}", e)))
        };
        Ok(Self {
            id_re: regex(r"^[A-Za-z0-9._\- /]+$")?,
            date_re: regex(r"^\d{4}-\d{2}-\d{2}$")?,
        })
    }

    pub fn is_valid_id(&self, value: &str) -> bool {
        value.chars().count() <= MAX_ID_LENGTH && self.id_re.is_match(value)
    }

    /// `YYYY-MM-DD` naming a real calendar day.
    pub fn is_valid_date(&self, value: &str) -> bool {
        self.date_re.is_match(value) && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
    }

    fn is_valid(&self, field: MetadataField, value: &str) -> bool {
        match field {
            MetadataField::PrivateId | MetadataField::PublicId => self.is_valid_id(value),
            MetadataField::CollectionDate | MetadataField::SequencingDate => {
                self.is_valid_date(value)
            }
            _ => true,
        }
    }
}

/// Picks the delimiter occurring most often in the header line.
/// Ties go to the earlier candidate, so single-column files read as TSV.
pub(crate) fn detect_delimiter(header_line: &str) -> u8 {
    let mut best = DELIMITERS[0];
    let mut best_count = 0;
    for delimiter in DELIMITERS {
        let count = header_line.bytes().filter(|&b| b == delimiter).count();
        if count > best_count {
            best = delimiter;
            best_count = count;
        }
    }
    best
}

fn parse_flag(cell: &str) -> Option<bool> {
    match cell.to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Some(true),
        "no" | "n" | "false" | "0" => Some(false),
        _ => None,
    }
}

pub(crate) fn parse_metadata_file(bytes: &[u8], catalog: &FieldCatalog) -> Result<ParsedFile> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| Error::Parse("Metadata file is not valid UTF-8".to_string()))?;
    let text = text.trim_start_matches('\u{feff}');

    let header_line = text.lines().next().unwrap_or_default();
    if header_line.trim().is_empty() {
        return Err(Error::Parse("Metadata file has no header row".to_string()));
    }
    let delimiter = detect_delimiter(header_line);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| Error::Parse(e.to_string()))?
        .clone();
    let sample_id_column = headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(catalog.sample_id_label()))
        .ok_or_else(|| Error::Parse(format!("Missing column '{}'", catalog.sample_id_label())))?;

    let mut columns = Vec::new();
    for (index, header) in headers.iter().enumerate() {
        if index == sample_id_column {
            continue;
        }
        match catalog.field_for_label(header) {
            Some(field) => columns.push((index, field)),
            None => debug!("Ignoring unrecognized metadata column '{}'", header),
        }
    }

    let records: Vec<csv::StringRecord> = reader
        .records()
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| Error::Parse(e.to_string()))?;

    let validator = FormatValidator::new()?;
    let reconciler = Reconciler::new(catalog);

    let rows: Vec<ParsedRow> = records
        .par_iter()
        .filter_map(|record| {
            let sample_id = record.get(sample_id_column).unwrap_or_default();
            if sample_id.is_empty() {
                return None;
            }
            Some(parse_row(sample_id, record, &columns, &reconciler, &validator))
        })
        .collect();

    let mut parsed = ParsedFile::default();
    for row in rows {
        // a later row for the same sample replaces the earlier one entirely
        parsed.auto_corrected.retain(|id| id != &row.sample_id);
        if row.auto_corrected {
            parsed.auto_corrected.push(row.sample_id.clone());
        }
        if row.bad_format.is_empty() {
            parsed.bad_format.remove(&row.sample_id);
        } else {
            parsed.bad_format.insert(row.sample_id.clone(), row.bad_format);
        }
        if parsed.metadata.insert(row.sample_id.clone(), row.metadata).is_some() {
            warn!("Duplicate metadata row for sample '{}', keeping the last one", row.sample_id);
        }
    }
    Ok(parsed)
}

fn parse_row(
    sample_id: &str,
    record: &csv::StringRecord,
    columns: &[(usize, MetadataField)],
    reconciler: &Reconciler<'_>,
    validator: &FormatValidator,
) -> ParsedRow {
    let mut metadata = reconciler.init(sample_id);
    let mut bad_format = BTreeSet::new();

    for &(index, field) in columns {
        let cell = record.get(index).unwrap_or_default();
        if cell.is_empty() {
            continue;
        }
        let value = match field.kind() {
            FieldKind::Flag => match parse_flag(cell) {
                Some(flag) => MetadataValue::Flag(flag),
                None => {
                    warn!(
                        "Dropping '{}' for {} of sample '{}': not a yes/no value",
                        cell, field, sample_id
                    );
                    bad_format.insert(field);
                    continue;
                }
            },
            FieldKind::Text | FieldKind::Date | FieldKind::Location => MetadataValue::text(cell),
        };
        if !validator.is_valid(field, cell) {
            bad_format.insert(field);
        }
        metadata.set(field, Some(value));
    }

    // A private sample cannot carry a public id; privacy wins.
    let has_public_id = metadata
        .public_id
        .as_deref()
        .is_some_and(|id| !id.trim().is_empty());
    let auto_corrected = metadata.keep_private == Some(true) && has_public_id;
    if auto_corrected {
        metadata.set(MetadataField::PublicId, Some(MetadataValue::text("")));
    }

    ParsedRow {
        sample_id: sample_id.to_string(),
        metadata,
        bad_format,
        auto_corrected,
    }
}
