//! Classification of metadata import problems into warning reports.
//!
//! Each category is rendered independently from its own input. The detection
//! helpers (`extraneous_entries`, `absent_samples`, `missing_data`) produce
//! the inputs; `WarningClassifier` turns them into `WarningReport`s.

mod pluralize;

pub use pluralize::maybe_pluralize;

use crate::catalog::FieldCatalog;
use crate::model::field::MetadataField;
use crate::model::import::ImportFindings;
use crate::model::metadata::MetadataMapping;
use crate::model::warning::{
    ProblemTable, SampleIdToFields, Severity, WarningCode, WarningPayload, WarningReport,
};
use std::collections::{BTreeSet, HashSet};

const AUTO_CORRECT_MESSAGE: &str = "We encountered contradictory data in your upload that we \
     have automatically resolved. Please review the alerts below and correct any errors.";

const BAD_FORMAT_TITLE: &str =
    "Some of your data is not formatted correctly. Please update before proceeding.";

/// Identifiers in `metadata_ids` that were not imported, in `metadata_ids` order.
pub fn extraneous_entries<'a>(
    metadata_ids: impl IntoIterator<Item = &'a String>,
    imported_ids: impl IntoIterator<Item = &'a String>,
) -> Vec<String> {
    set_difference(metadata_ids, imported_ids)
}

/// Imported identifiers missing from `metadata_ids`, in `imported_ids` order.
pub fn absent_samples<'a>(
    imported_ids: impl IntoIterator<Item = &'a String>,
    metadata_ids: impl IntoIterator<Item = &'a String>,
) -> Vec<String> {
    set_difference(imported_ids, metadata_ids)
}

fn set_difference<'a>(
    left: impl IntoIterator<Item = &'a String>,
    right: impl IntoIterator<Item = &'a String>,
) -> Vec<String> {
    let right: HashSet<&String> = right.into_iter().collect();
    let mut seen = HashSet::new();
    left.into_iter()
        .filter(|id| !right.contains(id) && seen.insert(*id))
        .cloned()
        .collect()
}

pub struct WarningClassifier<'a> {
    catalog: &'a FieldCatalog,
}

impl<'a> WarningClassifier<'a> {
    pub fn new(catalog: &'a FieldCatalog) -> Self {
        Self { catalog }
    }

    /// Required fields left blank, per sample. Complete samples are omitted.
    pub fn missing_data(&self, metadata: &MetadataMapping) -> SampleIdToFields {
        metadata
            .iter()
            .filter_map(|(sample_id, entry)| {
                let missing: BTreeSet<MetadataField> = self
                    .catalog
                    .required()
                    .iter()
                    .copied()
                    .filter(|&field| self.catalog.is_missing(entry, field))
                    .collect();
                (!missing.is_empty()).then(|| (sample_id.clone(), missing))
            })
            .collect()
    }

    /// Reports for every non-empty category, in display order.
    pub fn classify(&self, findings: &ImportFindings) -> Vec<WarningReport> {
        let mut reports = Vec::new();
        if !findings.auto_corrected.is_empty() {
            reports.push(self.auto_correct(&findings.auto_corrected));
        }
        if !findings.extraneous.is_empty() {
            reports.push(self.extraneous_entry(&findings.extraneous));
        }
        if !findings.absent.is_empty() {
            reports.push(self.absent_sample(&findings.absent));
        }
        if !findings.missing_data.is_empty() {
            reports.push(self.missing_data_report(&findings.missing_data));
        }
        if !findings.bad_format.is_empty() {
            reports.push(self.bad_format_report(&findings.bad_format));
        }
        reports
    }

    pub fn auto_correct(&self, sample_ids: &[String]) -> WarningReport {
        let count = sample_ids.len();
        WarningReport {
            code: WarningCode::AutoCorrect,
            title: format!(
                "{count} {} {} updated.",
                maybe_pluralize("Sample", count),
                maybe_pluralize("was", count)
            ),
            severity: Severity::Warning,
            count,
            payload: WarningPayload::SampleIds(sample_ids.to_vec()),
            message: Some(AUTO_CORRECT_MESSAGE.to_string()),
            table: None,
        }
    }

    pub fn extraneous_entry(&self, sample_ids: &[String]) -> WarningReport {
        let count = sample_ids.len();
        WarningReport {
            code: WarningCode::ExtraneousEntry,
            title: format!(
                "{count} {} in metadata file {} not used.",
                maybe_pluralize("Sample", count),
                maybe_pluralize("was", count)
            ),
            severity: Severity::Warning,
            count,
            payload: WarningPayload::SampleIds(sample_ids.to_vec()),
            message: None,
            table: Some(self.id_table(
                "The following sample IDs in the metadata file do not match any sample IDs \
                 imported in the previous step.",
                sample_ids,
            )),
        }
    }

    pub fn absent_sample(&self, sample_ids: &[String]) -> WarningReport {
        let count = sample_ids.len();
        WarningReport {
            code: WarningCode::AbsentSample,
            title: format!(
                "{count} {} {} not found in metadata file.",
                maybe_pluralize("Sample", count),
                maybe_pluralize("was", count)
            ),
            severity: Severity::Warning,
            count,
            payload: WarningPayload::SampleIds(sample_ids.to_vec()),
            message: None,
            table: Some(self.id_table(
                "The following sample IDs were imported in the previous step but did not \
                 match any sample IDs in the metadata file.",
                sample_ids,
            )),
        }
    }

    pub fn missing_data_report(&self, missing: &SampleIdToFields) -> WarningReport {
        let count = missing.len();
        let rows = self.field_rows(missing, |field| self.catalog.label(field).to_string());
        WarningReport {
            code: WarningCode::MissingData,
            title: format!(
                "{count} {} {} missing data in required fields.",
                maybe_pluralize("Sample", count),
                maybe_pluralize("was", count)
            ),
            severity: Severity::Warning,
            count,
            payload: WarningPayload::SampleFields(missing.clone()),
            message: None,
            table: Some(ProblemTable {
                preamble: vec![
                    "You can add the required data in the table below, or update your file \
                     and re-import."
                        .to_string(),
                ],
                column_headers: vec![
                    self.catalog.sample_id_label().to_string(),
                    "Missing Data".to_string(),
                ],
                rows,
            }),
        }
    }

    /// Labels here drop the optional marker; the missing-data report keeps it.
    pub fn bad_format_report(&self, bad_format: &SampleIdToFields) -> WarningReport {
        let rows = self.field_rows(bad_format, |field| self.catalog.label_without_marker(field));
        WarningReport {
            code: WarningCode::BadFormatData,
            title: BAD_FORMAT_TITLE.to_string(),
            severity: Severity::Warning,
            count: bad_format.len(),
            payload: WarningPayload::SampleFields(bad_format.clone()),
            message: None,
            table: Some(ProblemTable {
                preamble: vec![
                    "You can change the invalid data in the table below, or update your file \
                     and re-import."
                        .to_string(),
                    "Formatting requirements:".to_string(),
                    "Private IDs must be no longer than 120 characters and can only contain \
                     letters from the English alphabet (A-Z, upper and lower case), numbers \
                     (0-9), periods (.), hyphens (-), underscores (_), spaces ( ), and forward \
                     slashes (/)."
                        .to_string(),
                    "Dates must be in the format of YYYY-MM-DD.".to_string(),
                ],
                column_headers: vec![
                    self.catalog.sample_id_label().to_string(),
                    "Data with Invalid Formatting".to_string(),
                ],
                rows,
            }),
        }
    }

    fn id_table(&self, preamble: &str, sample_ids: &[String]) -> ProblemTable {
        ProblemTable {
            preamble: vec![preamble.to_string()],
            column_headers: vec![self.catalog.sample_id_label().to_string()],
            rows: sample_ids.iter().map(|id| vec![id.clone()]).collect(),
        }
    }

    fn field_rows(
        &self,
        by_sample: &SampleIdToFields,
        label: impl Fn(MetadataField) -> String,
    ) -> Vec<Vec<String>> {
        by_sample
            .iter()
            .map(|(sample_id, fields)| {
                let description = fields
                    .iter()
                    .map(|&field| label(field))
                    .collect::<Vec<_>>()
                    .join(", ");
                vec![sample_id.clone(), description]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field::MetadataValue;
    use crate::model::metadata::EditableMetadata;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_set_differences() {
        let metadata = ids(&["a", "b", "c", "c"]);
        let imported = ids(&["b", "d"]);
        assert_eq!(extraneous_entries(&metadata, &imported), ids(&["a", "c"]));
        assert_eq!(absent_samples(&imported, &metadata), ids(&["d"]));
    }

    #[test]
    fn test_titles_pluralize_on_count() {
        let catalog = FieldCatalog::default();
        let classifier = WarningClassifier::new(&catalog);

        assert_eq!(classifier.auto_correct(&ids(&["a"])).title, "1 Sample was updated.");
        assert_eq!(classifier.auto_correct(&[]).title, "0 Samples were updated.");
        assert_eq!(
            classifier.auto_correct(&ids(&["a", "b", "c"])).title,
            "3 Samples were updated."
        );
        assert_eq!(
            classifier.extraneous_entry(&ids(&["a"])).title,
            "1 Sample in metadata file was not used."
        );
        assert_eq!(
            classifier.absent_sample(&ids(&["a", "b"])).title,
            "2 Samples were not found in metadata file."
        );
    }

    #[test]
    fn test_id_tables() {
        let catalog = FieldCatalog::default();
        let report = WarningClassifier::new(&catalog).absent_sample(&ids(&["x", "y"]));
        let table = report.table.unwrap();
        assert_eq!(table.column_headers, vec![catalog.sample_id_label().to_string()]);
        assert_eq!(table.rows, vec![ids(&["x"]), ids(&["y"])]);
        assert_eq!(report.severity, Severity::Warning);
        assert_eq!(report.count, 2);
    }

    #[test]
    fn test_missing_data_detection() {
        let catalog = FieldCatalog::default();
        let complete = EditableMetadata::default()
            .with(MetadataField::PrivateId, MetadataValue::text("p1"))
            .with(MetadataField::CollectionDate, MetadataValue::text("2021-01-01"))
            .with(MetadataField::CollectionLocation, MetadataValue::text("Alameda"));
        let incomplete = complete
            .clone()
            .with(MetadataField::CollectionDate, MetadataValue::text(" "));
        let mut without_location = complete.clone();
        without_location.clear(MetadataField::CollectionLocation);

        let metadata: MetadataMapping = [
            ("ok".to_string(), complete),
            ("blank-date".to_string(), incomplete),
            ("no-location".to_string(), without_location),
        ]
        .into_iter()
        .collect();

        let missing = WarningClassifier::new(&catalog).missing_data(&metadata);
        assert_eq!(missing.len(), 2);
        assert_eq!(
            missing["blank-date"],
            BTreeSet::from([MetadataField::CollectionDate])
        );
        assert_eq!(
            missing["no-location"],
            BTreeSet::from([MetadataField::CollectionLocation])
        );
    }

    #[test]
    fn test_bad_format_strips_optional_marker_but_missing_data_keeps_it() {
        let catalog = FieldCatalog::default();
        let classifier = WarningClassifier::new(&catalog);
        let problems: SampleIdToFields = [(
            "s1".to_string(),
            BTreeSet::from([MetadataField::CollectionDate, MetadataField::SequencingDate]),
        )]
        .into_iter()
        .collect();

        let bad = classifier.bad_format_report(&problems);
        assert_eq!(
            bad.table.unwrap().rows,
            vec![ids(&["s1", "Collection Date, Sequencing Date"])]
        );
        assert_eq!(bad.title, BAD_FORMAT_TITLE);

        let missing = classifier.missing_data_report(&problems);
        assert_eq!(
            missing.table.unwrap().rows,
            vec![ids(&["s1", "Collection Date, Sequencing Date - Optional"])]
        );
        assert_eq!(missing.title, "1 Sample was missing data in required fields.");
    }

    #[test]
    fn test_classify_skips_empty_categories() {
        let catalog = FieldCatalog::default();
        let classifier = WarningClassifier::new(&catalog);
        assert!(classifier.classify(&ImportFindings::default()).is_empty());

        let findings = ImportFindings {
            absent: ids(&["a"]),
            extraneous: ids(&["b"]),
            ..Default::default()
        };
        let codes: Vec<WarningCode> = classifier
            .classify(&findings)
            .into_iter()
            .map(|report| report.code)
            .collect();
        assert_eq!(codes, vec![WarningCode::ExtraneousEntry, WarningCode::AbsentSample]);
    }
}
