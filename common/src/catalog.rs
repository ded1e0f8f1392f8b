//! Static field tables shared by projection, import parsing and warning reports.
//!
//! A `FieldCatalog` is built once (normally with `FieldCatalog::default()`)
//! and handed by reference to every component that needs field labels, the
//! editable allow-list, the required-field list or the empty template.

use crate::model::field::{MetadataField, MetadataValue};
use crate::model::metadata::EditableMetadata;
use std::collections::HashMap;

/// Column label of the sample identifier in import files and problem tables.
pub const SAMPLE_ID_LABEL: &str = "Sample Name (from FASTA)";

/// Suffix marking optional columns in labels.
pub const OPTIONAL_HEADER_MARKER: &str = " - Optional";

#[derive(Debug, Clone)]
pub struct FieldCatalog {
    editable: Vec<MetadataField>,
    required: Vec<MetadataField>,
    labels: HashMap<MetadataField, String>,
    sample_id_label: String,
    optional_marker: String,
    empty_template: EditableMetadata,
}

impl Default for FieldCatalog {
    fn default() -> Self {
        let labels = [
            (MetadataField::PrivateId, "Private ID".to_string()),
            (
                MetadataField::PublicId,
                format!("GISAID ID (Public ID){OPTIONAL_HEADER_MARKER}"),
            ),
            (MetadataField::CollectionDate, "Collection Date".to_string()),
            (MetadataField::CollectionLocation, "Collection Location".to_string()),
            (
                MetadataField::SequencingDate,
                format!("Sequencing Date{OPTIONAL_HEADER_MARKER}"),
            ),
            (MetadataField::KeepPrivate, "Sample is Private".to_string()),
            (
                MetadataField::IslAccessionNumber,
                format!("ISL Accession #{OPTIONAL_HEADER_MARKER}"),
            ),
        ];

        let empty_template = EditableMetadata {
            private_id: Some(String::new()),
            public_id: Some(String::new()),
            collection_date: Some(String::new()),
            collection_location: None,
            sequencing_date: Some(String::new()),
            keep_private: Some(false),
            isl_accession_number: Some(String::new()),
        };

        FieldCatalog::new(
            vec![
                MetadataField::PrivateId,
                MetadataField::PublicId,
                MetadataField::CollectionDate,
                MetadataField::CollectionLocation,
                MetadataField::SequencingDate,
                MetadataField::KeepPrivate,
            ],
            vec![
                MetadataField::PrivateId,
                MetadataField::CollectionDate,
                MetadataField::CollectionLocation,
            ],
            labels.into_iter().collect(),
            SAMPLE_ID_LABEL,
            OPTIONAL_HEADER_MARKER,
            empty_template,
        )
    }
}

impl FieldCatalog {
    pub fn new(
        editable: Vec<MetadataField>,
        required: Vec<MetadataField>,
        labels: HashMap<MetadataField, String>,
        sample_id_label: impl Into<String>,
        optional_marker: impl Into<String>,
        empty_template: EditableMetadata,
    ) -> Self {
        Self {
            editable,
            required,
            labels,
            sample_id_label: sample_id_label.into(),
            optional_marker: optional_marker.into(),
            empty_template,
        }
    }

    /// Fields exposed in the edit webform, in allow-list order.
    pub fn editable(&self) -> &[MetadataField] {
        &self.editable
    }

    pub fn required(&self) -> &[MetadataField] {
        &self.required
    }

    pub fn sample_id_label(&self) -> &str {
        &self.sample_id_label
    }

    pub fn empty_template(&self) -> &EditableMetadata {
        &self.empty_template
    }

    /// Display label of `field`; unlabeled fields fall back to their key.
    pub fn label(&self, field: MetadataField) -> &str {
        self.labels
            .get(&field)
            .map(String::as_str)
            .unwrap_or_else(|| field.key())
    }

    /// Display label with the optional marker removed.
    pub fn label_without_marker(&self, field: MetadataField) -> String {
        let label = self.label(field);
        if self.optional_marker.is_empty() {
            return label.to_string();
        }
        label.replacen(&self.optional_marker, "", 1)
    }

    /// Field whose label matches `header`, with or without the optional marker.
    /// Comparison is trimmed and case-insensitive.
    pub fn field_for_label(&self, header: &str) -> Option<MetadataField> {
        let header = header.trim();
        MetadataField::ALL.into_iter().find(|&field| {
            header.eq_ignore_ascii_case(self.label(field).trim())
                || header.eq_ignore_ascii_case(self.label_without_marker(field).trim())
        })
    }

    /// True when a required field is absent or blank in `metadata`.
    pub fn is_missing(&self, metadata: &EditableMetadata, field: MetadataField) -> bool {
        metadata
            .get(field)
            .as_ref()
            .is_none_or(MetadataValue::is_blank)
    }
}
