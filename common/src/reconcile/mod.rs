//! Metadata reconciliation for the bulk and individual edit workflows.
//!
//! - [`Reconciler::project`] turns a server record into its editable webform view.
//! - [`find_changes`] computes the change set to submit for one sample.
//! - [`apply_to_all`] forces one field to the same value on every sample.
//! - [`entry_or_empty`] and [`Reconciler::init`] hand out entries that are
//!   always safe to edit.
//!
//! None of these mutate their inputs.

mod bulk;
mod changes;
mod entry;

pub use bulk::apply_to_all;
pub use changes::find_changes;
pub use entry::entry_or_empty;

use crate::catalog::FieldCatalog;
use crate::model::field::{MetadataField, MetadataValue};
use crate::model::metadata::{EditableMetadata, MetadataMapping, MetadataSource};
use crate::model::sample::SampleRecord;

pub struct Reconciler<'a> {
    catalog: &'a FieldCatalog,
}

impl<'a> Reconciler<'a> {
    pub fn new(catalog: &'a FieldCatalog) -> Self {
        Self { catalog }
    }

    /// Picks the editable fields out of `source`.
    ///
    /// Fields missing from the source stay missing. A structured collection
    /// location is replaced by its display name.
    pub fn project<S: MetadataSource + ?Sized>(&self, source: &S) -> EditableMetadata {
        let mut metadata = EditableMetadata::default();
        for &field in self.catalog.editable() {
            let value = match source.field_value(field) {
                Some(MetadataValue::Location(location)) => {
                    MetadataValue::Text(location.display_name())
                }
                Some(value) => value,
                None => continue,
            };
            metadata.set(field, Some(value));
        }
        metadata
    }

    /// Projects each record, keyed by its private identifier.
    pub fn project_all<'r>(
        &self,
        records: impl IntoIterator<Item = &'r SampleRecord>,
    ) -> MetadataMapping {
        records
            .into_iter()
            .map(|record| (record.private_id.clone(), self.project(record)))
            .collect()
    }

    /// A copy of the empty template with the private identifier set to `sample_id`.
    pub fn init(&self, sample_id: &str) -> EditableMetadata {
        let mut metadata = self.catalog.empty_template().clone();
        metadata.set(
            MetadataField::PrivateId,
            Some(MetadataValue::text(sample_id)),
        );
        metadata
    }
}
