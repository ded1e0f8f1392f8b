use crate::model::field::{MetadataField, MetadataValue};
use crate::model::location::LocationValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The editable subset of a sample's metadata (the "webform" view).
///
/// Every field is optional: a missing field means "not provided", which is
/// different from a blank value. Fields are reached either directly or through
/// [`EditableMetadata::get`] / [`EditableMetadata::set`] keyed by
/// [`MetadataField`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_location: Option<LocationValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequencing_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_private: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isl_accession_number: Option<String>,
}

/// Sample identifier to metadata.
pub type MetadataMapping = BTreeMap<String, EditableMetadata>;

/// The fields of a candidate record that diverge from what the server knows.
pub type ChangeSet = EditableMetadata;

/// Anything metadata can be projected out of.
pub trait MetadataSource {
    fn field_value(&self, field: MetadataField) -> Option<MetadataValue>;
}

impl EditableMetadata {
    pub fn get(&self, field: MetadataField) -> Option<MetadataValue> {
        match field {
            MetadataField::PrivateId => self.private_id.clone().map(MetadataValue::Text),
            MetadataField::PublicId => self.public_id.clone().map(MetadataValue::Text),
            MetadataField::CollectionDate => self.collection_date.clone().map(MetadataValue::Text),
            MetadataField::CollectionLocation => {
                self.collection_location.clone().map(|location| match location {
                    LocationValue::Name(name) => MetadataValue::Text(name),
                    LocationValue::Structured(location) => MetadataValue::Location(location),
                })
            }
            MetadataField::SequencingDate => self.sequencing_date.clone().map(MetadataValue::Text),
            MetadataField::KeepPrivate => self.keep_private.map(MetadataValue::Flag),
            MetadataField::IslAccessionNumber => {
                self.isl_accession_number.clone().map(MetadataValue::Text)
            }
        }
    }

    /// Stores `value` in `field`; `None` clears the field.
    ///
    /// Returns `false` and leaves the record untouched when the value kind
    /// does not fit the field.
    pub fn set(&mut self, field: MetadataField, value: Option<MetadataValue>) -> bool {
        let Some(value) = value else {
            self.clear(field);
            return true;
        };

        match (field, value) {
            (MetadataField::PrivateId, MetadataValue::Text(text)) => self.private_id = Some(text),
            (MetadataField::PublicId, MetadataValue::Text(text)) => self.public_id = Some(text),
            (MetadataField::CollectionDate, MetadataValue::Text(text)) => {
                self.collection_date = Some(text)
            }
            (MetadataField::CollectionLocation, MetadataValue::Text(name)) => {
                self.collection_location = Some(LocationValue::Name(name))
            }
            (MetadataField::CollectionLocation, MetadataValue::Location(location)) => {
                self.collection_location = Some(LocationValue::Structured(location))
            }
            (MetadataField::SequencingDate, MetadataValue::Text(text)) => {
                self.sequencing_date = Some(text)
            }
            (MetadataField::KeepPrivate, MetadataValue::Flag(flag)) => self.keep_private = Some(flag),
            (MetadataField::IslAccessionNumber, MetadataValue::Text(text)) => {
                self.isl_accession_number = Some(text)
            }
            _ => return false,
        }
        true
    }

    pub fn clear(&mut self, field: MetadataField) {
        match field {
            MetadataField::PrivateId => self.private_id = None,
            MetadataField::PublicId => self.public_id = None,
            MetadataField::CollectionDate => self.collection_date = None,
            MetadataField::CollectionLocation => self.collection_location = None,
            MetadataField::SequencingDate => self.sequencing_date = None,
            MetadataField::KeepPrivate => self.keep_private = None,
            MetadataField::IslAccessionNumber => self.isl_accession_number = None,
        }
    }

    /// Builder form of [`EditableMetadata::set`], mostly for constructing fixtures.
    pub fn with(mut self, field: MetadataField, value: MetadataValue) -> Self {
        self.set(field, Some(value));
        self
    }

    /// Present fields with their values, in canonical field order.
    pub fn entries(&self) -> impl Iterator<Item = (MetadataField, MetadataValue)> + '_ {
        MetadataField::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|value| (field, value)))
    }

    pub fn values(&self) -> Vec<MetadataValue> {
        self.entries().map(|(_, value)| value).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.entries().count()
    }
}

impl MetadataSource for EditableMetadata {
    fn field_value(&self, field: MetadataField) -> Option<MetadataValue> {
        self.get(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::location::NamedLocation;

    #[test]
    fn test_set_rejects_mismatched_kinds() {
        let mut metadata = EditableMetadata::default();
        assert!(!metadata.set(MetadataField::KeepPrivate, Some(MetadataValue::text("yes"))));
        assert!(!metadata.set(MetadataField::CollectionDate, Some(MetadataValue::Flag(true))));
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_location_accepts_both_shapes() {
        let mut metadata = EditableMetadata::default();
        metadata.set(MetadataField::CollectionLocation, Some(MetadataValue::text("Alameda")));
        assert_eq!(
            metadata.collection_location,
            Some(LocationValue::Name("Alameda".to_string()))
        );

        let location = NamedLocation {
            region: Some("Europe".to_string()),
            ..Default::default()
        };
        metadata.set(
            MetadataField::CollectionLocation,
            Some(MetadataValue::Location(location.clone())),
        );
        assert_eq!(
            metadata.get(MetadataField::CollectionLocation),
            Some(MetadataValue::Location(location))
        );
    }

    #[test]
    fn test_none_clears_field() {
        let mut metadata =
            EditableMetadata::default().with(MetadataField::PublicId, MetadataValue::text("hCoV-19/X"));
        assert!(metadata.set(MetadataField::PublicId, None));
        assert_eq!(metadata.public_id, None);
    }

    #[test]
    fn test_entries_follow_field_order() {
        let metadata = EditableMetadata::default()
            .with(MetadataField::KeepPrivate, MetadataValue::Flag(true))
            .with(MetadataField::PrivateId, MetadataValue::text("s1"))
            .with(MetadataField::CollectionDate, MetadataValue::text("2021-01-01"));

        let fields: Vec<MetadataField> = metadata.entries().map(|(field, _)| field).collect();
        assert_eq!(
            fields,
            vec![
                MetadataField::PrivateId,
                MetadataField::CollectionDate,
                MetadataField::KeepPrivate
            ]
        );
        assert_eq!(metadata.len(), 3);
    }

    #[test]
    fn test_json_uses_webform_keys_and_omits_absent_fields() {
        let metadata = EditableMetadata::default()
            .with(MetadataField::PrivateId, MetadataValue::text("s1"))
            .with(MetadataField::KeepPrivate, MetadataValue::Flag(false));
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json, serde_json::json!({ "privateId": "s1", "keepPrivate": false }));
    }
}
