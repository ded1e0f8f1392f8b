use crate::error::Error;
use crate::model::location::NamedLocation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every metadata field a sample can carry in the upload and edit webforms.
///
/// The declaration order is the canonical iteration order used when walking
/// the fields of an `EditableMetadata` (and therefore the order of keys in a
/// change set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetadataField {
    PrivateId,
    PublicId,
    CollectionDate,
    CollectionLocation,
    SequencingDate,
    KeepPrivate,
    IslAccessionNumber,
}

/// The kind of value a field holds, used to reject mismatched assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Location,
    Flag,
}

impl MetadataField {
    pub const ALL: [MetadataField; 7] = [
        MetadataField::PrivateId,
        MetadataField::PublicId,
        MetadataField::CollectionDate,
        MetadataField::CollectionLocation,
        MetadataField::SequencingDate,
        MetadataField::KeepPrivate,
        MetadataField::IslAccessionNumber,
    ];

    /// Webform key, identical to the JSON key.
    pub fn key(self) -> &'static str {
        match self {
            MetadataField::PrivateId => "privateId",
            MetadataField::PublicId => "publicId",
            MetadataField::CollectionDate => "collectionDate",
            MetadataField::CollectionLocation => "collectionLocation",
            MetadataField::SequencingDate => "sequencingDate",
            MetadataField::KeepPrivate => "keepPrivate",
            MetadataField::IslAccessionNumber => "islAccessionNumber",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            MetadataField::CollectionDate | MetadataField::SequencingDate => FieldKind::Date,
            MetadataField::CollectionLocation => FieldKind::Location,
            MetadataField::KeepPrivate => FieldKind::Flag,
            MetadataField::PrivateId
            | MetadataField::PublicId
            | MetadataField::IslAccessionNumber => FieldKind::Text,
        }
    }
}

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MetadataField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetadataField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

/// A single field value as it travels between webform, diff and bulk apply.
///
/// Serialized untagged so JSON `true`, `"2021-01-01"` and
/// `{"region": ...}` map onto `Flag`, `Text` and `Location` respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Flag(bool),
    Text(String),
    Location(NamedLocation),
}

impl MetadataValue {
    pub fn text(value: impl Into<String>) -> Self {
        MetadataValue::Text(value.into())
    }

    /// Whether this value may be stored in a field of the given kind.
    /// Location fields also take plain text (a display name).
    pub fn fits(&self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (MetadataValue::Flag(_), FieldKind::Flag)
                | (MetadataValue::Text(_), FieldKind::Text)
                | (MetadataValue::Text(_), FieldKind::Date)
                | (MetadataValue::Text(_), FieldKind::Location)
                | (MetadataValue::Location(_), FieldKind::Location)
        )
    }

    /// True for blank text and for locations without a display name.
    pub fn is_blank(&self) -> bool {
        match self {
            MetadataValue::Flag(_) => false,
            MetadataValue::Text(text) => text.trim().is_empty(),
            MetadataValue::Location(location) => location.display_name().is_empty(),
        }
    }
}
