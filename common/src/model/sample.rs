use crate::model::field::{MetadataField, MetadataValue};
use crate::model::location::LocationValue;
use crate::model::metadata::MetadataSource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A sample as the server reports it. The client only ever reads these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleRecord {
    #[serde(default)]
    pub id: i64,
    pub private_id: String,
    #[serde(default)]
    pub public_id: Option<String>,
    #[serde(default)]
    pub collection_date: Option<String>,
    #[serde(default)]
    pub collection_location: Option<LocationValue>,
    #[serde(default)]
    pub sequencing_date: Option<String>,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub lineage: Option<String>,
    #[serde(default)]
    pub upload_date: Option<String>,
    #[serde(default)]
    pub uploaded_by: Option<String>,
    #[serde(default)]
    pub submitting_group: Option<String>,
}

impl MetadataSource for SampleRecord {
    fn field_value(&self, field: MetadataField) -> Option<MetadataValue> {
        match field {
            MetadataField::PrivateId => Some(MetadataValue::Text(self.private_id.clone())),
            MetadataField::PublicId => self.public_id.clone().map(MetadataValue::Text),
            MetadataField::CollectionDate => self.collection_date.clone().map(MetadataValue::Text),
            MetadataField::CollectionLocation => {
                self.collection_location.clone().map(|location| match location {
                    LocationValue::Name(name) => MetadataValue::Text(name),
                    LocationValue::Structured(location) => MetadataValue::Location(location),
                })
            }
            MetadataField::SequencingDate => self.sequencing_date.clone().map(MetadataValue::Text),
            MetadataField::KeepPrivate => Some(MetadataValue::Flag(self.private)),
            MetadataField::IslAccessionNumber => None,
        }
    }
}

/// A sequence read from a FASTA file in the first upload step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedSample {
    pub sequence: String,
}

/// Sample identifier (FASTA header) to uploaded sequence.
pub type SampleMap = BTreeMap<String, UploadedSample>;
