use crate::model::field::{MetadataField, MetadataValue};
use crate::model::metadata::MetadataMapping;
use crate::model::sample::SampleMap;
use serde::{Deserialize, Serialize};

/// `json` part of the metadata import upload.
/// Lists the sample ids read from the FASTA file in the previous step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportMetadataRequest {
    #[serde(default)]
    pub imported_sample_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangesRequest {
    pub candidate: MetadataMapping,
    #[serde(default)]
    pub known: Option<MetadataMapping>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyAllRequest {
    #[serde(default)]
    pub metadata: Option<MetadataMapping>,
    pub field: MetadataField,
    #[serde(default)]
    pub value: Option<MetadataValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitMetadataRequest {
    pub sample_id: String,
    #[serde(default)]
    pub metadata: Option<MetadataMapping>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSamplesRequest {
    #[serde(default)]
    pub samples: Option<SampleMap>,
    #[serde(default)]
    pub metadata: Option<MetadataMapping>,
}
