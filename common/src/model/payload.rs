use serde::{Deserialize, Serialize};

/// One entry of the create-samples request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplePayload {
    pub sample: SampleFields,
    pub pathogen_genome: PathogenGenome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleFields {
    pub private_identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_identifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathogenGenome {
    pub sequence: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequencing_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isl_access_number: Option<String>,
}
