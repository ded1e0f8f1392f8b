use crate::model::metadata::MetadataMapping;
use crate::model::warning::{SampleIdToFields, WarningReport};
use serde::{Deserialize, Serialize};

/// Problems found while importing a metadata file, one list per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportFindings {
    pub auto_corrected: Vec<String>,
    pub extraneous: Vec<String>,
    pub absent: Vec<String>,
    pub missing_data: SampleIdToFields,
    pub bad_format: SampleIdToFields,
}

impl ImportFindings {
    pub fn is_clean(&self) -> bool {
        self.auto_corrected.is_empty()
            && self.extraneous.is_empty()
            && self.absent.is_empty()
            && self.missing_data.is_empty()
            && self.bad_format.is_empty()
    }
}

/// What a finished import job hands back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub file_name: String,
    pub file_md5: String,
    pub metadata: MetadataMapping,
    pub findings: ImportFindings,
    pub reports: Vec<WarningReport>,
}
