//! Building the create-samples request body from the upload working set.

use crate::error::{Error, Result};
use crate::model::location::LocationValue;
use crate::model::metadata::MetadataMapping;
use crate::model::payload::{PathogenGenome, SampleFields, SamplePayload};
use crate::model::sample::SampleMap;

/// One payload per uploaded sample, in sample identifier order.
///
/// Fails when either collection is absent, or when a sample has no metadata.
pub fn build_create_payload(
    samples: Option<&SampleMap>,
    metadata: Option<&MetadataMapping>,
) -> Result<Vec<SamplePayload>> {
    let (Some(samples), Some(metadata)) = (samples, metadata) else {
        return Err(Error::MissingPayload);
    };

    samples
        .iter()
        .map(|(sample_id, sample)| {
            let entry = metadata
                .get(sample_id)
                .ok_or_else(|| Error::MissingMetadata(sample_id.clone()))?;

            Ok(SamplePayload {
                sample: SampleFields {
                    private_identifier: sample_id.clone(),
                    collection_date: entry.collection_date.clone(),
                    location: entry
                        .collection_location
                        .as_ref()
                        .map(LocationValue::display_name),
                    private: entry.keep_private,
                    public_identifier: entry.public_id.clone(),
                },
                pathogen_genome: PathogenGenome {
                    sequence: sample.sequence.clone(),
                    sequencing_date: entry.sequencing_date.clone(),
                    isl_access_number: entry.isl_accession_number.clone(),
                },
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field::{MetadataField, MetadataValue};
    use crate::model::location::NamedLocation;
    use crate::model::metadata::EditableMetadata;
    use crate::model::sample::UploadedSample;

    fn samples() -> SampleMap {
        [(
            "fasta_1".to_string(),
            UploadedSample {
                sequence: "ACGT".to_string(),
            },
        )]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_missing_collections_are_rejected() {
        let metadata = MetadataMapping::new();
        assert_eq!(
            build_create_payload(None, Some(&metadata)),
            Err(Error::MissingPayload)
        );
        assert_eq!(
            build_create_payload(Some(&samples()), None),
            Err(Error::MissingPayload)
        );
    }

    #[test]
    fn test_sample_without_metadata_is_rejected() {
        let metadata = MetadataMapping::new();
        assert_eq!(
            build_create_payload(Some(&samples()), Some(&metadata)),
            Err(Error::MissingMetadata("fasta_1".to_string()))
        );
    }

    #[test]
    fn test_payload_fields() {
        let location = NamedLocation {
            region: Some("Europe".to_string()),
            country: Some("France".to_string()),
            ..Default::default()
        };
        let entry = EditableMetadata::default()
            .with(MetadataField::CollectionDate, MetadataValue::text("2021-05-01"))
            .with(MetadataField::CollectionLocation, MetadataValue::Location(location))
            .with(MetadataField::KeepPrivate, MetadataValue::Flag(true))
            .with(MetadataField::IslAccessionNumber, MetadataValue::text("EPI_ISL_1"));
        let metadata: MetadataMapping = [("fasta_1".to_string(), entry)].into_iter().collect();

        let payload = build_create_payload(Some(&samples()), Some(&metadata)).unwrap();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload[0].sample.private_identifier, "fasta_1");
        assert_eq!(payload[0].sample.location.as_deref(), Some("Europe/France"));
        assert_eq!(payload[0].sample.private, Some(true));
        assert_eq!(payload[0].pathogen_genome.sequence, "ACGT");
        assert_eq!(
            payload[0].pathogen_genome.isl_access_number.as_deref(),
            Some("EPI_ISL_1")
        );

        let json = serde_json::to_value(&payload[0]).unwrap();
        assert_eq!(json["sample"]["collection_date"], "2021-05-01");
        assert!(json["sample"].get("public_identifier").is_none());
    }
}
