use crate::model::field::{MetadataField, MetadataValue};
use crate::model::metadata::MetadataMapping;
use log::warn;

/// A new mapping where every sample has `field` set to `value`.
///
/// `None` for `previous` is treated as an empty mapping; `None` for `value`
/// clears the field. All other fields are copied unchanged. A value that does
/// not fit the field leaves every entry as it was.
pub fn apply_to_all(
    previous: Option<&MetadataMapping>,
    field: MetadataField,
    value: Option<&MetadataValue>,
) -> MetadataMapping {
    let Some(previous) = previous else {
        return MetadataMapping::new();
    };

    if let Some(value) = value {
        if !value.fits(field.kind()) {
            warn!("Ignoring apply-to-all of {:?} to field {}", value, field);
        }
    }

    previous
        .iter()
        .map(|(sample_id, metadata)| {
            let mut metadata = metadata.clone();
            metadata.set(field, value.cloned());
            (sample_id.clone(), metadata)
        })
        .collect()
}
