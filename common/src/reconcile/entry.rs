use crate::model::metadata::{EditableMetadata, MetadataMapping};

/// The entry for `sample_id`, or an empty record when there is none.
pub fn entry_or_empty(metadata: Option<&MetadataMapping>, sample_id: &str) -> EditableMetadata {
    metadata
        .and_then(|mapping| mapping.get(sample_id))
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::field::{MetadataField, MetadataValue};

    #[test]
    fn test_returns_existing_entry() {
        let entry =
            EditableMetadata::default().with(MetadataField::PublicId, MetadataValue::text("p"));
        let mapping: MetadataMapping = [("s1".to_string(), entry.clone())].into_iter().collect();
        assert_eq!(entry_or_empty(Some(&mapping), "s1"), entry);
    }

    #[test]
    fn test_missing_entry_or_mapping_is_empty() {
        let mapping = MetadataMapping::new();
        assert!(entry_or_empty(Some(&mapping), "s1").is_empty());
        assert!(entry_or_empty(None, "s1").is_empty());
    }
}
