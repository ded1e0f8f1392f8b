//! Edit-workflow behavior through the public API of `common`.

use common::model::{EditableMetadata, MetadataField, MetadataMapping, MetadataValue, SampleRecord};
use common::reconcile::{Reconciler, apply_to_all, entry_or_empty, find_changes};
use common::warnings::WarningClassifier;
use common::FieldCatalog;

fn text(value: &str) -> MetadataValue {
    MetadataValue::text(value)
}

#[test]
fn test_changes_keep_only_unknown_values() {
    let candidate = EditableMetadata::default()
        .with(MetadataField::PrivateId, text("1"))
        .with(MetadataField::PublicId, text("2"));
    let known = EditableMetadata::default()
        .with(MetadataField::PrivateId, text("1"))
        .with(MetadataField::PublicId, text("9"));

    let changes = find_changes(&candidate, &known);

    assert_eq!(changes.len(), 1);
    assert_eq!(changes.public_id.as_deref(), Some("2"));
    // every key of the change set comes from the candidate, and no value is known
    let known_values = known.values();
    for (field, value) in changes.entries() {
        assert_eq!(candidate.get(field), Some(value.clone()));
        assert!(!known_values.contains(&value));
    }
}

#[test]
fn test_apply_to_all_keeps_keys_and_other_fields() {
    let s1 = EditableMetadata::default()
        .with(MetadataField::PublicId, text("1"))
        .with(MetadataField::CollectionDate, text("2"));
    let s2 = EditableMetadata::default()
        .with(MetadataField::PublicId, text("3"))
        .with(MetadataField::CollectionDate, text("4"));
    let previous: MetadataMapping = [("s1".to_string(), s1), ("s2".to_string(), s2)]
        .into_iter()
        .collect();

    let next = apply_to_all(Some(&previous), MetadataField::CollectionDate, Some(&text("0")));

    let expected: MetadataMapping = [
        (
            "s1".to_string(),
            EditableMetadata::default()
                .with(MetadataField::PublicId, text("1"))
                .with(MetadataField::CollectionDate, text("0")),
        ),
        (
            "s2".to_string(),
            EditableMetadata::default()
                .with(MetadataField::PublicId, text("3"))
                .with(MetadataField::CollectionDate, text("0")),
        ),
    ]
    .into_iter()
    .collect();
    assert_eq!(next, expected);
}

#[test]
fn test_edit_session_round_trip() {
    let catalog = FieldCatalog::default();
    let reconciler = Reconciler::new(&catalog);

    let records = vec![
        SampleRecord {
            private_id: "a".to_string(),
            collection_date: Some("2021-01-01".to_string()),
            ..Default::default()
        },
        SampleRecord {
            private_id: "b".to_string(),
            collection_date: Some("2021-01-02".to_string()),
            private: true,
            ..Default::default()
        },
    ];
    let known = reconciler.project_all(&records);

    // user marks every sample as private, then edits one date
    let mut edited = apply_to_all(
        Some(&known),
        MetadataField::KeepPrivate,
        Some(&MetadataValue::Flag(true)),
    );
    if let Some(entry) = edited.get_mut("a") {
        entry.set(MetadataField::CollectionDate, Some(text("2021-02-02")));
    }

    let changes_a = find_changes(&entry_or_empty(Some(&edited), "a"), &entry_or_empty(Some(&known), "a"));
    assert_eq!(
        changes_a,
        EditableMetadata::default()
            .with(MetadataField::CollectionDate, text("2021-02-02"))
            .with(MetadataField::KeepPrivate, MetadataValue::Flag(true))
    );

    let changes_b = find_changes(&entry_or_empty(Some(&edited), "b"), &entry_or_empty(Some(&known), "b"));
    assert!(changes_b.is_empty());

    // an unknown sample starts from an empty record
    assert!(entry_or_empty(Some(&edited), "c").is_empty());
    assert_eq!(reconciler.init("c").private_id.as_deref(), Some("c"));
}

#[test]
fn test_fresh_entries_are_missing_required_data() {
    let catalog = FieldCatalog::default();
    let reconciler = Reconciler::new(&catalog);
    let metadata: MetadataMapping = [("s1".to_string(), reconciler.init("s1"))]
        .into_iter()
        .collect();

    let missing = WarningClassifier::new(&catalog).missing_data(&metadata);
    let fields: Vec<MetadataField> = missing["s1"].iter().copied().collect();
    assert_eq!(
        fields,
        vec![MetadataField::CollectionDate, MetadataField::CollectionLocation]
    );
}
