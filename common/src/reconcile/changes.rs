use crate::model::metadata::{ChangeSet, EditableMetadata};

/// Fields of `candidate` whose value appears nowhere among `known`'s values.
///
/// Membership is checked against every known value, not the value of the same
/// field: a candidate value that matches *any* known field counts as
/// unchanged. Bulk edits rely on this when many fields share one value.
pub fn find_changes(candidate: &EditableMetadata, known: &EditableMetadata) -> ChangeSet {
    let known_values = known.values();

    let mut changes = ChangeSet::default();
    for (field, value) in candidate.entries() {
        if !known_values.contains(&value) {
            changes.set(field, Some(value));
        }
    }
    changes
}
