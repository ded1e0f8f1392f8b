pub mod field;
pub mod import;
pub mod location;
pub mod metadata;
pub mod payload;
pub mod sample;
pub mod warning;

pub use field::{FieldKind, MetadataField, MetadataValue};
pub use location::{LocationValue, NamedLocation};
pub use metadata::{ChangeSet, EditableMetadata, MetadataMapping, MetadataSource};
pub use sample::{SampleMap, SampleRecord, UploadedSample};
