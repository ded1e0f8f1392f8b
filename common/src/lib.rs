//! Shared model and reconciliation logic for sample metadata.
//!
//! Everything in this crate is synchronous and free of I/O. The backend
//! consumes it to answer edit requests and to classify metadata imports:
//! - `model`: sample records, editable metadata, locations, warnings
//! - `catalog`: the static field tables (allow-list, labels, required fields)
//! - `reconcile`: projection, change detection, bulk apply, entry lookup
//! - `warnings`: import problem classification and report rendering
//! - `submission`: building create-samples payloads

pub mod catalog;
pub mod error;
pub mod jobs;
pub mod model;
pub mod reconcile;
pub mod requests;
pub mod submission;
pub mod warnings;

pub use catalog::FieldCatalog;
pub use error::{Error, Result};
