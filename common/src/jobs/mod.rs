use serde::{Deserialize, Serialize};

/// Lifecycle of a background job as reported to polling clients.
///
/// `InProgress` carries a completion percentage. `Completed` carries a JSON
/// encoded result whose shape depends on the job kind (for metadata imports,
/// an `ImportResult`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum JobStatus {
    Pending,
    InProgress(u32),
    Completed(String),
    Failed(String),
}
