//! # Sample Edit Service Module
//!
//! JSON endpoints over the reconciliation core, under `/api/samples`.
//!
//! ## Registered Routes:
//!
//! *   **`POST /edit/project`**: `[SampleRecord]` to the editable webform
//!     metadata of each record, keyed by private id.
//! *   **`POST /edit/changes`**: `ChangesRequest` to the change set of every
//!     candidate sample against the known metadata. Samples without changes
//!     are left out.
//! *   **`POST /edit/apply_all`**: `ApplyAllRequest` to the metadata with one
//!     field forced to the same value on every sample.
//! *   **`POST /edit/init`**: `InitMetadataRequest` to the existing entry for
//!     the sample, or a fresh one from the empty template.
//! *   **`POST /create`**: `CreateSamplesRequest` to the create-samples request
//!     body. Missing samples or metadata answer `400 Bad Request`.

mod create;
mod edit;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/samples";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/edit/project", post().to(edit::project))
        .route("/edit/changes", post().to(edit::changes))
        .route("/edit/apply_all", post().to(edit::apply_all))
        .route("/edit/init", post().to(edit::init))
        .route("/create", post().to(create::process))
}
