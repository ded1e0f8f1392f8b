//! Metadata file import: upload, background parsing and status polling.
//!
//! - `POST /api/metadata/import`: multipart/form-data with a `json` part
//!   (`ImportMetadataRequest`, the sample ids read from FASTA in the previous
//!   step) and a `file` part (`.tsv`, `.csv` or `.txt`). The file is held in
//!   memory, a background job parses and classifies it, and the job id is
//!   returned immediately.
//! - `GET /api/metadata/status/{job_id}`: current `JobStatus` of an import.
//!   `Completed` carries the JSON encoded `ImportResult`.

use actix_web::web::{get, post, scope};
use actix_web::Scope;

mod get_status;
mod import;
mod parse;
mod upload;

const API_PATH: &str = "/api/metadata";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/import", post().to(import::process))
        .route("/status/{job_id}", get().to(get_status::process))
}
