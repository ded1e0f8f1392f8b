use crate::config::UploadLimit;
use crate::job_controller::state::{JobUpdate, JobsState};
use crate::services::metadata::parse::parse_metadata_file;
use crate::services::metadata::upload::{read_import_upload, ImportUpload};
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use common::jobs::JobStatus;
use common::model::import::{ImportFindings, ImportResult};
use common::warnings::{absent_samples, extraneous_entries, WarningClassifier};
use common::FieldCatalog;
use log::{info, warn};
use std::time::Instant;
use tokio::sync::mpsc;

pub(crate) async fn process(
    jobs_state: web::Data<JobsState>,
    catalog: web::Data<FieldCatalog>,
    limit: web::Data<UploadLimit>,
    payload: Multipart,
) -> impl Responder {
    let upload = match read_import_upload(payload, limit.0).await {
        Ok(upload) => upload,
        Err(e) => return HttpResponse::BadRequest().body(format!("Error: {}", e)),
    };

    match schedule_import_job(jobs_state, catalog, upload).await {
        Ok(job_id) => HttpResponse::Ok().body(job_id),
        Err(err) => HttpResponse::InternalServerError().body(err),
    }
}

async fn schedule_import_job(
    jobs_state: web::Data<JobsState>,
    catalog: web::Data<FieldCatalog>,
    upload: ImportUpload,
) -> Result<String, String> {
    let job_id = jobs_state.register().await;
    info!(
        "Scheduled import job {} for '{}' ({} bytes)",
        job_id,
        upload.file_name,
        upload.bytes.len()
    );

    let tx = jobs_state.tx.clone();
    let value = job_id.clone();

    tokio::spawn(async move {
        let tx_block = tx.clone();
        let job_id_for_blocking = value.clone();

        let handle = tokio::task::spawn_blocking(move || {
            import_metadata_blocking(&tx_block, &job_id_for_blocking, &catalog, upload)
        });

        // Final status goes through the same channel so it lands after any progress update.
        let status = match handle.await {
            Ok(Ok(result_json)) => JobStatus::Completed(result_json),
            Ok(Err(e)) => {
                warn!("Import job {} failed: {}", value, e);
                JobStatus::Failed(e)
            }
            Err(join_err) => JobStatus::Failed(format!("join error: {}", join_err)),
        };
        let _ = tx
            .send(JobUpdate {
                job_id: value,
                status,
            })
            .await;
    });

    Ok(job_id)
}

/// Runs an import on the blocking pool and returns the JSON encoded result.
fn import_metadata_blocking(
    tx: &mpsc::Sender<JobUpdate>,
    job_id: &str,
    catalog: &FieldCatalog,
    upload: ImportUpload,
) -> Result<String, String> {
    let start = Instant::now();
    let _ = tx.blocking_send(JobUpdate {
        job_id: job_id.to_string(),
        status: JobStatus::InProgress(0),
    });

    let result = import_metadata(catalog, upload)?;

    info!(
        "Import job {} finished in {:.2?}: {} samples, {} warnings",
        job_id,
        start.elapsed(),
        result.metadata.len(),
        result.reports.len()
    );
    serde_json::to_string(&result).map_err(|e| e.to_string())
}

/// Parses the uploaded file and classifies it against the imported samples.
pub(crate) fn import_metadata(
    catalog: &FieldCatalog,
    upload: ImportUpload,
) -> Result<ImportResult, String> {
    let parsed = parse_metadata_file(&upload.bytes, catalog).map_err(|e| e.to_string())?;
    let imported = &upload.request.imported_sample_ids;
    let classifier = WarningClassifier::new(catalog);

    let findings = ImportFindings {
        auto_corrected: parsed.auto_corrected,
        extraneous: extraneous_entries(parsed.metadata.keys(), imported),
        absent: absent_samples(imported, parsed.metadata.keys()),
        missing_data: classifier.missing_data(&parsed.metadata),
        bad_format: parsed.bad_format,
    };
    let reports = classifier.classify(&findings);

    Ok(ImportResult {
        file_name: upload.file_name,
        file_md5: upload.md5,
        metadata: parsed.metadata,
        findings,
        reports,
    })
}
