use actix_web::{web, HttpResponse, Responder};
use common::model::{MetadataMapping, SampleRecord};
use common::reconcile::{apply_to_all, entry_or_empty, find_changes, Reconciler};
use common::requests::{ApplyAllRequest, ChangesRequest, InitMetadataRequest};
use common::FieldCatalog;
use log::debug;

pub(crate) async fn project(
    catalog: web::Data<FieldCatalog>,
    payload: web::Json<Vec<SampleRecord>>,
) -> impl Responder {
    let mapping = Reconciler::new(&catalog).project_all(payload.iter());
    HttpResponse::Ok().json(mapping)
}

pub(crate) async fn changes(payload: web::Json<ChangesRequest>) -> impl Responder {
    HttpResponse::Ok().json(collect_changes(&payload))
}

/// Change sets of every candidate sample, leaving out samples with none.
fn collect_changes(req: &ChangesRequest) -> MetadataMapping {
    req.candidate
        .iter()
        .filter_map(|(sample_id, candidate)| {
            let known = entry_or_empty(req.known.as_ref(), sample_id);
            let changes = find_changes(candidate, &known);
            (!changes.is_empty()).then(|| (sample_id.clone(), changes))
        })
        .collect()
}

pub(crate) async fn apply_all(payload: web::Json<ApplyAllRequest>) -> impl Responder {
    let req = payload.into_inner();
    debug!(
        "Applying {} to {} samples",
        req.field,
        req.metadata.as_ref().map_or(0, |m| m.len())
    );
    let mapping = apply_to_all(req.metadata.as_ref(), req.field, req.value.as_ref());
    HttpResponse::Ok().json(mapping)
}

pub(crate) async fn init(
    catalog: web::Data<FieldCatalog>,
    payload: web::Json<InitMetadataRequest>,
) -> impl Responder {
    let req = payload.into_inner();
    let existing = entry_or_empty(req.metadata.as_ref(), &req.sample_id);
    let entry = if existing.is_empty() {
        Reconciler::new(&catalog).init(&req.sample_id)
    } else {
        existing
    };
    HttpResponse::Ok().json(entry)
}
