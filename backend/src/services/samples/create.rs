use actix_web::{web, HttpResponse, Responder};
use common::requests::CreateSamplesRequest;
use common::submission::build_create_payload;
use log::info;

pub(crate) async fn process(payload: web::Json<CreateSamplesRequest>) -> impl Responder {
    let req = payload.into_inner();
    match build_create_payload(req.samples.as_ref(), req.metadata.as_ref()) {
        Ok(samples) => {
            info!("Prepared create payload for {} samples", samples.len());
            HttpResponse::Ok().json(samples)
        }
        Err(e) => HttpResponse::BadRequest().body(format!("Error: {}", e)),
    }
}
