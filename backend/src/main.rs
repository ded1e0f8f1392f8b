mod config;
mod job_controller;
mod services;

use crate::config::{ServerConfig, UploadLimit};
use crate::job_controller::state::JobsState;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use common::FieldCatalog;
use env_logger::Env;
use log::info;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = ServerConfig::parse();
    env_logger::init_from_env(Env::default().default_filter_or(config.log_level.as_str()));

    // Initialize job controller state
    let (tx, rx) = mpsc::channel(100);
    let jobs_state = JobsState {
        jobs: Arc::new(RwLock::new(HashMap::new())),
        tx,
    };

    // Start job updater task
    let updater_state = jobs_state.clone();
    tokio::spawn(async move {
        job_controller::state::start_job_updater(updater_state, rx).await;
    });

    let catalog = web::Data::new(FieldCatalog::default());
    let upload_limit = UploadLimit(config.upload_limit);
    let json_limit = config.json_limit;

    info!("Metadata service running at {}", config.url());

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(json_limit))
            .app_data(web::Data::new(jobs_state.clone()))
            .app_data(web::Data::new(upload_limit))
            .app_data(catalog.clone())
            .service(services::metadata::configure_routes())
            .service(services::samples::configure_routes())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
