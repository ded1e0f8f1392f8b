//! Command line and environment configuration for the metadata service.

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "metadata-backend")]
#[command(about = "Sample metadata reconciliation and import service")]
#[command(version)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1", env = "METADATA_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080, env = "METADATA_PORT")]
    pub port: u16,

    /// Maximum JSON body size in bytes
    #[arg(long, default_value_t = 10 * 1024 * 1024, env = "METADATA_JSON_LIMIT")]
    pub json_limit: usize,

    /// Maximum metadata file size in bytes
    #[arg(long, default_value_t = 10 * 1024 * 1024, env = "METADATA_UPLOAD_LIMIT")]
    pub upload_limit: usize,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "info", env = "METADATA_LOG")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Upload size cap shared with the import handler.
#[derive(Debug, Clone, Copy)]
pub struct UploadLimit(pub usize);
