use actix_multipart::Multipart;
use common::requests::ImportMetadataRequest;
use futures_util::StreamExt;
use md5::Context;
use serde_json::from_slice;

const ACCEPTED_EXTENSIONS: [&str; 3] = [".tsv", ".csv", ".txt"];

/// A metadata file read fully into memory, with the request that came with it.
pub(crate) struct ImportUpload {
    pub request: ImportMetadataRequest,
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub md5: String,
}

/// Reads the `json` and `file` parts of an import upload.
///
/// Parts may come in any order and unknown parts are skipped. Fails when
/// either part is missing, when the file has an unsupported extension and
/// when it exceeds `limit` bytes.
pub(crate) async fn read_import_upload(
    mut payload: Multipart,
    limit: usize,
) -> Result<ImportUpload, Box<dyn std::error::Error>> {
    let mut request: Option<ImportMetadataRequest> = None;
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut md5_hasher = Context::new();

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let part_name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));

        match part_name.as_deref() {
            Some("file") => {
                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
                    .unwrap_or_default();

                let lower = filename.to_ascii_lowercase();
                if !ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
                    return Err("The metadata file must end with .tsv, .csv or .txt".into());
                }

                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    let chunk = chunk?;
                    if bytes.len() + chunk.len() > limit {
                        return Err(format!("The metadata file exceeds {} bytes", limit).into());
                    }
                    md5_hasher.consume(&chunk);
                    bytes.extend_from_slice(&chunk);
                }
                file = Some((filename, bytes));
            }

            Some("json") => {
                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    bytes.extend_from_slice(&chunk?);
                }
                request = Some(from_slice(&bytes)?);
            }

            _ => {}
        }
    }

    let request = request.ok_or("Missing import request")?;
    let (file_name, bytes) = file.ok_or("Missing file")?;
    Ok(ImportUpload {
        request,
        file_name,
        bytes,
        md5: format!("{:x}", md5_hasher.finalize()),
    })
}
