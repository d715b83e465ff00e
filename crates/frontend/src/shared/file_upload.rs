//! Upload of a user-selected file to the Apps Script endpoint.
//!
//! The endpoint stores the file in Drive and answers with a JSON envelope.
//! Two success shapes exist across script deployments: one returns a
//! `fileId` that has to be interpolated into a direct viewer link, the
//! other returns a ready-made `fileUrl`. Both are accepted here.

use base64::{engine::general_purpose, Engine as _};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen_futures::JsFuture;

use crate::shared::api_utils::upload_endpoint;

/// Direct viewer link template for the `fileId` response shape.
const DRIVE_VIEW_PREFIX: &str = "https://drive.google.com/uc?id=";

/// Everything that can go wrong during one upload call.
///
/// All variants propagate to the immediate caller; nothing is retried or
/// downgraded to a default value.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The browser failed to read the selected file.
    #[error("failed to read file: {0}")]
    Read(String),
    /// The request never completed or the endpoint answered with a
    /// non-success HTTP status.
    #[error("upload request failed: {0}")]
    Transport(String),
    /// The endpoint answered, but not with the expected JSON envelope.
    #[error("unexpected upload response: {0}")]
    Protocol(String),
    /// The endpoint processed the request and rejected it.
    #[error("{0}")]
    Remote(String),
}

/// Form fields the Apps Script `upload` action expects.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UploadForm {
    action: &'static str,
    file_name: String,
    mime_type: String,
    /// Base64 file content, no data-URI prefix.
    file_data: String,
    folder_id: String,
}

impl UploadForm {
    fn new(file_name: String, mime_type: String, file_data: String, folder_id: String) -> Self {
        Self {
            action: "upload",
            file_name,
            mime_type,
            file_data,
            folder_id,
        }
    }
}

/// Response envelope of the `upload` action.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadResponse {
    success: bool,
    file_id: Option<String>,
    file_url: Option<String>,
    message: Option<String>,
}

/// Upload `file` into the Drive folder `folder_id` and return a public link.
///
/// The whole file is read into memory before the request is built; nothing
/// is streamed. One call makes exactly one POST with the five form fields
/// the script expects, no retries, no caching of the result.
pub async fn upload_file(file: &web_sys::File, folder_id: &str) -> Result<String, UploadError> {
    let bytes = read_file_bytes(file).await?;
    let form = UploadForm::new(
        file.name(),
        file.type_(),
        general_purpose::STANDARD.encode(&bytes),
        folder_id.to_string(),
    );
    let body = encode_form(&form)?;

    let response = Request::post(upload_endpoint())
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| UploadError::Transport(format!("failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| UploadError::Transport(format!("failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(UploadError::Transport(format!(
            "upload endpoint returned status {}",
            response.status()
        )));
    }

    let text = response
        .text()
        .await
        .map_err(|e| UploadError::Transport(format!("failed to read response body: {}", e)))?;

    resolve_file_url(parse_response(&text)?)
}

/// Read the whole file into memory via `Blob::array_buffer`.
async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, UploadError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| UploadError::Read(format!("{:?}", e)))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

fn encode_form(form: &UploadForm) -> Result<String, UploadError> {
    serde_qs::to_string(form)
        .map_err(|e| UploadError::Transport(format!("failed to encode form: {}", e)))
}

fn parse_response(body: &str) -> Result<UploadResponse, UploadError> {
    serde_json::from_str(body).map_err(|e| UploadError::Protocol(e.to_string()))
}

/// Map a parsed envelope to the public link, honoring both success shapes.
fn resolve_file_url(response: UploadResponse) -> Result<String, UploadError> {
    if !response.success {
        return Err(UploadError::Remote(
            response
                .message
                .unwrap_or_else(|| "upload rejected by server".to_string()),
        ));
    }
    if let Some(file_id) = response.file_id {
        return Ok(format!("{}{}", DRIVE_VIEW_PREFIX, file_id));
    }
    if let Some(file_url) = response.file_url {
        return Ok(file_url);
    }
    Err(UploadError::Protocol(
        "response carries neither fileId nor fileUrl".to_string(),
    ))
}
