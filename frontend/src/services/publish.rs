//! HTTP service for the publish backend.
//!
//! Two independent calls: the multipart dataset upload and the shareable
//! link request. Both return a [`PublishResult`]; callers derive UI state
//! from it.

use gloo_net::http::{Request, Response};
use web_sys::{File, FormData};

use crate::config::{endpoint, GENERATE_LINK_PATH, PUBLISH_DATASET_PATH};
use crate::types::{
    DatasetDraft, GenerateLinkRequest, GenerateLinkResponse, PublishError, PublishResult,
};

/// Build the multipart body: `file` first, then the draft fields.
fn dataset_form_data(file: &File, draft: &DatasetDraft) -> PublishResult<FormData> {
    let form_data = FormData::new()
        .map_err(|e| PublishError::Request(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob("file", file)
        .map_err(|e| PublishError::Request(format!("Failed to append file: {:?}", e)))?;

    for (key, value) in draft.form_fields() {
        form_data
            .append_with_str(key, &value)
            .map_err(|e| PublishError::Request(format!("Failed to append {}: {:?}", key, e)))?;
    }

    Ok(form_data)
}

/// Turn a non-2xx response into [`PublishError::Status`].
async fn ensure_ok(response: Response) -> PublishResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(PublishError::Status { status, body })
}

/// Upload a dataset file with its metadata.
///
/// The response body is not examined.
pub async fn submit_dataset(file: File, draft: DatasetDraft) -> PublishResult<()> {
    let form_data = dataset_form_data(&file, &draft)?;

    let url = endpoint(PUBLISH_DATASET_PATH);
    log::info!("📤 Publishing '{}' ({} bytes) to {}", draft.name, file.size(), url);

    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| PublishError::Request(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| PublishError::Network(e.to_string()))?;

    ensure_ok(response).await?;
    Ok(())
}

/// Ask the backend for a shareable link to a dataset.
pub async fn generate_link(dataset_id: &str) -> PublishResult<GenerateLinkResponse> {
    let body = GenerateLinkRequest {
        dataset_id: dataset_id.to_string(),
    };

    let request = Request::post(&endpoint(GENERATE_LINK_PATH))
        .json(&body)
        .map_err(|e| PublishError::Request(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| PublishError::Network(e.to_string()))?;

    ensure_ok(response)
        .await?
        .json::<GenerateLinkResponse>()
        .await
        .map_err(|e| PublishError::Decode(e.to_string()))
}

/// Link to copy to the clipboard, if the request succeeded.
///
/// Failures are only logged: the user sees no error state for this action.
pub fn link_to_copy(result: PublishResult<GenerateLinkResponse>) -> Option<String> {
    match result {
        Ok(response) => Some(response.shareable_link),
        Err(e) => {
            log::error!("Error creating public link: {}", e);
            None
        }
    }
}
