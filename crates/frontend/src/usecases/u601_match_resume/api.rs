use crate::shared::api_utils::api_url;
use contracts::usecases::common::UseCaseError;
use contracts::usecases::u601_match_resume::{
    parse_upload_response, UploadResumeResponse, UPLOAD_FILE_FIELD, UPLOAD_RESUME_PATH,
};
use gloo_net::http::Request;
use web_sys::FormData;

/// API client for UseCase u601: send the resume as multipart form data.
///
/// The browser sets the `multipart/form-data` content type together with its boundary.
pub async fn upload_resume(file: web_sys::File) -> Result<UploadResumeResponse, String> {
    let form_data = FormData::new().map_err(|e| format!("Failed to create form data: {:?}", e))?;
    form_data
        .append_with_blob_and_filename(UPLOAD_FILE_FIELD, &file, &file.name())
        .map_err(|e| format!("Failed to attach file: {:?}", e))?;

    let response = Request::post(&api_url(UPLOAD_RESUME_PATH))
        .body(form_data)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| transport_error("Failed to send request", e))?;

    check_status(response.ok(), response.status())?;

    let text = response
        .text()
        .await
        .map_err(|e| transport_error("Failed to read response", e))?;

    parse_upload_response(&text).map_err(|e| e.to_string())
}

/// Non-2xx statuses fail the upload the same way transport errors do
fn check_status(ok: bool, status: u16) -> Result<(), String> {
    if ok {
        Ok(())
    } else {
        Err(transport_error("Upload rejected", format!("HTTP {}", status)))
    }
}

fn transport_error(message: &str, cause: impl std::fmt::Display) -> String {
    UseCaseError::external(message)
        .with_details(cause.to_string())
        .to_string()
}
