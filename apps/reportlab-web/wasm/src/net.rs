//! Fetch plumbing for the extraction service
//!
//! Multipart bodies are built with `FormData`; the browser supplies
//! the boundary, so no Content-Type header is set explicitly. Single
//! and batch submissions report failures as [`SubmitError`], which the
//! session reconciles; JSON reads used outside the orchestrator keep
//! plain `JsValue` errors.

use js_sys::Uint8Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, FormData, Request, RequestInit, RequestMode, Response};

use reportlab_core::{CandidateFile, SubmitError};
use reportlab_types::{BatchOutcome, ReportRecord};

/// Join the caller-supplied API base with an endpoint path
pub(crate) fn endpoint(api_base: &str, path: &str) -> String {
    format!("{}/{}", api_base.trim_end_matches('/'), path)
}

/// Submit one file to the single-file extraction endpoint
pub(crate) async fn post_single(
    api_base: &str,
    file: &CandidateFile,
) -> Result<ReportRecord, SubmitError> {
    let form = FormData::new().map_err(|_| SubmitError::Transport)?;
    append_file_part(&form, "file", file)?;

    let (ok, body) = post_form(&endpoint(api_base, "process-excel"), &form).await?;
    if !ok {
        return Err(classify_failure(&body));
    }
    serde_json::from_str(&body).map_err(|_| SubmitError::Transport)
}

/// Submit every pending file, in order, in one batch call
pub(crate) async fn post_batch(
    api_base: &str,
    files: &[CandidateFile],
) -> Result<BatchOutcome, SubmitError> {
    let form = FormData::new().map_err(|_| SubmitError::Transport)?;
    for file in files {
        append_file_part(&form, "files", file)?;
    }

    let (ok, body) = post_form(&endpoint(api_base, "process-batch"), &form).await?;
    if !ok {
        // The batch endpoint reports per-file failures inside a 200
        // body; anything else is a whole-call failure
        return Err(SubmitError::Transport);
    }
    serde_json::from_str(&body).map_err(|_| SubmitError::Transport)
}

/// Map a non-success response body to the error the user should see:
/// the service's `detail` verbatim when present, generic otherwise
pub(crate) fn classify_failure(body: &str) -> SubmitError {
    match extract_detail(body) {
        Some(detail) => SubmitError::Service { detail },
        None => SubmitError::Transport,
    }
}

/// Pull the `detail` string out of a service error payload
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(|d| d.as_str())
        .map(str::to_string)
}

fn append_file_part(
    form: &FormData,
    field: &str,
    file: &CandidateFile,
) -> Result<(), SubmitError> {
    let parts = js_sys::Array::new();
    parts.push(&Uint8Array::from(file.bytes.as_slice()));
    let blob = Blob::new_with_u8_array_sequence(&parts).map_err(|_| SubmitError::Transport)?;
    form.append_with_blob_and_filename(field, &blob, &file.name)
        .map_err(|_| SubmitError::Transport)?;
    Ok(())
}

async fn post_form(url: &str, form: &FormData) -> Result<(bool, String), SubmitError> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|_| SubmitError::Transport)?;
    round_trip(&request).await.map_err(|_| SubmitError::Transport)
}

/// POST a JSON body; returns (ok, response text)
pub(crate) async fn post_json(url: &str, body: &str) -> Result<(bool, String), JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;
    round_trip(&request).await
}

/// GET a URL; returns (ok, response text)
pub(crate) async fn get_text(url: &str) -> Result<(bool, String), JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;
    round_trip(&request).await
}

async fn round_trip(request: &Request) -> Result<(bool, String), JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    let response = JsFuture::from(window.fetch_with_request(request)).await?;
    let response: Response = response.dyn_into()?;

    let text = JsFuture::from(response.text()?).await?;
    Ok((response.ok(), text.as_string().unwrap_or_default()))
}
