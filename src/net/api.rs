//! HTTP requests against the backend.
//!
//! Client-side (hydrate): real multipart calls via `gloo-net`, with the run
//! request abortable through an `AbortSignal`. The response classification
//! helpers are plain functions so they test natively.
//!
//! ERROR HANDLING
//! ==============
//! Neither endpoint's HTTP status is consulted: the backend answers errors
//! as JSON bodies with `ok: false`, and anything that is not well-formed
//! JSON is classified by shape (HTML document vs. other garbage) into a
//! [`FetchError`] kind at the point of failure.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::error::FetchError;
#[cfg(any(test, feature = "hydrate"))]
use super::types::RunResponse;
#[cfg(any(test, feature = "hydrate"))]
use super::types::UploadResponse;

/// Image upload endpoint (multipart field `image`).
pub const UPLOAD_ENDPOINT: &str = "/upload";

/// Plan-run endpoint (multipart fields `query`, `image_uris`).
pub const RUN_PLAN_ENDPOINT: &str = "/run_plan";

/// How many leading characters of a non-JSON body are inspected for an HTML
/// document marker.
#[cfg(any(test, feature = "hydrate"))]
const HTML_SNIFF_CHARS: usize = 30;

/// The two multipart fields of a run request. The uri list defaults to an
/// empty JSON array so the backend never sees a missing field.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn run_form_fields<'a>(query: &'a str, image_uris_json: &'a str) -> [(&'static str, &'a str); 2] {
    let uris = if image_uris_json.is_empty() { "[]" } else { image_uris_json };
    [("query", query), ("image_uris", uris)]
}

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.contains("application/json"))
}

/// Whether a body's head looks like an HTML document.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn looks_like_html(raw: &str) -> bool {
    let head: String = raw.trim().chars().take(HTML_SNIFF_CHARS).collect();
    let head = head.to_uppercase();
    head.starts_with("<!DOCTYPE") || head.starts_with("<HTML")
}

/// Classify and decode a `/run_plan` response body.
///
/// A body not labeled JSON is sniffed for an HTML document marker first and
/// otherwise parsed as JSON anyway (some deployments mislabel). Parse
/// failures are [`FetchError::MalformedBody`] regardless of the label.
///
/// # Errors
///
/// [`FetchError::UnexpectedContentType`] for HTML bodies,
/// [`FetchError::MalformedBody`] for anything else that does not parse.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn decode_run_body(content_type: Option<&str>, raw: &str) -> Result<RunResponse, FetchError> {
    if !is_json_content_type(content_type) && looks_like_html(raw) {
        return Err(FetchError::UnexpectedContentType);
    }
    serde_json::from_str(raw).map_err(|_| FetchError::MalformedBody)
}

/// Classify and decode an `/upload` response body into the stored image uri.
///
/// # Errors
///
/// [`FetchError::MalformedBody`] for non-JSON responses or a success body
/// missing its uri, [`FetchError::ServerReported`] when the server answered
/// `ok: false`.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn decode_upload_body(content_type: Option<&str>, raw: &str) -> Result<String, FetchError> {
    if !is_json_content_type(content_type) {
        return Err(FetchError::MalformedBody);
    }
    let body: UploadResponse = serde_json::from_str(raw).map_err(|_| FetchError::MalformedBody)?;
    if !body.ok {
        return Err(FetchError::ServerReported(
            body.error.filter(|e| !e.is_empty()).unwrap_or_else(|| "upload failed".to_owned()),
        ));
    }
    body.uri.filter(|u| !u.is_empty()).ok_or(FetchError::MalformedBody)
}

/// Map a `gloo-net` failure into a [`FetchError`] kind. An abort is the only
/// JS error distinguished by name; everything else is a network-level
/// failure.
#[cfg(feature = "hydrate")]
fn classify_send_error(err: gloo_net::Error) -> FetchError {
    match err {
        gloo_net::Error::JsError(js) if js.name == "AbortError" => FetchError::Canceled,
        other => FetchError::Network(other.to_string()),
    }
}

/// Upload one image via `POST /upload` and return its server-assigned uri.
///
/// # Errors
///
/// Any [`FetchError`] kind except `Canceled` (uploads are not abortable).
#[cfg(feature = "hydrate")]
pub async fn upload_image(file: &web_sys::File) -> Result<String, FetchError> {
    let form = web_sys::FormData::new().map_err(|_| FetchError::Network("form data unavailable".to_owned()))?;
    let _ = form.append_with_blob_and_filename("image", file, &file.name());

    let request = gloo_net::http::Request::post(UPLOAD_ENDPOINT)
        .header("Accept", "application/json")
        .cache(web_sys::RequestCache::NoStore)
        .body(form)
        .map_err(classify_send_error)?;
    let response = request.send().await.map_err(classify_send_error)?;

    let content_type = response.headers().get("content-type");
    let raw = response.text().await.map_err(classify_send_error)?;
    decode_upload_body(content_type.as_deref(), &raw)
}

/// Issue one `POST /run_plan` attempt with the given form values.
///
/// # Errors
///
/// Any [`FetchError`] kind; `Canceled` when `signal` was aborted.
#[cfg(feature = "hydrate")]
pub async fn run_plan(
    query: &str,
    image_uris_json: &str,
    signal: &web_sys::AbortSignal,
) -> Result<RunResponse, FetchError> {
    let form = web_sys::FormData::new().map_err(|_| FetchError::Network("form data unavailable".to_owned()))?;
    for (name, value) in run_form_fields(query, image_uris_json) {
        let _ = form.append_with_str(name, value);
    }

    let request = gloo_net::http::Request::post(RUN_PLAN_ENDPOINT)
        .header("X-Requested-With", "fetch")
        .header("Accept", "application/json")
        .cache(web_sys::RequestCache::NoStore)
        .abort_signal(Some(signal))
        .body(form)
        .map_err(classify_send_error)?;
    let response = request.send().await.map_err(classify_send_error)?;

    let content_type = response.headers().get("content-type");
    let raw = response.text().await.map_err(classify_send_error)?;
    decode_run_body(content_type.as_deref(), &raw)
}
