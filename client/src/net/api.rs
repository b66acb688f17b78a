//! REST helper for the HTML generation service.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<String, String>` so every failure mode — blob
//! construction, transport, non-2xx status, unparsable body — collapses to a
//! loggable diagnostic. The UI never shows an error banner; a failed
//! submission simply leaves the previous markup in place.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::GenerateHtmlResponse;

/// The generation service endpoint. The service is a local black box; there
/// is no discovery or configuration surface.
pub const GENERATE_HTML_ENDPOINT: &str = "http://localhost:8000/generate-html";

/// Multipart field name the service reads the upload from.
pub const IMAGE_FIELD: &str = "image";

/// Filename attached to the multipart image part.
pub const IMAGE_FILENAME: &str = "drawing.jpg";

/// MIME type of the uploaded sketch.
pub const IMAGE_MIME: &str = "image/jpeg";

fn generation_failed_message(status: u16) -> String {
    format!("generation request failed: {status}")
}

/// Upload the sketch JPEG and return the generated markup.
///
/// One multipart part, field [`IMAGE_FIELD`], filename [`IMAGE_FILENAME`].
/// The browser sets the multipart boundary header itself.
///
/// # Errors
///
/// Returns a diagnostic string on blob/form construction failure, transport
/// failure, non-2xx status, or a body that is not JSON with an `html` field.
pub async fn generate_html(jpeg: Vec<u8>) -> Result<String, String> {
    let form = upload_form(&jpeg)?;
    let resp = gloo_net::http::Request::post(GENERATE_HTML_ENDPOINT)
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(generation_failed_message(resp.status()));
    }
    let body: GenerateHtmlResponse = resp.json().await.map_err(|e| e.to_string())?;
    Ok(body.html)
}

/// Wrap the JPEG bytes in a single-part multipart form.
fn upload_form(jpeg: &[u8]) -> Result<web_sys::FormData, String> {
    let bytes = js_sys::Uint8Array::from(jpeg);
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(IMAGE_MIME);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| "failed to build image blob".to_owned())?;
    let form = web_sys::FormData::new().map_err(|_| "failed to build form data".to_owned())?;
    form.append_with_blob_and_filename(IMAGE_FIELD, &blob, IMAGE_FILENAME)
        .map_err(|_| "failed to append image part".to_owned())?;
    Ok(form)
}
