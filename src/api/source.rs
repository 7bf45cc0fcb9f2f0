//! Document sources from JavaScript values
//!
//! A string is a URL. `Uint8Array`, `ArrayBuffer` and `Blob` are read into
//! memory and handed to PDF.js as raw data.

use js_sys::{ArrayBuffer, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::error::RenderError;
use crate::models::DocumentSource;
use crate::pdfjs::js_error_message;

pub async fn document_source(value: JsValue) -> Result<DocumentSource, RenderError> {
    if let Some(url) = value.as_string() {
        return Ok(DocumentSource::Url(url));
    }
    if let Some(array) = value.dyn_ref::<Uint8Array>() {
        return Ok(DocumentSource::Bytes(array.to_vec()));
    }
    if let Some(buffer) = value.dyn_ref::<ArrayBuffer>() {
        return Ok(DocumentSource::Bytes(Uint8Array::new(buffer).to_vec()));
    }
    if let Some(blob) = value.dyn_ref::<web_sys::Blob>() {
        let buffer = JsFuture::from(blob.array_buffer()).await.map_err(|e| {
            RenderError::Source(format!("unable to read blob: {}", js_error_message(&e)))
        })?;
        return Ok(DocumentSource::Bytes(Uint8Array::new(&buffer).to_vec()));
    }
    Err(RenderError::Source(
        "expected a URL string, Uint8Array, ArrayBuffer or Blob".to_string(),
    ))
}
