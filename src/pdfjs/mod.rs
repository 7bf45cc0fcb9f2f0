//! PDF.js integration
//!
//! Bindings to the parts of the `pdfjs-dist` API the renderer uses, and the
//! implementation of the render pipeline's library traits on top of them.

pub mod bindings;
pub mod library;

pub use library::{PdfJs, PdfJsDocument, PdfJsLoader, PdfJsPage};

use wasm_bindgen::{JsCast, JsValue};

/// Best-effort message out of a thrown JavaScript value
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        String::from(error.message())
    } else if let Some(message) = value.as_string() {
        message
    } else {
        format!("{:?}", value)
    }
}

/// Set `key` on a parameter object handed to PDF.js
pub(crate) fn set_param(
    target: &js_sys::Object,
    key: &str,
    value: &JsValue,
) -> Result<(), JsValue> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value).map(|_| ())
}

/// Runs `cancel` when dropped unless disarmed first.
///
/// Guards a PDF.js task while its promise is awaited, so dropping the future
/// (cancelled render) also stops the work on the PDF.js side.
pub(crate) struct CancelOnDrop<F: FnOnce()> {
    cancel: Option<F>,
}

impl<F: FnOnce()> CancelOnDrop<F> {
    pub(crate) fn new(cancel: F) -> Self {
        Self { cancel: Some(cancel) }
    }

    pub(crate) fn disarm(mut self) {
        self.cancel = None;
    }
}

impl<F: FnOnce()> Drop for CancelOnDrop<F> {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
