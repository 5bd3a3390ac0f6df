//! Clipboard and alert helpers.
//!
//! `navigator.clipboard` is looked up through `Reflect` so no unstable
//! web-sys APIs are needed.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::types::{PublishError, PublishResult};

/// Write text to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> PublishResult<()> {
    let window =
        web_sys::window().ok_or_else(|| PublishError::Clipboard("no global window".to_string()))?;

    let clipboard = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
        .map_err(|e| PublishError::Clipboard(format!("{:?}", e)))?;
    if clipboard.is_null() || clipboard.is_undefined() {
        return Err(PublishError::Clipboard(
            "clipboard API not available".to_string(),
        ));
    }

    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|e| PublishError::Clipboard(format!("{:?}", e)))?
        .dyn_into::<js_sys::Function>()
        .map_err(|_| PublishError::Clipboard("writeText is not a function".to_string()))?;

    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| PublishError::Clipboard(format!("{:?}", e)))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| PublishError::Clipboard("writeText did not return a promise".to_string()))?;

    JsFuture::from(promise)
        .await
        .map_err(|e| PublishError::Clipboard(format!("{:?}", e)))?;

    Ok(())
}

/// Show a blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("Alert failed: {:?}", e);
        }
    }
}
