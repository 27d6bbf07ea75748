//! Clipboard helper for the copy controls on rendered request/response boxes.

use wasm_bindgen_futures::spawn_local;

/// Copy text to the system clipboard via the Web Clipboard API and run
/// `on_success` once the browser confirms the write.
///
/// A rejected write is logged and leaves the rendered content untouched.
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_success: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
                Ok(_) => on_success(),
                Err(err) => log::error!("Could not copy text: {:?}", err),
            }
        }
    });
}
