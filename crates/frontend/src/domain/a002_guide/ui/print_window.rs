use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlDocument;

pub const MSG_POPUP_BLOCKED: &str = "Permita pop-ups para esta funcionalidade";

/// Write a complete HTML document into a new window. The document prints
/// itself once loaded.
pub fn open_print_window(html: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| MSG_POPUP_BLOCKED.to_string())?;
    let popup = window
        .open_with_url_and_target_and_features("", "_blank", "width=800,height=600")
        .ok()
        .flatten()
        .ok_or_else(|| MSG_POPUP_BLOCKED.to_string())?;
    let document = popup
        .document()
        .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
        .ok_or_else(|| MSG_POPUP_BLOCKED.to_string())?;

    let text = js_sys::Array::of1(&JsValue::from_str(html));
    document
        .write(&text)
        .map_err(|e| format!("Erro ao gerar impressão: {:?}", e))?;
    document
        .close()
        .map_err(|e| format!("Erro ao gerar impressão: {:?}", e))?;
    log::debug!("print window opened ({} bytes)", html.len());
    Ok(())
}
