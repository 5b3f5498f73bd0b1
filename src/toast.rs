//! Tiny toast / notification helper.
//! Creates a `#toast-root` container once per page and appends toast divs that
//! fade out after a few seconds.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element};

const TOAST_TIMEOUT_MS: i32 = 4000;

/// Show a green confirmation toast for a completed write.
pub fn success(message: &str) {
    if let Err(e) = try_show(message, "toast toast-success") {
        web_sys::console::warn_1(&format!("Toast failed: {:?}", e).into());
    }
}

fn try_show(message: &str, class_name: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let root = ensure_root(&document)?;

    let toast = document.create_element("div")?;
    toast.set_class_name(class_name);
    toast.set_attribute("role", "status")?;
    toast.set_text_content(Some(message));

    // Prepend so newest appears on top.
    root.prepend_with_node_1(&toast)?;

    let cb = Closure::once_into_js(move || {
        toast.remove();
    });
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        TOAST_TIMEOUT_MS,
    )?;
    Ok(())
}

fn ensure_root(document: &Document) -> Result<Element, JsValue> {
    if let Some(el) = document.get_element_by_id("toast-root") {
        return Ok(el);
    }
    let root = document.create_element("div")?;
    root.set_id("toast-root");
    root.set_class_name("toast-root");
    document
        .body()
        .ok_or_else(|| JsValue::from_str("No body"))?
        .append_child(&root)?;
    Ok(root)
}
