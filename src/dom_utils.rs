//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Small wrappers for show / hide, blocking browser dialogs and element
//! lookups so page code does not repeat the same `web_sys` plumbing.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::constants::{CSS_HIDDEN, CSS_VISIBLE};

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))
}

/// Remove the `hidden` class so the element becomes visible.
pub fn show(el: &Element) {
    let _ = el.class_list().remove_1(CSS_HIDDEN);
    let _ = el.class_list().add_1(CSS_VISIBLE);
}

/// Hide the element by toggling CSS classes.
pub fn hide(el: &Element) {
    let _ = el.class_list().remove_1(CSS_VISIBLE);
    let _ = el.class_list().add_1(CSS_HIDDEN);
}

pub fn clear_children(el: &Element) {
    el.set_inner_html("");
}

/// Look up an element that the mounted page skeleton guarantees.
pub fn require_element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("#{} not found", id)))
}

/// Blocking `window.confirm`. A missing window or a dialog error counts as
/// "no" so nothing destructive happens by accident.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Blocking `window.alert`.
pub fn alert(message: &str) -> Result<(), JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .alert_with_message(message)
}

/// Focus the first input inside `container`, used when an inline edit opens.
pub fn focus_first_input(container: &Element) -> bool {
    if let Ok(Some(element)) = container.query_selector("input:not([disabled])") {
        if let Ok(html_element) = element.dyn_into::<HtmlElement>() {
            let _ = html_element.focus();
            return true;
        }
    }
    false
}
