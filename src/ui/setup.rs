use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::components::navbar::create_navbar;
use crate::constants::*;

// Minimal stylesheet: hidden elements, error text, toasts and list rows.
const BASE_CSS: &str = "
body{font-family:system-ui,Arial,Helvetica,sans-serif;margin:0;color:#1f2937}
nav{display:flex;gap:16px;align-items:center;padding:12px 24px;background:#1e3a8a;color:#fff}
nav a{color:#cbd5e1;text-decoration:none}
nav a.active{color:#fff;font-weight:600;border-bottom:2px solid #fff}
#app-container{max-width:880px;margin:0 auto;padding:16px 24px}
.hidden{display:none!important}
.list{list-style:none;padding:0}
.list li{display:flex;gap:12px;align-items:center;padding:8px 0;border-bottom:1px solid #e5e7eb}
.actions{margin-left:auto;display:flex;gap:6px}
.stacked-form .field{display:flex;flex-direction:column;margin-bottom:8px;max-width:320px}
.inline-form{display:flex;gap:8px;align-items:flex-start;flex-wrap:wrap}
.inline-form .field{display:flex;flex-direction:column}
.error{color:#dc2626;min-height:1em}
.filter-bar{display:flex;gap:8px;margin:8px 0}
.empty-state,.muted{color:#6b7280}
.btn-danger{background:#dc2626;color:#fff;border:none;padding:4px 10px;border-radius:4px}
.toast-root{position:fixed;top:16px;right:16px;display:flex;flex-direction:column;gap:8px;z-index:9999}
.toast{padding:10px 16px;border-radius:4px;color:#fff;box-shadow:0 2px 4px rgba(0,0,0,.1);opacity:0;animation:toast-in .2s forwards}
.toast-success{background:#16a34a}
@keyframes toast-in{to{opacity:1}}
";

fn inject_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(ID_APP_STYLES).is_some() {
        return Ok(());
    }
    let style = document.create_element("style")?;
    style.set_id(ID_APP_STYLES);
    style.set_text_content(Some(BASE_CSS));
    match document.query_selector("head")? {
        Some(head) => head.append_child(&style)?,
        None => document
            .body()
            .ok_or(JsValue::from_str("No body found"))?
            .append_child(&style)?,
    };
    Ok(())
}

/// Navbar plus the container every page mounts into.
pub fn create_base_ui(document: &Document) -> Result<(), JsValue> {
    inject_styles(document)?;

    let body = document.body().ok_or(JsValue::from_str("No body found"))?;
    let navbar = create_navbar(document)?;
    body.append_child(&navbar)?;

    let app_container = document.create_element("main")?;
    app_container.set_id(ID_APP_CONTAINER);

    let page_root = document.create_element("div")?;
    page_root.set_id(ID_PAGE_ROOT);
    app_container.append_child(&page_root)?;

    body.append_child(&app_container)?;
    Ok(())
}
