// src/views.rs
//
// Render the page for the current route from the application state.
//
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::components::navbar;
use crate::constants::{ATTR_DATA_ROUTE, ID_PAGE_ROOT};
use crate::dom_utils::{self, require_element};
use crate::pages;
use crate::state::AppState;

// Mount the page skeleton when the route changed, then refresh its data
pub fn render_active_view(state: &AppState, document: &Document) -> Result<(), JsValue> {
    let root = require_element(document, ID_PAGE_ROOT)?;
    let hash = state.route.to_hash();

    if root.get_attribute(ATTR_DATA_ROUTE).as_deref() != Some(hash.as_str()) {
        dom_utils::clear_children(&root);
        root.set_attribute(ATTR_DATA_ROUTE, &hash)?;
        pages::mount_page(document, &root, state.route)?;
    }

    navbar::set_active_section(document, state.route);
    pages::render_page(state, document)
}
