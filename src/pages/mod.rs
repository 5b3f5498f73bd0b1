// src/pages/mod.rs
//
// One module per route. Each page has a `mount` that builds its skeleton
// (headings, create form, empty list) once when the route is entered, and a
// `render` that refreshes the data-driven parts from `AppState` after every
// message, so half-typed create forms survive reloads.

pub mod course_detail;
pub mod courses;
pub mod students;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::*;
use crate::router::Route;
use crate::state::AppState;

pub fn mount_page(document: &Document, root: &Element, route: Route) -> Result<(), JsValue> {
    match route {
        Route::Students => students::mount(document, root),
        Route::Courses => courses::mount(document, root),
        Route::CourseDetail(course_id) => course_detail::mount(document, root, course_id),
    }
}

pub fn render_page(state: &AppState, document: &Document) -> Result<(), JsValue> {
    match state.route {
        Route::Students => students::render(state, document),
        Route::Courses => courses::render(state, document),
        Route::CourseDetail(_) => course_detail::render(state, document),
    }
}

/// `<li>` used for "Loading…" and empty lists.
fn placeholder_item(document: &Document, text: &str) -> Result<Element, JsValue> {
    let li = document.create_element("li")?;
    li.set_class_name(CSS_EMPTY_STATE);
    li.set_text_content(Some(text));
    Ok(li)
}

/// Fill `list` with the placeholder that fits, returning true when there are
/// no rows to render.
fn render_list_placeholder(
    document: &Document,
    list: &Element,
    loading: bool,
    is_empty: bool,
    empty_text: &str,
) -> Result<bool, JsValue> {
    if !is_empty {
        return Ok(false);
    }
    let text = if loading { TEXT_LOADING } else { empty_text };
    let placeholder = placeholder_item(document, text)?;
    list.append_child(&placeholder)?;
    Ok(true)
}

fn text_span(document: &Document, text: &str) -> Result<Element, JsValue> {
    let span = document.create_element("span")?;
    span.set_text_content(Some(text));
    Ok(span)
}

/// Detach the inline edit row already mounted in `list` for `editing`.
///
/// Rendering puts this row back instead of building a fresh one, so what
/// the user typed survives unrelated messages and failed saves.
fn take_edit_row(list: &Element, editing: Option<u32>) -> Result<Option<Element>, JsValue> {
    let Some(id) = editing else {
        return Ok(None);
    };
    list.query_selector(&format!("[{}=\"{}\"]", ATTR_DATA_EDITING, id))
}

/// Append the reused edit row, or `build` a new one and focus it.
fn append_edit_row<F>(list: &Element, reused: &mut Option<Element>, build: F) -> Result<(), JsValue>
where
    F: FnOnce() -> Result<Element, JsValue>,
{
    if let Some(row) = reused.take() {
        list.append_child(&row)?;
        return Ok(());
    }
    let row = build()?;
    list.append_child(&row)?;
    crate::dom_utils::focus_first_input(&row);
    Ok(())
}
