//! Reusable UI component helpers.
//!
//! Factory functions for the buttons, lists and headings every page uses, so
//! class names and `data-testid` hooks stay consistent.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::constants::*;

/// Button configuration for the button factory
#[derive(Debug, Clone, Default)]
pub struct ButtonConfig {
    pub id: Option<String>,
    pub text: String,
    pub class_name: Option<String>,
    pub data_testid: Option<String>,
    pub submit: bool,
}

impl ButtonConfig {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class_name: &str) -> Self {
        self.class_name = Some(class_name.to_string());
        self
    }

    pub fn with_testid(mut self, testid: &str) -> Self {
        self.data_testid = Some(testid.to_string());
        self
    }

    /// Make this the form's submit button.
    pub fn submit(mut self) -> Self {
        self.submit = true;
        self
    }
}

/// Create a button element with consistent attributes and styling
pub fn create_button(document: &Document, config: ButtonConfig) -> Result<Element, JsValue> {
    let button = document.create_element("button")?;

    // Plain buttons must not submit the surrounding form
    let kind = if config.submit {
        BUTTON_TYPE_SUBMIT
    } else {
        BUTTON_TYPE_BUTTON
    };
    button.set_attribute(ATTR_TYPE, kind)?;
    button.set_text_content(Some(&config.text));

    if let Some(id) = config.id {
        button.set_id(&id);
    }
    if let Some(class_name) = config.class_name {
        button.set_class_name(&class_name);
    }
    if let Some(testid) = config.data_testid {
        button.set_attribute(ATTR_DATA_TESTID, &testid)?;
    }

    Ok(button)
}

/// Attach a click handler to `button`. The closure lives as long as the page.
pub fn on_click<F>(button: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::MouseEvent) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::MouseEvent)>);
    button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Attach a handler for any other DOM event (`change`, `hashchange`...).
pub fn on_event<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Small row button ("Edit", "Cancel"...) wired to `handler`.
pub fn create_row_button<F>(
    document: &Document,
    text: &str,
    class_name: &str,
    handler: F,
) -> Result<Element, JsValue>
where
    F: FnMut(web_sys::MouseEvent) + 'static,
{
    let button = create_button(document, ButtonConfig::new(text).with_class(class_name))?;
    on_click(&button, handler)?;
    Ok(button)
}

/// Create an actions row container with flex layout
pub fn create_actions_row(document: &Document) -> Result<Element, JsValue> {
    let container = document.create_element("span")?;
    container.set_class_name(CSS_ACTIONS);
    Ok(container)
}

pub fn create_heading(document: &Document, level: u8, text: &str) -> Result<Element, JsValue> {
    let heading = document.create_element(&format!("h{}", level.clamp(1, 6)))?;
    heading.set_text_content(Some(text));
    Ok(heading)
}

/// `<ul>` with the shared list styling.
pub fn create_list(document: &Document, id: &str, testid: &str) -> Result<Element, JsValue> {
    let list = document.create_element("ul")?;
    list.set_id(id);
    list.set_class_name(CSS_LIST);
    list.set_attribute(ATTR_DATA_TESTID, testid)?;
    Ok(list)
}
