//! Schema-driven forms.
//!
//! Every form on every page is built from the field table of its
//! [`FormKind`]: one labelled control per field plus an error slot beneath
//! it. Submission reads the controls back as strings, runs them through
//! [`parse_form`] and either shows the field errors or hands the typed
//! payload to the caller.

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

use crate::constants::*;
use crate::forms::{parse_form, FieldErrors, FieldKind, FieldSpec, FormKind, FormValues};
use crate::messages::Message;
use crate::models::Level;
use crate::state::dispatch_global_message;
use crate::ui_components::{create_button, ButtonConfig};
use crate::utils::truncate_label;

/// One `<option>` in a data-driven select.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl ToString, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: truncate_label(label, MAX_OPTION_LABEL),
        }
    }
}

pub struct FormConfig<'a> {
    pub id: Option<&'a str>,
    pub kind: FormKind,
    pub values: FormValues,
    pub submit_label: &'a str,
    pub class_name: &'a str,
    pub testid: &'a str,
}

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Integer { .. } | FieldKind::Number { .. } => "number",
        _ => "text",
    }
}

fn create_control(document: &Document, field: &FieldSpec, value: &str) -> Result<Element, JsValue> {
    if field.kind.is_select() {
        let select = document.create_element("select")?;
        select.set_attribute("name", field.name)?;
        select.set_attribute("data-initial", value)?;
        if field.kind == FieldKind::IdSelect {
            select.set_attribute("data-choose", "")?;
        }
        let options: Vec<SelectOption> = match field.kind {
            FieldKind::Choice => Level::ALL
                .iter()
                .map(|l| SelectOption::new(l.as_str(), l.as_str()))
                .collect(),
            // Data-driven selects are filled by the page once lists arrive.
            _ => Vec::new(),
        };
        fill_select(document, &select, &options, value)?;
        return Ok(select);
    }

    let input = document.create_element("input")?;
    input.set_attribute("name", field.name)?;
    input.set_attribute(ATTR_TYPE, input_type(field.kind))?;
    match field.kind {
        FieldKind::Integer { min, max } => {
            input.set_attribute("step", "1")?;
            if let Some(min) = min {
                input.set_attribute("min", &min.to_string())?;
            }
            if let Some(max) = max {
                input.set_attribute("max", &max.to_string())?;
            }
        }
        FieldKind::Number { min, max } => {
            input.set_attribute("step", "any")?;
            if let Some(min) = min {
                input.set_attribute("min", &min.to_string())?;
            }
            if let Some(max) = max {
                input.set_attribute("max", &max.to_string())?;
            }
        }
        _ => {}
    }
    // The value attribute is what `form.reset()` restores.
    input.set_attribute("value", value)?;
    Ok(input)
}

/// Build a `<form>` for `config.kind` prefilled with `config.values`.
pub fn build_form(document: &Document, config: FormConfig<'_>) -> Result<Element, JsValue> {
    let form = document.create_element("form")?;
    if let Some(id) = config.id {
        form.set_id(id);
    }
    form.set_class_name(config.class_name);
    form.set_attribute(ATTR_DATA_TESTID, config.testid)?;
    // Our schema messages replace the browser's own validation bubbles.
    form.set_attribute("novalidate", "")?;

    for field in config.kind.fields() {
        let row = document.create_element("label")?;
        row.set_class_name("field");

        let caption = document.create_element("span")?;
        caption.set_text_content(Some(field.label));
        row.append_child(&caption)?;

        let value = config.values.get(field.name).map(String::as_str).unwrap_or("");
        let control = create_control(document, field, value)?;
        row.append_child(&control)?;

        let error = document.create_element("small")?;
        error.set_class_name(CSS_ERROR);
        error.set_attribute(ATTR_DATA_ERROR_FOR, field.name)?;
        row.append_child(&error)?;

        form.append_child(&row)?;
    }

    let form_error = document.create_element("small")?;
    form_error.set_class_name(CSS_ERROR);
    form_error.set_attribute(ATTR_DATA_ERROR_FOR, FORM_ERROR_SLOT)?;
    form.append_child(&form_error)?;

    let submit = create_button(
        document,
        ButtonConfig::new(config.submit_label)
            .submit()
            .with_testid(&format!("{}-submit", config.testid)),
    )?;
    form.append_child(&submit)?;

    Ok(form)
}

/// Read every named control of `form` as raw strings.
pub fn read_form_values(form: &Element) -> Result<FormValues, JsValue> {
    let mut values = FormValues::new();
    let controls = form.query_selector_all("input[name], select[name]")?;
    for i in 0..controls.length() {
        let Some(node) = controls.item(i) else {
            continue;
        };
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            values.insert(input.name(), input.value());
        } else if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            values.insert(select.name(), select.value());
        }
    }
    Ok(values)
}

pub fn clear_errors(form: &Element) -> Result<(), JsValue> {
    let slots = form.query_selector_all(&format!("[{}]", ATTR_DATA_ERROR_FOR))?;
    for i in 0..slots.length() {
        if let Some(slot) = slots.item(i) {
            slot.set_text_content(None);
        }
    }
    Ok(())
}

/// Put each message in the slot beneath its field. Messages for no known
/// field go to the form-wide slot.
pub fn show_errors(form: &Element, errors: &FieldErrors) -> Result<(), JsValue> {
    clear_errors(form)?;
    for (field, message) in errors {
        let selector = format!("[{}=\"{}\"]", ATTR_DATA_ERROR_FOR, field);
        let fallback = format!("[{}=\"{}\"]", ATTR_DATA_ERROR_FOR, FORM_ERROR_SLOT);
        match form.query_selector(&selector)? {
            Some(slot) => slot.set_text_content(Some(message)),
            None => match form.query_selector(&fallback)? {
                Some(slot) => slot.set_text_content(Some(message)),
                None => web_sys::console::warn_1(
                    &format!("Form error without a slot: {} {}", field, message).into(),
                ),
            },
        }
    }
    Ok(())
}

fn fill_select(
    document: &Document,
    select: &Element,
    options: &[SelectOption],
    wanted: &str,
) -> Result<(), JsValue> {
    let initial = select.get_attribute("data-initial").unwrap_or_default();
    select.set_inner_html("");

    let mut all = Vec::with_capacity(options.len() + 1);
    if select.has_attribute("data-choose") {
        all.push(SelectOption::new("", TEXT_CHOOSE));
    }
    all.extend(options.iter().cloned());

    for opt in &all {
        let el = document.create_element("option")?;
        el.set_attribute("value", &opt.value)?;
        el.set_text_content(Some(&opt.label));
        if opt.value == initial {
            // Default selection restored by `form.reset()`
            el.set_attribute("selected", "")?;
        }
        select.append_child(&el)?;
    }

    if let Some(select) = select.dyn_ref::<HtmlSelectElement>() {
        if all.iter().any(|o| o.value == wanted) {
            select.set_value(wanted);
        }
    }
    Ok(())
}

/// Replace the options of the `<select name=field>` inside `form`, keeping
/// the user's current choice when it is still offered.
pub fn set_select_options(
    document: &Document,
    form: &Element,
    field: &str,
    options: &[SelectOption],
) -> Result<(), JsValue> {
    let Some(select) = form.query_selector(&format!("select[name=\"{}\"]", field))? else {
        return Ok(());
    };
    let current = select
        .dyn_ref::<HtmlSelectElement>()
        .map(|s| s.value())
        .unwrap_or_default();
    let wanted = if current.is_empty() {
        select.get_attribute("data-initial").unwrap_or_default()
    } else {
        current
    };
    fill_select(document, &select, options, &wanted)
}

/// Validate on submit and dispatch whatever `to_message` builds from the
/// typed payload. Invalid input never leaves the form.
pub fn on_valid_submit<T, F>(form: &Element, kind: FormKind, to_message: F) -> Result<(), JsValue>
where
    T: DeserializeOwned + 'static,
    F: Fn(T) -> Message + 'static,
{
    let form_el = form.clone();
    let cb = Closure::wrap(Box::new(move |event: web_sys::Event| {
        event.prevent_default();
        let result = read_form_values(&form_el).and_then(|values| {
            match parse_form::<T>(kind, &values) {
                Ok(payload) => {
                    clear_errors(&form_el)?;
                    dispatch_global_message(to_message(payload));
                    Ok(())
                }
                Err(errors) => show_errors(&form_el, &errors),
            }
        });
        if let Err(e) = result {
            web_sys::console::error_1(&format!("Form submit failed: {:?}", e).into());
        }
    }) as Box<dyn FnMut(_)>);
    form.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_labels_are_clipped() {
        let long = "x".repeat(MAX_OPTION_LABEL + 10);
        let opt = SelectOption::new(3, &long);
        assert_eq!(opt.value, "3");
        assert!(opt.label.chars().count() <= MAX_OPTION_LABEL + 1);
    }

    #[test]
    fn numeric_fields_use_number_inputs() {
        assert_eq!(input_type(FieldKind::Integer { min: None, max: None }), "number");
        assert_eq!(input_type(FieldKind::Email), "email");
        assert_eq!(input_type(FieldKind::Text), "text");
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn student_form(document: &Document) -> Element {
        build_form(
            document,
            FormConfig {
                id: None,
                kind: FormKind::Student,
                values: FormKind::Student.initial_values(),
                submit_label: "Create",
                class_name: CSS_STACKED_FORM,
                testid: "student-create-form",
            },
        )
        .unwrap()
    }

    #[wasm_bindgen_test]
    fn built_form_reads_back_initial_values() {
        let document = crate::dom_utils::document().unwrap();
        let form = student_form(&document);
        let values = read_form_values(&form).unwrap();
        assert_eq!(values, FormKind::Student.initial_values());
    }

    #[wasm_bindgen_test]
    fn errors_land_under_their_field() {
        let document = crate::dom_utils::document().unwrap();
        let form = student_form(&document);
        let mut errors = FieldErrors::new();
        errors.insert("email".into(), MSG_INVALID_EMAIL.into());
        show_errors(&form, &errors).unwrap();

        let slot = form
            .query_selector("[data-error-for=\"email\"]")
            .unwrap()
            .unwrap();
        assert_eq!(slot.text_content().as_deref(), Some(MSG_INVALID_EMAIL));

        clear_errors(&form).unwrap();
        assert_eq!(slot.text_content().as_deref(), Some(""));
    }

    #[wasm_bindgen_test]
    fn unplaced_errors_show_at_form_level() {
        let document = crate::dom_utils::document().unwrap();
        let form = student_form(&document);
        let mut errors = FieldErrors::new();
        errors.insert(FORM_ERROR_SLOT.into(), MSG_CHECK_VALUES.into());
        show_errors(&form, &errors).unwrap();

        let slot = form
            .query_selector(&format!("[data-error-for=\"{}\"]", FORM_ERROR_SLOT))
            .unwrap()
            .unwrap();
        assert_eq!(slot.text_content().as_deref(), Some(MSG_CHECK_VALUES));
    }

    #[wasm_bindgen_test]
    fn select_keeps_choice_across_refresh() {
        let document = crate::dom_utils::document().unwrap();
        let form = build_form(
            &document,
            FormConfig {
                id: None,
                kind: FormKind::Enroll,
                values: FormKind::Enroll.initial_values(),
                submit_label: "Enroll",
                class_name: CSS_STACKED_FORM,
                testid: "enroll-form",
            },
        )
        .unwrap();
        let options = vec![SelectOption::new(1, "Ana"), SelectOption::new(2, "Ben")];
        set_select_options(&document, &form, "student_id", &options).unwrap();

        let select: HtmlSelectElement = form
            .query_selector("select[name=\"student_id\"]")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        assert_eq!(select.value(), "");
        select.set_value("2");

        set_select_options(&document, &form, "student_id", &options).unwrap();
        assert_eq!(select.value(), "2");

        // Once the student is gone the choice falls back to the placeholder
        set_select_options(&document, &form, "student_id", &options[..1]).unwrap();
        assert_eq!(select.value(), "");
    }
}
