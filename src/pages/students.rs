// src/pages/students.rs
//
// Students list: create form on top, one row per student with inline edit.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{append_edit_row, render_list_placeholder, take_edit_row, text_span};
use crate::components::form::{build_form, on_valid_submit, FormConfig};
use crate::constants::*;
use crate::dom_utils::{self, require_element};
use crate::forms::{FormKind, FormValues};
use crate::messages::Message;
use crate::models::{Student, StudentPayload};
use crate::state::{dispatch_global_message, AppState};
use crate::ui_components::{create_actions_row, create_heading, create_list, create_row_button};

pub fn mount(document: &Document, root: &Element) -> Result<(), JsValue> {
    let heading = create_heading(document, 2, "Students")?;
    root.append_child(&heading)?;

    let create_section = document.create_element("section")?;
    let heading = create_heading(document, 3, "Add student")?;
    create_section.append_child(&heading)?;
    let form = build_form(
        document,
        FormConfig {
            id: Some(ID_STUDENT_CREATE_FORM),
            kind: FormKind::Student,
            values: FormKind::Student.initial_values(),
            submit_label: "Create",
            class_name: CSS_STACKED_FORM,
            testid: "student-create-form",
        },
    )?;
    on_valid_submit(&form, FormKind::Student, Message::CreateStudent)?;
    create_section.append_child(&form)?;
    root.append_child(&create_section)?;

    let list = create_list(document, ID_STUDENTS_LIST, "students-list")?;
    root.append_child(&list)?;
    Ok(())
}

pub fn render(state: &AppState, document: &Document) -> Result<(), JsValue> {
    let list = require_element(document, ID_STUDENTS_LIST)?;
    let mut open_edit = take_edit_row(&list, state.editing_student)?;
    dom_utils::clear_children(&list);

    if render_list_placeholder(
        document,
        &list,
        state.is_loading(),
        state.students.is_empty(),
        "No students yet",
    )? {
        return Ok(());
    }

    for student in &state.students {
        if state.editing_student == Some(student.id) {
            append_edit_row(&list, &mut open_edit, || edit_row(document, student))?;
        } else {
            let row = display_row(document, student)?;
            list.append_child(&row)?;
        }
    }
    Ok(())
}

fn edit_values(student: &Student) -> FormValues {
    let mut values = FormValues::new();
    values.insert("name".into(), student.name.clone());
    values.insert("email".into(), student.email.clone());
    values.insert("year".into(), student.year.to_string());
    values
}

fn display_row(document: &Document, student: &Student) -> Result<Element, JsValue> {
    let li = document.create_element("li")?;
    li.set_attribute(ATTR_DATA_TESTID, &format!("student-{}", student.id))?;
    let label = text_span(
        document,
        &format!("{} ({}) – Year {}", student.name, student.email, student.year),
    )?;
    li.append_child(&label)?;

    let actions = create_actions_row(document)?;
    let student_id = student.id;
    let edit = create_row_button(document, "Edit", CSS_BTN_SMALL, move |_| {
        dispatch_global_message(Message::EditStudent(student_id));
    })?;
    actions.append_child(&edit)?;
    let delete = create_row_button(
        document,
        "Delete",
        CSS_BTN_DANGER_SMALL,
        move |_| {
            if dom_utils::confirm(CONFIRM_DELETE_STUDENT) {
                dispatch_global_message(Message::DeleteStudent(student_id));
            }
        },
    )?;
    actions.append_child(&delete)?;
    li.append_child(&actions)?;
    Ok(li)
}

fn edit_row(document: &Document, student: &Student) -> Result<Element, JsValue> {
    let li = document.create_element("li")?;
    li.set_attribute(ATTR_DATA_TESTID, &format!("student-{}", student.id))?;
    li.set_attribute(ATTR_DATA_EDITING, &student.id.to_string())?;

    let form = build_form(
        document,
        FormConfig {
            id: None,
            kind: FormKind::Student,
            values: edit_values(student),
            submit_label: "Save",
            class_name: CSS_INLINE_FORM,
            testid: "student-edit-form",
        },
    )?;
    let student_id = student.id;
    on_valid_submit(&form, FormKind::Student, move |payload: StudentPayload| {
        Message::UpdateStudent {
            student_id,
            payload,
        }
    })?;
    let cancel = create_row_button(
        document,
        "Cancel",
        CSS_BTN_SECONDARY_SMALL,
        |_| dispatch_global_message(Message::CancelStudentEdit),
    )?;
    form.append_child(&cancel)?;

    li.append_child(&form)?;
    Ok(li)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlInputElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn name_input(root: &Element) -> Option<HtmlInputElement> {
        root.query_selector("[data-editing=\"4\"] input[name=\"name\"]")
            .unwrap()
            .map(|el| el.dyn_into().unwrap())
    }

    #[wasm_bindgen_test]
    fn open_edit_keeps_typed_values_across_renders() {
        let document = dom_utils::document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        mount(&document, &root).unwrap();

        let mut state = AppState::new();
        state.students = vec![Student {
            id: 4,
            name: "Lena".into(),
            email: "lena@school.edu".into(),
            year: 3,
        }];
        state.editing_student = Some(4);
        render(&state, &document).unwrap();

        let input = name_input(&root).unwrap();
        assert_eq!(input.value(), "Lena");
        input.set_value("Lena Park");

        // A submit, a failed save or a toast all re-render the page
        render(&state, &document).unwrap();
        assert_eq!(name_input(&root).unwrap().value(), "Lena Park");

        state.editing_student = None;
        render(&state, &document).unwrap();
        assert!(name_input(&root).is_none());

        root.remove();
    }
}
