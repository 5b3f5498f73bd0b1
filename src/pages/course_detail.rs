// src/pages/course_detail.rs
//
// One course: header with its attributes, the enrolled students with inline
// grade edit, the enroll form and the delete button.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::{append_edit_row, render_list_placeholder, take_edit_row, text_span};
use crate::components::form::{
    build_form, on_valid_submit, set_select_options, FormConfig, SelectOption,
};
use crate::constants::*;
use crate::dom_utils::{self, require_element};
use crate::forms::{FormKind, FormValues};
use crate::messages::Message;
use crate::models::{Course, EnrollFormData, EnrolledStudent, GradeUpdate, Student};
use crate::router::Route;
use crate::state::{dispatch_global_message, AppState};
use crate::ui_components::{
    create_actions_row, create_button, create_heading, create_list, create_row_button, on_click,
    ButtonConfig,
};
use crate::utils::{format_enrolled_at, format_grade, format_number_input};

const ID_ENROLLMENTS_SECTION: &str = "enrollments-section";

pub fn mount(document: &Document, root: &Element, course_id: u32) -> Result<(), JsValue> {
    let back = document.create_element("a")?;
    back.set_attribute("href", &Route::Courses.to_hash())?;
    back.set_text_content(Some("← All courses"));
    root.append_child(&back)?;

    let header = document.create_element("header")?;
    header.set_id(ID_COURSE_DETAIL_HEADER);
    header.set_attribute(ATTR_DATA_TESTID, "course-detail-header")?;
    root.append_child(&header)?;

    let enrollments = document.create_element("section")?;
    enrollments.set_id(ID_ENROLLMENTS_SECTION);
    let heading = create_heading(document, 3, "Enrolled students")?;
    enrollments.append_child(&heading)?;
    let list = create_list(document, ID_ENROLLMENT_LIST, "enrollment-list")?;
    enrollments.append_child(&list)?;
    root.append_child(&enrollments)?;

    let enroll = document.create_element("section")?;
    enroll.set_id(ID_ENROLL_SECTION);
    let heading = create_heading(document, 3, "Enroll a student")?;
    enroll.append_child(&heading)?;
    let form = build_form(
        document,
        FormConfig {
            id: Some(ID_ENROLL_FORM),
            kind: FormKind::Enroll,
            values: FormKind::Enroll.initial_values(),
            submit_label: "Enroll",
            class_name: CSS_STACKED_FORM,
            testid: "enroll-form",
        },
    )?;
    on_valid_submit(&form, FormKind::Enroll, move |data: EnrollFormData| {
        Message::EnrollStudent(data.into_payload(course_id))
    })?;
    enroll.append_child(&form)?;
    root.append_child(&enroll)?;

    let delete = create_button(
        document,
        ButtonConfig::new("Delete course")
            .with_id(ID_DELETE_COURSE_BUTTON)
            .with_class(CSS_BTN_DANGER)
            .with_testid("delete-course"),
    )?;
    on_click(&delete, move |_| {
        if dom_utils::confirm(CONFIRM_DELETE_COURSE) {
            dispatch_global_message(Message::DeleteCurrentCourse(course_id));
        }
    })?;
    root.append_child(&delete)?;

    Ok(())
}

pub fn render(state: &AppState, document: &Document) -> Result<(), JsValue> {
    let header = require_element(document, ID_COURSE_DETAIL_HEADER)?;
    dom_utils::clear_children(&header);

    let sections = [
        require_element(document, ID_ENROLLMENTS_SECTION)?,
        require_element(document, ID_ENROLL_SECTION)?,
        require_element(document, ID_DELETE_COURSE_BUTTON)?,
    ];

    let Some(detail) = state.course_detail.as_ref() else {
        let text = if state.course_missing {
            TEXT_COURSE_NOT_FOUND
        } else {
            TEXT_LOADING
        };
        let heading = create_heading(document, 2, text)?;
        header.append_child(&heading)?;
        for section in &sections {
            dom_utils::hide(section);
        }
        return Ok(());
    };
    for section in &sections {
        dom_utils::show(section);
    }

    render_header(document, &header, &detail.course)?;

    let list = require_element(document, ID_ENROLLMENT_LIST)?;
    let mut open_edit = take_edit_row(&list, state.editing_enrollment)?;
    dom_utils::clear_children(&list);
    if !render_list_placeholder(
        document,
        &list,
        false,
        detail.students.is_empty(),
        "No students enrolled",
    )? {
        for enrolled in &detail.students {
            if state.editing_enrollment == Some(enrolled.enrollment_id) {
                append_edit_row(&list, &mut open_edit, || grade_edit_row(document, enrolled))?;
            } else {
                let row = display_row(document, enrolled)?;
                list.append_child(&row)?;
            }
        }
    }

    let form = require_element(document, ID_ENROLL_FORM)?;
    let options = student_options(&state.enrollable_students());
    set_select_options(document, &form, "student_id", &options)?;
    Ok(())
}

fn student_options(students: &[&Student]) -> Vec<SelectOption> {
    students
        .iter()
        .map(|s| SelectOption::new(s.id, &format!("{} ({})", s.name, s.email)))
        .collect()
}

fn header_facts(course: &Course) -> Vec<(&'static str, String)> {
    vec![
        ("Level", course.level.clone()),
        ("Duration", format!("{} hours", course.duration)),
        (
            "Instructor",
            course.instructor_name().unwrap_or("None").to_string(),
        ),
    ]
}

fn render_header(document: &Document, header: &Element, course: &Course) -> Result<(), JsValue> {
    let heading = create_heading(document, 2, &course.title)?;
    header.append_child(&heading)?;
    let facts = document.create_element("dl")?;
    for (label, value) in header_facts(course) {
        let dt = document.create_element("dt")?;
        dt.set_text_content(Some(label));
        let dd = document.create_element("dd")?;
        dd.set_text_content(Some(&value));
        facts.append_child(&dt)?;
        facts.append_child(&dd)?;
    }
    header.append_child(&facts)?;
    Ok(())
}

fn enrollment_summary(enrolled: &EnrolledStudent) -> String {
    let mut text = format!(
        "{} ({}) – Grade: {}",
        enrolled.name,
        enrolled.email,
        format_grade(enrolled.grade)
    );
    if let Some(date) = format_enrolled_at(enrolled.enrolled_at.as_ref()) {
        text.push_str(&format!(" – Enrolled {}", date));
    }
    text
}

fn display_row(document: &Document, enrolled: &EnrolledStudent) -> Result<Element, JsValue> {
    let li = document.create_element("li")?;
    li.set_attribute(
        ATTR_DATA_TESTID,
        &format!("enrollment-{}", enrolled.enrollment_id),
    )?;
    let label = text_span(document, &enrollment_summary(enrolled))?;
    li.append_child(&label)?;

    let actions = create_actions_row(document)?;
    let enrollment_id = enrolled.enrollment_id;
    let edit = create_row_button(
        document,
        "Edit grade",
        CSS_BTN_SMALL,
        move |_| dispatch_global_message(Message::EditGrade(enrollment_id)),
    )?;
    actions.append_child(&edit)?;
    let remove = create_row_button(
        document,
        "Remove",
        CSS_BTN_DANGER_SMALL,
        move |_| {
            if dom_utils::confirm(CONFIRM_REMOVE_ENROLLMENT) {
                dispatch_global_message(Message::RemoveEnrollment(enrollment_id));
            }
        },
    )?;
    actions.append_child(&remove)?;
    li.append_child(&actions)?;
    Ok(li)
}

/// Grade edit starts at the current grade, or 0 when there is none.
fn grade_values(enrolled: &EnrolledStudent) -> FormValues {
    let mut values = FormValues::new();
    values.insert(
        "grade".into(),
        format_number_input(enrolled.grade.unwrap_or(0.0)),
    );
    values
}

fn grade_edit_row(document: &Document, enrolled: &EnrolledStudent) -> Result<Element, JsValue> {
    let li = document.create_element("li")?;
    li.set_attribute(
        ATTR_DATA_TESTID,
        &format!("enrollment-{}", enrolled.enrollment_id),
    )?;
    li.set_attribute(ATTR_DATA_EDITING, &enrolled.enrollment_id.to_string())?;
    let label = text_span(document, &enrolled.name)?;
    li.append_child(&label)?;

    let form = build_form(
        document,
        FormConfig {
            id: None,
            kind: FormKind::Grade,
            values: grade_values(enrolled),
            submit_label: "Save",
            class_name: CSS_INLINE_FORM,
            testid: "grade-edit-form",
        },
    )?;
    let enrollment_id = enrolled.enrollment_id;
    on_valid_submit(&form, FormKind::Grade, move |payload: GradeUpdate| {
        Message::UpdateGrade {
            enrollment_id,
            payload,
        }
    })?;
    let cancel = create_row_button(
        document,
        "Cancel",
        CSS_BTN_SECONDARY_SMALL,
        |_| dispatch_global_message(Message::CancelGradeEdit),
    )?;
    form.append_child(&cancel)?;

    li.append_child(&form)?;
    Ok(li)
}
