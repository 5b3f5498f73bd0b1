// src/pages/courses.rs
//
// Course list with level / instructor filter, create form and inline edit.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlSelectElement};

use super::{append_edit_row, render_list_placeholder, take_edit_row, text_span};
use crate::components::form::{
    build_form, on_valid_submit, set_select_options, FormConfig, SelectOption,
};
use crate::constants::*;
use crate::dom_utils::{self, require_element};
use crate::forms::{FormKind, FormValues};
use crate::messages::Message;
use crate::models::{Course, CourseFilter, CoursePayload, Instructor, Level};
use crate::router::Route;
use crate::state::{dispatch_global_message, AppState};
use crate::ui_components::{
    create_actions_row, create_heading, create_list, create_row_button, on_event,
};
use crate::utils::truncate_label;

pub fn mount(document: &Document, root: &Element) -> Result<(), JsValue> {
    let heading = create_heading(document, 2, "Courses")?;
    root.append_child(&heading)?;
    let filter_bar = create_filter_bar(document)?;
    root.append_child(&filter_bar)?;

    let create_section = document.create_element("section")?;
    let heading = create_heading(document, 3, "Add course")?;
    create_section.append_child(&heading)?;
    let form = build_form(
        document,
        FormConfig {
            id: Some(ID_COURSE_CREATE_FORM),
            kind: FormKind::Course,
            values: FormKind::Course.initial_values(),
            submit_label: "Create",
            class_name: CSS_STACKED_FORM,
            testid: "course-create-form",
        },
    )?;
    on_valid_submit(&form, FormKind::Course, Message::CreateCourse)?;
    create_section.append_child(&form)?;
    root.append_child(&create_section)?;

    let list = create_list(document, ID_COURSES_LIST, "courses-list")?;
    root.append_child(&list)?;
    Ok(())
}

pub fn render(state: &AppState, document: &Document) -> Result<(), JsValue> {
    let options = instructor_options(&state.instructors);

    render_filter_bar(document, &state.course_filter, &options)?;
    let create_form = require_element(document, ID_COURSE_CREATE_FORM)?;
    set_select_options(document, &create_form, "instructor_id", &options)?;

    let list = require_element(document, ID_COURSES_LIST)?;
    let mut open_edit = take_edit_row(&list, state.editing_course)?;
    if let Some(row) = &open_edit {
        set_select_options(document, row, "instructor_id", &options)?;
    }
    dom_utils::clear_children(&list);

    let empty_text = if state.course_filter.is_empty() {
        "No courses yet"
    } else {
        "No courses match the filter"
    };
    if render_list_placeholder(
        document,
        &list,
        state.is_loading(),
        state.courses.is_empty(),
        empty_text,
    )? {
        return Ok(());
    }

    for course in &state.courses {
        if state.editing_course == Some(course.id) {
            append_edit_row(&list, &mut open_edit, || edit_row(document, course, &options))?;
        } else {
            let row = display_row(document, course)?;
            list.append_child(&row)?;
        }
    }
    Ok(())
}

fn instructor_options(instructors: &[Instructor]) -> Vec<SelectOption> {
    instructors
        .iter()
        .map(|i| SelectOption::new(i.id, &i.name))
        .collect()
}

// ---------------------------------------------------------------------------
// Filter bar
// ---------------------------------------------------------------------------

/// Build the filter from the two selector values; blanks mean "all".
fn filter_from_values(level: &str, instructor_id: &str) -> CourseFilter {
    CourseFilter {
        level: Level::parse(level),
        instructor_id: instructor_id.parse().ok(),
    }
}

fn select_value(document: &Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
        .map(|s| s.value())
        .unwrap_or_default()
}

fn append_option(document: &Document, select: &Element, value: &str, label: &str) -> Result<(), JsValue> {
    let option = document.create_element("option")?;
    option.set_attribute("value", value)?;
    option.set_text_content(Some(label));
    select.append_child(&option)?;
    Ok(())
}

fn create_filter_bar(document: &Document) -> Result<Element, JsValue> {
    let bar = document.create_element("div")?;
    bar.set_class_name(CSS_FILTER_BAR);
    bar.set_attribute(ATTR_DATA_TESTID, "course-filter")?;

    let level = document.create_element("select")?;
    level.set_id(ID_COURSE_FILTER_LEVEL);
    level.set_attribute("aria-label", "Filter by level")?;
    append_option(document, &level, "", TEXT_ALL_LEVELS)?;
    for l in Level::ALL {
        append_option(document, &level, l.as_str(), l.as_str())?;
    }

    let instructor = document.create_element("select")?;
    instructor.set_id(ID_COURSE_FILTER_INSTRUCTOR);
    instructor.set_attribute("aria-label", "Filter by instructor")?;
    append_option(document, &instructor, "", TEXT_ALL_INSTRUCTORS)?;

    for select in [&level, &instructor] {
        on_event(select, "change", |_| {
            let Ok(document) = dom_utils::document() else {
                return;
            };
            let filter = filter_from_values(
                &select_value(&document, ID_COURSE_FILTER_LEVEL),
                &select_value(&document, ID_COURSE_FILTER_INSTRUCTOR),
            );
            dispatch_global_message(Message::SetCourseFilter(filter));
        })?;
        bar.append_child(select)?;
    }
    Ok(bar)
}

fn render_filter_bar(
    document: &Document,
    filter: &CourseFilter,
    options: &[SelectOption],
) -> Result<(), JsValue> {
    let instructor = require_element(document, ID_COURSE_FILTER_INSTRUCTOR)?;
    instructor.set_inner_html("");
    append_option(document, &instructor, "", TEXT_ALL_INSTRUCTORS)?;
    for opt in options {
        append_option(document, &instructor, &opt.value, &opt.label)?;
    }
    if let Some(select) = instructor.dyn_ref::<HtmlSelectElement>() {
        let wanted = filter.instructor_id.map(|id| id.to_string()).unwrap_or_default();
        select.set_value(&wanted);
    }

    if let Some(select) = document
        .get_element_by_id(ID_COURSE_FILTER_LEVEL)
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
    {
        select.set_value(filter.level.map(|l| l.as_str()).unwrap_or(""));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

fn summary(course: &Course) -> String {
    let instructor = course.instructor_name().unwrap_or("No instructor");
    format!(
        "{} · {}h · {}",
        course.level,
        course.duration,
        truncate_label(instructor, MAX_OPTION_LABEL)
    )
}

fn edit_values(course: &Course) -> FormValues {
    let mut values = FormValues::new();
    values.insert("title".into(), course.title.clone());
    values.insert("duration".into(), course.duration.to_string());
    values.insert("level".into(), course.level.clone());
    values.insert(
        "instructor_id".into(),
        course
            .instructor_id
            .map(|id| id.to_string())
            .unwrap_or_default(),
    );
    values
}

fn display_row(document: &Document, course: &Course) -> Result<Element, JsValue> {
    let li = document.create_element("li")?;
    li.set_attribute(ATTR_DATA_TESTID, &format!("course-{}", course.id))?;

    let link = document.create_element("a")?;
    link.set_attribute("href", &Route::CourseDetail(course.id).to_hash())?;
    link.set_text_content(Some(&course.title));
    li.append_child(&link)?;

    let meta = text_span(document, &summary(course))?;
    meta.set_class_name(CSS_MUTED);
    li.append_child(&meta)?;

    let actions = create_actions_row(document)?;
    let course_id = course.id;
    let edit = create_row_button(document, "Edit", CSS_BTN_SMALL, move |_| {
        dispatch_global_message(Message::EditCourse(course_id));
    })?;
    actions.append_child(&edit)?;
    let delete = create_row_button(
        document,
        "Delete",
        CSS_BTN_DANGER_SMALL,
        move |_| {
            if dom_utils::confirm(CONFIRM_DELETE_COURSE) {
                dispatch_global_message(Message::DeleteCourse(course_id));
            }
        },
    )?;
    actions.append_child(&delete)?;
    li.append_child(&actions)?;
    Ok(li)
}

fn edit_row(
    document: &Document,
    course: &Course,
    options: &[SelectOption],
) -> Result<Element, JsValue> {
    let li = document.create_element("li")?;
    li.set_attribute(ATTR_DATA_TESTID, &format!("course-{}", course.id))?;
    li.set_attribute(ATTR_DATA_EDITING, &course.id.to_string())?;

    let form = build_form(
        document,
        FormConfig {
            id: None,
            kind: FormKind::Course,
            values: edit_values(course),
            submit_label: "Save",
            class_name: CSS_INLINE_FORM,
            testid: "course-edit-form",
        },
    )?;
    set_select_options(document, &form, "instructor_id", options)?;

    let course_id = course.id;
    on_valid_submit(&form, FormKind::Course, move |payload: CoursePayload| {
        Message::UpdateCourse { course_id, payload }
    })?;
    let cancel = create_row_button(
        document,
        "Cancel",
        CSS_BTN_SECONDARY_SMALL,
        |_| dispatch_global_message(Message::CancelCourseEdit),
    )?;
    form.append_child(&cancel)?;

    li.append_child(&form)?;
    Ok(li)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::parse_form;

    fn course() -> Course {
        Course {
            id: 2,
            title: "Art History".into(),
            duration: 12,
            level: "advanced".into(),
            instructor_id: Some(5),
            instructor: Some(Instructor {
                id: 5,
                name: "Mara".into(),
                specialty: None,
            }),
        }
    }

    #[test]
    fn blank_selectors_mean_no_filter() {
        assert!(filter_from_values("", "").is_empty());
        let filter = filter_from_values("intermediate", "7");
        assert_eq!(filter.level, Some(Level::Intermediate));
        assert_eq!(filter.instructor_id, Some(7));
    }

    #[test]
    fn summary_names_the_instructor() {
        assert_eq!(summary(&course()), "advanced · 12h · Mara");
        let mut c = course();
        c.instructor = None;
        assert_eq!(summary(&c), "advanced · 12h · No instructor");
    }

    #[test]
    fn edit_form_round_trips_current_course() {
        let payload: CoursePayload = parse_form(FormKind::Course, &edit_values(&course())).unwrap();
        assert_eq!(payload.level, Level::Advanced);
        assert_eq!(payload.instructor_id, 5);
        assert_eq!(payload.duration, 12);
    }

    #[test]
    fn course_without_instructor_must_pick_one() {
        let mut c = course();
        c.instructor_id = None;
        let errors = parse_form::<CoursePayload>(FormKind::Course, &edit_values(&c)).unwrap_err();
        assert_eq!(errors["instructor_id"], MSG_REQUIRED);
    }
}
