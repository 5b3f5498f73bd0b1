use std::future::Future;

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;

use crate::debug_log;
use crate::error_log;
use crate::messages::{Command, Message, Mutation};
use crate::models::{Course, CourseDetail, Enrollment, Instructor, Student};
use crate::network::{ApiClient, ApiError};
use crate::router::Route;
use crate::state::dispatch_global_message;

/// Run one side effect requested by a reducer.
pub fn execute(cmd: Command) {
    debug_log!("Executing {}", cmd.name());
    match cmd {
        Command::FetchStudents { .. }
        | Command::FetchCourses { .. }
        | Command::FetchInstructors { .. }
        | Command::FetchCourseDetail { .. } => execute_fetch_command(cmd),

        Command::Alert(_)
        | Command::Toast(_)
        | Command::ResetForm(_)
        | Command::SetLocationHash(_) => execute_browser_command(cmd),

        _ => execute_mutation_command(cmd),
    }
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(ApiError::from)
}

/// Spawn a read and dispatch `on_loaded` with the decoded body, or
/// `LoadFailed` for `route` if anything goes wrong.
fn spawn_read<T, F, M>(what: &'static str, route: Route, request: F, on_loaded: M)
where
    T: DeserializeOwned,
    F: Future<Output = Result<String, JsValue>> + 'static,
    M: FnOnce(T) -> Message + 'static,
{
    spawn_local(async move {
        let result = match request.await {
            Ok(body) => decode::<T>(&body),
            Err(e) => Err(ApiError::from_js(&e)),
        };
        match result {
            Ok(data) => dispatch_global_message(on_loaded(data)),
            Err(error) => {
                error_log!("Failed to load {}: {}", what, error);
                dispatch_global_message(Message::LoadFailed {
                    route,
                    error: error.to_string(),
                });
            }
        }
    });
}

pub fn execute_fetch_command(cmd: Command) {
    match cmd {
        Command::FetchStudents { route } => {
            spawn_read("students", route, ApiClient::get_students(), move |students: Vec<Student>| {
                debug_log!("Fetched {} students", students.len());
                Message::StudentsLoaded { route, students }
            });
        }
        Command::FetchCourses { route, filter } => {
            let requested = filter.clone();
            spawn_read(
                "courses",
                route,
                async move { ApiClient::get_courses(&filter).await },
                move |courses: Vec<Course>| Message::CoursesLoaded {
                    route,
                    filter: requested,
                    courses,
                },
            );
        }
        Command::FetchInstructors { route } => {
            spawn_read(
                "instructors",
                route,
                ApiClient::get_instructors(),
                move |instructors: Vec<Instructor>| Message::InstructorsLoaded { route, instructors },
            );
        }
        Command::FetchCourseDetail { route, course_id } => {
            // A 404 gets its own placeholder instead of the load alert.
            spawn_local(async move {
                let result = match ApiClient::get_course(course_id).await {
                    Ok(body) => decode::<CourseDetail>(&body),
                    Err(e) => Err(ApiError::from_js(&e)),
                };
                let msg = match result {
                    Ok(detail) => Message::CourseDetailLoaded {
                        route,
                        detail: Box::new(detail),
                    },
                    Err(error) if error.is_not_found() => Message::CourseDetailMissing { route },
                    Err(error) => {
                        error_log!("Failed to load course {}: {}", course_id, error);
                        Message::LoadFailed {
                            route,
                            error: error.to_string(),
                        }
                    }
                };
                dispatch_global_message(msg);
            });
        }
        _ => web_sys::console::warn_1(&format!("Unexpected fetch command: {}", cmd.name()).into()),
    }
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// Create and update answer with the stored entity. It must decode, but the
/// page reloads anyway so the value itself is dropped.
async fn expect_entity<T, F>(request: F) -> Result<(), JsValue>
where
    T: DeserializeOwned,
    F: Future<Output = Result<String, JsValue>>,
{
    let body = request.await?;
    decode::<T>(&body)?;
    Ok(())
}

/// Spawn a write and report its outcome as `MutationSucceeded` or
/// `MutationFailed`.
fn spawn_mutation<F>(mutation: Mutation, request: F)
where
    F: Future<Output = Result<(), JsValue>> + 'static,
{
    spawn_local(async move {
        let msg = match request.await {
            Ok(()) => Message::MutationSucceeded(mutation),
            Err(e) => Message::MutationFailed {
                mutation,
                error: ApiError::from_js(&e).to_string(),
            },
        };
        dispatch_global_message(msg);
    });
}

pub fn execute_mutation_command(cmd: Command) {
    match cmd {
        Command::CreateStudentApi(payload) => spawn_mutation(Mutation::CreateStudent, async move {
            expect_entity::<Student, _>(ApiClient::create_student(&payload)).await
        }),
        Command::UpdateStudentApi {
            student_id,
            payload,
        } => spawn_mutation(Mutation::UpdateStudent, async move {
            expect_entity::<Student, _>(ApiClient::update_student(student_id, &payload)).await
        }),
        Command::DeleteStudentApi(student_id) => {
            spawn_mutation(Mutation::DeleteStudent, ApiClient::delete_student(student_id))
        }
        Command::CreateCourseApi(payload) => spawn_mutation(Mutation::CreateCourse, async move {
            expect_entity::<Course, _>(ApiClient::create_course(&payload)).await
        }),
        Command::UpdateCourseApi { course_id, payload } => {
            spawn_mutation(Mutation::UpdateCourse, async move {
                expect_entity::<Course, _>(ApiClient::update_course(course_id, &payload)).await
            })
        }
        Command::DeleteCourseApi {
            course_id,
            mutation,
        } => spawn_mutation(mutation, ApiClient::delete_course(course_id)),
        Command::CreateEnrollmentApi(payload) => spawn_mutation(Mutation::Enroll, async move {
            expect_entity::<Enrollment, _>(ApiClient::create_enrollment(&payload)).await
        }),
        Command::UpdateEnrollmentApi {
            enrollment_id,
            payload,
        } => spawn_mutation(Mutation::UpdateGrade, async move {
            expect_entity::<Enrollment, _>(ApiClient::update_enrollment(enrollment_id, &payload))
                .await
        }),
        Command::DeleteEnrollmentApi(enrollment_id) => spawn_mutation(
            Mutation::RemoveEnrollment,
            ApiClient::delete_enrollment(enrollment_id),
        ),
        _ => web_sys::console::warn_1(
            &format!("Unexpected mutation command: {}", cmd.name()).into(),
        ),
    }
}

// ---------------------------------------------------------------------------
// Browser effects
// ---------------------------------------------------------------------------

pub fn execute_browser_command(cmd: Command) {
    let result = match cmd {
        Command::Alert(text) => crate::dom_utils::alert(text),
        Command::Toast(text) => {
            crate::toast::success(text);
            Ok(())
        }
        Command::ResetForm(form_id) => reset_form(form_id),
        Command::SetLocationHash(hash) => web_sys::window()
            .ok_or_else(|| JsValue::from_str("No window"))
            .and_then(|w| w.location().set_hash(&hash)),
        _ => Err(JsValue::from_str(&format!(
            "Unexpected browser command: {}",
            cmd.name()
        ))),
    };
    if let Err(e) = result {
        web_sys::console::warn_1(&format!("Browser command failed: {:?}", e).into());
    }
}

fn reset_form(form_id: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let Some(form) = document.get_element_by_id(form_id) else {
        // The page changed before the write finished.
        return Ok(());
    };
    form.dyn_ref::<web_sys::HtmlFormElement>()
        .ok_or_else(|| JsValue::from_str("ResetForm target is not a <form>"))?
        .reset();
    crate::components::form::clear_errors(&form)
}
