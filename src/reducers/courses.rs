//! Courses page reducer: list, filter, create / edit / delete.

use super::navigation::accept_response;
use crate::messages::{Command, Message, Mutation};
use crate::state::AppState;

/// Handles course list messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::CoursesLoaded {
            route,
            filter,
            courses,
        } => {
            if accept_response(state, *route) && *filter == state.course_filter {
                state.courses = courses.clone();
                if let Some(id) = state.editing_course {
                    if state.course(id).is_none() {
                        state.editing_course = None;
                    }
                }
            }
            true
        }
        Message::InstructorsLoaded { route, instructors } => {
            if accept_response(state, *route) {
                state.instructors = instructors.clone();
            }
            true
        }
        Message::SetCourseFilter(filter) => {
            if state.course_filter != *filter {
                state.course_filter = filter.clone();
                state.pending_loads += 1;
                commands.push(Command::FetchCourses {
                    route: state.route,
                    filter: filter.clone(),
                });
            }
            true
        }
        Message::CreateCourse(payload) => {
            commands.push(Command::CreateCourseApi(payload.clone()));
            true
        }
        Message::EditCourse(course_id) => {
            state.editing_course = Some(*course_id);
            true
        }
        Message::CancelCourseEdit => {
            state.editing_course = None;
            true
        }
        Message::UpdateCourse { course_id, payload } => {
            commands.push(Command::UpdateCourseApi {
                course_id: *course_id,
                payload: payload.clone(),
            });
            true
        }
        Message::DeleteCourse(course_id) => {
            commands.push(Command::DeleteCourseApi {
                course_id: *course_id,
                mutation: Mutation::DeleteCourse,
            });
            true
        }
        _ => false,
    }
}
