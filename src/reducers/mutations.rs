//! Outcome of every write. Success toasts and reloads the page; failure
//! alerts and leaves the page as it was.

use super::navigation::load_commands;
use crate::constants::*;
use crate::error_log;
use crate::messages::{Command, Message, Mutation};
use crate::router::Route;
use crate::state::AppState;

/// Handles mutation outcomes. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::MutationSucceeded(mutation) => {
            commands.push(Command::Toast(success_toast(*mutation)));
            match mutation {
                Mutation::CreateStudent => {
                    commands.push(Command::ResetForm(ID_STUDENT_CREATE_FORM))
                }
                Mutation::CreateCourse => commands.push(Command::ResetForm(ID_COURSE_CREATE_FORM)),
                Mutation::Enroll => commands.push(Command::ResetForm(ID_ENROLL_FORM)),
                Mutation::UpdateStudent => state.editing_student = None,
                Mutation::UpdateCourse => state.editing_course = None,
                Mutation::UpdateGrade => state.editing_enrollment = None,
                Mutation::DeleteCurrentCourse => {
                    // The hash change drives the navigation and its reads.
                    commands.push(Command::SetLocationHash(Route::Courses.to_hash()));
                    return true;
                }
                Mutation::DeleteStudent | Mutation::DeleteCourse | Mutation::RemoveEnrollment => {}
            }
            commands.extend(load_commands(state));
            true
        }
        Message::MutationFailed { mutation, error } => {
            error_log!("{:?} failed: {}", mutation, error);
            commands.push(Command::Alert(failure_alert(*mutation)));
            true
        }
        _ => false,
    }
}

pub fn success_toast(mutation: Mutation) -> &'static str {
    match mutation {
        Mutation::CreateStudent => TOAST_STUDENT_CREATED,
        Mutation::UpdateStudent => TOAST_STUDENT_UPDATED,
        Mutation::DeleteStudent => TOAST_STUDENT_DELETED,
        Mutation::CreateCourse => TOAST_COURSE_CREATED,
        Mutation::UpdateCourse => TOAST_COURSE_UPDATED,
        Mutation::DeleteCourse | Mutation::DeleteCurrentCourse => TOAST_COURSE_DELETED,
        Mutation::Enroll => TOAST_STUDENT_ENROLLED,
        Mutation::UpdateGrade => TOAST_GRADE_UPDATED,
        Mutation::RemoveEnrollment => TOAST_ENROLLMENT_REMOVED,
    }
}

pub fn failure_alert(mutation: Mutation) -> &'static str {
    match mutation {
        Mutation::CreateStudent | Mutation::CreateCourse => ALERT_CREATE_FAILED,
        Mutation::UpdateStudent | Mutation::UpdateCourse | Mutation::UpdateGrade => {
            ALERT_UPDATE_FAILED
        }
        Mutation::DeleteStudent
        | Mutation::DeleteCourse
        | Mutation::DeleteCurrentCourse
        | Mutation::RemoveEnrollment => ALERT_DELETE_FAILED,
        Mutation::Enroll => ALERT_ENROLL_FAILED,
    }
}
