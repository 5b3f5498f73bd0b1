//! Students page reducer.

use super::navigation::accept_response;
use crate::messages::{Command, Message};
use crate::state::AppState;

/// Handles student messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::StudentsLoaded { route, students } => {
            if accept_response(state, *route) {
                state.students = students.clone();
                if let Some(id) = state.editing_student {
                    if state.student(id).is_none() {
                        state.editing_student = None;
                    }
                }
            }
            true
        }
        Message::CreateStudent(payload) => {
            commands.push(Command::CreateStudentApi(payload.clone()));
            true
        }
        Message::EditStudent(student_id) => {
            state.editing_student = Some(*student_id);
            true
        }
        Message::CancelStudentEdit => {
            state.editing_student = None;
            true
        }
        Message::UpdateStudent {
            student_id,
            payload,
        } => {
            commands.push(Command::UpdateStudentApi {
                student_id: *student_id,
                payload: payload.clone(),
            });
            true
        }
        Message::DeleteStudent(student_id) => {
            commands.push(Command::DeleteStudentApi(*student_id));
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::messages::{Command, Message};
    use crate::models::{Student, StudentPayload};
    use crate::reducers::test_support::names;
    use crate::router::Route;
    use crate::state::AppState;
    use crate::update::update;

    fn on_students_page() -> AppState {
        let mut state = AppState::new();
        update(&mut state, Message::Navigate(Route::Students));
        state
    }

    fn student(id: u32) -> Student {
        Student {
            id,
            name: "Ines".into(),
            email: "ines@school.edu".into(),
            year: 4,
        }
    }

    #[test]
    fn loaded_students_replace_the_list() {
        let mut state = on_students_page();
        update(
            &mut state,
            Message::StudentsLoaded {
                route: Route::Students,
                students: vec![student(1), student(2)],
            },
        );
        assert_eq!(state.students.len(), 2);
        assert!(!state.is_loading());
    }

    #[test]
    fn stale_answers_are_ignored() {
        let mut state = on_students_page();
        update(&mut state, Message::Navigate(Route::Courses));
        update(
            &mut state,
            Message::StudentsLoaded {
                route: Route::Students,
                students: vec![student(1)],
            },
        );
        assert!(state.students.is_empty());
    }

    #[test]
    fn edit_closes_when_student_disappears() {
        let mut state = on_students_page();
        update(&mut state, Message::EditStudent(5));
        assert_eq!(state.editing_student, Some(5));
        update(
            &mut state,
            Message::StudentsLoaded {
                route: Route::Students,
                students: vec![student(1)],
            },
        );
        assert_eq!(state.editing_student, None);
    }

    #[test]
    fn writes_become_api_commands() {
        let mut state = on_students_page();
        let payload = StudentPayload {
            name: "Ines".into(),
            email: "ines@school.edu".into(),
            year: 2,
        };
        let cmds = update(&mut state, Message::CreateStudent(payload.clone()));
        assert_eq!(names(&cmds), vec!["CreateStudentApi"]);

        let cmds = update(
            &mut state,
            Message::UpdateStudent {
                student_id: 1,
                payload,
            },
        );
        assert!(matches!(
            cmds.as_slice(),
            [Command::UpdateStudentApi { student_id: 1, .. }]
        ));

        let cmds = update(&mut state, Message::DeleteStudent(1));
        assert!(matches!(cmds.as_slice(), [Command::DeleteStudentApi(1)]));
    }

    #[test]
    fn cancel_edit_issues_no_request() {
        let mut state = on_students_page();
        update(&mut state, Message::EditStudent(1));
        let cmds = update(&mut state, Message::CancelStudentEdit);
        assert!(cmds.is_empty());
        assert_eq!(state.editing_student, None);
    }
}
