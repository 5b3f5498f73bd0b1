//! Course detail reducer: the course header, its enrollments and the
//! enroll form.

use super::navigation::accept_response;
use crate::messages::{Command, Message, Mutation};
use crate::state::AppState;

/// Handles course detail messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::CourseDetailLoaded { route, detail } => {
            if accept_response(state, *route) {
                if let Some(id) = state.editing_enrollment {
                    if detail.enrollment(id).is_none() {
                        state.editing_enrollment = None;
                    }
                }
                state.course_detail = Some((**detail).clone());
                state.course_missing = false;
            }
            true
        }
        Message::CourseDetailMissing { route } => {
            if accept_response(state, *route) {
                state.course_detail = None;
                state.course_missing = true;
                state.editing_enrollment = None;
            }
            true
        }
        Message::EnrollStudent(payload) => {
            commands.push(Command::CreateEnrollmentApi(payload.clone()));
            true
        }
        Message::EditGrade(enrollment_id) => {
            state.editing_enrollment = Some(*enrollment_id);
            true
        }
        Message::CancelGradeEdit => {
            state.editing_enrollment = None;
            true
        }
        Message::UpdateGrade {
            enrollment_id,
            payload,
        } => {
            commands.push(Command::UpdateEnrollmentApi {
                enrollment_id: *enrollment_id,
                payload: payload.clone(),
            });
            true
        }
        Message::RemoveEnrollment(enrollment_id) => {
            commands.push(Command::DeleteEnrollmentApi(*enrollment_id));
            true
        }
        Message::DeleteCurrentCourse(course_id) => {
            commands.push(Command::DeleteCourseApi {
                course_id: *course_id,
                mutation: Mutation::DeleteCurrentCourse,
            });
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::messages::{Command, Message, Mutation};
    use crate::models::{Course, CourseDetail, EnrolledStudent, EnrollmentCreate, Student};
    use crate::router::Route;
    use crate::state::AppState;
    use crate::update::update;

    const ROUTE: Route = Route::CourseDetail(7);

    fn detail(enrollment_ids: &[u32]) -> Box<CourseDetail> {
        Box::new(CourseDetail {
            course: Course {
                id: 7,
                title: "Physics".into(),
                duration: 40,
                level: "intermediate".into(),
                instructor_id: Some(2),
                instructor: None,
            },
            students: enrollment_ids
                .iter()
                .map(|&eid| EnrolledStudent {
                    id: eid + 100,
                    name: format!("Student {}", eid),
                    email: format!("s{}@school.edu", eid),
                    grade: Some(80.0),
                    enrolled_at: None,
                    enrollment_id: eid,
                })
                .collect(),
        })
    }

    fn on_detail_page() -> AppState {
        let mut state = AppState::new();
        update(&mut state, Message::Navigate(ROUTE));
        state
    }

    #[test]
    fn page_stays_loading_until_both_reads_land() {
        let mut state = on_detail_page();
        update(
            &mut state,
            Message::CourseDetailLoaded {
                route: ROUTE,
                detail: detail(&[1]),
            },
        );
        assert!(state.is_loading());
        update(
            &mut state,
            Message::StudentsLoaded {
                route: ROUTE,
                students: vec![Student {
                    id: 5,
                    name: "Omar".into(),
                    email: "omar@school.edu".into(),
                    year: 1,
                }],
            },
        );
        assert!(!state.is_loading());
        assert_eq!(state.enrollable_students().len(), 1);
    }

    #[test]
    fn missing_course_is_flagged() {
        let mut state = on_detail_page();
        update(&mut state, Message::CourseDetailMissing { route: ROUTE });
        assert!(state.course_missing);
        assert!(state.course_detail.is_none());
    }

    #[test]
    fn detail_for_another_course_is_dropped() {
        let mut state = on_detail_page();
        update(
            &mut state,
            Message::CourseDetailLoaded {
                route: Route::CourseDetail(8),
                detail: detail(&[1]),
            },
        );
        assert!(state.course_detail.is_none());
        assert_eq!(state.pending_loads, 2);
    }

    #[test]
    fn grade_edit_closes_when_enrollment_vanishes() {
        let mut state = on_detail_page();
        update(&mut state, Message::EditGrade(3));
        update(
            &mut state,
            Message::CourseDetailLoaded {
                route: ROUTE,
                detail: detail(&[3]),
            },
        );
        assert_eq!(state.editing_enrollment, Some(3));

        update(&mut state, Message::Navigate(ROUTE));
        update(&mut state, Message::EditGrade(3));
        update(
            &mut state,
            Message::CourseDetailLoaded {
                route: ROUTE,
                detail: detail(&[4]),
            },
        );
        assert_eq!(state.editing_enrollment, None);
    }

    #[test]
    fn enrollment_writes_become_api_commands() {
        let mut state = on_detail_page();
        let cmds = update(
            &mut state,
            Message::EnrollStudent(EnrollmentCreate {
                student_id: 5,
                course_id: 7,
                grade: None,
            }),
        );
        assert!(matches!(cmds.as_slice(), [Command::CreateEnrollmentApi(_)]));

        let cmds = update(&mut state, Message::RemoveEnrollment(3));
        assert!(matches!(cmds.as_slice(), [Command::DeleteEnrollmentApi(3)]));

        let cmds = update(&mut state, Message::DeleteCurrentCourse(7));
        assert!(matches!(
            cmds.as_slice(),
            [Command::DeleteCourseApi {
                course_id: 7,
                mutation: Mutation::DeleteCurrentCourse
            }]
        ));
    }
}
