//! Routing reducer: page switches, initial reads and read failures.

use crate::constants::ALERT_LOAD_FAILED;
use crate::error_log;
use crate::messages::{Command, Message};
use crate::router::Route;
use crate::state::AppState;

/// Handles navigation messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::Navigate(route) => {
            state.route = *route;
            state.clear_view();
            commands.extend(load_commands(state));
            true
        }
        Message::LoadFailed { route, error } => {
            if accept_response(state, *route) {
                error_log!("Load failed for {:?}: {}", route, error);
                commands.push(Command::Alert(ALERT_LOAD_FAILED));
            }
            true
        }
        _ => false,
    }
}

/// The reads a page needs. Also used to reload after every mutation.
pub fn load_commands(state: &mut AppState) -> Vec<Command> {
    let route = state.route;
    let commands = match route {
        Route::Students => vec![Command::FetchStudents { route }],
        Route::Courses => vec![
            Command::FetchCourses {
                route,
                filter: state.course_filter.clone(),
            },
            Command::FetchInstructors { route },
        ],
        Route::CourseDetail(course_id) => vec![
            Command::FetchCourseDetail { route, course_id },
            Command::FetchStudents { route },
        ],
    };
    state.pending_loads = commands.len() as u32;
    commands
}

/// Count a read answer against the current route. Returns false when the
/// answer belongs to a page the user has already left.
pub fn accept_response(state: &mut AppState, route: Route) -> bool {
    if state.route != route {
        return false;
    }
    state.pending_loads = state.pending_loads.saturating_sub(1);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::test_support::names;
    use crate::update::update as root_update;

    #[test]
    fn navigating_to_each_page_issues_its_reads() {
        let mut state = AppState::new();
        let cmds = root_update(&mut state, Message::Navigate(Route::Students));
        assert_eq!(names(&cmds), vec!["FetchStudents"]);

        let cmds = root_update(&mut state, Message::Navigate(Route::Courses));
        assert_eq!(names(&cmds), vec!["FetchCourses", "FetchInstructors"]);

        let cmds = root_update(&mut state, Message::Navigate(Route::CourseDetail(4)));
        assert_eq!(names(&cmds), vec!["FetchCourseDetail", "FetchStudents"]);
        assert_eq!(state.pending_loads, 2);
        assert!(state.is_loading());
    }

    #[test]
    fn navigation_discards_cached_lists() {
        let mut state = AppState::new();
        state.route = Route::Students;
        state.editing_student = Some(3);
        state.students.push(crate::models::Student {
            id: 3,
            name: "Kim".into(),
            email: "kim@school.edu".into(),
            year: 2,
        });
        root_update(&mut state, Message::Navigate(Route::Courses));
        assert!(state.students.is_empty());
        assert_eq!(state.editing_student, None);
        assert_eq!(state.route, Route::Courses);
    }

    #[test]
    fn load_failure_alerts_for_current_route_only() {
        let mut state = AppState::new();
        root_update(&mut state, Message::Navigate(Route::Students));

        let cmds = root_update(
            &mut state,
            Message::LoadFailed {
                route: Route::Courses,
                error: "HTTP 500".into(),
            },
        );
        assert!(cmds.is_empty());

        let cmds = root_update(
            &mut state,
            Message::LoadFailed {
                route: Route::Students,
                error: "HTTP 500".into(),
            },
        );
        assert!(matches!(cmds.as_slice(), [Command::Alert(ALERT_LOAD_FAILED)]));
        assert!(!state.is_loading());
    }
}
