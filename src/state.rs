use std::cell::RefCell;

use wasm_bindgen::JsValue;

use crate::messages::{Command, Message};
use crate::models::{Course, CourseDetail, CourseFilter, Instructor, Student};
use crate::router::Route;
use crate::update::update;

/// Transient view state. Nothing here is authoritative: every list is the
/// last server answer for the current page and is dropped on navigation.
#[derive(Debug, Default)]
pub struct AppState {
    pub route: Route,

    // Students page
    pub students: Vec<Student>,
    pub editing_student: Option<u32>,

    // Courses page
    pub courses: Vec<Course>,
    pub instructors: Vec<Instructor>,
    pub editing_course: Option<u32>,
    pub course_filter: CourseFilter,

    // Course detail page (also uses `students` for the enroll selector)
    pub course_detail: Option<CourseDetail>,
    pub course_missing: bool,
    pub editing_enrollment: Option<u32>,

    // Outstanding reads for the current route
    pub pending_loads: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything cached for the previous page.
    pub fn clear_view(&mut self) {
        let route = self.route;
        *self = Self {
            route,
            ..Self::default()
        };
    }

    pub fn is_loading(&self) -> bool {
        self.pending_loads > 0
    }

    /// Students that can still be enrolled in the course on screen.
    pub fn enrollable_students(&self) -> Vec<&Student> {
        match &self.course_detail {
            Some(detail) => self
                .students
                .iter()
                .filter(|s| !detail.is_enrolled(s.id))
                .collect(),
            None => self.students.iter().collect(),
        }
    }

    pub fn student(&self, student_id: u32) -> Option<&Student> {
        self.students.iter().find(|s| s.id == student_id)
    }

    pub fn course(&self, course_id: u32) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    // Dispatch a message and hand back the side effects to run
    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        update(self, msg)
    }

    // Separate method to refresh UI after state changes
    pub fn refresh_ui_after_state_change() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or(JsValue::from_str("No window"))?;
        let document = window.document().ok_or(JsValue::from_str("No document"))?;
        APP_STATE.with(|state| {
            let state = state.borrow();
            crate::views::render_active_view(&state, &document)
        })
    }
}

// We use thread_local to store our app state
thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

// Global helper function for dispatching messages with proper UI refresh handling
pub fn dispatch_global_message(msg: Message) {
    // 1. Perform state updates and collect commands
    let commands = APP_STATE.with(|state| state.borrow_mut().dispatch(msg));

    // 2. Execute commands after the state borrow is dropped
    for cmd in commands {
        crate::command_executors::execute(cmd);
    }

    // 3. Re-render the active page from the new state
    if let Err(e) = AppState::refresh_ui_after_state_change() {
        web_sys::console::warn_1(&format!("Failed to refresh UI after action: {:?}", e).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, CourseDetail, EnrolledStudent};

    fn student(id: u32) -> Student {
        Student {
            id,
            name: format!("Student {}", id),
            email: format!("s{}@school.edu", id),
            year: 1,
        }
    }

    #[test]
    fn clear_view_keeps_route_only() {
        let mut state = AppState::new();
        state.route = Route::Students;
        state.students.push(student(1));
        state.editing_student = Some(1);
        state.pending_loads = 2;
        state.clear_view();
        assert_eq!(state.route, Route::Students);
        assert!(state.students.is_empty());
        assert_eq!(state.editing_student, None);
        assert!(!state.is_loading());
    }

    #[test]
    fn enrollable_students_excludes_enrolled() {
        let mut state = AppState::new();
        state.students = vec![student(1), student(2), student(3)];
        state.course_detail = Some(CourseDetail {
            course: Course {
                id: 9,
                title: "Biology".into(),
                duration: 20,
                level: "beginner".into(),
                instructor_id: Some(1),
                instructor: None,
            },
            students: vec![EnrolledStudent {
                id: 2,
                name: "Student 2".into(),
                email: "s2@school.edu".into(),
                grade: None,
                enrolled_at: None,
                enrollment_id: 77,
            }],
        });
        let ids: Vec<u32> = state.enrollable_students().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
