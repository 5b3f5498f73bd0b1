// src/messages.rs
//
// Every event the admin console reacts to, plus the side effects the
// reducers ask for.
//
use crate::models::{
    Course, CourseDetail, CourseFilter, CoursePayload, EnrollmentCreate, GradeUpdate, Instructor,
    Student, StudentPayload,
};
use crate::router::Route;

#[derive(Debug, Clone)]
pub enum Message {
    // Routing
    Navigate(Route),

    // Read results. Each carries the route it was requested for so a late
    // answer for a page the user already left is dropped.
    StudentsLoaded { route: Route, students: Vec<Student> },
    // Also tagged with the filter, so an answer for an older filter is dropped.
    CoursesLoaded {
        route: Route,
        filter: CourseFilter,
        courses: Vec<Course>,
    },
    InstructorsLoaded { route: Route, instructors: Vec<Instructor> },
    CourseDetailLoaded { route: Route, detail: Box<CourseDetail> },
    CourseDetailMissing { route: Route },
    LoadFailed { route: Route, error: String },

    // Students page
    CreateStudent(StudentPayload),
    EditStudent(u32),
    CancelStudentEdit,
    UpdateStudent { student_id: u32, payload: StudentPayload },
    DeleteStudent(u32), // already confirmed by the user

    // Courses page
    SetCourseFilter(CourseFilter),
    CreateCourse(CoursePayload),
    EditCourse(u32),
    CancelCourseEdit,
    UpdateCourse { course_id: u32, payload: CoursePayload },
    DeleteCourse(u32),

    // Course detail page
    EnrollStudent(EnrollmentCreate),
    EditGrade(u32), // enrollment id
    CancelGradeEdit,
    UpdateGrade { enrollment_id: u32, payload: GradeUpdate },
    RemoveEnrollment(u32),
    DeleteCurrentCourse(u32),

    // Mutation outcomes
    MutationSucceeded(Mutation),
    MutationFailed { mutation: Mutation, error: String },
}

/// Which write just completed. Drives the toast, the alert text and what
/// gets reloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    CreateStudent,
    UpdateStudent,
    DeleteStudent,
    CreateCourse,
    UpdateCourse,
    DeleteCourse,
    /// Course deleted from its own detail page.
    DeleteCurrentCourse,
    Enroll,
    UpdateGrade,
    RemoveEnrollment,
}

pub enum Command {
    // Reads
    FetchStudents { route: Route },
    FetchCourses { route: Route, filter: CourseFilter },
    FetchInstructors { route: Route },
    FetchCourseDetail { route: Route, course_id: u32 },

    // Writes
    CreateStudentApi(StudentPayload),
    UpdateStudentApi { student_id: u32, payload: StudentPayload },
    DeleteStudentApi(u32),
    CreateCourseApi(CoursePayload),
    UpdateCourseApi { course_id: u32, payload: CoursePayload },
    DeleteCourseApi { course_id: u32, mutation: Mutation },
    CreateEnrollmentApi(EnrollmentCreate),
    UpdateEnrollmentApi { enrollment_id: u32, payload: GradeUpdate },
    DeleteEnrollmentApi(u32),

    // Browser effects
    Alert(&'static str),
    Toast(&'static str),
    /// Reset the `<form id=…>` to its initial values and clear its errors.
    ResetForm(&'static str),
    /// Change `location.hash`, which in turn fires the router.
    SetLocationHash(String),
}

impl Command {
    /// Short label for logging and test assertions.
    pub fn name(&self) -> &'static str {
        match self {
            Command::FetchStudents { .. } => "FetchStudents",
            Command::FetchCourses { .. } => "FetchCourses",
            Command::FetchInstructors { .. } => "FetchInstructors",
            Command::FetchCourseDetail { .. } => "FetchCourseDetail",
            Command::CreateStudentApi(_) => "CreateStudentApi",
            Command::UpdateStudentApi { .. } => "UpdateStudentApi",
            Command::DeleteStudentApi(_) => "DeleteStudentApi",
            Command::CreateCourseApi(_) => "CreateCourseApi",
            Command::UpdateCourseApi { .. } => "UpdateCourseApi",
            Command::DeleteCourseApi { .. } => "DeleteCourseApi",
            Command::CreateEnrollmentApi(_) => "CreateEnrollmentApi",
            Command::UpdateEnrollmentApi { .. } => "UpdateEnrollmentApi",
            Command::DeleteEnrollmentApi(_) => "DeleteEnrollmentApi",
            Command::Alert(_) => "Alert",
            Command::Toast(_) => "Toast",
            Command::ResetForm(_) => "ResetForm",
            Command::SetLocationHash(_) => "SetLocationHash",
        }
    }
}
