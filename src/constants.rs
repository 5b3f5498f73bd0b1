//! Constants for the admin frontend
//!
//! Centralizes DOM ids, CSS class names and user-facing strings so the pages
//! and reducers cannot drift apart through typos.

// CSS Class Names
pub const CSS_HIDDEN: &str = "hidden";
pub const CSS_VISIBLE: &str = "visible";
pub const CSS_NAV_LINK: &str = "nav-link";
pub const CSS_NAV_LINK_ACTIVE: &str = "nav-link active";
pub const CSS_LIST: &str = "list";
pub const CSS_ACTIONS: &str = "actions";
pub const CSS_INLINE_FORM: &str = "inline-form";
pub const CSS_STACKED_FORM: &str = "stacked-form";
pub const CSS_ERROR: &str = "error";
pub const CSS_BTN_SMALL: &str = "small";
pub const CSS_BTN_DANGER: &str = "btn-danger";
pub const CSS_BTN_DANGER_SMALL: &str = "btn-danger small";
pub const CSS_BTN_SECONDARY_SMALL: &str = "btn-secondary small";
pub const CSS_FILTER_BAR: &str = "filter-bar";
pub const CSS_EMPTY_STATE: &str = "empty-state";
pub const CSS_MUTED: &str = "muted";

// Attributes
pub const ATTR_TYPE: &str = "type";
pub const ATTR_DATA_TESTID: &str = "data-testid";
pub const ATTR_DATA_ROUTE: &str = "data-route";
pub const ATTR_DATA_ERROR_FOR: &str = "data-error-for";
pub const ATTR_DATA_EDITING: &str = "data-editing";
pub const BUTTON_TYPE_BUTTON: &str = "button";
pub const BUTTON_TYPE_SUBMIT: &str = "submit";

// Element IDs
pub const ID_NAVBAR: &str = "navbar";
pub const ID_NAV_COURSES: &str = "nav-courses";
pub const ID_NAV_STUDENTS: &str = "nav-students";
pub const ID_APP_CONTAINER: &str = "app-container";
pub const ID_PAGE_ROOT: &str = "page-root";
pub const ID_STUDENTS_LIST: &str = "students-list";
pub const ID_STUDENT_CREATE_FORM: &str = "student-create-form";
pub const ID_COURSES_LIST: &str = "courses-list";
pub const ID_COURSE_CREATE_FORM: &str = "course-create-form";
pub const ID_COURSE_FILTER_LEVEL: &str = "course-filter-level";
pub const ID_COURSE_FILTER_INSTRUCTOR: &str = "course-filter-instructor";
pub const ID_COURSE_DETAIL_HEADER: &str = "course-detail-header";
pub const ID_ENROLLMENT_LIST: &str = "enrollment-list";
pub const ID_ENROLL_SECTION: &str = "enroll-section";
pub const ID_ENROLL_FORM: &str = "enroll-form";
pub const ID_DELETE_COURSE_BUTTON: &str = "delete-course-button";
pub const ID_APP_STYLES: &str = "app-styles";

// Blocking alert texts
pub const ALERT_CREATE_FAILED: &str = "Create failed";
pub const ALERT_UPDATE_FAILED: &str = "Update failed";
pub const ALERT_DELETE_FAILED: &str = "Delete failed";
pub const ALERT_ENROLL_FAILED: &str = "Enroll failed";
pub const ALERT_LOAD_FAILED: &str = "Load failed";

// Confirmation prompts
pub const CONFIRM_DELETE_STUDENT: &str = "Delete this student?";
pub const CONFIRM_DELETE_COURSE: &str = "Delete this course?";
pub const CONFIRM_REMOVE_ENROLLMENT: &str = "Remove this enrollment?";

// Validation messages
pub const MSG_REQUIRED: &str = "Required";
pub const MSG_INVALID_EMAIL: &str = "Invalid email";
pub const MSG_YEAR_RANGE: &str = "Must be 1-4";
pub const MSG_DURATION_POSITIVE: &str = "Must be > 0";
pub const MSG_INVALID_LEVEL: &str = "Invalid level";
pub const MSG_GRADE_RANGE: &str = "0-100";
pub const MSG_CHECK_VALUES: &str = "Please check the values entered";

// Error slot for messages that belong to no single field
pub const FORM_ERROR_SLOT: &str = "form";

// Success toasts
pub const TOAST_STUDENT_CREATED: &str = "Student created";
pub const TOAST_STUDENT_UPDATED: &str = "Student updated";
pub const TOAST_STUDENT_DELETED: &str = "Student deleted";
pub const TOAST_COURSE_CREATED: &str = "Course created";
pub const TOAST_COURSE_UPDATED: &str = "Course updated";
pub const TOAST_COURSE_DELETED: &str = "Course deleted";
pub const TOAST_STUDENT_ENROLLED: &str = "Student enrolled";
pub const TOAST_GRADE_UPDATED: &str = "Grade updated";
pub const TOAST_ENROLLMENT_REMOVED: &str = "Enrollment removed";

// Placeholders
pub const TEXT_LOADING: &str = "Loading…";
pub const TEXT_COURSE_NOT_FOUND: &str = "Course not found";
pub const TEXT_NO_GRADE: &str = "N/A";
pub const TEXT_CHOOSE: &str = "-- choose --";
pub const TEXT_ALL_LEVELS: &str = "All levels";
pub const TEXT_ALL_INSTRUCTORS: &str = "All instructors";

// Option labels are clipped to keep selects narrow.
pub const MAX_OPTION_LABEL: usize = 40;

// Runtime-config wait when served from localhost
pub const API_CONFIG_WAIT_MS: u32 = 500;
