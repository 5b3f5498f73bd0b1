use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Categorical difficulty label on a course.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }

    pub fn parse(s: &str) -> Option<Level> {
        Level::ALL
            .iter()
            .copied()
            .find(|l| l.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Entities as returned by the records API
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub year: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub specialty: Option<String>,
}

/// Course row. `level` stays a raw string so values the server adds later
/// still render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub duration: i64,
    pub level: String,
    #[serde(default)]
    pub instructor_id: Option<u32>,
    #[serde(default)]
    pub instructor: Option<Instructor>,
}

impl Course {
    pub fn instructor_name(&self) -> Option<&str> {
        self.instructor.as_ref().map(|i| i.name.as_str())
    }
}

/// One enrolled student as embedded in `GET /api/courses/:id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnrolledStudent {
    pub id: u32,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub grade: Option<f64>,
    #[serde(default)]
    pub enrolled_at: Option<NaiveDateTime>,
    pub enrollment_id: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseDetail {
    #[serde(flatten)]
    pub course: Course,
    #[serde(default)]
    pub students: Vec<EnrolledStudent>,
}

impl CourseDetail {
    pub fn is_enrolled(&self, student_id: u32) -> bool {
        self.students.iter().any(|s| s.id == student_id)
    }

    pub fn enrollment(&self, enrollment_id: u32) -> Option<&EnrolledStudent> {
        self.students
            .iter()
            .find(|s| s.enrollment_id == enrollment_id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: u32,
    pub student_id: u32,
    pub course_id: u32,
    #[serde(default)]
    pub grade: Option<f64>,
    #[serde(default)]
    pub enrolled_at: Option<NaiveDateTime>,
}

// ---------------------------------------------------------------------------
// Request payloads (built from validated form JSON)
// ---------------------------------------------------------------------------

/// Used for both `POST /api/students` and `PATCH /api/students/:id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentPayload {
    pub name: String,
    pub email: String,
    pub year: i64,
}

/// Used for both `POST /api/courses` and `PATCH /api/courses/:id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoursePayload {
    pub title: String,
    pub duration: i64,
    pub level: Level,
    pub instructor_id: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentCreate {
    pub student_id: u32,
    pub course_id: u32,
    pub grade: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradeUpdate {
    pub grade: f64,
}

/// Enroll form content before the course id is attached.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EnrollFormData {
    pub student_id: u32,
    #[serde(default)]
    pub grade: Option<f64>,
}

impl EnrollFormData {
    pub fn into_payload(self, course_id: u32) -> EnrollmentCreate {
        EnrollmentCreate {
            student_id: self.student_id,
            course_id,
            grade: self.grade,
        }
    }
}

// ---------------------------------------------------------------------------
// Course list filter
// ---------------------------------------------------------------------------

/// Server-side filter for `GET /api/courses`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CourseFilter {
    pub level: Option<Level>,
    pub instructor_id: Option<u32>,
}

impl CourseFilter {
    pub fn is_empty(&self) -> bool {
        self.level.is_none() && self.instructor_id.is_none()
    }

    /// Query string including the leading `?`, or empty when unfiltered.
    pub fn query_string(&self) -> String {
        let mut parts = Vec::new();
        if let Some(level) = self.level {
            parts.push(format!("level={}", level.as_str()));
        }
        if let Some(id) = self.instructor_id {
            parts.push(format!("instructor_id={}", id));
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!("?{}", parts.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn course_detail_parses_server_shape() {
        let raw = json!({
            "id": 3,
            "title": "Data Engineer",
            "duration": 24,
            "level": "intermediate",
            "instructor_id": 2,
            "instructor": {"id": 2, "name": "Ada Park", "specialty": "Physics"},
            "students": [
                {
                    "id": 7,
                    "name": "Lee Chan",
                    "email": "lee@example.com",
                    "grade": null,
                    "enrolled_at": "2025-03-01T09:30:00.123456",
                    "enrollment_id": 41
                },
                {
                    "id": 8,
                    "name": "Mo Diaz",
                    "email": "mo@example.com",
                    "grade": 88.5,
                    "enrolled_at": "2025-03-02T10:00:00",
                    "enrollment_id": 42
                }
            ]
        });

        let detail: CourseDetail = serde_json::from_value(raw).unwrap();
        assert_eq!(detail.course.title, "Data Engineer");
        assert_eq!(detail.course.instructor_name(), Some("Ada Park"));
        assert_eq!(detail.students.len(), 2);
        assert_eq!(detail.students[0].grade, None);
        assert!(detail.students[0].enrolled_at.is_some());
        assert_eq!(detail.enrollment(42).map(|s| s.id), Some(8));
        assert!(detail.is_enrolled(7));
        assert!(!detail.is_enrolled(9));
    }

    #[test]
    fn course_without_instructor_and_unknown_level() {
        let raw = json!({
            "id": 1,
            "title": "Pottery",
            "duration": 5,
            "level": "expert",
            "instructor_id": 4,
            "instructor": null
        });
        let course: Course = serde_json::from_value(raw).unwrap();
        assert_eq!(course.level, "expert");
        assert!(course.instructor_name().is_none());
        assert!(Level::parse(&course.level).is_none());
    }

    #[test]
    fn instructor_specialty_optional() {
        let i: Instructor = serde_json::from_value(json!({"id": 1, "name": "Ng"})).unwrap();
        assert_eq!(i.specialty, None);
    }

    #[test]
    fn level_parse_is_case_insensitive() {
        assert_eq!(Level::parse("Advanced"), Some(Level::Advanced));
        assert_eq!(Level::parse(" beginner "), Some(Level::Beginner));
        assert_eq!(Level::parse(""), None);
    }

    #[test]
    fn course_payload_serializes_level_lowercase() {
        let payload = CoursePayload {
            title: "Algebra".into(),
            duration: 12,
            level: Level::Intermediate,
            instructor_id: 2,
        };
        let v = serde_json::to_value(&payload).unwrap();
        assert_eq!(v["level"], "intermediate");
        assert_eq!(v["instructor_id"], 2);
    }

    #[test]
    fn enroll_form_attaches_course_id() {
        let data: EnrollFormData =
            serde_json::from_value(json!({"student_id": 5, "grade": null})).unwrap();
        let payload = data.into_payload(9);
        assert_eq!(payload.course_id, 9);
        assert_eq!(payload.grade, None);
        let body = serde_json::to_value(&payload).unwrap();
        assert!(body["grade"].is_null());
    }

    #[test]
    fn filter_query_string() {
        assert_eq!(CourseFilter::default().query_string(), "");
        let f = CourseFilter {
            level: Some(Level::Beginner),
            instructor_id: Some(3),
        };
        assert_eq!(f.query_string(), "?level=beginner&instructor_id=3");
        let f = CourseFilter {
            level: None,
            instructor_id: Some(3),
        };
        assert_eq!(f.query_string(), "?instructor_id=3");
    }
}
