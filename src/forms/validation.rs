//! Schema validation for the admin forms – compiled into WASM.
//!
//! The schemas live next to the sources as JSON Schema documents and are
//! compiled once on first use.

use std::collections::BTreeMap;

use jsonschema::error::ValidationErrorKind;
use jsonschema::JSONSchema;
use lazy_static::lazy_static;
use serde_json::Value;

use super::FormKind;
use crate::constants::{FORM_ERROR_SLOT, MSG_REQUIRED};

/// Field name → first error message for that field.
pub type FieldErrors = BTreeMap<String, String>;

fn compile(raw: &str, name: &str) -> JSONSchema {
    let parsed: Value = serde_json::from_str(raw)
        .unwrap_or_else(|e| panic!("{} schema must be valid JSON: {}", name, e));
    JSONSchema::compile(&parsed).unwrap_or_else(|e| panic!("invalid {} schema: {}", name, e))
}

lazy_static! {
    static ref STUDENT_SCHEMA: JSONSchema =
        compile(include_str!("../schema/student_form.json"), "student");
    static ref COURSE_SCHEMA: JSONSchema =
        compile(include_str!("../schema/course_form.json"), "course");
    static ref ENROLL_SCHEMA: JSONSchema =
        compile(include_str!("../schema/enroll_form.json"), "enroll");
    static ref GRADE_SCHEMA: JSONSchema =
        compile(include_str!("../schema/grade_form.json"), "grade");
}

fn schema_for(kind: FormKind) -> &'static JSONSchema {
    match kind {
        FormKind::Student => &*STUDENT_SCHEMA,
        FormKind::Course => &*COURSE_SCHEMA,
        FormKind::Enroll => &*ENROLL_SCHEMA,
        FormKind::Grade => &*GRADE_SCHEMA,
    }
}

/// Validate coerced form JSON. On failure every offending field carries one
/// user-facing message; "Required" wins over constraint messages.
pub fn validate(kind: FormKind, value: &Value) -> Result<(), FieldErrors> {
    let schema = schema_for(kind);
    let errors = match schema.validate(value) {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };

    let mut out = FieldErrors::new();
    for error in errors {
        match &error.kind {
            ValidationErrorKind::Required { property } => {
                let field = property.as_str().unwrap_or_default().to_string();
                out.insert(field, MSG_REQUIRED.to_string());
            }
            _ => {
                let path = error.instance_path.to_string();
                let field = match path.trim_start_matches('/') {
                    "" => FORM_ERROR_SLOT.to_string(),
                    field => field.to_string(),
                };
                let message = kind
                    .field(&field)
                    .map(|f| f.invalid_message)
                    .unwrap_or("Invalid value");
                out.entry(field).or_insert_with(|| message.to_string());
            }
        }
    }
    Err(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn student_schema_accepts_valid_input() {
        let v = json!({"name": "Ana", "email": "ana@school.edu", "year": 2});
        assert!(validate(FormKind::Student, &v).is_ok());
    }

    #[test]
    fn student_schema_messages() {
        let errs = validate(FormKind::Student, &json!({"email": "a@b", "year": 0})).unwrap_err();
        assert_eq!(errs["name"], MSG_REQUIRED);
        assert_eq!(errs["email"], MSG_INVALID_EMAIL);
        assert_eq!(errs["year"], MSG_YEAR_RANGE);
    }

    #[test]
    fn whitespace_name_is_rejected() {
        let errs = validate(
            FormKind::Student,
            &json!({"name": "   ", "email": "a@b.co", "year": 1}),
        )
        .unwrap_err();
        assert!(errs.contains_key("name"));
    }

    #[test]
    fn course_schema_messages() {
        let errs = validate(
            FormKind::Course,
            &json!({"title": "Algebra", "duration": 0, "level": "expert"}),
        )
        .unwrap_err();
        assert_eq!(errs["duration"], MSG_DURATION_POSITIVE);
        assert_eq!(errs["level"], MSG_INVALID_LEVEL);
        assert_eq!(errs["instructor_id"], MSG_REQUIRED);
        assert!(!errs.contains_key("title"));
    }

    #[test]
    fn enroll_grade_is_optional() {
        assert!(validate(FormKind::Enroll, &json!({"student_id": 3, "grade": null})).is_ok());
        assert!(validate(FormKind::Enroll, &json!({"student_id": 3})).is_ok());
        let errs = validate(FormKind::Enroll, &json!({"grade": 101})).unwrap_err();
        assert_eq!(errs["student_id"], MSG_REQUIRED);
        assert_eq!(errs["grade"], MSG_GRADE_RANGE);
    }

    #[test]
    fn grade_edit_requires_a_number() {
        let errs = validate(FormKind::Grade, &json!({})).unwrap_err();
        assert_eq!(errs["grade"], MSG_REQUIRED);
        let errs = validate(FormKind::Grade, &json!({"grade": "abc"})).unwrap_err();
        assert_eq!(errs["grade"], MSG_GRADE_RANGE);
        assert!(validate(FormKind::Grade, &json!({"grade": 99.5})).is_ok());
    }

    proptest! {
        #[test]
        fn year_accepted_only_in_range(year in -10i64..15) {
            let v = json!({"name": "Ana", "email": "ana@school.edu", "year": year});
            prop_assert_eq!(validate(FormKind::Student, &v).is_ok(), (1..=4).contains(&year));
        }

        #[test]
        fn grade_accepted_only_in_range(grade in -50.0f64..150.0) {
            let v = json!({"grade": grade});
            prop_assert_eq!(
                validate(FormKind::Grade, &v).is_ok(),
                (0.0..=100.0).contains(&grade)
            );
        }

        #[test]
        fn duration_must_be_positive(duration in -20i64..200) {
            let v = json!({
                "title": "Chemistry",
                "duration": duration,
                "level": "beginner",
                "instructor_id": 1
            });
            prop_assert_eq!(validate(FormKind::Course, &v).is_ok(), duration > 0);
        }
    }
}
