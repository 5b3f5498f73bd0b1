//! Form declarations and string → JSON coercion.
//!
//! HTML inputs only ever hand us strings. Each form declares its fields
//! once here; `coerce` turns the raw strings into a JSON object that the
//! compiled schema in [`validation`] can judge, and that deserializes
//! straight into the request payload types once it passes.

pub mod validation;

use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};

use crate::constants::{
    FORM_ERROR_SLOT, MSG_CHECK_VALUES, MSG_DURATION_POSITIVE, MSG_GRADE_RANGE, MSG_INVALID_EMAIL,
    MSG_INVALID_LEVEL, MSG_REQUIRED, MSG_YEAR_RANGE,
};
use crate::error_log;

pub use validation::{validate, FieldErrors};

/// Raw `name → value` pairs read from a form.
pub type FormValues = BTreeMap<String, String>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormKind {
    Student,
    Course,
    Enroll,
    Grade,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Integer { min: Option<i64>, max: Option<i64> },
    Number { min: Option<f64>, max: Option<f64> },
    /// `<select>` whose values are numeric ids.
    IdSelect,
    /// `<select>` with fixed string choices.
    Choice,
}

impl FieldKind {
    pub fn is_select(&self) -> bool {
        matches!(self, FieldKind::IdSelect | FieldKind::Choice)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Shown when the value is present but breaks a constraint.
    pub invalid_message: &'static str,
}

impl FieldSpec {
    const fn new(
        name: &'static str,
        label: &'static str,
        kind: FieldKind,
        required: bool,
        invalid_message: &'static str,
    ) -> Self {
        Self {
            name,
            label,
            kind,
            required,
            invalid_message,
        }
    }
}

const STUDENT_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("name", "Name", FieldKind::Text, true, MSG_REQUIRED),
    FieldSpec::new("email", "Email", FieldKind::Email, true, MSG_INVALID_EMAIL),
    FieldSpec::new(
        "year",
        "Year",
        FieldKind::Integer { min: Some(1), max: Some(4) },
        true,
        MSG_YEAR_RANGE,
    ),
];

const COURSE_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("title", "Title", FieldKind::Text, true, MSG_REQUIRED),
    FieldSpec::new(
        "duration",
        "Duration (hours)",
        FieldKind::Integer { min: Some(1), max: None },
        true,
        MSG_DURATION_POSITIVE,
    ),
    FieldSpec::new("level", "Level", FieldKind::Choice, true, MSG_INVALID_LEVEL),
    FieldSpec::new("instructor_id", "Instructor", FieldKind::IdSelect, true, MSG_REQUIRED),
];

const ENROLL_FIELDS: &[FieldSpec] = &[
    FieldSpec::new("student_id", "Student", FieldKind::IdSelect, true, MSG_REQUIRED),
    FieldSpec::new(
        "grade",
        "Grade (optional)",
        FieldKind::Number { min: Some(0.0), max: Some(100.0) },
        false,
        MSG_GRADE_RANGE,
    ),
];

const GRADE_FIELDS: &[FieldSpec] = &[FieldSpec::new(
    "grade",
    "Grade (0–100)",
    FieldKind::Number { min: Some(0.0), max: Some(100.0) },
    true,
    MSG_GRADE_RANGE,
)];

impl FormKind {
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            FormKind::Student => STUDENT_FIELDS,
            FormKind::Course => COURSE_FIELDS,
            FormKind::Enroll => ENROLL_FIELDS,
            FormKind::Grade => GRADE_FIELDS,
        }
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields().iter().find(|f| f.name == name)
    }

    /// Values a freshly opened create form starts with.
    pub fn initial_values(&self) -> FormValues {
        let pairs: &[(&str, &str)] = match self {
            FormKind::Student => &[("name", ""), ("email", ""), ("year", "1")],
            FormKind::Course => &[
                ("title", ""),
                ("duration", "10"),
                ("level", "beginner"),
                ("instructor_id", ""),
            ],
            FormKind::Enroll => &[("student_id", ""), ("grade", "")],
            FormKind::Grade => &[("grade", "0")],
        };
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

/// Convert raw form strings into a JSON object.
///
/// Blank required fields are left out so the schema reports them as
/// missing; blank optional fields become `null`. Numbers that fail to parse
/// are passed through as strings so the schema rejects them on type.
pub fn coerce(kind: FormKind, values: &FormValues) -> Value {
    let mut obj = Map::new();
    for field in kind.fields() {
        let raw = values.get(field.name).map(|s| s.trim()).unwrap_or("");
        if raw.is_empty() {
            if !field.required {
                obj.insert(field.name.to_string(), Value::Null);
            }
            continue;
        }
        let value = match field.kind {
            FieldKind::Text | FieldKind::Email | FieldKind::Choice => {
                Value::String(raw.to_string())
            }
            FieldKind::Integer { .. } | FieldKind::IdSelect => coerce_integer(raw),
            FieldKind::Number { .. } => coerce_number(raw),
        };
        obj.insert(field.name.to_string(), value);
    }
    Value::Object(obj)
}

/// Largest integer an `f64` holds exactly.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// `"3"`, `"3.0"` and `"3e0"` all mean the integer 3. Anything with a
/// fractional part stays a float for the schema to reject.
fn coerce_integer(raw: &str) -> Value {
    if let Ok(i) = raw.parse::<i64>() {
        return Value::Number(i.into());
    }
    match raw.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_EXACT_INT => {
            Value::Number((f as i64).into())
        }
        _ => coerce_number(raw),
    }
}

fn coerce_number(raw: &str) -> Value {
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(raw.to_string()))
}

/// Coerce, validate and deserialize in one step. This is what form submit
/// handlers call.
pub fn parse_form<T>(kind: FormKind, values: &FormValues) -> Result<T, FieldErrors>
where
    T: serde::de::DeserializeOwned,
{
    let json = coerce(kind, values);
    validate(kind, &json)?;
    serde_json::from_value(json).map_err(|e| {
        error_log!("{:?} form passed the schema but not the payload: {}", kind, e);
        let mut errors = FieldErrors::new();
        errors.insert(FORM_ERROR_SLOT.to_string(), MSG_CHECK_VALUES.to_string());
        errors
    })
}
