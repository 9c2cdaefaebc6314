//! Normalization Module
//!
//! Maps the upstream's heterogeneous, undocumented payload shapes onto one
//! stable schema. Field aliasing is an ordered data table so a new upstream
//! alias is a one-line change; normalization never fails, missing fields
//! simply come out null or empty.

mod subjects;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use subjects::{classify_subject, split_subjects, subjects_from, Subject, SubjectKind};

/// How many per-semester SGPA slots a marksheet carries.
pub const SGPA_SLOTS: usize = 8;

// == Field Alias Table ==
/// Canonical field name → candidate upstream keys, evaluated in priority
/// order. First key present in the payload wins.
const FIELD_ALIASES: &[(&str, &[&str])] = &[
    ("registrationNo", &["redg_no", "reg_no", "registration_no", "registrationNo"]),
    ("name", &["name", "student_name", "studentName"]),
    ("fatherName", &["father_name", "fathers_name", "fatherName"]),
    ("motherName", &["mother_name", "mothers_name", "motherName"]),
    ("collegeName", &["college_name", "college", "collegeName"]),
    ("collegeCode", &["college_code", "collegeCode"]),
    ("course", &["course", "course_name", "branch"]),
    ("semester", &["semester", "sem"]),
    ("examHeld", &["exam_held", "examHeld"]),
    ("examYear", &["exam_year", "year", "examYear"]),
    ("cgpa", &["cgpa", "CGPA"]),
    ("remarks", &["remarks", "remark", "result_status"]),
];

/// Stable result schema served to callers and fed to the renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NormalizedResult {
    pub registration_no: Option<String>,
    pub name: Option<String>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub college_name: Option<String>,
    pub college_code: Option<String>,
    pub course: Option<String>,
    pub semester: Option<String>,
    pub exam_held: Option<String>,
    pub exam_year: Option<String>,
    pub theory_subjects: Vec<Subject>,
    pub practical_subjects: Vec<Subject>,
    /// Per-semester SGPA values, at most [`SGPA_SLOTS`]
    pub sgpa: Vec<Value>,
    pub cgpa: Option<String>,
    pub remarks: Option<String>,
}

impl NormalizedResult {
    /// Rehydrates a result from its own serialized form (a cache payload).
    ///
    /// This is an exact inverse of serialization and does not go through the
    /// alias table. Raw fallbacks and unrecognized shapes rehydrate as an
    /// empty result.
    pub fn from_payload(payload: &Value) -> Self {
        serde_json::from_value(payload.clone()).unwrap_or_default()
    }
}

// == Normalization ==
/// Normalizes a parsed upstream payload into the stable schema.
///
/// Accepts the result object either at the top level or nested one level
/// under a `data` key. Non-object payloads normalize to an empty result.
pub fn normalize(payload: &Value) -> NormalizedResult {
    let obj = unwrap_data(payload);

    let mut theory = subjects_from(first_present(obj, &["theory_subjects", "theorySubjects", "theory"]));
    let mut practical = subjects_from(first_present(
        obj,
        &["practical_subjects", "practicalSubjects", "practical", "practicals"],
    ));

    // Flat list fallback: the upstream sometimes sends one undifferentiated
    // `subjects` array, split here by the classification heuristic.
    if theory.is_empty() && practical.is_empty() {
        let flat = subjects_from(first_present(obj, &["subjects", "subject_list"]));
        (theory, practical) = split_subjects(flat);
    }

    NormalizedResult {
        registration_no: aliased(obj, "registrationNo"),
        name: aliased(obj, "name"),
        father_name: aliased(obj, "fatherName"),
        mother_name: aliased(obj, "motherName"),
        college_name: aliased(obj, "collegeName"),
        college_code: aliased(obj, "collegeCode"),
        course: aliased(obj, "course"),
        semester: aliased(obj, "semester"),
        exam_held: aliased(obj, "examHeld"),
        exam_year: aliased(obj, "examYear"),
        theory_subjects: theory,
        practical_subjects: practical,
        sgpa: sgpa_values(obj),
        cgpa: aliased(obj, "cgpa"),
        remarks: aliased(obj, "remarks"),
    }
}

/// Unwraps a single `data` nesting level if present.
fn unwrap_data(payload: &Value) -> &Value {
    match payload.get("data") {
        Some(inner) if inner.is_object() => inner,
        _ => payload,
    }
}

/// Looks up a canonical field through the alias table.
fn aliased(obj: &Value, canonical: &str) -> Option<String> {
    let (_, candidates) = FIELD_ALIASES
        .iter()
        .find(|(name, _)| *name == canonical)?;
    aliased_in(obj, candidates)
}

/// Returns the first candidate key's value as a string.
pub(crate) fn aliased_in(obj: &Value, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .find_map(|key| obj.get(*key).and_then(value_to_string))
}

/// Returns the first candidate key's value, untouched.
fn first_present<'a>(obj: &'a Value, candidates: &[&str]) -> Option<&'a Value> {
    candidates.iter().find_map(|key| obj.get(*key))
}

/// Renders a scalar JSON value as a string; null and containers are absent.
fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Extracts the SGPA sequence, capped at [`SGPA_SLOTS`] values. A scalar
/// SGPA becomes a single-element sequence.
fn sgpa_values(obj: &Value) -> Vec<Value> {
    match first_present(obj, &["sgpa", "sgpa_list", "semester_gpa"]) {
        Some(Value::Array(items)) => items.iter().take(SGPA_SLOTS).cloned().collect(),
        Some(value) if value.is_number() || value.is_string() => vec![value.clone()],
        _ => Vec::new(),
    }
}
