//! Subject Extraction and Classification
//!
//! Subjects arrive either pre-split into theory/practical arrays or as one
//! flat list. The split heuristic here is a known approximation of the
//! upstream's own naming conventions and is kept isolated so it can drift
//! with the upstream format.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::aliased_in;

/// One row of a marksheet subject table. Everything is upstream-defined and
/// optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Subject {
    pub code: Option<String>,
    pub name: Option<String>,
    pub ese: Option<String>,
    pub ia: Option<String>,
    pub total: Option<String>,
    pub grade: Option<String>,
    pub credit: Option<String>,
}

/// Whether a subject belongs in the theory or the practical table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectKind {
    Theory,
    Practical,
}

// Candidate source keys per subject column, first match wins.
const CODE_ALIASES: &[&str] = &["code", "subject_code", "paper_code"];
const NAME_ALIASES: &[&str] = &["name", "subject_name", "subject", "paper"];
const ESE_ALIASES: &[&str] = &["ese", "ese_marks", "external"];
const IA_ALIASES: &[&str] = &["ia", "ia_marks", "internal"];
const TOTAL_ALIASES: &[&str] = &["total", "total_marks", "grand_total"];
const GRADE_ALIASES: &[&str] = &["grade", "letter_grade"];
const CREDIT_ALIASES: &[&str] = &["credit", "credits"];

impl Subject {
    /// Builds a Subject from one upstream array element. Unknown shapes
    /// produce an all-empty subject rather than an error.
    pub fn from_value(value: &Value) -> Self {
        Self {
            code: aliased_in(value, CODE_ALIASES),
            name: aliased_in(value, NAME_ALIASES),
            ese: aliased_in(value, ESE_ALIASES),
            ia: aliased_in(value, IA_ALIASES),
            total: aliased_in(value, TOTAL_ALIASES),
            grade: aliased_in(value, GRADE_ALIASES),
            credit: aliased_in(value, CREDIT_ALIASES),
        }
    }
}

// == Classification Heuristic ==
/// Classifies a subject as theory or practical from its code and name.
///
/// Practical iff the code ends in `P` (case-insensitive) or the name
/// contains `LAB` or `PRACTICAL` (case-insensitive). Only used when the
/// upstream provides a flat `subjects` array with no explicit split.
pub fn classify_subject(subject: &Subject) -> SubjectKind {
    if let Some(code) = &subject.code {
        if code.trim().to_ascii_uppercase().ends_with('P') {
            return SubjectKind::Practical;
        }
    }

    if let Some(name) = &subject.name {
        let upper = name.to_ascii_uppercase();
        if upper.contains("LAB") || upper.contains("PRACTICAL") {
            return SubjectKind::Practical;
        }
    }

    SubjectKind::Theory
}

/// Converts an upstream array into subjects; non-arrays yield an empty list.
pub fn subjects_from(value: Option<&Value>) -> Vec<Subject> {
    match value.and_then(Value::as_array) {
        Some(items) => items.iter().map(Subject::from_value).collect(),
        None => Vec::new(),
    }
}

/// Splits a flat subject list into (theory, practical) using the heuristic.
pub fn split_subjects(subjects: Vec<Subject>) -> (Vec<Subject>, Vec<Subject>) {
    let mut theory = Vec::new();
    let mut practical = Vec::new();

    for subject in subjects {
        match classify_subject(&subject) {
            SubjectKind::Theory => theory.push(subject),
            SubjectKind::Practical => practical.push(subject),
        }
    }

    (theory, practical)
}
