//! Request DTOs for the result proxy API
//!
//! Defines the lookup query string and its validation rules.

use std::sync::LazyLock;

use chrono::{Datelike, Utc};
use regex::Regex;
use serde::Deserialize;

/// Registration numbers are plain digit strings, 4 to 20 characters.
static REDG_NO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4,20}$").unwrap());

/// Query parameters for the lookup endpoint (GET /api/result)
///
/// # Fields
/// - `redg_no`: registration number, required, digits only
/// - `semester`: roman-numeral semester, defaults to "III"
/// - `year` (alias `exam_year`): exam year, defaults to the current year
/// - `month` (alias `exam_month`): exam month name, optional
/// - `exam_held`: explicit override for the derived exam period, optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupRequest {
    /// Registration number
    #[serde(default)]
    pub redg_no: String,
    /// Semester, e.g. "III"
    #[serde(default)]
    pub semester: Option<String>,
    /// Exam year, e.g. "2025"
    #[serde(default, alias = "exam_year")]
    pub year: Option<String>,
    /// Exam month, e.g. "July"
    #[serde(default, alias = "exam_month")]
    pub month: Option<String>,
    /// Explicit exam period override, e.g. "July/2025"
    #[serde(default)]
    pub exam_held: Option<String>,
}

impl LookupRequest {
    /// Validates the lookup input.
    ///
    /// Returns an error message if validation fails, None if valid. The
    /// registration number is the only validated field; everything else is
    /// passed through to the upstream as-is.
    pub fn validate(&self) -> Option<String> {
        if !REDG_NO_RE.is_match(self.redg_no.trim()) {
            return Some("Invalid registration number (redg_no)".to_string());
        }
        None
    }

    /// Returns the trimmed registration number.
    pub fn redg_no(&self) -> &str {
        self.redg_no.trim()
    }

    /// Returns the requested semester, defaulting to "III".
    pub fn semester(&self) -> String {
        match self.semester.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => "III".to_string(),
        }
    }

    /// Returns the exam year, defaulting to the current year.
    pub fn resolved_year(&self) -> String {
        match self.year.as_deref().map(str::trim) {
            Some(y) if !y.is_empty() => y.to_string(),
            _ => Utc::now().year().to_string(),
        }
    }

    /// Derives the exam period string.
    ///
    /// An explicit `exam_held` wins; otherwise month and year join as
    /// "Month/Year" (the format the upstream expects), falling back to the
    /// year alone when no month was given.
    pub fn exam_held(&self) -> String {
        if let Some(held) = self.exam_held.as_deref().map(str::trim) {
            if !held.is_empty() {
                return held.to_string();
            }
        }

        let year = self.resolved_year();
        match self.month.as_deref().map(str::trim) {
            Some(m) if !m.is_empty() => format!("{}/{}", m, year),
            _ => year,
        }
    }
}
