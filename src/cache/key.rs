//! Cache Key Module
//!
//! Composite key identifying a cacheable lookup.

use std::fmt;

// == Cache Key ==
/// Identifies one lookup: registration number, semester, and the resolved
/// exam period. Two lookups with the same key are the same upstream query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub redg_no: String,
    pub semester: String,
    pub exam_held: String,
}

impl CacheKey {
    pub fn new(
        redg_no: impl Into<String>,
        semester: impl Into<String>,
        exam_held: impl Into<String>,
    ) -> Self {
        Self {
            redg_no: redg_no.into(),
            semester: semester.into(),
            exam_held: exam_held.into(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.redg_no, self.semester, self.exam_held)
    }
}
