//! Marksheet Document Rendering
//!
//! Builds a printable marksheet view from a normalized result. The view is a
//! plain data structure first and HTML second, so the layout rules (fallback
//! header fields, fixed GPA slots, omitted empty tables) are testable without
//! parsing markup.

use std::fmt::Write;

use serde_json::Value;

use crate::normalize::{NormalizedResult, Subject, SGPA_SLOTS};
use crate::render::style::{PRINT_SCRIPT, STYLESHEET};

/// A fully laid-out marksheet, ready for HTML serialization.
#[derive(Debug, Clone)]
pub struct DocumentView {
    /// Header label/value pairs, in display order
    pub header: Vec<(&'static str, String)>,
    /// Theory subject rows
    pub theory: Vec<Subject>,
    /// Practical subject rows
    pub practical: Vec<Subject>,
    /// Exactly [`SGPA_SLOTS`] per-semester slots, unfilled ones are "-"
    pub sgpa_slots: Vec<String>,
    /// CGPA cell, "-" when absent
    pub cgpa: String,
    /// Uppercased remarks line, empty when absent
    pub remarks: String,
    /// Whether the remarks signal a failure
    pub failed: bool,
}

impl DocumentView {
    // == Build ==
    /// Lays out a marksheet from a normalized result.
    ///
    /// Header fields fall back to the originally requested semester and year
    /// rather than rendering blank when the upstream omitted them.
    pub fn build(
        result: &NormalizedResult,
        requested_semester: &str,
        requested_year: &str,
    ) -> Self {
        let semester = result
            .semester
            .clone()
            .unwrap_or_else(|| requested_semester.to_string());
        let exam_held = result
            .exam_held
            .clone()
            .or_else(|| result.exam_year.clone())
            .unwrap_or_else(|| requested_year.to_string());

        let header = vec![
            ("Registration No", result.registration_no.clone().unwrap_or_default()),
            ("Name", result.name.clone().unwrap_or_default()),
            ("Father's Name", result.father_name.clone().unwrap_or_default()),
            ("Mother's Name", result.mother_name.clone().unwrap_or_default()),
            ("College", result.college_name.clone().unwrap_or_default()),
            ("College Code", result.college_code.clone().unwrap_or_default()),
            ("Course", result.course.clone().unwrap_or_default()),
            ("Semester", semester),
            ("Exam Held", exam_held),
        ];

        let mut sgpa_slots: Vec<String> = result
            .sgpa
            .iter()
            .take(SGPA_SLOTS)
            .map(gpa_cell)
            .collect();
        sgpa_slots.resize(SGPA_SLOTS, "-".to_string());

        let remarks = result
            .remarks
            .as_deref()
            .unwrap_or_default()
            .to_uppercase();
        let failed = remarks.contains("FAIL");

        Self {
            header,
            theory: result.theory_subjects.clone(),
            practical: result.practical_subjects.clone(),
            sgpa_slots,
            cgpa: result
                .cgpa
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| "-".to_string()),
            remarks,
            failed,
        }
    }

    // == To HTML ==
    /// Serializes the view as a standalone HTML document.
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(4096);

        html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
        html.push_str("<title>Examination Result</title>\n<style>");
        html.push_str(STYLESHEET);
        html.push_str("</style>\n</head>\n<body>\n");
        html.push_str("<h1>EXAMINATION RESULT</h1>\n<h2>Statement of Marks</h2>\n");

        html.push_str("<table class=\"header-table\">\n");
        for (label, value) in &self.header {
            let _ = writeln!(
                html,
                "<tr><td class=\"label\">{}</td><td>{}</td></tr>",
                escape(label),
                escape(value)
            );
        }
        html.push_str("</table>\n");

        if !self.theory.is_empty() {
            html.push_str(&subject_table("Theory Subjects", &self.theory));
        }
        if !self.practical.is_empty() {
            html.push_str(&subject_table("Practical Subjects", &self.practical));
        }

        html.push_str("<table class=\"gpa-table\">\n<tr>");
        for sem in 1..=SGPA_SLOTS {
            let _ = write!(html, "<th>SGPA {}</th>", roman(sem));
        }
        html.push_str("<th>CGPA</th></tr>\n<tr>");
        for slot in &self.sgpa_slots {
            let _ = write!(html, "<td>{}</td>", escape(slot));
        }
        let _ = write!(html, "<td>{}</td>", escape(&self.cgpa));
        html.push_str("</tr>\n</table>\n");

        if !self.remarks.is_empty() {
            let class = if self.failed { "fail" } else { "pass" };
            let _ = writeln!(
                html,
                "<p class=\"remarks {}\">REMARKS: {}</p>",
                class,
                escape(&self.remarks)
            );
        }

        html.push_str("</body>\n</html>\n");
        html
    }

    /// Serializes the view with the auto-print script appended, for the
    /// "download as PDF" flow (print dialog in a fresh window).
    pub fn to_printable_html(&self) -> String {
        let mut html = self.to_html();
        if let Some(pos) = html.rfind("</body>") {
            html.insert_str(pos, PRINT_SCRIPT);
        }
        html
    }
}

/// Renders one SGPA value; nulls and containers show as "-".
fn gpa_cell(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => "-".to_string(),
    }
}

fn subject_table(title: &str, subjects: &[Subject]) -> String {
    let mut html = String::new();
    let _ = writeln!(html, "<h2>{}</h2>", escape(title));
    html.push_str(
        "<table>\n<tr><th>Code</th><th>Subject</th><th>ESE</th><th>IA</th><th>Total</th><th>Grade</th><th>Credit</th></tr>\n",
    );
    for subject in subjects {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            cell(&subject.code),
            cell(&subject.name),
            cell(&subject.ese),
            cell(&subject.ia),
            cell(&subject.total),
            cell(&subject.grade),
            cell(&subject.credit),
        );
    }
    html.push_str("</table>\n");
    html
}

/// Missing per-subject fields render as empty cells, never "undefined".
fn cell(field: &Option<String>) -> String {
    field.as_deref().map(escape).unwrap_or_default()
}

/// Minimal HTML escaping for interpolated upstream values.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Roman numeral for a semester slot (1-8).
fn roman(n: usize) -> &'static str {
    match n {
        1 => "I",
        2 => "II",
        3 => "III",
        4 => "IV",
        5 => "V",
        6 => "VI",
        7 => "VII",
        _ => "VIII",
    }
}
