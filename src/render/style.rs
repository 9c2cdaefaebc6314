//! Marksheet Stylesheet and Print Trigger
//!
//! Fixed presentation assets embedded into every rendered document.

/// Print-oriented stylesheet embedded in every marksheet document.
pub const STYLESHEET: &str = r#"
body { font-family: Georgia, 'Times New Roman', serif; margin: 2rem auto; max-width: 52rem; color: #111; }
h1 { text-align: center; font-size: 1.3rem; letter-spacing: 0.08em; margin-bottom: 0.2rem; }
h2 { text-align: center; font-size: 1rem; font-weight: normal; margin-top: 0; }
table { width: 100%; border-collapse: collapse; margin: 0.8rem 0; }
th, td { border: 1px solid #444; padding: 0.3rem 0.5rem; font-size: 0.85rem; text-align: left; }
th { background: #eee; }
.header-table td.label { font-weight: bold; width: 11rem; }
.gpa-table td { text-align: center; }
.remarks { margin-top: 1rem; font-weight: bold; letter-spacing: 0.05em; }
.remarks.pass { color: #0a6b2d; }
.remarks.fail { color: #b00020; }
@media print { body { margin: 0.5rem; } }
"#;

/// Script appended to the print variant: gives layout a moment to settle,
/// then opens the platform print dialog.
pub const PRINT_SCRIPT: &str =
    r#"<script>window.addEventListener('load', function () { setTimeout(function () { window.print(); }, 400); });</script>"#;
