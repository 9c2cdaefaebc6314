//! Lenient Upstream Body Parsing
//!
//! The upstream is untyped and historically inconsistent: it has returned
//! plain JSON, HTML error pages, and JSON embedded in surrounding text.
//! Parsing degrades in steps and never fails the lookup.

use serde_json::Value;

/// Outcome of parsing an upstream body.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedBody {
    /// Body was JSON (possibly after trimming surrounding junk)
    Structured(Value),
    /// Body could not be parsed; kept verbatim
    Raw(String),
}

impl ParsedBody {
    /// Converts into the payload served to callers: the structured value
    /// itself, or `{"raw": <text>}` so callers can tell the cases apart.
    pub fn into_payload(self) -> Value {
        match self {
            ParsedBody::Structured(value) => value,
            ParsedBody::Raw(text) => serde_json::json!({ "raw": text }),
        }
    }
}

// == Lenient Parse ==
/// Parses an upstream body, degrading gracefully.
///
/// 1. Strict JSON parse of the whole body.
/// 2. Parse of the substring from the first `{` to the last `}` (handles
///    JSON wrapped in logging or HTML noise).
/// 3. Raw fallback carrying the body verbatim.
pub fn parse_lenient(body: &str) -> ParsedBody {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        return ParsedBody::Structured(value);
    }

    if let (Some(start), Some(end)) = (body.find('{'), body.rfind('}')) {
        if start < end {
            if let Ok(value) = serde_json::from_str::<Value>(&body[start..=end]) {
                return ParsedBody::Structured(value);
            }
        }
    }

    ParsedBody::Raw(body.to_string())
}
