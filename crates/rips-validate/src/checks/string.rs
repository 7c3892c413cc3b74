//! Required / length / pattern check for text fields.

use regex::Regex;

use rips_model::{FieldValue, OutcomeLedger};

/// Parameters of a text field check.
#[derive(Debug, Clone, Copy)]
pub struct StringRule<'a> {
    pub field: &'a str,
    pub max_len: usize,
    pub required: bool,
    /// Matched against the trimmed value.
    pub pattern: Option<&'a Regex>,
}

impl<'a> StringRule<'a> {
    pub fn required(field: &'a str, max_len: usize) -> Self {
        Self {
            field,
            max_len,
            required: true,
            pattern: None,
        }
    }

    pub fn optional(field: &'a str, max_len: usize) -> Self {
        Self {
            required: false,
            ..Self::required(field, max_len)
        }
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: &'a Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }
}

/// Run the checks in order (required, length, pattern); the first failure
/// is the only one reported.
pub fn check(ledger: &mut OutcomeLedger, value: &FieldValue, rule: &StringRule<'_>) -> bool {
    let field = rule.field;
    let Some(text) = value.as_text().filter(|text| !text.trim().is_empty()) else {
        if rule.required {
            ledger.reject(
                format!("ERR_{field}_001"),
                format!("field {field} is required"),
                Some(field),
            );
            return false;
        }
        return true;
    };

    if text.chars().count() > rule.max_len {
        ledger.reject(
            format!("ERR_{field}_002"),
            format!(
                "field {field} exceeds the maximum length of {}",
                rule.max_len
            ),
            Some(field),
        );
        return false;
    }

    if let Some(pattern) = rule.pattern
        && !pattern.is_match(text.trim())
    {
        ledger.reject(
            format!("ERR_{field}_003"),
            format!("field {field} does not match the expected format"),
            Some(field),
        );
        return false;
    }

    true
}
