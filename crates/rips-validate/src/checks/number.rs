//! Numeric range check with inclusive bounds.

use rips_model::{FieldValue, OutcomeLedger};

pub fn check(
    ledger: &mut OutcomeLedger,
    value: &FieldValue,
    field: &str,
    min: Option<f64>,
    max: Option<f64>,
) -> bool {
    let Some(number) = value.as_number() else {
        ledger.reject(
            format!("ERR_{field}_001"),
            format!("field {field} is required"),
            Some(field),
        );
        return false;
    };

    if let Some(min) = min
        && number < min
    {
        ledger.reject(
            format!("ERR_{field}_005"),
            format!("field {field} must be greater than or equal to {min}"),
            Some(field),
        );
        return false;
    }

    if let Some(max) = max
        && number > max
    {
        ledger.reject(
            format!("ERR_{field}_006"),
            format!("field {field} must be less than or equal to {max}"),
            Some(field),
        );
        return false;
    }
    true
}
