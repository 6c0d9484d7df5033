//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Calculation;

/// The `/calculate` form body.
///
/// Both home-page forms post here: the station-pair form sends `from`
/// and `to`, the quick-sum form sends `firstNumber` and `secondNumber`.
/// Every field is optional so either variant deserializes cleanly.
#[derive(Debug, Default, Deserialize)]
pub struct CalculationForm {
    /// Origin station code.
    pub from: Option<String>,

    /// Destination station code.
    pub to: Option<String>,

    /// First summand, as typed.
    #[serde(rename = "firstNumber")]
    pub first_number: Option<String>,

    /// Second summand, as typed.
    #[serde(rename = "secondNumber")]
    pub second_number: Option<String>,
}

impl CalculationForm {
    /// Interpret the submission, station pair first.
    ///
    /// A complete station pair (both fields present and non-blank after
    /// trimming) wins over any number fields. Otherwise both numbers
    /// must parse as `i64` and their sum must not overflow. Anything
    /// else is `None` and the caller redirects without storing a
    /// result.
    pub fn into_calculation(self) -> Option<Calculation> {
        let from = trimmed(self.from.as_deref());
        let to = trimmed(self.to.as_deref());
        if let (Some(from), Some(to)) = (from, to) {
            return Some(Calculation::departure(from, to));
        }

        let first: i64 = trimmed(self.first_number.as_deref())?.parse().ok()?;
        let second: i64 = trimmed(self.second_number.as_deref())?.parse().ok()?;
        Calculation::sum(first, second)
    }
}

/// Trim a field, mapping blank to absent.
fn trimmed(field: Option<&str>) -> Option<&str> {
    field.map(str::trim).filter(|value| !value.is_empty())
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
