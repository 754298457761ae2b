use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single attribute value of an asset record.
///
/// Records carry string and numeric attributes only. Comparisons in the
/// view pipeline always operate on the string form, so a numeric value
/// behaves exactly like its decimal rendering when searched or sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Number(Decimal),
}

impl FieldValue {
    /// The string form used for search, filter and sort comparisons.
    pub fn string_form(&self) -> String {
        match self {
            FieldValue::Text(value) => value.clone(),
            FieldValue::Number(value) => value.to_string(),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(value) => value.trim().is_empty(),
            FieldValue::Number(_) => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        FieldValue::Number(value)
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(value) => write!(f, "{value}"),
            FieldValue::Number(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn string_form_coerces_numbers() {
        let value = FieldValue::Number(Decimal::from_str("12.50").unwrap());
        assert_eq!(value.string_form(), "12.50");
        assert_eq!(FieldValue::from("SVC-001").string_form(), "SVC-001");
    }

    #[test]
    fn blank_detection_trims_whitespace() {
        assert!(FieldValue::Text("   ".to_string()).is_blank());
        assert!(!FieldValue::Text("x".to_string()).is_blank());
        assert!(!FieldValue::Number(Decimal::ZERO).is_blank());
    }
}
