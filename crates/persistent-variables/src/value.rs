use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Scalar stored under a variable name.
///
/// Script calls only ever store text; numbers and dates come from typed
/// callers. Every value renders to the string a script would see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum VariableValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
}

impl VariableValue {
    pub fn empty() -> Self {
        VariableValue::Text(String::new())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, VariableValue::Text(text) if text.is_empty())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            VariableValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl Default for VariableValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for VariableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableValue::Text(text) => f.write_str(text),
            VariableValue::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{n:.0}")
            }
            VariableValue::Number(n) => write!(f, "{n}"),
            VariableValue::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for VariableValue {
    fn from(value: &str) -> Self {
        VariableValue::Text(value.to_string())
    }
}

impl From<String> for VariableValue {
    fn from(value: String) -> Self {
        VariableValue::Text(value)
    }
}

impl From<f64> for VariableValue {
    fn from(value: f64) -> Self {
        VariableValue::Number(value)
    }
}

impl From<i64> for VariableValue {
    fn from(value: i64) -> Self {
        VariableValue::Number(value as f64)
    }
}

impl From<NaiveDate> for VariableValue {
    fn from(value: NaiveDate) -> Self {
        VariableValue::Date(value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn renders_as_script_text() {
        assert_eq!(VariableValue::from("abc").to_string(), "abc");
        assert_eq!(VariableValue::from(1999_i64).to_string(), "1999");
        assert_eq!(VariableValue::from(2.5).to_string(), "2.5");
        let date = NaiveDate::from_ymd_opt(1999, 1, 1).unwrap();
        assert_eq!(VariableValue::from(date).to_string(), "1999-01-01");
    }

    #[test]
    fn only_empty_text_is_empty() {
        assert!(VariableValue::default().is_empty());
        assert!(!VariableValue::from(0_i64).is_empty());
        assert!(!VariableValue::from(" ").is_empty());
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_string(&VariableValue::from(3_i64)).unwrap();
        assert_eq!(json, r#"{"type":"number","value":3.0}"#);
        let back: VariableValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, VariableValue::Number(3.0));
    }
}
