//! Field value types for request validation and serialization

use serde::{Deserialize, Serialize};

/// A polymorphic request field value
///
/// Every request field is viewed through this type by the validation and
/// query-serialization engines. The three variants cover the semantic types
/// the wire contract declares for query parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get a numeric view of the value, if it holds one
    ///
    /// Integers widen to `f64`; strings have no numeric view.
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            FieldValue::String(_) => None,
        }
    }

    /// Check if the value is its type's zero value
    ///
    /// Zero values (empty string, 0, 0.0) mean "not provided" and are
    /// skipped by serialization and non-required validation.
    pub fn is_zero(&self) -> bool {
        match self {
            FieldValue::String(s) => s.is_empty(),
            FieldValue::Integer(i) => *i == 0,
            FieldValue::Float(f) => *f == 0.0,
        }
    }

    /// Format the value for the wire: strings as-is, numbers in their
    /// default decimal textual form
    pub fn to_param_string(&self) -> String {
        match self {
            FieldValue::String(s) => s.clone(),
            FieldValue::Integer(i) => i.to_string(),
            FieldValue::Float(f) => f.to_string(),
        }
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        FieldValue::String(value.clone())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<&i64> for FieldValue {
    fn from(value: &i64) -> Self {
        FieldValue::Integer(*value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<&f64> for FieldValue {
    fn from(value: &f64) -> Self {
        FieldValue::Float(*value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_string() {
        let value = FieldValue::String("90210".to_string());
        assert_eq!(value.as_str(), Some("90210"));
        assert_eq!(value.as_integer(), None);
        assert_eq!(value.as_numeric(), None);
        assert!(!value.is_zero());
    }

    #[test]
    fn test_field_value_integer() {
        let value = FieldValue::Integer(42);
        assert_eq!(value.as_integer(), Some(42));
        assert_eq!(value.as_numeric(), Some(42.0));
        assert_eq!(value.as_str(), None);
    }

    #[test]
    fn test_field_value_float() {
        let value = FieldValue::Float(2.5);
        assert_eq!(value.as_numeric(), Some(2.5));
        assert_eq!(value.as_str(), None);
        assert_eq!(value.as_integer(), None);
    }

    #[test]
    fn test_zero_values() {
        assert!(FieldValue::String(String::new()).is_zero());
        assert!(FieldValue::Integer(0).is_zero());
        assert!(FieldValue::Float(0.0).is_zero());

        assert!(!FieldValue::String("0".to_string()).is_zero());
        assert!(!FieldValue::Integer(-1).is_zero());
        assert!(!FieldValue::Float(0.5).is_zero());
    }

    #[test]
    fn test_to_param_string() {
        assert_eq!(
            FieldValue::String("12345".to_string()).to_param_string(),
            "12345"
        );
        assert_eq!(FieldValue::Integer(7).to_param_string(), "7");
        assert_eq!(FieldValue::Float(1.5).to_param_string(), "1.5");
        // Whole floats print without a trailing fraction
        assert_eq!(FieldValue::Float(5.0).to_param_string(), "5");
    }

    #[test]
    fn test_from_impls() {
        let zip = "90210".to_string();
        assert_eq!(
            FieldValue::from(&zip),
            FieldValue::String("90210".to_string())
        );
        assert_eq!(FieldValue::from(&3_i64), FieldValue::Integer(3));
        assert_eq!(FieldValue::from(&1.5_f64), FieldValue::Float(1.5));
    }

    #[test]
    fn test_serde_untagged() {
        let value: FieldValue = serde_json::from_str("\"abc\"").expect("should deserialize");
        assert_eq!(value, FieldValue::String("abc".to_string()));

        let value: FieldValue = serde_json::from_str("12").expect("should deserialize");
        assert_eq!(value, FieldValue::Integer(12));
    }
}
