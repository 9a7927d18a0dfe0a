//! Generic request validation engine
//!
//! Walks a request's field descriptors in declaration order, checks each
//! field against the endpoint's rule table, and reports every violated
//! constraint at once rather than stopping at the first failure.

use crate::core::error::ValidationError;
use crate::core::request::ApiRequest;
use crate::core::rules::ParamType;

/// Validate a request against its rule table
///
/// Pure function of the request and the static rules; calling it twice on
/// the same request yields the same result. Checks per field:
///
/// 1. required + zero value: "missing" message, no further checks
/// 2. zero value, not required: field skipped entirely
/// 3. numeric bounds / string length and format, per the rule's type
/// 4. allowed-set membership, independent of type
pub fn validate<R: ApiRequest>(request: &R) -> Result<(), ValidationError> {
    let rules = R::rules();
    if rules.is_empty() {
        return Ok(());
    }

    let mut errors = Vec::new();

    for (name, value) in request.fields() {
        let Some(rule) = rules.get(name) else {
            continue;
        };

        if rule.required && value.is_zero() {
            errors.push(format!("Required parameter [{}] is missing", name));
            continue;
        }
        if value.is_zero() {
            continue;
        }

        match rule.param_type {
            ParamType::Integer | ParamType::Number => {
                // Bounds apply only to values that carry a numeric view;
                // a string under a numeric rule is left unchecked.
                if let Some(num) = value.as_numeric() {
                    if let Some(min) = rule.min {
                        if num < min {
                            errors.push(format!("Parameter [{}] must be at least {}", name, min));
                        }
                    }
                    if let Some(max) = rule.max {
                        if num > max {
                            errors.push(format!("Parameter [{}] must be at most {}", name, max));
                        }
                    }
                }
            }
            ParamType::String => {
                if let Some(text) = value.as_str() {
                    if let Some(min_length) = rule.min_length {
                        if text.len() < min_length {
                            errors.push(format!(
                                "Parameter [{}] must be at least {} characters",
                                name, min_length
                            ));
                        }
                    }
                    if let Some(max_length) = rule.max_length {
                        if text.len() > max_length {
                            errors.push(format!(
                                "Parameter [{}] must be at most {} characters",
                                name, max_length
                            ));
                        }
                    }
                    if let Some(format) = rule.format {
                        if !format.is_match(text) {
                            errors.push(format!(
                                "Parameter [{}] must be a valid {}",
                                name,
                                format.as_str()
                            ));
                        }
                    }
                }
            }
        }

        if !rule.allowed.is_empty() {
            let text = value.to_param_string();
            if !rule.allowed.iter().any(|allowed| *allowed == text) {
                errors.push(format!(
                    "Parameter [{}] must be one of: {}",
                    name,
                    rule.allowed.join(", ")
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::FieldValue;
    use crate::core::rules::{FieldFormat, ValidationRule};
    use std::collections::HashMap;
    use std::sync::OnceLock;

    // Hand-written descriptor impl covering every rule shape; endpoint
    // bindings use the macro instead.
    #[derive(Default)]
    struct Fixture {
        code: String,
        contact: String,
        count: i64,
        ratio: f64,
        mode: String,
    }

    impl ApiRequest for Fixture {
        fn endpoint() -> &'static str {
            "fixture"
        }

        fn rules() -> &'static HashMap<&'static str, ValidationRule> {
            static RULES: OnceLock<HashMap<&'static str, ValidationRule>> = OnceLock::new();
            RULES.get_or_init(|| {
                let mut rules = HashMap::new();
                rules.insert(
                    "code",
                    ValidationRule::string().required().min_length(5).max_length(5),
                );
                rules.insert(
                    "contact",
                    ValidationRule::string().format(FieldFormat::Email),
                );
                rules.insert("count", ValidationRule::integer().min(1.0).max(10.0));
                rules.insert("ratio", ValidationRule::number().max(1.0));
                rules.insert("mode", ValidationRule::string().one_of(["A", "B"]));
                // No "legacy" field exists; the entry must stay inert
                rules.insert("legacy", ValidationRule::string().required());
                rules
            })
        }

        fn fields(&self) -> Vec<(&'static str, FieldValue)> {
            vec![
                ("code", FieldValue::from(&self.code)),
                ("contact", FieldValue::from(&self.contact)),
                ("count", FieldValue::from(&self.count)),
                ("ratio", FieldValue::from(&self.ratio)),
                ("mode", FieldValue::from(&self.mode)),
            ]
        }
    }

    fn messages(result: Result<(), ValidationError>) -> Vec<String> {
        result.expect_err("expected validation failure").messages().to_vec()
    }

    #[test]
    fn test_valid_request_passes() {
        let request = Fixture {
            code: "12345".to_string(),
            ..Default::default()
        };
        assert!(validate(&request).is_ok());
    }

    #[test]
    fn test_missing_required_field() {
        let request = Fixture::default();
        let errors = messages(validate(&request));
        assert_eq!(errors, vec!["Required parameter [code] is missing"]);
    }

    #[test]
    fn test_required_check_short_circuits_length_check() {
        // An empty value is "missing", never "too short"
        let request = Fixture::default();
        let errors = messages(validate(&request));
        assert!(!errors.iter().any(|e| e.contains("characters")));
    }

    #[test]
    fn test_string_too_short() {
        let request = Fixture {
            code: "123".to_string(),
            ..Default::default()
        };
        let errors = messages(validate(&request));
        assert_eq!(errors, vec!["Parameter [code] must be at least 5 characters"]);
    }

    #[test]
    fn test_string_too_long() {
        let request = Fixture {
            code: "123456".to_string(),
            ..Default::default()
        };
        let errors = messages(validate(&request));
        assert_eq!(errors, vec!["Parameter [code] must be at most 5 characters"]);
    }

    #[test]
    fn test_optional_zero_fields_skipped() {
        // contact/count/ratio/mode are zero: no messages for them
        let request = Fixture {
            code: "12345".to_string(),
            ..Default::default()
        };
        assert!(validate(&request).is_ok());
    }

    #[test]
    fn test_format_check() {
        let request = Fixture {
            code: "12345".to_string(),
            contact: "not-an-email".to_string(),
            ..Default::default()
        };
        let errors = messages(validate(&request));
        assert_eq!(errors, vec!["Parameter [contact] must be a valid email"]);

        let request = Fixture {
            code: "12345".to_string(),
            contact: "a@b.co".to_string(),
            ..Default::default()
        };
        assert!(validate(&request).is_ok());
    }

    #[test]
    fn test_numeric_bounds() {
        let request = Fixture {
            code: "12345".to_string(),
            count: 11,
            ..Default::default()
        };
        let errors = messages(validate(&request));
        assert_eq!(errors, vec!["Parameter [count] must be at most 10"]);

        let request = Fixture {
            code: "12345".to_string(),
            ratio: 1.5,
            ..Default::default()
        };
        let errors = messages(validate(&request));
        assert_eq!(errors, vec!["Parameter [ratio] must be at most 1"]);
    }

    #[test]
    fn test_negative_number_below_min() {
        let request = Fixture {
            code: "12345".to_string(),
            count: -3,
            ..Default::default()
        };
        let errors = messages(validate(&request));
        assert_eq!(errors, vec!["Parameter [count] must be at least 1"]);
    }

    #[test]
    fn test_allowed_set() {
        let request = Fixture {
            code: "12345".to_string(),
            mode: "C".to_string(),
            ..Default::default()
        };
        let errors = messages(validate(&request));
        assert_eq!(errors, vec!["Parameter [mode] must be one of: A, B"]);

        for mode in ["A", "B"] {
            let request = Fixture {
                code: "12345".to_string(),
                mode: mode.to_string(),
                ..Default::default()
            };
            assert!(validate(&request).is_ok());
        }
    }

    #[test]
    fn test_all_violations_reported_in_declaration_order() {
        let request = Fixture {
            code: "123".to_string(),
            contact: "bad".to_string(),
            count: 99,
            ratio: 0.0,
            mode: "Z".to_string(),
        };
        let errors = messages(validate(&request));
        assert_eq!(
            errors,
            vec![
                "Parameter [code] must be at least 5 characters",
                "Parameter [contact] must be a valid email",
                "Parameter [count] must be at most 10",
                "Parameter [mode] must be one of: A, B",
            ]
        );
    }

    #[test]
    fn test_rule_for_undeclared_field_is_inert() {
        // The table carries a required "legacy" rule, but no such field is
        // declared, so it never fires
        let request = Fixture {
            code: "12345".to_string(),
            ..Default::default()
        };
        assert!(validate(&request).is_ok());
    }

    #[test]
    fn test_validate_is_idempotent() {
        let request = Fixture {
            code: "12".to_string(),
            ..Default::default()
        };
        let first = validate(&request);
        let second = validate(&request);
        assert_eq!(first.unwrap_err(), second.unwrap_err());
    }
}
