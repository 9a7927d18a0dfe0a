//! Macro for generating request descriptor implementations
//!
//! Generates the [`ApiRequest`](crate::core::request::ApiRequest) impl for
//! an endpoint's request struct from a declarative listing, so the field
//! enumeration the engines rely on is written once per endpoint instead of
//! once per engine.

/// Implement `ApiRequest` for a request struct
///
/// Takes the struct name, the endpoint path segment, the `field => "wire
/// name"` pairs in declaration order, and a block building the rule table.
/// The rule table is built once on first use and shared afterwards.
///
/// # Example
///
/// ```rust,ignore
/// use zipdemographics::prelude::*;
///
/// #[derive(Debug, Clone, Default)]
/// pub struct LookupRequest {
///     pub zip: String,
/// }
///
/// impl_api_request!(
///     LookupRequest,
///     "zipdemographics",
///     [zip => "zip"],
///     rules: {
///         "zip" => ValidationRule::string().required().min_length(5).max_length(5),
///     }
/// );
/// ```
#[macro_export]
macro_rules! impl_api_request {
    (
        $type:ident,
        $endpoint:expr,
        [ $( $field:ident => $wire:expr ),* $(,)? ],
        rules: {
            $( $rule_name:expr => $rule:expr ),* $(,)?
        }
    ) => {
        impl $crate::core::request::ApiRequest for $type {
            fn endpoint() -> &'static str {
                $endpoint
            }

            fn rules() -> &'static ::std::collections::HashMap<
                &'static str,
                $crate::core::rules::ValidationRule,
            > {
                use ::std::sync::OnceLock;
                static RULES: OnceLock<
                    ::std::collections::HashMap<&'static str, $crate::core::rules::ValidationRule>,
                > = OnceLock::new();
                RULES.get_or_init(|| {
                    let mut rules = ::std::collections::HashMap::new();
                    $( rules.insert($rule_name, $rule); )*
                    rules
                })
            }

            fn fields(&self) -> Vec<(&'static str, $crate::core::field::FieldValue)> {
                vec![
                    $( ($wire, $crate::core::field::FieldValue::from(&self.$field)) ),*
                ]
            }
        }
    };
}
