//! Request descriptor trait
//!
//! [`ApiRequest`] is the seam between an endpoint's request struct and the
//! generic validation/serialization engines. Implementations are generated
//! by the [`impl_api_request!`](crate::impl_api_request) macro from a
//! declarative field listing, so no per-endpoint engine code is written by
//! hand.

use crate::core::error::ValidationError;
use crate::core::field::FieldValue;
use crate::core::rules::ValidationRule;
use indexmap::IndexMap;
use std::collections::HashMap;

/// A request to a marketplace API endpoint
pub trait ApiRequest {
    /// Endpoint path segment (e.g. "zipdemographics")
    fn endpoint() -> &'static str;

    /// Validation rules keyed by wire name
    ///
    /// The key set must be a subset of the wire names [`fields`](Self::fields)
    /// yields; a rule for an undeclared field is inert.
    fn rules() -> &'static HashMap<&'static str, ValidationRule>;

    /// The request's `(wire name, value)` pairs, in declaration order
    fn fields(&self) -> Vec<(&'static str, FieldValue)>;

    /// Check the request against its rule table
    ///
    /// Collects every violated constraint; see [`crate::core::validate`].
    fn validate(&self) -> Result<(), ValidationError>
    where
        Self: Sized,
    {
        crate::core::validate::validate(self)
    }

    /// Serialize the non-empty fields into query parameters
    ///
    /// Performs no validation; see [`crate::core::params`].
    fn query_params(&self) -> IndexMap<String, String>
    where
        Self: Sized,
    {
        crate::core::params::query_params(Some(self))
    }
}
