//! Query-parameter serialization engine
//!
//! Turns a request's field descriptors into the ordered key/value mapping
//! appended to the endpoint URL. Serialization never fails and performs no
//! validation; callers are expected to run
//! [`validate`](crate::core::validate::validate) first.

use crate::core::request::ApiRequest;
use indexmap::IndexMap;

/// Wire name that suppresses a field from serialization
const SUPPRESSED: &str = "-";

/// Serialize a request's non-empty fields into query parameters
///
/// Fields are visited in declaration order and inserted under their wire
/// names, so the mapping iterates in the same order the request declares.
/// Zero values, unnamed fields, and `-`-suppressed fields are skipped.
/// An absent request yields an empty mapping.
pub fn query_params<R: ApiRequest>(request: Option<&R>) -> IndexMap<String, String> {
    let mut params = IndexMap::new();
    let Some(request) = request else {
        return params;
    };

    for (name, value) in request.fields() {
        if name.is_empty() || name == SUPPRESSED {
            continue;
        }
        if value.is_zero() {
            continue;
        }
        params.insert(name.to_string(), value.to_param_string());
    }

    params
}
