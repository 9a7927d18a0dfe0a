//! Core module: the generic validation and query-serialization machinery
//!
//! Everything here is endpoint-agnostic; sibling clients of the same API
//! family share it unchanged. Endpoint specifics live in a rule table and a
//! generated [`ApiRequest`](request::ApiRequest) implementation.

pub mod error;
pub mod field;
pub mod params;
pub mod request;
pub mod rules;
pub mod validate;

pub use error::{ClientError, ClientResult, ValidationError};
pub use field::FieldValue;
pub use params::query_params;
pub use request::ApiRequest;
pub use rules::{FieldFormat, ParamType, ValidationRule};
pub use validate::validate;
