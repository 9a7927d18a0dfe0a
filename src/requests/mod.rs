//! Request bindings for the marketplace endpoints
//!
//! Each binding is a plain struct plus a declarative
//! [`impl_api_request!`](crate::impl_api_request) invocation naming its
//! wire fields and rule table.

pub mod macros;
pub mod zip_demographics;

pub use zip_demographics::ZipDemographicsRequest;
