//! # zipdemographics
//!
//! Rust client for the ZIP Demographics API: look up population, income,
//! housing, education, employment, and racial-composition statistics for a
//! 5-digit US ZIP code.
//!
//! ## Features
//!
//! - **Declarative rule tables**: per-endpoint validation constraints
//!   (required flags, bounds, lengths, formats, allowed sets) declared once
//!   and checked generically
//! - **Generated field descriptors**: the `impl_api_request!` macro derives
//!   the field enumeration the engines iterate, no per-endpoint engine code
//! - **Full validation reports**: every violated constraint is collected,
//!   not just the first
//! - **Ordered query serialization**: non-empty fields become query
//!   parameters in declaration order
//! - **Typed errors**: validation, transport, API, and decode failures are
//!   distinct variants
//! - **Async transport**: reqwest/tokio GET with the `x-api-key` credential
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use zipdemographics::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> ClientResult<()> {
//!     let client = ZipDemographicsClient::new("my-api-key");
//!
//!     let request = ZipDemographicsRequest::new("90210");
//!     let response = client.execute(&request).await?;
//!
//!     if let Some(data) = response.data {
//!         println!("{}: {} residents", data.name, data.population.total);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! The validation and serialization engines are usable without the
//! transport:
//!
//! ```rust
//! use zipdemographics::prelude::*;
//!
//! let request = ZipDemographicsRequest::new("123");
//! let err = request.validate().unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Validation failed: Parameter [zip] must be at least 5 characters"
//! );
//! ```

pub mod client;
pub mod config;
pub mod core;
pub mod requests;
pub mod responses;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ClientError, ClientResult, ValidationError},
        field::FieldValue,
        params::query_params,
        request::ApiRequest,
        rules::{FieldFormat, ParamType, ValidationRule},
        validate::validate,
    };

    // === Macros ===
    pub use crate::impl_api_request;

    // === Client ===
    pub use crate::client::ZipDemographicsClient;
    pub use crate::config::ClientConfig;

    // === Endpoint bindings ===
    pub use crate::requests::ZipDemographicsRequest;
    pub use crate::responses::{ApiResponse, ZipDemographics};

    // === External dependencies ===
    pub use indexmap::IndexMap;
    pub use serde::{Deserialize, Serialize};
}
