//! Response envelope and data models
//!
//! These types are populated exclusively by decoding the API's JSON payload;
//! nothing in this crate constructs or validates them.

pub mod zip_demographics;

pub use zip_demographics::ZipDemographics;

use serde::{Deserialize, Serialize};

/// Standard marketplace response envelope
///
/// Every endpoint in the family wraps its payload the same way: a `status`
/// flag, an optional error message, the typed `data` payload, and an
/// optional numeric code on failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub error: Option<String>,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl<T> ApiResponse<T> {
    /// Whether the envelope reports success
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
