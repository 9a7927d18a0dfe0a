//! Request binding for the ZIP demographics endpoint

use crate::core::rules::ValidationRule;
use crate::impl_api_request;
use serde::{Deserialize, Serialize};

/// Parameters for a ZIP demographics lookup
///
/// Parameters:
/// - `zip` (required): 5-digit US ZIP code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZipDemographicsRequest {
    /// 5-digit US ZIP code
    pub zip: String,
}

impl ZipDemographicsRequest {
    pub fn new(zip: impl Into<String>) -> Self {
        Self { zip: zip.into() }
    }
}

impl_api_request!(
    ZipDemographicsRequest,
    "zipdemographics",
    [zip => "zip"],
    rules: {
        "zip" => ValidationRule::string().required().min_length(5).max_length(5),
    }
);
