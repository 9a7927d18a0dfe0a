//! HTTP transport for the ZIP demographics endpoint
//!
//! The client composes the core pipeline: validate the request, serialize
//! its query parameters, issue the GET with the API-key credential, and
//! decode the response envelope. Retry, caching, and backoff are left to
//! callers.

use crate::config::ClientConfig;
use crate::core::error::{ClientError, ClientResult};
use crate::core::params::query_params;
use crate::core::request::ApiRequest;
use crate::requests::ZipDemographicsRequest;
use crate::responses::{ApiResponse, ZipDemographics};
use indexmap::IndexMap;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Header carrying the API-key credential
const API_KEY_HEADER: &str = "x-api-key";

/// Async client for the ZIP Demographics API
///
/// Holds a shared connection pool; cloning is cheap and clones share it.
///
/// # Example
///
/// ```rust,ignore
/// use zipdemographics::prelude::*;
///
/// let client = ZipDemographicsClient::new("my-api-key");
/// let response = client
///     .execute(&ZipDemographicsRequest::new("90210"))
///     .await?;
/// if let Some(data) = response.data {
///     println!("{}: population {}", data.name, data.population.total);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ZipDemographicsClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl ZipDemographicsClient {
    /// Create a client with the default configuration
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a client from an explicit configuration
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Look up demographics for the requested ZIP code
    ///
    /// Validates the request first; an invalid request fails with
    /// [`ClientError::Validation`] without touching the network.
    pub async fn execute(
        &self,
        request: &ZipDemographicsRequest,
    ) -> ClientResult<ApiResponse<ZipDemographics>> {
        request.validate()?;
        let params = request.query_params();
        self.dispatch(ZipDemographicsRequest::endpoint(), &params)
            .await
    }

    /// Issue the call with no query parameters
    ///
    /// The server reports the missing parameter through its own error
    /// envelope; no client-side validation applies.
    pub async fn execute_empty(&self) -> ClientResult<ApiResponse<ZipDemographics>> {
        let params = query_params(None::<&ZipDemographicsRequest>);
        self.dispatch(ZipDemographicsRequest::endpoint(), &params)
            .await
    }

    /// Send a GET for an endpoint and decode its envelope
    async fn dispatch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &IndexMap<String, String>,
    ) -> ClientResult<ApiResponse<T>> {
        let url = self.config.endpoint_url(endpoint);
        debug!(endpoint, param_count = params.len(), "dispatching request");

        let response = self
            .http
            .get(&url)
            .timeout(self.config.timeout)
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(ACCEPT, "application/json")
            .query(params)
            .send()
            .await?;

        let status = response.status();
        debug!(endpoint, status = %status, "received response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiResponse<T>>(&body)
                .ok()
                .and_then(|envelope| envelope.error)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ApiResponse<T> = response.json().await?;
        if !envelope.is_ok() {
            return Err(ClientError::Api {
                status: envelope.code.unwrap_or_else(|| status.as_u16()),
                message: envelope
                    .error
                    .unwrap_or_else(|| "unspecified API error".to_string()),
            });
        }

        Ok(envelope)
    }
}
