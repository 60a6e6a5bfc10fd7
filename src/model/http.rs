/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::application::config::RestApiConfig;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::requests::RequestDescriptor;
use async_trait::async_trait;
use reqwest::Client as HttpInternalClient;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

/// Raw answer of a transport: status code and undecoded body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl TransportResponse {
    /// Creates a response from its parts
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Anything able to GET an absolute URL
///
/// The request core depends on nothing else, so any HTTP client can be substituted.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs a single GET and returns status and body
    async fn get(&self, url: &str) -> Result<TransportResponse, AppError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn get(&self, url: &str) -> Result<TransportResponse, AppError> {
        (**self).get(url).await
    }
}

/// `reqwest` backed transport
#[derive(Clone)]
pub struct HttpClient {
    http_client: HttpInternalClient,
}

impl HttpClient {
    /// Creates a transport with the configured timeout
    pub fn new(config: &RestApiConfig) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self { http_client })
    }

    /// Wraps an already built `reqwest` client
    pub fn from_reqwest(http_client: HttpInternalClient) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get(&self, url: &str) -> Result<TransportResponse, AppError> {
        let response = self
            .http_client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}

/// Issues the request described by `request` and decodes the JSON body
///
/// # Errors
/// * `AppError::Transport` - the transport could not complete the call
/// * `AppError::Request` - non-2xx status, carrying status and raw body
/// * `AppError::Decode` - the body is not valid JSON for `R`
pub async fn get_json<T, R>(transport: &T, request: &RequestDescriptor) -> Result<R, AppError>
where
    T: Transport + ?Sized,
    R: DeserializeOwned,
{
    debug!("GET {}", request);
    let response = transport.get(&request.url()).await?;
    debug!("Response status: {}", response.status);

    if !response.is_success() {
        error!(
            "Request failed with status {}: {}",
            response.status, response.body
        );
        return Err(AppError::Request {
            status: response.status,
            body: response.body,
        });
    }

    serde_json::from_str(&response.body).map_err(|e| {
        error!("Failed to decode response from {}: {}", request.path, e);
        AppError::Decode(e.to_string())
    })
}
