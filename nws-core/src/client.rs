use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};

use crate::{error::NwsError, options::QueryParams};

pub const DEFAULT_BASE_URL: &str = "https://api.weather.gov/alerts";
pub const DEFAULT_USER_AGENT: &str = concat!("nws-cli/", env!("CARGO_PKG_VERSION"));
pub const GEO_JSON: &str = "application/geo+json";

/// Where to send requests and how to identify ourselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), user_agent: DEFAULT_USER_AGENT.to_string() }
    }
}

impl ClientConfig {
    /// Defaults, replaced by whichever overrides are given and non-blank.
    pub fn with_overrides(base_url: Option<String>, user_agent: Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            base_url: non_blank(base_url).unwrap_or(defaults.base_url),
            user_agent: non_blank(user_agent).unwrap_or(defaults.user_agent),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// A fully built GET request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
}

/// Status and complete body of a response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Issues a single GET. Implementations must not retry.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, NwsError>;
}

/// `reqwest`-backed transport with the library's default timeouts.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self { http: Client::new() }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, NwsError> {
        let mut builder = self.http.get(request.url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let res = builder
            .send()
            .await
            .map_err(|e| NwsError::transport(request.url.as_str(), e))?;

        let status = res.status();
        let body = res
            .bytes()
            .await
            .map_err(|e| NwsError::transport(request.url.as_str(), e))?;

        Ok(HttpResponse { status, body: body.to_vec() })
    }
}

/// Thin wrapper that owns the base URL, user agent and transport.
#[derive(Debug)]
pub struct NwsClient {
    config: ClientConfig,
    transport: Box<dyn Transport>,
}

impl NwsClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, Box::new(ReqwestTransport::new()))
    }

    pub fn with_transport(config: ClientConfig, transport: Box<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Join the base URL with `endpoint` and append `params` as a query string.
    pub fn endpoint_url(&self, endpoint: &str, params: &QueryParams) -> Result<Url, NwsError> {
        let raw = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );

        let mut url = Url::parse(&raw)
            .map_err(|e| NwsError::InvalidUrl { url: raw.clone(), reason: e.to_string() })?;

        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));
        }

        Ok(url)
    }

    /// GET `endpoint` and return the raw body.
    ///
    /// Any status above `200 OK` is an error; there is no retry.
    pub async fn call_endpoint(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> Result<Vec<u8>, NwsError> {
        let url = self.endpoint_url(endpoint, params)?;
        debug!(target_url = %url, "sending request");

        let request = HttpRequest {
            url,
            headers: vec![
                ("user-agent", self.config.user_agent.clone()),
                ("accept", GEO_JSON.to_string()),
            ],
        };

        let response = self.transport.get(&request).await?;
        debug!(status = response.status.as_u16(), "response status code");
        debug!(body = %String::from_utf8_lossy(&response.body), "raw response");

        if response.status > StatusCode::OK {
            warn!(status = %response.status, url = %request.url, "non-success status");
            return Err(NwsError::Status { status: response.status });
        }

        Ok(response.body)
    }
}
