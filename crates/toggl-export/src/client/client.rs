use crate::{CliClientResult, ClientError};

use bytes::Bytes;
use log::{debug, info};
use reqwest::{Client as ReqwestClient, Url, header::ACCEPT};

/// Reports API summary endpoint
pub const SUMMARY_URL: &str = "https://toggl.com/reports/api/v2/summary";

/// Identifies this tool to the Reports API (required query parameter)
pub const USER_AGENT: &str = "toggl-export";

/// The Reports API takes the token as the basic-auth username and this literal as the password
const API_TOKEN_PASSWORD: &str = "api_token";

/// Report window, passed through verbatim.
///
/// An empty bound is sent as an empty query value and left for the API to
/// interpret as "omitted".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub since: String,
    pub until: String,
}

impl DateRange {
    pub fn new(since: impl Into<String>, until: impl Into<String>) -> Self {
        Self {
            since: since.into(),
            until: until.into(),
        }
    }
}

/// HTTP client for the Reports API
pub struct Client {
    pub endpoint: String,
    api_token: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `endpoint` - Summary endpoint URL (normally [`SUMMARY_URL`])
    /// * `api_token` - Reports API token
    pub fn new(endpoint: &str, api_token: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            api_token: api_token.to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Build the summary URL with its four query parameters, in a fixed order
    pub fn summary_url(&self, workspace_id: &str, range: &DateRange) -> CliClientResult<Url> {
        Url::parse_with_params(
            &self.endpoint,
            &[
                ("workspace_id", workspace_id),
                ("since", range.since.as_str()),
                ("until", range.until.as_str()),
                ("user_agent", USER_AGENT),
            ],
        )
        .map_err(|e| ClientError::url(format!("{}: {}", self.endpoint, e)))
    }

    /// Fetch the summary report and return the raw body.
    ///
    /// Transport failures and non-2xx responses are errors here, before any
    /// attempt to decode the body.
    pub async fn fetch_summary(
        &self,
        workspace_id: &str,
        range: &DateRange,
    ) -> CliClientResult<Bytes> {
        let url = self.summary_url(workspace_id, range)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .basic_auth(&self.api_token, Some(API_TOKEN_PASSWORD))
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(ClientError::status(status, &body));
        }

        info!("Fetched summary report ({} bytes)", body.len());
        Ok(body)
    }
}
