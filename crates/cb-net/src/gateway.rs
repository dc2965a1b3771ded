//! Comments gateway trait and HTTP implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, IntoUrl, Url};
use tracing::debug;

use crate::error::NetError;
use crate::record::CommentRecord;

/// Source of comment records.
///
/// The seam between the board and the network: production code uses
/// [`HttpCommentsGateway`], tests substitute a double.
#[async_trait]
pub trait CommentsGateway: Send + Sync {
    /// Fetch the comments collection
    async fn fetch_comments(&self) -> Result<Vec<CommentRecord>, NetError>;
}

/// Gateway issuing a GET against a fixed comments endpoint
#[derive(Debug, Clone)]
pub struct HttpCommentsGateway {
    client: Client,
    endpoint: Url,
}

impl HttpCommentsGateway {
    /// Create a gateway for the given endpoint with default client settings
    pub fn new(endpoint: impl IntoUrl) -> Result<Self, NetError> {
        Self::with_timeout(endpoint, Duration::from_secs(10))
    }

    /// Create a gateway with an explicit request timeout
    pub fn with_timeout(endpoint: impl IntoUrl, timeout: Duration) -> Result<Self, NetError> {
        let endpoint = endpoint
            .into_url()
            .map_err(|err| NetError::InvalidEndpoint(err.to_string()))?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    /// Create a gateway from the fetch section of the app configuration
    pub fn from_config(config: &cb_core::config::FetchConfig) -> Result<Self, NetError> {
        Self::with_timeout(
            config.endpoint.as_str(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// The configured endpoint
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl CommentsGateway for HttpCommentsGateway {
    async fn fetch_comments(&self) -> Result<Vec<CommentRecord>, NetError> {
        debug!(endpoint = %self.endpoint, "fetching comments");
        let response = self.client.get(self.endpoint.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(NetError::Status(status));
        }
        let records = response.json::<Vec<CommentRecord>>().await?;
        debug!(count = records.len(), "comments fetched");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_rejects_invalid_endpoint() {
        let err = HttpCommentsGateway::new("not a url").unwrap_err();
        assert!(matches!(err, NetError::InvalidEndpoint(_)));
    }

    #[tokio::test]
    async fn test_fetch_decodes_record_collection() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/comments");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([
                    { "name": "Fetched #1" },
                    { "name": "Fetched #2" }
                ]));
        });

        let gateway = HttpCommentsGateway::new(server.url("/comments")).unwrap();
        let records = gateway.fetch_comments().await.unwrap();

        mock.assert();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Fetched #1");
        assert_eq!(records[1].name, "Fetched #2");
    }

    #[tokio::test]
    async fn test_fetch_surfaces_non_success_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/comments");
            then.status(500);
        });

        let gateway = HttpCommentsGateway::new(server.url("/comments")).unwrap();
        let err = gateway.fetch_comments().await.unwrap_err();
        assert!(matches!(
            err,
            NetError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR)
        ));
    }
}
