//! GraphQL client implementation.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use http::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use url::Url;

use super::operation::GraphQLOperation;
use super::request::{GraphQLRequest, OperationType};
use super::response::GraphQLResponse;
use crate::cancel::CancellationToken;
use crate::error::{NetworkError, Result};
use crate::transport::{HttpRequest, HttpTransport, Transport};

const APPLICATION_JSON: &str = "application/json";

/// Builder for creating a GraphQL client.
pub struct GraphQLClientBuilder {
    url: String,
    transport: Option<Arc<dyn Transport>>,
    request_timeout: Option<Duration>,
    debug: bool,
}

impl GraphQLClientBuilder {
    /// Create a new builder with the specified GraphQL endpoint URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            transport: None,
            request_timeout: None,
            debug: false,
        }
    }

    /// Use a specific transport.
    ///
    /// Defaults to an unauthenticated [`HttpTransport`].
    pub fn transport(self, transport: impl Transport + 'static) -> Self {
        self.shared_transport(Arc::new(transport))
    }

    /// Use an already shared transport.
    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Bound every round trip by `timeout`.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Dump request and response bodies at `debug` level.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Build the GraphQL client.
    pub fn build(self) -> Result<GraphQLClient> {
        let endpoint = Url::parse(&self.url)?;
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new()?),
        };

        Ok(GraphQLClient {
            inner: Arc::new(GraphQLClientInner {
                transport,
                endpoint,
                request_timeout: self.request_timeout,
                debug: self.debug,
            }),
        })
    }
}

struct GraphQLClientInner {
    transport: Arc<dyn Transport>,
    endpoint: Url,
    request_timeout: Option<Duration>,
    debug: bool,
}

/// A GraphQL client for queries and mutations.
///
/// The client is cheaply cloneable and thread-safe. Clones share the same
/// transport and configuration.
#[derive(Clone)]
pub struct GraphQLClient {
    inner: Arc<GraphQLClientInner>,
}

impl fmt::Debug for GraphQLClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphQLClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .field("request_timeout", &self.inner.request_timeout)
            .field("debug", &self.inner.debug)
            .finish_non_exhaustive()
    }
}

impl GraphQLClient {
    /// Create a new builder for configuring a GraphQL client.
    pub fn builder(url: impl Into<String>) -> GraphQLClientBuilder {
        GraphQLClientBuilder::new(url)
    }

    /// The endpoint every request is posted to.
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// The per-round-trip timeout, if any.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.inner.request_timeout
    }

    /// Whether bodies are dumped at `debug` level.
    pub fn is_debug(&self) -> bool {
        self.inner.debug
    }

    /// Execute a typed operation and decode its `data`.
    ///
    /// Transport failures, non-2xx statuses, malformed bodies and non-empty
    /// `errors` arrays are all returned as [`NetworkError`].
    pub async fn execute<O: GraphQLOperation>(
        &self,
        cancel: &CancellationToken,
        variables: &O::Variables,
    ) -> Result<O::ResponseData> {
        let mut request = match O::OPERATION_TYPE {
            OperationType::Query => GraphQLRequest::query(O::QUERY),
            OperationType::Mutation => GraphQLRequest::mutation(O::QUERY),
        };
        request = request
            .operation_name(O::OPERATION_NAME)
            .variables(serde_json::to_value(variables)?);

        self.execute_request(cancel, request).await?.into_data()
    }

    /// Execute a raw request.
    ///
    /// Only transport-level failures are errors here; a `200` reply that
    /// carries an `errors` array is returned as-is.
    pub async fn execute_request(
        &self,
        cancel: &CancellationToken,
        request: GraphQLRequest,
    ) -> Result<GraphQLResponse> {
        if cancel.is_cancelled() {
            return Err(NetworkError::Cancelled);
        }

        let operation = request.operation_name.clone().unwrap_or_default();
        let body = serde_json::to_vec(&request)?;

        if self.inner.debug {
            tracing::debug!(
                target: "swo_client_net::graphql",
                operation = %operation,
                kind = ?request.operation_type(),
                body = %String::from_utf8_lossy(&body),
                "sending request"
            );
        }

        let http_request = HttpRequest::new(self.inner.endpoint.as_str(), body)
            .header(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))
            .header(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));

        let round_trip = self.inner.transport.round_trip(http_request);
        let bounded = async {
            match self.inner.request_timeout {
                Some(limit) => match tokio::time::timeout(limit, round_trip).await {
                    Ok(result) => result,
                    Err(_) => Err(NetworkError::Timeout),
                },
                None => round_trip.await,
            }
        };

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(NetworkError::Cancelled),
            response = bounded => response?,
        };

        if self.inner.debug {
            tracing::debug!(
                target: "swo_client_net::graphql",
                operation = %operation,
                status = response.status,
                body = %response.text(),
                "received response"
            );
        }

        if !response.is_success() {
            let message = response.text();
            return Err(NetworkError::HttpStatus {
                status: response.status,
                message: (!message.is_empty()).then_some(message),
            });
        }

        let graphql_response: GraphQLResponse = serde_json::from_slice(&response.body)?;
        Ok(graphql_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_rejects_invalid_url() {
        let result = GraphQLClient::builder("not a url").build();
        assert!(matches!(result, Err(NetworkError::InvalidUrl(_))));
    }

    #[test]
    fn test_builder_settings() {
        let client = GraphQLClient::builder("https://api.example.com/graphql")
            .request_timeout(Duration::from_secs(5))
            .debug(true)
            .build()
            .unwrap();

        assert_eq!(client.endpoint().as_str(), "https://api.example.com/graphql");
        assert_eq!(client.request_timeout(), Some(Duration::from_secs(5)));
        assert!(client.is_debug());
    }
}
