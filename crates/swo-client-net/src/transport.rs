//! HTTP transports used by the GraphQL executor.
//!
//! A [`Transport`] performs one HTTP POST round trip. The default
//! [`HttpTransport`] is backed by reqwest; [`BearerAuthTransport`] decorates
//! any other transport with authentication and correlation headers. Callers
//! can supply their own implementation to route requests elsewhere.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use futures_util::future::BoxFuture;
use http::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue, USER_AGENT};

use crate::error::{NetworkError, Result};

/// Header carrying a fresh correlation id on every authenticated request.
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// An outgoing HTTP POST.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Target URL.
    pub url: String,
    /// Request headers.
    pub headers: HeaderMap,
    /// Request body.
    pub body: Bytes,
}

impl HttpRequest {
    /// Create a request with no headers.
    pub fn new(url: impl Into<String>, body: impl Into<Bytes>) -> Self {
        Self {
            url: url.into(),
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Add a header, replacing any previous value.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// A received HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body.
    pub body: Bytes,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body decoded as UTF-8, lossily.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Performs a single HTTP round trip.
///
/// Implementations must be cheap to share; the executor holds them behind an
/// `Arc` and calls them concurrently.
pub trait Transport: Send + Sync {
    /// Send `request` and return the raw response.
    ///
    /// Non-2xx statuses are returned as responses, not errors.
    fn round_trip(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse>>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn round_trip(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse>> {
        (**self).round_trip(request)
    }
}

/// Builder for [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct HttpTransportBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl Default for HttpTransportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransportBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            timeout: None,
            connect_timeout: Some(Duration::from_secs(10)),
        }
    }

    /// Set a per-request timeout enforced by the HTTP stack.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Build the transport.
    pub fn build(self) -> Result<HttpTransport> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = self.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        Ok(HttpTransport {
            client: builder.build()?,
        })
    }
}

/// The default transport, backed by a pooled reqwest client.
///
/// Cheaply cloneable; clones share the connection pool.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with default configuration.
    pub fn new() -> Result<Self> {
        HttpTransportBuilder::new().build()
    }

    /// Create a builder for configuring a transport.
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::new()
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport").finish_non_exhaustive()
    }
}

impl Transport for HttpTransport {
    fn round_trip(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse>> {
        Box::pin(async move {
            let response = self
                .client
                .post(&request.url)
                .headers(request.headers)
                .body(request.body)
                .send()
                .await?;

            let status = response.status().as_u16();
            let headers = response.headers().clone();
            let body = response.bytes().await?;

            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        })
    }
}

/// Decorates a transport with bearer authentication.
///
/// Every request gets `Authorization: Bearer <token>`, the configured
/// `User-Agent` and a fresh `X-Request-Id`.
#[derive(Clone)]
pub struct BearerAuthTransport {
    authorization: HeaderValue,
    user_agent: HeaderValue,
    inner: Arc<dyn Transport>,
}

impl BearerAuthTransport {
    /// Wrap `inner`, authenticating with `token`.
    ///
    /// Fails when the token or user agent cannot be encoded as header values.
    pub fn new(
        token: impl AsRef<str>,
        user_agent: impl AsRef<str>,
        inner: impl Transport + 'static,
    ) -> Result<Self> {
        let mut authorization = HeaderValue::try_from(format!("Bearer {}", token.as_ref()))?;
        authorization.set_sensitive(true);
        let user_agent = HeaderValue::try_from(user_agent.as_ref())?;

        Ok(Self {
            authorization,
            user_agent,
            inner: Arc::new(inner),
        })
    }

    /// The user agent sent with every request.
    pub fn user_agent(&self) -> &str {
        self.user_agent.to_str().unwrap_or_default()
    }
}

impl fmt::Debug for BearerAuthTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerAuthTransport")
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl Transport for BearerAuthTransport {
    fn round_trip(&self, mut request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse>> {
        request
            .headers
            .insert(AUTHORIZATION, self.authorization.clone());
        request.headers.insert(USER_AGENT, self.user_agent.clone());

        match HeaderValue::try_from(uuid::Uuid::new_v4().to_string()) {
            Ok(id) => {
                request
                    .headers
                    .insert(HeaderName::from_static("x-request-id"), id);
            }
            Err(err) => return Box::pin(async move { Err(NetworkError::from(err)) }),
        }

        self.inner.round_trip(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording {
        seen: Mutex<Vec<HeaderMap>>,
    }

    impl Transport for Recording {
        fn round_trip(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse>> {
            self.seen.lock().unwrap().push(request.headers);
            Box::pin(async {
                Ok(HttpResponse {
                    status: 200,
                    headers: HeaderMap::new(),
                    body: Bytes::from_static(b"{}"),
                })
            })
        }
    }

    #[tokio::test]
    async fn test_bearer_transport_sets_headers() {
        let recording = Arc::new(Recording::default());
        let transport =
            BearerAuthTransport::new("secret", "app:Swo-Api-Rust", recording.clone()).unwrap();

        transport
            .round_trip(HttpRequest::new("http://localhost/graphql", "{}"))
            .await
            .unwrap();
        transport
            .round_trip(HttpRequest::new("http://localhost/graphql", "{}"))
            .await
            .unwrap();

        let seen = recording.seen.lock().unwrap();
        assert_eq!(seen[0][AUTHORIZATION], "Bearer secret");
        assert_eq!(seen[0][USER_AGENT], "app:Swo-Api-Rust");
        assert_ne!(seen[0][REQUEST_ID_HEADER], seen[1][REQUEST_ID_HEADER]);
        assert_eq!(transport.user_agent(), "app:Swo-Api-Rust");
    }

    #[test]
    fn test_bearer_transport_rejects_invalid_token() {
        let err = BearerAuthTransport::new("bad\ntoken", "ua", Recording::default()).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidHeader(_)));
    }

    #[test]
    fn test_response_success_range() {
        let mut response = HttpResponse {
            status: 204,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        };
        assert!(response.is_success());
        response.status = 500;
        assert!(!response.is_success());
    }
}
