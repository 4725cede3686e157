//! Client configuration.
//!
//! Options are applied in the order given. Each one is checked on its own: a
//! bad option is logged, recorded as a [`ConfigWarning`] and otherwise
//! ignored, leaving the previous value in place.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use http::HeaderValue;
use swo_client_net::Transport;
use url::Url;

use crate::resolve::ReadPolicy;

/// Default GraphQL endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.dc-01.cloud.solarwinds.com/graphql";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Identifier always present in the `User-Agent` header.
pub const CLIENT_IDENTIFIER: &str = "Swo-Api-Rust";

/// A single configuration override.
#[derive(Clone)]
pub enum ClientOption {
    /// GraphQL endpoint. Must be an absolute `http` or `https` URL.
    BaseUrl(String),
    /// Dump request and response bodies at `debug` level.
    Debug(bool),
    /// Per-request timeout. Must be non-zero.
    RequestTimeout(Duration),
    /// Use this transport as-is instead of the bearer-token transport.
    Transport(Arc<dyn Transport>),
    /// Caller string prepended to the client identifier.
    UserAgent(String),
    /// Read policy for URI checks.
    UriReadPolicy(ReadPolicy),
    /// Read policy for website checks.
    WebsiteReadPolicy(ReadPolicy),
}

impl ClientOption {
    /// Short name used in warnings.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BaseUrl(_) => "base_url",
            Self::Debug(_) => "debug",
            Self::RequestTimeout(_) => "request_timeout",
            Self::Transport(_) => "transport",
            Self::UserAgent(_) => "user_agent",
            Self::UriReadPolicy(_) => "uri_read_policy",
            Self::WebsiteReadPolicy(_) => "website_read_policy",
        }
    }
}

impl fmt::Debug for ClientOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BaseUrl(url) => f.debug_tuple("BaseUrl").field(url).finish(),
            Self::Debug(debug) => f.debug_tuple("Debug").field(debug).finish(),
            Self::RequestTimeout(t) => f.debug_tuple("RequestTimeout").field(t).finish(),
            Self::Transport(_) => f.write_str("Transport(..)"),
            Self::UserAgent(ua) => f.debug_tuple("UserAgent").field(ua).finish(),
            Self::UriReadPolicy(p) => f.debug_tuple("UriReadPolicy").field(p).finish(),
            Self::WebsiteReadPolicy(p) => f.debug_tuple("WebsiteReadPolicy").field(p).finish(),
        }
    }
}

/// An option that was rejected while building a [`ClientConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Which option failed.
    pub option: &'static str,
    /// Why it failed.
    pub reason: String,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "client option error. fallback to default value: {}: {}",
            self.option, self.reason
        )
    }
}

/// Immutable client configuration.
#[derive(Clone)]
pub struct ClientConfig {
    base_url: String,
    request_timeout: Duration,
    debug: bool,
    transport: Option<Arc<dyn Transport>>,
    user_agent: Option<String>,
    uri_read_policy: ReadPolicy,
    website_read_policy: ReadPolicy,
    warnings: Vec<ConfigWarning>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            debug: false,
            transport: None,
            user_agent: None,
            uri_read_policy: ReadPolicy::retry_until_found(),
            website_read_policy: ReadPolicy::Immediate,
            warnings: Vec::new(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .field("debug", &self.debug)
            .field("custom_transport", &self.transport.is_some())
            .field("user_agent", &self.user_agent)
            .field("uri_read_policy", &self.uri_read_policy)
            .field("website_read_policy", &self.website_read_policy)
            .field("warnings", &self.warnings)
            .finish()
    }
}

impl ClientConfig {
    /// Create a builder starting from the defaults.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Apply `options` in order on top of the defaults.
    pub fn from_options(options: impl IntoIterator<Item = ClientOption>) -> Self {
        ClientConfigBuilder::new().options(options).build()
    }

    /// The GraphQL endpoint.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Whether bodies are dumped at `debug` level.
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// The caller-supplied transport, if any.
    pub fn transport(&self) -> Option<&Arc<dyn Transport>> {
        self.transport.as_ref()
    }

    /// The caller's user-agent prefix, if any.
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// The full `User-Agent` value: `"<caller>:Swo-Api-Rust"` or the bare
    /// identifier.
    pub fn complete_user_agent(&self) -> String {
        complete_user_agent(self.user_agent.as_deref())
    }

    /// Read policy for URI checks.
    pub fn uri_read_policy(&self) -> &ReadPolicy {
        &self.uri_read_policy
    }

    /// Read policy for website checks.
    pub fn website_read_policy(&self) -> &ReadPolicy {
        &self.website_read_policy
    }

    /// Options that were rejected, in the order they were applied.
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }
}

fn complete_user_agent(prefix: Option<&str>) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{CLIENT_IDENTIFIER}"),
        _ => CLIENT_IDENTIFIER.to_owned(),
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the GraphQL endpoint.
    pub fn base_url(self, url: impl Into<String>) -> Self {
        self.option(ClientOption::BaseUrl(url.into()))
    }

    /// Enable or disable body dumping.
    pub fn debug(self, debug: bool) -> Self {
        self.option(ClientOption::Debug(debug))
    }

    /// Set the per-request timeout.
    pub fn request_timeout(self, timeout: Duration) -> Self {
        self.option(ClientOption::RequestTimeout(timeout))
    }

    /// Use a custom transport.
    pub fn transport(self, transport: impl Transport + 'static) -> Self {
        self.option(ClientOption::Transport(Arc::new(transport)))
    }

    /// Prepend `user_agent` to the client identifier.
    pub fn user_agent(self, user_agent: impl Into<String>) -> Self {
        self.option(ClientOption::UserAgent(user_agent.into()))
    }

    /// Set the read policy for URI checks.
    pub fn uri_read_policy(self, policy: ReadPolicy) -> Self {
        self.option(ClientOption::UriReadPolicy(policy))
    }

    /// Set the read policy for website checks.
    pub fn website_read_policy(self, policy: ReadPolicy) -> Self {
        self.option(ClientOption::WebsiteReadPolicy(policy))
    }

    /// Apply several options in order.
    pub fn options(self, options: impl IntoIterator<Item = ClientOption>) -> Self {
        options.into_iter().fold(self, Self::option)
    }

    /// Apply one option, recording a warning if it is rejected.
    pub fn option(mut self, option: ClientOption) -> Self {
        let name = option.name();
        if let Err(reason) = self.apply(option) {
            let warning = ConfigWarning {
                option: name,
                reason,
            };
            tracing::error!(target: "swo_client::config", option = name, "{warning}");
            self.config.warnings.push(warning);
        }
        self
    }

    /// Finish building.
    pub fn build(self) -> ClientConfig {
        self.config
    }

    fn apply(&mut self, option: ClientOption) -> Result<(), String> {
        let config = &mut self.config;
        match option {
            ClientOption::BaseUrl(raw) => {
                let url = Url::parse(&raw).map_err(|e| format!("invalid base url {raw:?}: {e}"))?;
                if !matches!(url.scheme(), "http" | "https") {
                    return Err(format!("unsupported scheme {:?}", url.scheme()));
                }
                config.base_url = url.into();
            }
            ClientOption::Debug(debug) => config.debug = debug,
            ClientOption::RequestTimeout(timeout) => {
                if timeout.is_zero() {
                    return Err("request timeout must be non-zero".into());
                }
                config.request_timeout = timeout;
            }
            ClientOption::Transport(transport) => config.transport = Some(transport),
            ClientOption::UserAgent(user_agent) => {
                HeaderValue::try_from(complete_user_agent(Some(&user_agent)))
                    .map_err(|e| format!("invalid user agent {user_agent:?}: {e}"))?;
                config.user_agent = Some(user_agent);
            }
            ClientOption::UriReadPolicy(policy) => config.uri_read_policy = policy,
            ClientOption::WebsiteReadPolicy(policy) => config.website_read_policy = policy,
        }
        Ok(())
    }
}
