//! The entry point: one [`Client`] owning every resource service.

use std::sync::Arc;

use swo_client_net::{BearerAuthTransport, GraphQLClient, HttpTransport};

use crate::config::{ClientConfig, ClientOption};
use crate::error::Result;
use crate::services::{
    AlertsService, ApiTokenService, DashboardsService, LogFilterService, NotificationsService,
    UriService, WebsiteService,
};

/// SolarWinds Observability API client.
///
/// Cheap to clone; clones share the same connection pool and configuration.
///
/// # Example
///
/// ```ignore
/// use swo_client::{CancellationToken, Client, ClientConfig};
///
/// let config = ClientConfig::builder().user_agent("my-tool").build();
/// let client = Client::new(api_token, config)?;
///
/// let cancel = CancellationToken::new();
/// let alert = client.alerts().read(&cancel, "alert-id").await?;
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    config: ClientConfig,
    user_agent: String,
    alerts: AlertsService,
    api_tokens: ApiTokenService,
    dashboards: DashboardsService,
    log_filters: LogFilterService,
    notifications: NotificationsService,
    uris: UriService,
    websites: WebsiteService,
}

impl Client {
    /// Build a client authenticating with `api_token`.
    ///
    /// Requests go through a [`BearerAuthTransport`] over the default
    /// [`HttpTransport`], unless the configuration carries a custom
    /// transport. A custom transport is used as-is and `api_token` is not
    /// applied to it.
    pub fn new(api_token: impl AsRef<str>, config: ClientConfig) -> Result<Self> {
        let api_token = api_token.as_ref();
        let user_agent = config.complete_user_agent();

        let builder = GraphQLClient::builder(config.base_url())
            .request_timeout(config.request_timeout())
            .debug(config.is_debug());

        let builder = match config.transport() {
            Some(transport) => {
                if !api_token.is_empty() {
                    tracing::warn!(
                        target: "swo_client::client",
                        "custom transport configured; the api token is not applied to it"
                    );
                }
                builder.shared_transport(Arc::clone(transport))
            }
            None => builder.transport(BearerAuthTransport::new(
                api_token,
                &user_agent,
                HttpTransport::new()?,
            )?),
        };
        let gql = builder.build()?;

        tracing::debug!(
            target: "swo_client::client",
            endpoint = %gql.endpoint(),
            user_agent = %user_agent,
            "client ready"
        );

        Ok(Self {
            inner: Arc::new(ClientInner {
                alerts: AlertsService::new(gql.clone()),
                api_tokens: ApiTokenService::new(gql.clone()),
                dashboards: DashboardsService::new(gql.clone()),
                log_filters: LogFilterService::new(gql.clone()),
                notifications: NotificationsService::new(gql.clone()),
                uris: UriService::new(gql.clone(), config.uri_read_policy().clone()),
                websites: WebsiteService::new(gql, config.website_read_policy().clone()),
                user_agent,
                config,
            }),
        })
    }

    /// Build a client from a list of options applied in order.
    pub fn with_options(
        api_token: impl AsRef<str>,
        options: impl IntoIterator<Item = ClientOption>,
    ) -> Result<Self> {
        Self::new(api_token, ClientConfig::from_options(options))
    }

    /// The finalized configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// The complete `User-Agent` value, e.g. `"my-tool:Swo-Api-Rust"`.
    pub fn user_agent(&self) -> &str {
        &self.inner.user_agent
    }

    pub fn alerts(&self) -> &AlertsService {
        &self.inner.alerts
    }

    pub fn api_tokens(&self) -> &ApiTokenService {
        &self.inner.api_tokens
    }

    pub fn dashboards(&self) -> &DashboardsService {
        &self.inner.dashboards
    }

    pub fn log_filters(&self) -> &LogFilterService {
        &self.inner.log_filters
    }

    pub fn notifications(&self) -> &NotificationsService {
        &self.inner.notifications
    }

    pub fn uris(&self) -> &UriService {
        &self.inner.uris
    }

    pub fn websites(&self) -> &WebsiteService {
        &self.inner.websites
    }
}
