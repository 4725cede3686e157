//! Typed client for the SolarWinds Observability GraphQL API.
//!
//! A [`Client`] hands out one service per resource:
//!
//! - [`AlertsService`]: alert definitions
//! - [`ApiTokenService`]: API tokens
//! - [`DashboardsService`]: dashboards
//! - [`LogFilterService`]: log exclusion filters
//! - [`NotificationsService`]: notification service configurations
//! - [`UriService`] and [`WebsiteService`]: synthetic checks
//!
//! Every operation is `async`, takes a [`CancellationToken`] and returns
//! [`Result`]. Errors keep their class: transport failures pass through as
//! [`ClientError::Transport`], server rejections of a mutation become
//! [`ClientError::Rejected`], and missing entities [`ClientError::NotFound`].
//!
//! # Example
//!
//! ```ignore
//! use swo_client::{CancellationToken, Client, ClientConfig};
//! use swo_client::operations::dashboards::CreateDashboardInput;
//!
//! let client = Client::new(token, ClientConfig::builder().user_agent("my-tool").build())?;
//! let cancel = CancellationToken::new();
//!
//! let dashboard = client
//!     .dashboards()
//!     .create(&cancel, CreateDashboardInput {
//!         name: "ops".into(),
//!         is_private: None,
//!         category_id: None,
//!         layout: vec![],
//!         widgets: vec![],
//!     })
//!     .await?;
//! ```
//!
//! # Eventually consistent reads
//!
//! Freshly created synthetic checks may not be readable at once. Their reads
//! follow a [`ReadPolicy`]: either fail immediately with `NotFound`, or retry
//! under an [`ExponentialBackoff`] and fail with [`ClientError::Timeout`]
//! once its ceiling is reached. URI checks retry by default; websites do not.

pub mod alert_condition;
mod backoff;
mod client;
pub mod config;
mod error;
pub mod mutation;
pub mod operations;
pub mod resolve;
mod services;
pub mod types;
mod util;

pub use backoff::{Delays, ExponentialBackoff};
pub use client::Client;
pub use config::{ClientConfig, ClientConfigBuilder, ClientOption, ConfigWarning};
pub use error::{ClientError, FailureFormat, Rejection, Result};
pub use resolve::ReadPolicy;
pub use services::{
    AlertsService, ApiTokenService, DashboardsService, LogFilterService, NotificationsService,
    UriService, WebsiteService,
};
pub use types::{InvalidTestInterval, TestIntervalInSeconds};
pub use util::convert_object;

pub use swo_client_net::{CancellationToken, NetworkError, Transport};
