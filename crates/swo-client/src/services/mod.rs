//! Per-resource service handles.
//!
//! Each service shares the client's [`GraphQLClient`](swo_client_net::GraphQLClient)
//! and exposes `create`, `read`, `update` and `delete`. Mutations go through
//! [`execute_mutation`](crate::mutation::execute_mutation); reads of synthetic
//! checks go through [`resolve_entity`](crate::resolve::resolve_entity).

mod alerts;
mod api_tokens;
mod dashboards;
mod log_filters;
mod notifications;
mod uris;
mod websites;

pub use alerts::AlertsService;
pub use api_tokens::ApiTokenService;
pub use dashboards::DashboardsService;
pub use log_filters::LogFilterService;
pub use notifications::NotificationsService;
pub use uris::UriService;
pub use websites::WebsiteService;
