//! GraphQL execution layer for the SolarWinds Observability client.
//!
//! This crate owns everything between a typed operation and the wire:
//!
//! - **Transports**: an object-safe [`Transport`] trait, the default
//!   reqwest-backed [`HttpTransport`] and [`BearerAuthTransport`], which adds
//!   the `Authorization`, `User-Agent` and `X-Request-Id` headers.
//! - **GraphQL**: request/response types, the [`GraphQLOperation`] trait for
//!   hand-written typed operations, and the [`GraphQLClient`] executor.
//! - **Cancellation**: a cloneable [`CancellationToken`] threaded through
//!   every round trip.
//!
//! # Example
//!
//! ```ignore
//! use swo_client_net::{BearerAuthTransport, CancellationToken, GraphQLClient, HttpTransport};
//!
//! let transport = BearerAuthTransport::new("token", "my-app:Swo-Api-Rust", HttpTransport::new()?);
//! let client = GraphQLClient::builder("https://api.dc-01.cloud.solarwinds.com/graphql")
//!     .transport(transport)
//!     .build()?;
//!
//! let cancel = CancellationToken::new();
//! let data = client.execute::<GetAlert>(&cancel, &GetAlertVariables { id }).await?;
//! ```

mod cancel;
mod error;
pub mod graphql;
pub mod transport;

pub use cancel::CancellationToken;
pub use error::{NetworkError, Result};

// Re-export commonly used types at the crate root
pub use graphql::{
    GraphQLClient, GraphQLClientBuilder, GraphQLError, GraphQLOperation, GraphQLRequest,
    GraphQLResponse, OperationType,
};
pub use transport::{
    BearerAuthTransport, HttpRequest, HttpResponse, HttpTransport, HttpTransportBuilder,
    Transport,
};
