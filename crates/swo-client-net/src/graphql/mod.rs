//! GraphQL execution.
//!
//! Requests are POSTed as `{query, variables, operationName}` through a
//! [`Transport`](crate::Transport); the `{data, errors}` reply is decoded
//! into the operation's response type.
//!
//! # Example
//!
//! ```ignore
//! use swo_client_net::graphql::{GraphQLClient, GraphQLRequest};
//!
//! let client = GraphQLClient::builder("https://api.example.com/graphql")
//!     .transport(transport)
//!     .build()?;
//!
//! let request = GraphQLRequest::query("query getDashboard($id: ID!) { dashboards { byId(id: $id) { id } } }")
//!     .operation_name("getDashboard")
//!     .variable("id", "d-1");
//!
//! let response = client.execute_request(&cancel, request).await?;
//! ```

mod client;
mod operation;
mod request;
mod response;

pub use client::{GraphQLClient, GraphQLClientBuilder};
pub use operation::GraphQLOperation;
pub use request::{GraphQLRequest, OperationType};
pub use response::{GraphQLError, GraphQLLocation, GraphQLResponse, PathSegment};
