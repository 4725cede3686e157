//! Typed GraphQL operations and schema types, one module per resource.
//!
//! Every operation is a unit struct implementing
//! [`GraphQLOperation`](swo_client_net::GraphQLOperation). Input types
//! serialize to the server's input objects; result types decode the
//! selections each document asks for.

use serde::Serialize;

/// Declare a unit struct implementing `GraphQLOperation`.
macro_rules! graphql_operation {
    (
        $(#[$meta:meta])*
        $name:ident: $kind:ident $op_name:literal,
        $vars:ty => $data:ty,
        $query:expr $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl swo_client_net::GraphQLOperation for $name {
            type Variables = $vars;
            type ResponseData = $data;

            const QUERY: &'static str = $query;
            const OPERATION_NAME: &'static str = $op_name;
            const OPERATION_TYPE: swo_client_net::OperationType =
                swo_client_net::OperationType::$kind;
        }
    };
}

pub(crate) use graphql_operation;

pub mod alerts;
pub mod api_tokens;
pub mod dashboards;
pub mod entities;
pub mod log_filters;
pub mod notifications;

/// `{ "input": ... }` variables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputVariables<T> {
    /// The input object.
    pub input: T,
}

impl<T> InputVariables<T> {
    /// Wrap `input`.
    pub fn new(input: T) -> Self {
        Self { input }
    }
}

/// `{ "id": ... }` variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdVariables {
    /// The entity id.
    pub id: String,
}

impl IdVariables {
    /// Wrap `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Input naming a single entity by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdInput {
    /// The entity id.
    pub id: String,
}

impl IdInput {
    /// Wrap `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
