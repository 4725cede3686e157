//! GraphQL request types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A GraphQL operation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    /// A query operation (read-only).
    #[default]
    Query,
    /// A mutation operation (modifies data).
    Mutation,
}

/// A GraphQL request.
///
/// Serialized on the wire as `{query, variables, operationName}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLRequest {
    /// The GraphQL document.
    pub query: String,

    /// Variables for the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,

    /// Operation name.
    #[serde(skip_serializing_if = "Option::is_none", rename = "operationName")]
    pub operation_name: Option<String>,

    /// The operation type (not serialized, used for logging).
    #[serde(skip)]
    pub(crate) operation_type: OperationType,
}

impl GraphQLRequest {
    /// Create a new query request.
    pub fn query(query: impl Into<String>) -> Self {
        Self::with_type(query, OperationType::Query)
    }

    /// Create a new mutation request.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let request = GraphQLRequest::mutation(r#"
    ///     mutation deleteDashboard($input: DeleteDashboardInput!) {
    ///         deleteDashboard(input: $input) { success code message }
    ///     }
    /// "#)
    /// .variable("input", serde_json::json!({ "id": "d-1" }));
    /// ```
    pub fn mutation(query: impl Into<String>) -> Self {
        Self::with_type(query, OperationType::Mutation)
    }

    fn with_type(query: impl Into<String>, operation_type: OperationType) -> Self {
        Self {
            query: query.into(),
            variables: None,
            operation_name: None,
            operation_type,
        }
    }

    /// Set a single variable value.
    ///
    /// Values that fail to serialize are skipped.
    pub fn variable(mut self, name: impl Into<String>, value: impl Serialize) -> Self {
        let variables = self
            .variables
            .get_or_insert_with(|| Value::Object(Default::default()));
        if let Value::Object(map) = variables
            && let Ok(value) = serde_json::to_value(value)
        {
            map.insert(name.into(), value);
        }
        self
    }

    /// Replace all variables with an already-encoded JSON tree.
    pub fn variables(mut self, variables: Value) -> Self {
        self.variables = Some(variables);
        self
    }

    /// Set the operation name.
    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    /// The operation type.
    pub fn operation_type(&self) -> OperationType {
        self.operation_type
    }

    /// Check if this is a mutation.
    pub fn is_mutation(&self) -> bool {
        self.operation_type == OperationType::Mutation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_wire_shape() {
        let request = GraphQLRequest::mutation("mutation m { x }")
            .operation_name("m")
            .variable("input", json!({ "id": "1" }));

        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(
            encoded,
            json!({
                "query": "mutation m { x }",
                "operationName": "m",
                "variables": { "input": { "id": "1" } }
            })
        );
        assert!(request.is_mutation());
    }

    #[test]
    fn test_query_without_variables_omits_them() {
        let encoded = serde_json::to_value(GraphQLRequest::query("{ a }")).unwrap();
        assert_eq!(encoded, json!({ "query": "{ a }" }));
    }
}
