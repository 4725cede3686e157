//! GraphQL response types.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::fmt;

use crate::error::NetworkError;

/// A GraphQL error returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQLError {
    /// The error message.
    pub message: String,

    /// Locations in the document where the error occurred.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<GraphQLLocation>,

    /// Path to the field that caused the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathSegment>>,

    /// Additional error metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl GraphQLError {
    /// Create an error carrying only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: Vec::new(),
            path: None,
            extensions: None,
        }
    }
}

impl fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref path) = self.path {
            write!(f, " (at ")?;
            for (i, segment) in path.iter().enumerate() {
                if i > 0 {
                    write!(f, ".")?;
                }
                match segment {
                    PathSegment::Field(name) => write!(f, "{name}")?,
                    PathSegment::Index(idx) => write!(f, "[{idx}]")?,
                }
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl std::error::Error for GraphQLError {}

/// A location in a GraphQL document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQLLocation {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
}

/// A segment in an error path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// A field name.
    Field(String),
    /// An array index.
    Index(usize),
}

/// A GraphQL response from the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLResponse {
    /// The data returned by the operation.
    #[serde(default)]
    pub data: Option<Value>,

    /// Errors that occurred during execution.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLError>,

    /// Additional response metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl GraphQLResponse {
    /// Check if the response contains errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Decode `data` into `T`.
    ///
    /// A non-empty `errors` array wins over any partial data and is returned
    /// as [`NetworkError::GraphQL`].
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T, NetworkError> {
        if self.has_errors() {
            return Err(NetworkError::GraphQL(self.errors));
        }

        match self.data {
            Some(data) => serde_json::from_value(data).map_err(|e| {
                NetworkError::Json(format!("Failed to deserialize GraphQL response: {e}"))
            }),
            None => Err(NetworkError::InvalidBody(
                "No data in GraphQL response".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct User {
        id: String,
    }

    #[test]
    fn test_into_data() {
        let response: GraphQLResponse =
            serde_json::from_value(json!({ "data": { "id": "1" } })).unwrap();
        let user: User = response.into_data().unwrap();
        assert_eq!(user, User { id: "1".into() });
    }

    #[test]
    fn test_errors_take_priority_over_data() {
        let response: GraphQLResponse = serde_json::from_value(json!({
            "data": { "id": "1" },
            "errors": [{ "message": "denied", "path": ["alert", 0] }]
        }))
        .unwrap();

        match response.into_data::<User>() {
            Err(NetworkError::GraphQL(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].to_string(), "denied (at alert.[0])");
            }
            other => panic!("expected GraphQL error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_data() {
        let response: GraphQLResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(
            response.into_data::<User>(),
            Err(NetworkError::InvalidBody(_))
        ));
    }
}
