//! Typed GraphQL operations.

use serde::{Serialize, de::DeserializeOwned};

use super::request::OperationType;

/// A typed GraphQL operation.
///
/// Implement this trait once per query or mutation document. The executor
/// encodes [`Variables`](Self::Variables) and decodes `data` into
/// [`ResponseData`](Self::ResponseData).
pub trait GraphQLOperation {
    /// Variables type.
    type Variables: Serialize + Send + Sync;
    /// Response data type.
    type ResponseData: DeserializeOwned + Send;

    /// GraphQL document text.
    const QUERY: &'static str;
    /// Operation name sent as `operationName`.
    const OPERATION_NAME: &'static str;
    /// Query or mutation.
    const OPERATION_TYPE: OperationType;
}
