//! Execute-then-verify routine shared by every create, update and delete.
//!
//! Mutations answer with an envelope of the form
//! `{ success, code, message, <payload> }`. [`execute_mutation`] runs the
//! network call, passes transport failures through untouched, and turns a
//! `success: false` envelope into [`ClientError::Rejected`]. Replies with a
//! different shape, such as the synthetic check mutations, implement
//! [`MutationEnvelope`] by hand.

use std::future::Future;

use serde::{Deserialize, Deserializer};
use swo_client_net::NetworkError;

use crate::error::{ClientError, FailureFormat, Rejection, Result};

/// A decoded mutation response envelope.
pub trait MutationEnvelope {
    /// What a successful mutation hands back. `()` for payload-less mutations.
    type Payload;

    /// The server's success flag.
    fn success(&self) -> bool;
    /// The server's status code.
    fn code(&self) -> &str;
    /// The server's human-readable message.
    fn message(&self) -> &str;
    /// Take the payload, if the server sent one.
    fn into_payload(self) -> Option<Self::Payload>;
}

/// Names a mutation for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationFailure {
    action: &'static str,
    format: FailureFormat,
}

impl MutationFailure {
    /// Describe a failed action, e.g. `"create dashboard failed"`.
    pub const fn new(action: &'static str) -> Self {
        Self {
            action,
            format: FailureFormat::Labeled,
        }
    }

    /// Render rejections as `code=<code> message=<message>`.
    pub const fn key_value(mut self) -> Self {
        self.format = FailureFormat::KeyValue;
        self
    }

    /// The local action description.
    pub fn action(&self) -> &'static str {
        self.action
    }

    fn reject(self, code: &str, message: &str) -> ClientError {
        ClientError::Rejected(Rejection {
            action: self.action,
            code: code.to_owned(),
            message: message.to_owned(),
            format: self.format,
        })
    }
}

/// Check a decoded envelope and extract its payload.
///
/// `success == false` is a rejection. `success == true` without a payload is
/// a contract violation reported as [`ClientError::MissingPayload`].
pub fn verify_envelope<E: MutationEnvelope>(
    failure: MutationFailure,
    envelope: E,
) -> Result<E::Payload> {
    if !envelope.success() {
        tracing::debug!(
            target: "swo_client::mutation",
            action = failure.action,
            code = envelope.code(),
            message = envelope.message(),
            "mutation rejected"
        );
        return Err(failure.reject(envelope.code(), envelope.message()));
    }

    let code = envelope.code().to_owned();
    let message = envelope.message().to_owned();
    envelope
        .into_payload()
        .ok_or(ClientError::MissingPayload {
            action: failure.action,
            code,
            message,
        })
}

/// Run a mutation and verify its envelope.
///
/// Errors from `invoke` propagate unchanged. Mutations are never retried.
pub async fn execute_mutation<E, F, Fut>(failure: MutationFailure, invoke: F) -> Result<E::Payload>
where
    E: MutationEnvelope,
    F: FnOnce() -> Fut,
    Fut: Future<Output = std::result::Result<E, NetworkError>>,
{
    let envelope = invoke().await?;
    verify_envelope(failure, envelope)
}

/// Deserialize a nullable string as `""`.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Declare a mutation envelope struct and its [`MutationEnvelope`] impl.
///
/// `Name { field: Payload }` carries a payload under `field` (camelCased on
/// the wire); a bare `Name` has none.
macro_rules! mutation_envelope {
    ($(#[$meta:meta])* $name:ident { $field:ident: $payload:ty }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            /// Whether the server applied the mutation.
            pub success: bool,
            /// Server status code.
            #[serde(default, deserialize_with = "crate::mutation::null_as_empty")]
            pub code: String,
            /// Server message.
            #[serde(default, deserialize_with = "crate::mutation::null_as_empty")]
            pub message: String,
            /// The mutated object, present on success.
            #[serde(default)]
            pub $field: Option<$payload>,
        }

        impl $crate::mutation::MutationEnvelope for $name {
            type Payload = $payload;

            fn success(&self) -> bool {
                self.success
            }

            fn code(&self) -> &str {
                &self.code
            }

            fn message(&self) -> &str {
                &self.message
            }

            fn into_payload(self) -> Option<Self::Payload> {
                self.$field
            }
        }
    };
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Deserialize)]
        pub struct $name {
            /// Whether the server applied the mutation.
            pub success: bool,
            /// Server status code.
            #[serde(default, deserialize_with = "crate::mutation::null_as_empty")]
            pub code: String,
            /// Server message.
            #[serde(default, deserialize_with = "crate::mutation::null_as_empty")]
            pub message: String,
        }

        impl $crate::mutation::MutationEnvelope for $name {
            type Payload = ();

            fn success(&self) -> bool {
                self.success
            }

            fn code(&self) -> &str {
                &self.code
            }

            fn message(&self) -> &str {
                &self.message
            }

            fn into_payload(self) -> Option<Self::Payload> {
                Some(())
            }
        }
    };
}

pub(crate) use mutation_envelope;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    pub struct Thing {
        pub id: String,
    }

    mutation_envelope!(ThingResponse { thing: Thing });
    mutation_envelope!(DeleteResponse);

    fn decode<T: for<'de> Deserialize<'de>>(value: serde_json::Value) -> T {
        serde_json::from_value(value).unwrap()
    }

    const CREATE: MutationFailure = MutationFailure::new("create thing failed");

    #[tokio::test]
    async fn test_success_returns_payload() {
        let payload = execute_mutation(CREATE, || async {
            Ok(decode::<ThingResponse>(json!({
                "success": true, "code": "200", "message": "", "thing": { "id": "t-1" }
            })))
        })
        .await
        .unwrap();

        assert_eq!(payload, Thing { id: "t-1".into() });
    }

    #[tokio::test]
    async fn test_rejection_carries_code_and_message() {
        let err = execute_mutation(CREATE, || async {
            Ok(decode::<ThingResponse>(json!({
                "success": false, "code": "409", "message": "already exists", "thing": null
            })))
        })
        .await
        .unwrap_err();

        assert!(err.is_rejected());
        assert_eq!(
            err.to_string(),
            "create thing failed. code: 409 message: already exists"
        );
    }

    #[tokio::test]
    async fn test_key_value_format() {
        let err = execute_mutation(CREATE.key_value(), || async {
            Ok(decode::<ThingResponse>(json!({
                "success": false, "code": "DUPLICATE", "message": "exists"
            })))
        })
        .await
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "create thing failed. code=DUPLICATE message=exists"
        );
    }

    #[tokio::test]
    async fn test_missing_payload_is_contract_violation() {
        let err = execute_mutation(CREATE, || async {
            Ok(decode::<ThingResponse>(json!({ "success": true, "code": "200", "message": null })))
        })
        .await
        .unwrap_err();

        match err {
            ClientError::MissingPayload { action, code, message } => {
                assert_eq!(action, "create thing failed");
                assert_eq!(code, "200");
                assert_eq!(message, "");
            }
            other => panic!("expected MissingPayload, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_transport_error_propagates_unchanged() {
        let err = execute_mutation::<DeleteResponse, _, _>(CREATE, || async {
            Err(NetworkError::HttpStatus {
                status: 500,
                message: Some("down".into()),
            })
        })
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), "HTTP 500: down");
        assert_eq!(err.as_transport().and_then(NetworkError::status), Some(500));
    }

    #[test]
    fn test_payloadless_envelope() {
        let ok: DeleteResponse = decode(json!({ "success": true, "code": "200", "message": "" }));
        assert!(verify_envelope(MutationFailure::new("delete failed"), ok).is_ok());

        let rejected: DeleteResponse = decode(json!({ "success": false, "code": "404", "message": "gone" }));
        assert!(verify_envelope(MutationFailure::new("delete failed"), rejected).is_err());
    }
}
