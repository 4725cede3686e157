//! Polymorphic entity reads.
//!
//! Some ids resolve to one of several entity kinds behind a shared GraphQL
//! interface. [`resolve_entity`] runs the by-id query, optionally retries
//! while the entity is not yet visible, and narrows the tagged result to the
//! caller's concrete type.

use std::future::Future;

use swo_client_net::{CancellationToken, NetworkError};
use tokio::time::Instant;

use crate::backoff::ExponentialBackoff;
use crate::error::{ClientError, Result};

/// What a polymorphic read does when the server answers `null`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ReadPolicy {
    /// One round trip; `null` is [`ClientError::NotFound`].
    #[default]
    Immediate,
    /// Re-query with backoff until the entity appears or the elapsed-time
    /// ceiling is hit, then [`ClientError::Timeout`].
    RetryUntilFound(ExponentialBackoff),
}

impl ReadPolicy {
    /// Retry with the default backoff.
    pub fn retry_until_found() -> Self {
        Self::RetryUntilFound(ExponentialBackoff::default())
    }
}

/// An entity carrying its runtime GraphQL type name.
pub trait TaggedEntity {
    /// The `__typename` the server sent.
    fn type_name(&self) -> &str;
}

/// A concrete shape that can be narrowed out of the tagged entity `E`.
pub trait EntityVariant<E>: Sized {
    /// The GraphQL type name of this variant.
    const TYPE_NAME: &'static str;

    /// Narrow `entity`, handing it back unchanged on mismatch.
    fn narrow(entity: E) -> std::result::Result<Self, E>;
}

/// Resolve `id` to the concrete variant `T`.
///
/// `query` performs one by-id round trip. `kind` names the resource in
/// errors and logs.
pub async fn resolve_entity<E, T, F, Fut>(
    cancel: &CancellationToken,
    policy: &ReadPolicy,
    kind: &'static str,
    id: &str,
    mut query: F,
) -> Result<T>
where
    E: TaggedEntity,
    T: EntityVariant<E>,
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<Option<E>, NetworkError>>,
{
    let entity = match policy {
        ReadPolicy::Immediate => {
            let found = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(ClientError::Cancelled),
                result = query() => result?,
            };
            found.ok_or_else(|| ClientError::NotFound {
                kind,
                id: id.to_owned(),
            })?
        }
        ReadPolicy::RetryUntilFound(backoff) => {
            retry_until_found(cancel, backoff, kind, id, &mut query).await?
        }
    };

    narrow(entity)
}

fn narrow<E: TaggedEntity, T: EntityVariant<E>>(entity: E) -> Result<T> {
    T::narrow(entity).map_err(|other| ClientError::UnexpectedVariant {
        expected: T::TYPE_NAME,
        actual: other.type_name().to_owned(),
    })
}

async fn retry_until_found<E, F, Fut>(
    cancel: &CancellationToken,
    backoff: &ExponentialBackoff,
    kind: &'static str,
    id: &str,
    query: &mut F,
) -> Result<E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::result::Result<Option<E>, NetworkError>>,
{
    let started = Instant::now();
    // `None` when the ceiling is too large to represent: no deadline.
    let deadline = started.checked_add(backoff.max_elapsed_time);
    let mut delays = backoff.delays();
    let mut attempts = 0u32;

    let timed_out = |attempts: u32| ClientError::Timeout {
        kind,
        id: id.to_owned(),
        attempts,
        elapsed: started.elapsed(),
    };

    loop {
        if cancel.is_cancelled() {
            return Err(ClientError::Cancelled);
        }

        attempts += 1;
        let found = match deadline {
            Some(deadline) => {
                let remaining = deadline.saturating_duration_since(Instant::now());
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return Err(ClientError::Cancelled),
                    outcome = tokio::time::timeout(remaining, query()) => {
                        outcome.map_err(|_| timed_out(attempts))??
                    }
                }
            }
            None => tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(ClientError::Cancelled),
                outcome = query() => outcome?,
            },
        };

        if let Some(entity) = found {
            return Ok(entity);
        }

        let delay = delays.next().unwrap_or(backoff.max_interval);
        if let Some(deadline) = deadline
            && delay >= deadline.saturating_duration_since(Instant::now())
        {
            return Err(timed_out(attempts));
        }

        tracing::debug!(
            target: "swo_client::resolve",
            kind,
            id,
            attempts,
            delay_ms = delay.as_millis() as u64,
            "entity not visible yet, retrying"
        );

        tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ClientError::Cancelled),
            _ = tokio::time::sleep(delay) => {}
        }
    }
}
