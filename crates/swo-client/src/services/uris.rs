//! URI availability checks.

use swo_client_net::{CancellationToken, GraphQLClient};

use crate::error::Result;
use crate::mutation::{MutationFailure, execute_mutation};
use crate::operations::entities::{
    CreateUri, CreateUriInput, CreatedEntity, DeleteUri, Entity, GetEntityById, UpdateUri,
    UpdateUriInput, Uri,
};
use crate::operations::{IdInput, IdVariables, InputVariables};
use crate::resolve::{ReadPolicy, resolve_entity};

const CREATE_FAILED: MutationFailure = MutationFailure::new("create uri failed");
const UPDATE_FAILED: MutationFailure = MutationFailure::new("update uri failed");
const DELETE_FAILED: MutationFailure = MutationFailure::new("delete uri failed");

/// URI availability checks.
///
/// New checks take a moment to become readable, so reads default to
/// [`ReadPolicy::RetryUntilFound`].
#[derive(Debug, Clone)]
pub struct UriService {
    gql: GraphQLClient,
    read_policy: ReadPolicy,
}

impl UriService {
    pub(crate) fn new(gql: GraphQLClient, read_policy: ReadPolicy) -> Self {
        Self { gql, read_policy }
    }

    /// The policy applied by [`read`](Self::read).
    pub fn read_policy(&self) -> &ReadPolicy {
        &self.read_policy
    }

    /// Create a URI check and return its new id.
    pub async fn create(
        &self,
        cancel: &CancellationToken,
        input: CreateUriInput,
    ) -> Result<CreatedEntity> {
        tracing::info!(
            target: "swo_client::uris",
            name = %input.name,
            url = %input.ip_or_domain,
            "create uri request"
        );

        let vars = InputVariables::new(input);
        let gql = &self.gql;
        let vars = &vars;
        let created = execute_mutation(CREATE_FAILED, move || async move {
            gql.execute::<CreateUri>(cancel, vars)
                .await
                .map(|data| data.dem.result)
        })
        .await?;

        tracing::info!(target: "swo_client::uris", id = %created.id, "create uri success");
        Ok(created)
    }

    /// Fetch URI check `id`, following the configured [`ReadPolicy`].
    pub async fn read(&self, cancel: &CancellationToken, id: &str) -> Result<Uri> {
        tracing::info!(target: "swo_client::uris", id, "read uri request");

        let vars = IdVariables::new(id);
        let gql = &self.gql;
        let vars = &vars;
        let uri = resolve_entity::<Entity, Uri, _, _>(
            cancel,
            &self.read_policy,
            "uri",
            id,
            move || async move {
                gql.execute::<GetEntityById>(cancel, vars)
                    .await
                    .map(|data| data.entities.by_id)
            },
        )
        .await?;

        tracing::info!(target: "swo_client::uris", id, "read uri success");
        Ok(uri)
    }

    /// Replace URI check `input.id`.
    pub async fn update(&self, cancel: &CancellationToken, input: UpdateUriInput) -> Result<()> {
        tracing::info!(target: "swo_client::uris", id = %input.id, "update uri request");

        let id = input.id.clone();
        let vars = InputVariables::new(input);
        let gql = &self.gql;
        let vars = &vars;
        execute_mutation(UPDATE_FAILED, move || async move {
            gql.execute::<UpdateUri>(cancel, vars)
                .await
                .map(|data| data.dem.result)
        })
        .await?;

        tracing::info!(target: "swo_client::uris", id = %id, "update uri success");
        Ok(())
    }

    /// Delete URI check `id`.
    pub async fn delete(&self, cancel: &CancellationToken, id: &str) -> Result<()> {
        tracing::info!(target: "swo_client::uris", id, "delete uri request");

        let vars = InputVariables::new(IdInput::new(id));
        let gql = &self.gql;
        let vars = &vars;
        execute_mutation(DELETE_FAILED, move || async move {
            gql.execute::<DeleteUri>(cancel, vars)
                .await
                .map(|data| data.dem.result)
        })
        .await?;

        tracing::info!(target: "swo_client::uris", id, "delete uri success");
        Ok(())
    }
}
