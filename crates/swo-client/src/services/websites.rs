//! Website availability and RUM checks.

use swo_client_net::{CancellationToken, GraphQLClient};

use crate::error::Result;
use crate::mutation::{MutationFailure, execute_mutation};
use crate::operations::entities::{
    CreateWebsite, CreateWebsiteInput, CreatedEntity, DeleteWebsite, Entity, GetEntityById,
    UpdateWebsite, UpdateWebsiteInput, Website,
};
use crate::operations::{IdInput, IdVariables, InputVariables};
use crate::resolve::{ReadPolicy, resolve_entity};

const CREATE_FAILED: MutationFailure = MutationFailure::new("create website failed");
const UPDATE_FAILED: MutationFailure = MutationFailure::new("update website failed");
const DELETE_FAILED: MutationFailure = MutationFailure::new("delete website failed");

/// Website checks.
#[derive(Debug, Clone)]
pub struct WebsiteService {
    gql: GraphQLClient,
    read_policy: ReadPolicy,
}

impl WebsiteService {
    pub(crate) fn new(gql: GraphQLClient, read_policy: ReadPolicy) -> Self {
        Self { gql, read_policy }
    }

    /// The policy applied by [`read`](Self::read).
    pub fn read_policy(&self) -> &ReadPolicy {
        &self.read_policy
    }

    /// Create a website check and return its new id.
    pub async fn create(
        &self,
        cancel: &CancellationToken,
        input: CreateWebsiteInput,
    ) -> Result<CreatedEntity> {
        tracing::info!(
            target: "swo_client::websites",
            name = %input.name,
            url = %input.url,
            "create website request"
        );

        let vars = InputVariables::new(input);
        let gql = &self.gql;
        let vars = &vars;
        let created = execute_mutation(CREATE_FAILED, move || async move {
            gql.execute::<CreateWebsite>(cancel, vars)
                .await
                .map(|data| data.dem.result)
        })
        .await?;

        tracing::info!(target: "swo_client::websites", id = %created.id, "create website success");
        Ok(created)
    }

    /// Fetch website `id`. Fails with
    /// [`UnexpectedVariant`](crate::ClientError::UnexpectedVariant) when the
    /// id belongs to another entity kind.
    pub async fn read(&self, cancel: &CancellationToken, id: &str) -> Result<Website> {
        tracing::info!(target: "swo_client::websites", id, "read website request");

        let vars = IdVariables::new(id);
        let gql = &self.gql;
        let vars = &vars;
        let website = resolve_entity::<Entity, Website, _, _>(
            cancel,
            &self.read_policy,
            "website",
            id,
            move || async move {
                gql.execute::<GetEntityById>(cancel, vars)
                    .await
                    .map(|data| data.entities.by_id)
            },
        )
        .await?;

        tracing::info!(target: "swo_client::websites", id, "read website success");
        Ok(website)
    }

    /// Replace website check `input.id`.
    pub async fn update(
        &self,
        cancel: &CancellationToken,
        input: UpdateWebsiteInput,
    ) -> Result<()> {
        tracing::info!(target: "swo_client::websites", id = %input.id, "update website request");

        let id = input.id.clone();
        let vars = InputVariables::new(input);
        let gql = &self.gql;
        let vars = &vars;
        execute_mutation(UPDATE_FAILED, move || async move {
            gql.execute::<UpdateWebsite>(cancel, vars)
                .await
                .map(|data| data.dem.result)
        })
        .await?;

        tracing::info!(target: "swo_client::websites", id = %id, "update website success");
        Ok(())
    }

    /// Delete website check `id`.
    pub async fn delete(&self, cancel: &CancellationToken, id: &str) -> Result<()> {
        tracing::info!(target: "swo_client::websites", id, "delete website request");

        let vars = InputVariables::new(IdInput::new(id));
        let gql = &self.gql;
        let vars = &vars;
        execute_mutation(DELETE_FAILED, move || async move {
            gql.execute::<DeleteWebsite>(cancel, vars)
                .await
                .map(|data| data.dem.result)
        })
        .await?;

        tracing::info!(target: "swo_client::websites", id, "delete website success");
        Ok(())
    }
}
