//! API tokens of the current organization.

use swo_client_net::{CancellationToken, GraphQLClient};

use crate::error::{ClientError, Result};
use crate::mutation::{MutationFailure, execute_mutation};
use crate::operations::api_tokens::{
    ApiToken, CreateToken, CreateTokenInput, DeleteToken, GetApiTokenById, UpdateToken,
    UpdateTokenInput,
};
use crate::operations::{IdInput, IdVariables, InputVariables};

const CREATE_FAILED: MutationFailure = MutationFailure::new("create apiToken failed");
const UPDATE_FAILED: MutationFailure = MutationFailure::new("update apiToken failed");
const DELETE_FAILED: MutationFailure = MutationFailure::new("delete apiToken failed");

/// API tokens of the current organization.
#[derive(Debug, Clone)]
pub struct ApiTokenService {
    gql: GraphQLClient,
}

impl ApiTokenService {
    pub(crate) fn new(gql: GraphQLClient) -> Self {
        Self { gql }
    }

    /// Create a token. The returned value is the only one carrying the
    /// clear-text secret.
    pub async fn create(
        &self,
        cancel: &CancellationToken,
        input: CreateTokenInput,
    ) -> Result<ApiToken> {
        tracing::info!(target: "swo_client::api_tokens", name = %input.name, "create apiToken request");

        let vars = InputVariables::new(input);
        let gql = &self.gql;
        let vars = &vars;
        let token = execute_mutation(CREATE_FAILED, move || async move {
            gql.execute::<CreateToken>(cancel, vars)
                .await
                .map(|data| data.create_token)
        })
        .await?;

        tracing::info!(target: "swo_client::api_tokens", id = %token.id, "create apiToken success");
        Ok(token)
    }

    /// Fetch the token with `id`. The secret is never returned.
    pub async fn read(&self, cancel: &CancellationToken, id: &str) -> Result<ApiToken> {
        tracing::info!(target: "swo_client::api_tokens", id, "read apiToken request");

        let data = self
            .gql
            .execute::<GetApiTokenById>(cancel, &IdVariables::new(id))
            .await?;
        let token = data
            .user
            .current_organization
            .tokens
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::NotFound {
                kind: "api token",
                id: id.to_owned(),
            })?;

        tracing::info!(target: "swo_client::api_tokens", id, "read apiToken success");
        Ok(token)
    }

    /// Change the name, attributes or enabled state of a token.
    pub async fn update(&self, cancel: &CancellationToken, input: UpdateTokenInput) -> Result<()> {
        tracing::info!(target: "swo_client::api_tokens", id = %input.id, "update apiToken request");

        let id = input.id.clone();
        let vars = InputVariables::new(input);
        let gql = &self.gql;
        let vars = &vars;
        execute_mutation(UPDATE_FAILED, move || async move {
            gql.execute::<UpdateToken>(cancel, vars)
                .await
                .map(|data| data.update_token)
        })
        .await?;

        tracing::info!(target: "swo_client::api_tokens", id = %id, "update apiToken success");
        Ok(())
    }

    /// Revoke token `id`.
    pub async fn delete(&self, cancel: &CancellationToken, id: &str) -> Result<()> {
        tracing::info!(target: "swo_client::api_tokens", id, "delete apiToken request");

        let vars = InputVariables::new(IdInput::new(id));
        let gql = &self.gql;
        let vars = &vars;
        execute_mutation(DELETE_FAILED, move || async move {
            gql.execute::<DeleteToken>(cancel, vars)
                .await
                .map(|data| data.delete_token)
        })
        .await?;

        tracing::info!(target: "swo_client::api_tokens", id, "delete apiToken success");
        Ok(())
    }
}
