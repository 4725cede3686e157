//! Log exclusion filters.

use swo_client_net::{CancellationToken, GraphQLClient};

use crate::error::{ClientError, Result};
use crate::mutation::{MutationFailure, execute_mutation};
use crate::operations::log_filters::{
    CreateExclusionFilterInput, CreateLogFilter, DeleteLogFilter, ExclusionFilter,
    GetLogFilterById, UpdateExclusionFilterInput, UpdateLogFilter,
};
use crate::operations::{IdInput, InputVariables};

// Log filter rejections render as `code=<code> message=<message>`.
const CREATE_FAILED: MutationFailure = MutationFailure::new("create LogFilter failed").key_value();
const UPDATE_FAILED: MutationFailure = MutationFailure::new("update LogFilter failed").key_value();
const DELETE_FAILED: MutationFailure = MutationFailure::new("delete LogFilter failed").key_value();

/// Log exclusion filters.
#[derive(Debug, Clone)]
pub struct LogFilterService {
    gql: GraphQLClient,
}

impl LogFilterService {
    pub(crate) fn new(gql: GraphQLClient) -> Self {
        Self { gql }
    }

    /// Create an exclusion filter.
    pub async fn create(
        &self,
        cancel: &CancellationToken,
        input: CreateExclusionFilterInput,
    ) -> Result<ExclusionFilter> {
        tracing::info!(target: "swo_client::log_filters", name = %input.name, "create LogFilter request");

        let vars = InputVariables::new(input);
        let gql = &self.gql;
        let vars = &vars;
        let filter = execute_mutation(CREATE_FAILED, move || async move {
            gql.execute::<CreateLogFilter>(cancel, vars)
                .await
                .map(|data| data.create_exclusion_filter)
        })
        .await?;

        tracing::info!(target: "swo_client::log_filters", id = %filter.id, "create LogFilter success");
        Ok(filter)
    }

    /// Fetch the exclusion filter with `id`.
    pub async fn read(&self, cancel: &CancellationToken, id: &str) -> Result<ExclusionFilter> {
        tracing::info!(target: "swo_client::log_filters", id, "read LogFilter request");

        let vars = InputVariables::new(IdInput::new(id));
        let data = self.gql.execute::<GetLogFilterById>(cancel, &vars).await?;
        let filter = data.get_exclusion_filter.ok_or_else(|| ClientError::NotFound {
            kind: "log filter",
            id: id.to_owned(),
        })?;

        tracing::info!(target: "swo_client::log_filters", id, "read LogFilter success");
        Ok(filter)
    }

    /// Replace the expressions of filter `input.id`.
    pub async fn update(
        &self,
        cancel: &CancellationToken,
        input: UpdateExclusionFilterInput,
    ) -> Result<()> {
        tracing::info!(target: "swo_client::log_filters", id = %input.id, "update LogFilter request");

        let id = input.id.clone();
        let vars = InputVariables::new(input);
        let gql = &self.gql;
        let vars = &vars;
        execute_mutation(UPDATE_FAILED, move || async move {
            gql.execute::<UpdateLogFilter>(cancel, vars)
                .await
                .map(|data| data.update_exclusion_filter)
        })
        .await?;

        tracing::info!(target: "swo_client::log_filters", id = %id, "update LogFilter success");
        Ok(())
    }

    /// Delete exclusion filter `id`.
    pub async fn delete(&self, cancel: &CancellationToken, id: &str) -> Result<()> {
        tracing::info!(target: "swo_client::log_filters", id, "delete LogFilter request");

        let vars = InputVariables::new(IdInput::new(id));
        let gql = &self.gql;
        let vars = &vars;
        execute_mutation(DELETE_FAILED, move || async move {
            gql.execute::<DeleteLogFilter>(cancel, vars)
                .await
                .map(|data| data.delete_exclusion_filter)
        })
        .await?;

        tracing::info!(target: "swo_client::log_filters", id, "delete LogFilter success");
        Ok(())
    }
}
