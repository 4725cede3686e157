//! Alert definitions.

use swo_client_net::{CancellationToken, GraphQLClient};

use crate::error::{ClientError, Result};
use crate::mutation::{MutationFailure, execute_mutation};
use crate::operations::IdVariables;
use crate::operations::alerts::{
    AlertDefinition, AlertDefinitionInput, CreateAlertDefinition, CreateAlertDefinitionVariables,
    DeleteAlertDefinition, GetAlertDefinitionById, UpdateAlertDefinition,
    UpdateAlertDefinitionVariables,
};

const CREATE_FAILED: MutationFailure = MutationFailure::new("create alert failed");
const UPDATE_FAILED: MutationFailure = MutationFailure::new("update alert failed");
const DELETE_FAILED: MutationFailure = MutationFailure::new("delete alert failed");

/// Alert definitions.
#[derive(Debug, Clone)]
pub struct AlertsService {
    gql: GraphQLClient,
}

impl AlertsService {
    pub(crate) fn new(gql: GraphQLClient) -> Self {
        Self { gql }
    }

    /// Create an alert definition.
    pub async fn create(
        &self,
        cancel: &CancellationToken,
        input: AlertDefinitionInput,
    ) -> Result<AlertDefinition> {
        tracing::info!(target: "swo_client::alerts", name = %input.name, "create alert request");

        let vars = CreateAlertDefinitionVariables { definition: input };
        let gql = &self.gql;
        let vars = &vars;
        let alert = execute_mutation(CREATE_FAILED, move || async move {
            gql.execute::<CreateAlertDefinition>(cancel, vars)
                .await
                .map(|data| data.alert_mutations.result)
        })
        .await?;

        tracing::info!(target: "swo_client::alerts", id = %alert.id, "create alert success");
        Ok(alert)
    }

    /// Fetch the alert definition with `id`.
    pub async fn read(&self, cancel: &CancellationToken, id: &str) -> Result<AlertDefinition> {
        tracing::info!(target: "swo_client::alerts", id, "read alert request");

        let data = self
            .gql
            .execute::<GetAlertDefinitionById>(cancel, &IdVariables::new(id))
            .await?;
        let alert = data
            .alert_queries
            .alert_definitions
            .alert_definitions
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::NotFound {
                kind: "alert",
                id: id.to_owned(),
            })?;

        tracing::info!(target: "swo_client::alerts", id, "read alert success");
        Ok(alert)
    }

    /// Replace the definition of alert `id`.
    pub async fn update(
        &self,
        cancel: &CancellationToken,
        id: &str,
        input: AlertDefinitionInput,
    ) -> Result<AlertDefinition> {
        tracing::info!(target: "swo_client::alerts", id, "update alert request");

        let vars = UpdateAlertDefinitionVariables {
            id: id.to_owned(),
            definition: input,
        };
        let gql = &self.gql;
        let vars = &vars;
        let alert = execute_mutation(UPDATE_FAILED, move || async move {
            gql.execute::<UpdateAlertDefinition>(cancel, vars)
                .await
                .map(|data| data.alert_mutations.result)
        })
        .await?;

        tracing::info!(target: "swo_client::alerts", id, "update alert success");
        Ok(alert)
    }

    /// Delete alert `id`.
    pub async fn delete(&self, cancel: &CancellationToken, id: &str) -> Result<()> {
        tracing::info!(target: "swo_client::alerts", id, "delete alert request");

        let vars = IdVariables::new(id);
        let gql = &self.gql;
        let vars = &vars;
        execute_mutation(DELETE_FAILED, move || async move {
            gql.execute::<DeleteAlertDefinition>(cancel, vars)
                .await
                .map(|data| data.alert_mutations.result)
        })
        .await?;

        tracing::info!(target: "swo_client::alerts", id, "delete alert success");
        Ok(())
    }
}
