//! Dashboards with their layout and widgets.

use swo_client_net::{CancellationToken, GraphQLClient};

use crate::error::{ClientError, Result};
use crate::mutation::{MutationFailure, execute_mutation};
use crate::operations::dashboards::{
    CreateDashboard, CreateDashboardInput, Dashboard, DeleteDashboard, GetDashboardById,
    UpdateDashboard, UpdateDashboardInput,
};
use crate::operations::{IdInput, IdVariables, InputVariables};

const CREATE_FAILED: MutationFailure = MutationFailure::new("create dashboard failed");
const UPDATE_FAILED: MutationFailure = MutationFailure::new("update dashboard failed");
const DELETE_FAILED: MutationFailure = MutationFailure::new("delete dashboard failed");

/// Dashboards.
#[derive(Debug, Clone)]
pub struct DashboardsService {
    gql: GraphQLClient,
}

impl DashboardsService {
    pub(crate) fn new(gql: GraphQLClient) -> Self {
        Self { gql }
    }

    /// Create a dashboard with its layout and widgets.
    pub async fn create(
        &self,
        cancel: &CancellationToken,
        input: CreateDashboardInput,
    ) -> Result<Dashboard> {
        tracing::info!(target: "swo_client::dashboards", name = %input.name, "create dashboard request");

        let vars = InputVariables::new(input);
        let gql = &self.gql;
        let vars = &vars;
        let dashboard = execute_mutation(CREATE_FAILED, move || async move {
            gql.execute::<CreateDashboard>(cancel, vars)
                .await
                .map(|data| data.create_dashboard)
        })
        .await?;

        tracing::info!(target: "swo_client::dashboards", id = %dashboard.id, "create dashboard success");
        Ok(dashboard)
    }

    /// Fetch a dashboard by id or system reference.
    pub async fn read(&self, cancel: &CancellationToken, id: &str) -> Result<Dashboard> {
        tracing::info!(target: "swo_client::dashboards", id, "read dashboard request");

        let data = self
            .gql
            .execute::<GetDashboardById>(cancel, &IdVariables::new(id))
            .await?;
        let dashboard = data
            .dashboards
            .by_id_or_system_reference
            .ok_or_else(|| ClientError::NotFound {
                kind: "dashboard",
                id: id.to_owned(),
            })?;

        tracing::info!(target: "swo_client::dashboards", id = %dashboard.id, "read dashboard success");
        Ok(dashboard)
    }

    /// Replace dashboard `input.id`.
    pub async fn update(
        &self,
        cancel: &CancellationToken,
        input: UpdateDashboardInput,
    ) -> Result<Dashboard> {
        tracing::info!(target: "swo_client::dashboards", id = %input.id, "update dashboard request");

        let vars = InputVariables::new(input);
        let gql = &self.gql;
        let vars = &vars;
        let dashboard = execute_mutation(UPDATE_FAILED, move || async move {
            gql.execute::<UpdateDashboard>(cancel, vars)
                .await
                .map(|data| data.update_dashboard)
        })
        .await?;

        tracing::info!(target: "swo_client::dashboards", id = %dashboard.id, "update dashboard success");
        Ok(dashboard)
    }

    /// Delete dashboard `id`.
    pub async fn delete(&self, cancel: &CancellationToken, id: &str) -> Result<()> {
        tracing::info!(target: "swo_client::dashboards", id, "delete dashboard request");

        let vars = InputVariables::new(IdInput::new(id));
        let gql = &self.gql;
        let vars = &vars;
        execute_mutation(DELETE_FAILED, move || async move {
            gql.execute::<DeleteDashboard>(cancel, vars)
                .await
                .map(|data| data.delete_dashboard)
        })
        .await?;

        tracing::info!(target: "swo_client::dashboards", id, "delete dashboard success");
        Ok(())
    }
}
