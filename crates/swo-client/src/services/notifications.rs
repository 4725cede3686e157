//! Notification service configurations.

use swo_client_net::{CancellationToken, GraphQLClient};

use crate::error::{ClientError, Result};
use crate::mutation::{MutationFailure, execute_mutation};
use crate::operations::notifications::{
    CreateNotification, CreateNotificationInput, DeleteNotification, GetNotification,
    GetNotificationVariables, Notification, UpdateNotification, UpdateNotificationInput,
};
use crate::operations::{IdInput, InputVariables};

const CREATE_FAILED: MutationFailure = MutationFailure::new("create notification failed");
const UPDATE_FAILED: MutationFailure = MutationFailure::new("update notification failed");
const DELETE_FAILED: MutationFailure = MutationFailure::new("delete notification failed");

/// Notification service configurations.
#[derive(Debug, Clone)]
pub struct NotificationsService {
    gql: GraphQLClient,
}

impl NotificationsService {
    pub(crate) fn new(gql: GraphQLClient) -> Self {
        Self { gql }
    }

    /// Create a notification configuration.
    pub async fn create(
        &self,
        cancel: &CancellationToken,
        input: CreateNotificationInput,
    ) -> Result<Notification> {
        tracing::info!(target: "swo_client::notifications", title = %input.title, "create notification request");

        let vars = InputVariables::new(input);
        let gql = &self.gql;
        let vars = &vars;
        let notification = execute_mutation(CREATE_FAILED, move || async move {
            gql.execute::<CreateNotification>(cancel, vars)
                .await
                .map(|data| data.create_notification_service_configuration)
        })
        .await?;

        tracing::info!(target: "swo_client::notifications", id = %notification.id, "create notification success");
        Ok(notification)
    }

    /// Fetch a configuration. The server needs both its id and its type
    /// (e.g. `"email"`).
    pub async fn read(
        &self,
        cancel: &CancellationToken,
        id: &str,
        notification_type: &str,
    ) -> Result<Notification> {
        tracing::info!(
            target: "swo_client::notifications",
            id,
            notification_type,
            "read notification request"
        );

        let vars = GetNotificationVariables {
            configuration_id: id.to_owned(),
            configuration_type: notification_type.to_owned(),
        };
        let data = self.gql.execute::<GetNotification>(cancel, &vars).await?;
        let notification = data
            .user
            .current_organization
            .notification_service_configuration
            .ok_or_else(|| ClientError::NotFound {
                kind: "notification",
                id: id.to_owned(),
            })?;

        tracing::info!(target: "swo_client::notifications", title = %notification.title, "read notification success");
        Ok(notification)
    }

    /// Replace configuration `input.id`.
    pub async fn update(
        &self,
        cancel: &CancellationToken,
        input: UpdateNotificationInput,
    ) -> Result<Notification> {
        tracing::info!(target: "swo_client::notifications", id = %input.id, "update notification request");

        let vars = InputVariables::new(input);
        let gql = &self.gql;
        let vars = &vars;
        let notification = execute_mutation(UPDATE_FAILED, move || async move {
            gql.execute::<UpdateNotification>(cancel, vars)
                .await
                .map(|data| data.update_notification_service_configuration)
        })
        .await?;

        tracing::info!(target: "swo_client::notifications", id = %notification.id, "update notification success");
        Ok(notification)
    }

    /// Delete configuration `id`.
    pub async fn delete(&self, cancel: &CancellationToken, id: &str) -> Result<()> {
        tracing::info!(target: "swo_client::notifications", id, "delete notification request");

        let vars = InputVariables::new(IdInput::new(id));
        let gql = &self.gql;
        let vars = &vars;
        execute_mutation(DELETE_FAILED, move || async move {
            gql.execute::<DeleteNotification>(cancel, vars)
                .await
                .map(|data| data.delete_notification_service_configuration)
        })
        .await?;

        tracing::info!(target: "swo_client::notifications", id, "delete notification success");
        Ok(())
    }
}
