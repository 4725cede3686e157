//! Notification service configurations (email, Slack, PagerDuty, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{IdInput, InputVariables, graphql_operation};
use crate::mutation::mutation_envelope;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationInput {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Service type, e.g. `"email"`.
    #[serde(rename = "type")]
    pub notification_type: String,
    /// Type-specific settings, passed through verbatim.
    pub settings: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNotificationInput {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
}

/// A notification service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type", default)]
    pub notification_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub settings: Option<Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<String>,
}

mutation_envelope!(
    /// Envelope of `createNotificationServiceConfiguration` and
    /// `updateNotificationServiceConfiguration`.
    NotificationResponse { configuration: Notification }
);

mutation_envelope!(
    /// Envelope of `deleteNotificationServiceConfiguration`.
    DeleteNotificationResponse
);

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationData {
    pub create_notification_service_configuration: NotificationResponse,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNotificationData {
    pub update_notification_service_configuration: NotificationResponse,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteNotificationData {
    pub delete_notification_service_configuration: DeleteNotificationResponse,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetNotificationVariables {
    pub configuration_id: String,
    pub configuration_type: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationOrganization {
    #[serde(default)]
    pub notification_service_configuration: Option<Notification>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationUser {
    pub current_organization: NotificationOrganization,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetNotificationData {
    pub user: NotificationUser,
}

macro_rules! notification_fields {
    () => {
        "id type title description settings createdAt createdBy"
    };
}

graphql_operation!(
    CreateNotification: Mutation "createNotification",
    InputVariables<CreateNotificationInput> => CreateNotificationData,
    concat!(
        "mutation createNotification($input: CreateNotificationServiceConfigurationInput!) {",
        " createNotificationServiceConfiguration(input: $input) { success code message configuration { ",
        notification_fields!(),
        " } } }"
    ),
);

graphql_operation!(
    UpdateNotification: Mutation "updateNotification",
    InputVariables<UpdateNotificationInput> => UpdateNotificationData,
    concat!(
        "mutation updateNotification($input: UpdateNotificationServiceConfigurationInput!) {",
        " updateNotificationServiceConfiguration(input: $input) { success code message configuration { ",
        notification_fields!(),
        " } } }"
    ),
);

graphql_operation!(
    DeleteNotification: Mutation "deleteNotification",
    InputVariables<IdInput> => DeleteNotificationData,
    concat!(
        "mutation deleteNotification($input: DeleteNotificationServiceConfigurationInput!) {",
        " deleteNotificationServiceConfiguration(input: $input) { success code message } }"
    ),
);

graphql_operation!(
    GetNotification: Query "getNotification",
    GetNotificationVariables => GetNotificationData,
    concat!(
        "query getNotification($configurationId: ID!, $configurationType: String!) {",
        " user { currentOrganization {",
        " notificationServiceConfiguration(id: $configurationId, type: $configurationType) { ",
        notification_fields!(),
        " } } } }"
    ),
);
