//! Dashboards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{IdInput, IdVariables, InputVariables, graphql_operation};
use crate::mutation::mutation_envelope;

/// Placement of one widget on the dashboard grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutInput {
    pub id: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// A widget definition. `properties` is widget-specific and passed through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetInput {
    pub id: String,
    #[serde(rename = "type")]
    pub widget_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDashboardInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default)]
    pub layout: Vec<LayoutInput>,
    #[serde(default)]
    pub widgets: Vec<WidgetInput>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDashboardInput {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Vec<LayoutInput>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widgets: Option<Vec<WidgetInput>>,
}

/// Layout cell as stored by the server.
pub type Layout = LayoutInput;

/// Widget as stored by the server.
pub type Widget = WidgetInput;

/// A dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_private: Option<bool>,
    #[serde(default)]
    pub system_reference: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub version: Option<i32>,
    #[serde(default)]
    pub layout: Vec<Layout>,
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

mutation_envelope!(
    /// Envelope of `createDashboard` and `updateDashboard`.
    DashboardResponse { dashboard: Dashboard }
);

mutation_envelope!(
    /// Envelope of `deleteDashboard`.
    DeleteDashboardResponse
);

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDashboardData {
    pub create_dashboard: DashboardResponse,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDashboardData {
    pub update_dashboard: DashboardResponse,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteDashboardData {
    pub delete_dashboard: DeleteDashboardResponse,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQueries {
    #[serde(default)]
    pub by_id_or_system_reference: Option<Dashboard>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetDashboardData {
    pub dashboards: DashboardQueries,
}

macro_rules! dashboard_fields {
    () => {
        concat!(
            "id name isPrivate systemReference categoryId ownerId ownerName createdAt updatedAt ",
            "version layout { id x y width height } widgets { id type properties }"
        )
    };
}

graphql_operation!(
    CreateDashboard: Mutation "createDashboard",
    InputVariables<CreateDashboardInput> => CreateDashboardData,
    concat!(
        "mutation createDashboard($input: CreateDashboardInput!) {",
        " createDashboard(input: $input) { success code message dashboard { ",
        dashboard_fields!(),
        " } } }"
    ),
);

graphql_operation!(
    UpdateDashboard: Mutation "updateDashboard",
    InputVariables<UpdateDashboardInput> => UpdateDashboardData,
    concat!(
        "mutation updateDashboard($input: UpdateDashboardInput!) {",
        " updateDashboard(input: $input) { success code message dashboard { ",
        dashboard_fields!(),
        " } } }"
    ),
);

graphql_operation!(
    DeleteDashboard: Mutation "deleteDashboard",
    InputVariables<IdInput> => DeleteDashboardData,
    "mutation deleteDashboard($input: DeleteDashboardInput!) { deleteDashboard(input: $input) { success code message } }",
);

graphql_operation!(
    GetDashboardById: Query "getDashboardById",
    IdVariables => GetDashboardData,
    concat!(
        "query getDashboardById($id: ID!) {",
        " dashboards { byIdOrSystemReference(id: $id) { ",
        dashboard_fields!(),
        " } } }"
    ),
);
