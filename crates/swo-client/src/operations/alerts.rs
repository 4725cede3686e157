//! Alert definitions.

use serde::{Deserialize, Serialize};

use super::{IdVariables, graphql_operation};
use crate::mutation::mutation_envelope;

/// Alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

/// Comparison used in metric and entity filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterOperation {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

/// Filter expression attached to a condition node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertFilterExpressionInput {
    pub operation: FilterOperation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_value: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<AlertFilterExpressionInput>,
}

/// Restricts a condition node to a set of entity types or ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertConditionNodeEntityFilterInput {
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
}

/// One node of an alert condition tree.
///
/// Nodes reference their children through `operand_ids`; the node with id 0
/// is the root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertConditionNodeInput {
    pub id: i32,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operand_ids: Vec<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_filter: Option<AlertConditionNodeEntityFilterInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_filter: Option<AlertFilterExpressionInput>,
}

/// Action fired when an alert triggers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertActionInput {
    #[serde(rename = "type")]
    pub action_type: String,
    pub configuration_ids: Vec<String>,
}

/// Create or update payload for an alert definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDefinitionInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub enabled: bool,
    pub severity: AlertSeverity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_delay_seconds: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_reset_actions: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_interval_seconds: Option<i32>,
    pub condition: Vec<AlertConditionNodeInput>,
    #[serde(default)]
    pub actions: Vec<AlertActionInput>,
}

/// An alert action as stored by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertAction {
    #[serde(rename = "type")]
    pub action_type: String,
    #[serde(default)]
    pub configuration_ids: Vec<String>,
}

/// Named edge list of a flattened condition node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedLinks {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

/// Value of a flattened condition node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatAlertConditionNode {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub operator: Option<String>,
    #[serde(default)]
    pub field_name: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
}

/// A condition node as returned by the server, with server-assigned ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatAlertCondition {
    pub id: String,
    #[serde(default)]
    pub links: Vec<NamedLinks>,
    #[serde(default)]
    pub value: Option<FlatAlertConditionNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MuteInfo {
    #[serde(default)]
    pub muted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertUser {
    pub id: String,
}

/// An alert definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub organization_id: Option<String>,
    pub severity: AlertSeverity,
    #[serde(default)]
    pub triggered: bool,
    #[serde(default)]
    pub trigger_delay_seconds: Option<i32>,
    #[serde(default)]
    pub trigger_reset_actions: bool,
    #[serde(default)]
    pub condition_type: Option<String>,
    #[serde(default)]
    pub target_entity_types: Vec<String>,
    #[serde(default)]
    pub mute_info: Option<MuteInfo>,
    #[serde(default)]
    pub user: Option<AlertUser>,
    #[serde(default)]
    pub actions: Vec<AlertAction>,
    #[serde(default)]
    pub flat_condition: Vec<FlatAlertCondition>,
}

mutation_envelope!(
    /// Envelope of `createAlertDefinition` and `updateAlertDefinition`.
    AlertDefinitionResponse { alert: AlertDefinition }
);

mutation_envelope!(
    /// Envelope of `deleteAlertDefinition`.
    DeleteAlertDefinitionResponse
);

#[derive(Debug, Clone, Serialize)]
pub struct CreateAlertDefinitionVariables {
    pub definition: AlertDefinitionInput,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateAlertDefinitionVariables {
    pub id: String,
    pub definition: AlertDefinitionInput,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertMutations<T> {
    #[serde(
        alias = "createAlertDefinition",
        alias = "updateAlertDefinition",
        alias = "deleteAlertDefinition"
    )]
    pub result: T,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertMutationData<T> {
    pub alert_mutations: AlertMutations<T>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDefinitionsResult {
    #[serde(default)]
    pub alert_definitions: Vec<AlertDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertQueries {
    pub alert_definitions: AlertDefinitionsResult,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAlertDefinitionData {
    pub alert_queries: AlertQueries,
}

macro_rules! alert_definition_fields {
    () => {
        concat!(
            "id name description enabled organizationId severity triggered triggerDelaySeconds ",
            "triggerResetActions conditionType targetEntityTypes muteInfo { muted } user { id } ",
            "actions { type configurationIds } flatCondition { id links { name values } ",
            "value { type operator fieldName query } }"
        )
    };
}

graphql_operation!(
    CreateAlertDefinition: Mutation "createAlertDefinition",
    CreateAlertDefinitionVariables => AlertMutationData<AlertDefinitionResponse>,
    concat!(
        "mutation createAlertDefinition($definition: AlertDefinitionInput!) {",
        " alertMutations { createAlertDefinition(definition: $definition) {",
        " success code message alert {",
        alert_definition_fields!(),
        " } } } }"
    ),
);

graphql_operation!(
    UpdateAlertDefinition: Mutation "updateAlertDefinition",
    UpdateAlertDefinitionVariables => AlertMutationData<AlertDefinitionResponse>,
    concat!(
        "mutation updateAlertDefinition($id: ID!, $definition: AlertDefinitionInput!) {",
        " alertMutations { updateAlertDefinition(id: $id, definition: $definition) {",
        " success code message alert {",
        alert_definition_fields!(),
        " } } } }"
    ),
);

graphql_operation!(
    DeleteAlertDefinition: Mutation "deleteAlertDefinition",
    IdVariables => AlertMutationData<DeleteAlertDefinitionResponse>,
    "mutation deleteAlertDefinition($id: ID!) { alertMutations { deleteAlertDefinition(id: $id) { success code message } } }",
);

graphql_operation!(
    GetAlertDefinitionById: Query "getAlertDefinitionById",
    IdVariables => GetAlertDefinitionData,
    concat!(
        "query getAlertDefinitionById($id: ID!) {",
        " alertQueries { alertDefinitions(filter: { id: $id }) { alertDefinitions {",
        alert_definition_fields!(),
        " } } } }"
    ),
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_condition_node_wire_shape() {
        let node = AlertConditionNodeInput {
            id: 1,
            node_type: "aggregationOperator".into(),
            operator: Some("MAX".into()),
            operand_ids: vec![2, 3],
            metric_filter: Some(AlertFilterExpressionInput {
                operation: FilterOperation::Eq,
                property_name: None,
                property_value: None,
                children: vec![],
            }),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({
                "id": 1,
                "type": "aggregationOperator",
                "operator": "MAX",
                "operandIds": [2, 3],
                "metricFilter": { "operation": "EQ" }
            })
        );
    }

    #[test]
    fn test_mutation_data_decodes_any_alert_mutation() {
        let data: AlertMutationData<DeleteAlertDefinitionResponse> =
            serde_json::from_value(json!({
                "alertMutations": {
                    "deleteAlertDefinition": { "success": true, "code": "200", "message": "" }
                }
            }))
            .unwrap();
        assert!(data.alert_mutations.result.success);
    }
}
