//! Log exclusion filters.

use serde::{Deserialize, Serialize};

use super::{IdInput, InputVariables, graphql_operation};
use crate::mutation::mutation_envelope;

/// How an exclusion expression is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExclusionFilterExpressionKind {
    String,
    Regex,
}

/// One match expression of a filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionFilterExpression {
    pub kind: ExclusionFilterExpressionKind,
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExclusionFilterInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Restricts the filter to logs sent with this token. `None` makes it global.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_signature: Option<String>,
    pub expressions: Vec<ExclusionFilterExpression>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExclusionFilterInput {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expressions: Option<Vec<ExclusionFilterExpression>>,
}

/// A log exclusion filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExclusionFilter {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub token_signature: Option<String>,
    #[serde(default)]
    pub expressions: Vec<ExclusionFilterExpression>,
}

mutation_envelope!(
    /// Envelope of `createExclusionFilter`.
    CreateExclusionFilterResponse { exclusion_filter: ExclusionFilter }
);

mutation_envelope!(
    /// Envelope of `updateExclusionFilter`.
    UpdateExclusionFilterResponse
);

mutation_envelope!(
    /// Envelope of `deleteExclusionFilter`.
    DeleteExclusionFilterResponse
);

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLogFilterData {
    pub create_exclusion_filter: CreateExclusionFilterResponse,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLogFilterData {
    pub update_exclusion_filter: UpdateExclusionFilterResponse,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteLogFilterData {
    pub delete_exclusion_filter: DeleteExclusionFilterResponse,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetLogFilterData {
    #[serde(default)]
    pub get_exclusion_filter: Option<ExclusionFilter>,
}

macro_rules! exclusion_filter_fields {
    () => {
        "id name description tokenSignature expressions { kind expression }"
    };
}

graphql_operation!(
    CreateLogFilter: Mutation "createLogFilter",
    InputVariables<CreateExclusionFilterInput> => CreateLogFilterData,
    concat!(
        "mutation createLogFilter($input: CreateExclusionFilterInput!) {",
        " createExclusionFilter(input: $input) { success code message exclusionFilter { ",
        exclusion_filter_fields!(),
        " } } }"
    ),
);

graphql_operation!(
    UpdateLogFilter: Mutation "updateLogFilter",
    InputVariables<UpdateExclusionFilterInput> => UpdateLogFilterData,
    "mutation updateLogFilter($input: UpdateExclusionFilterInput!) { updateExclusionFilter(input: $input) { success code message } }",
);

graphql_operation!(
    DeleteLogFilter: Mutation "deleteLogFilter",
    InputVariables<IdInput> => DeleteLogFilterData,
    "mutation deleteLogFilter($input: DeleteExclusionFilterInput!) { deleteExclusionFilter(input: $input) { success code message } }",
);

graphql_operation!(
    GetLogFilterById: Query "getLogFilterById",
    InputVariables<IdInput> => GetLogFilterData,
    concat!(
        "query getLogFilterById($input: GetExclusionFilterInput!) {",
        " getExclusionFilter(input: $input) { ",
        exclusion_filter_fields!(),
        " } }"
    ),
);
