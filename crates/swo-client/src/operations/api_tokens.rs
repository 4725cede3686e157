//! API tokens of the current organization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{IdInput, IdVariables, InputVariables, graphql_operation};
use crate::mutation::mutation_envelope;

/// What a token is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenAccessLevel {
    Full,
    Read,
    Record,
}

/// Free-form key/value attached to a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAttribute {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTokenInput {
    pub name: String,
    pub access_level: TokenAccessLevel,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<TokenAttribute>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTokenInput {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_level: Option<TokenAccessLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<TokenAttribute>>,
}

/// An API token.
///
/// The clear-text `token` is only populated in the create response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiToken {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub obfuscated_token: Option<String>,
    #[serde(default)]
    pub access_level: Option<TokenAccessLevel>,
    #[serde(default)]
    pub attributes: Vec<TokenAttribute>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(rename = "type", default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub secure: Option<bool>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_by_name: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

mutation_envelope!(
    /// Envelope of `createToken`.
    CreateTokenResponse { token: ApiToken }
);

mutation_envelope!(
    /// Envelope of `updateToken`.
    UpdateTokenResponse
);

mutation_envelope!(
    /// Envelope of `deleteToken`.
    DeleteTokenResponse
);

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTokenData {
    pub create_token: CreateTokenResponse,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTokenData {
    pub update_token: UpdateTokenResponse,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTokenData {
    pub delete_token: DeleteTokenResponse,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokensOrganization {
    #[serde(default)]
    pub tokens: Vec<ApiToken>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokensUser {
    pub current_organization: TokensOrganization,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetApiTokenData {
    pub user: TokensUser,
}

macro_rules! api_token_fields {
    () => {
        concat!(
            "id name obfuscatedToken accessLevel attributes { key value } enabled type secure ",
            "createdBy createdByName createdAt updatedAt"
        )
    };
}

graphql_operation!(
    CreateToken: Mutation "createToken",
    InputVariables<CreateTokenInput> => CreateTokenData,
    concat!(
        "mutation createToken($input: CreateTokenInput!) {",
        " createToken(input: $input) { success code message token { token ",
        api_token_fields!(),
        " } } }"
    ),
);

graphql_operation!(
    UpdateToken: Mutation "updateToken",
    InputVariables<UpdateTokenInput> => UpdateTokenData,
    "mutation updateToken($input: UpdateTokenInput!) { updateToken(input: $input) { success code message } }",
);

graphql_operation!(
    DeleteToken: Mutation "deleteToken",
    InputVariables<IdInput> => DeleteTokenData,
    "mutation deleteToken($input: DeleteTokenInput!) { deleteToken(input: $input) { success code message } }",
);

graphql_operation!(
    GetApiTokenById: Query "getApiTokenById",
    IdVariables => GetApiTokenData,
    concat!(
        "query getApiTokenById($id: ID!) {",
        " user { currentOrganization { tokens(filter: { ids: [$id] }) { ",
        api_token_fields!(),
        " } } } }"
    ),
);
