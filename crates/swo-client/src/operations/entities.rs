//! Synthetic checks: URI and website entities.
//!
//! Both live in the shared entity id space and are read through
//! `entities { byId }`, which answers with whatever kind the id belongs to.
//! [`Entity`] is the tagged decode of that answer.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{IdInput, IdVariables, InputVariables, graphql_operation};
use crate::mutation::MutationEnvelope;
use crate::resolve::{EntityVariant, TaggedEntity};
use crate::types::TestIntervalInSeconds;

/// Where probes run from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProbeLocationType {
    Region,
    Country,
    City,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeLocation {
    #[serde(rename = "type")]
    pub location_type: ProbeLocationType,
    pub values: Vec<String>,
}

/// Protocol checked by a website availability test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WebsiteProtocol {
    Http,
    Https,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UriTestDefinitions {
    pub test_interval_in_seconds: TestIntervalInSeconds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_from: Option<ProbeLocation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UriOptions {
    #[serde(default)]
    pub is_ping_enabled: bool,
    #[serde(default)]
    pub is_tcp_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TcpOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_to_expect: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_to_send: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUriInput {
    pub name: String,
    pub ip_or_domain: String,
    pub test_definitions: UriTestDefinitions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<UriOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_options: Option<TcpOptions>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUriInput {
    pub id: String,
    pub name: String,
    pub ip_or_domain: String,
    pub test_definitions: UriTestDefinitions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<UriOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_options: Option<TcpOptions>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityCheckSettings {
    pub test_interval_in_seconds: TestIntervalInSeconds,
    #[serde(default)]
    pub protocols: Vec<WebsiteProtocol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_from: Option<ProbeLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_for_string: Option<String>,
}

/// Real user monitoring settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RumSettings {
    #[serde(default)]
    pub spa: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apdex_time_in_seconds: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebsiteInput {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_check_settings: Option<AvailabilityCheckSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rum: Option<RumSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWebsiteInput {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_check_settings: Option<AvailabilityCheckSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rum: Option<RumSettings>,
}

/// The id the server assigned to a new check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedEntity {
    pub id: String,
}

/// A URI availability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Uri {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub ip_or_domain: Option<String>,
    #[serde(default)]
    pub test_definitions: Option<UriTestDefinitions>,
    #[serde(default)]
    pub options: Option<UriOptions>,
    #[serde(default)]
    pub tcp_options: Option<TcpOptions>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteMonitoring {
    #[serde(default)]
    pub availability: Option<AvailabilityCheckSettings>,
    #[serde(default)]
    pub rum: Option<RumSettings>,
}

/// A monitored website.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub monitoring: Option<WebsiteMonitoring>,
}

const URI_TYPE: &str = "Uri";
const WEBSITE_TYPE: &str = "Website";

/// Result of `entities { byId }`, tagged by `__typename`.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Uri(Uri),
    Website(Website),
    /// Any other entity kind sharing the id space.
    Other { type_name: String, id: String },
}

impl<'de> Deserialize<'de> for Entity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let type_name = value
            .get("__typename")
            .and_then(Value::as_str)
            .ok_or_else(|| <D::Error as de::Error>::missing_field("__typename"))?
            .to_owned();

        match type_name.as_str() {
            URI_TYPE => serde_json::from_value(value)
                .map(Entity::Uri)
                .map_err(de::Error::custom),
            WEBSITE_TYPE => serde_json::from_value(value)
                .map(Entity::Website)
                .map_err(de::Error::custom),
            _ => {
                let id = value
                    .get("id")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_owned();
                Ok(Entity::Other { type_name, id })
            }
        }
    }
}

impl TaggedEntity for Entity {
    fn type_name(&self) -> &str {
        match self {
            Entity::Uri(_) => URI_TYPE,
            Entity::Website(_) => WEBSITE_TYPE,
            Entity::Other { type_name, .. } => type_name,
        }
    }
}

impl EntityVariant<Entity> for Uri {
    const TYPE_NAME: &'static str = URI_TYPE;

    fn narrow(entity: Entity) -> Result<Self, Entity> {
        match entity {
            Entity::Uri(uri) => Ok(uri),
            other => Err(other),
        }
    }
}

impl EntityVariant<Entity> for Website {
    const TYPE_NAME: &'static str = WEBSITE_TYPE;

    fn narrow(entity: Entity) -> Result<Self, Entity> {
        match entity {
            Entity::Website(website) => Ok(website),
            other => Err(other),
        }
    }
}

/// The reply of a check mutation.
///
/// Check mutations do not use the `{ success, code, message }` envelope.
/// URI mutations answer with a bare `{ id }`. Website mutations answer with a
/// result union whose `__typename` ends in `Success` when the change was
/// applied.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DemMutationResult {
    #[serde(rename = "__typename", default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

impl DemMutationResult {
    /// Untagged replies only exist for the success shape.
    pub fn is_success(&self) -> bool {
        self.type_name
            .as_deref()
            .is_none_or(|name| name.ends_with("Success"))
    }

    fn code(&self) -> &str {
        self.type_name.as_deref().unwrap_or_default()
    }
}

/// Reply of `createUri` and `createWebsite`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct CreateEntityResponse(pub DemMutationResult);

impl MutationEnvelope for CreateEntityResponse {
    type Payload = CreatedEntity;

    fn success(&self) -> bool {
        self.0.is_success()
    }

    fn code(&self) -> &str {
        self.0.code()
    }

    fn message(&self) -> &str {
        ""
    }

    fn into_payload(self) -> Option<CreatedEntity> {
        self.0.id.map(|id| CreatedEntity { id })
    }
}

/// Reply of the update and delete check mutations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct EntityMutationResponse(pub DemMutationResult);

impl MutationEnvelope for EntityMutationResponse {
    type Payload = ();

    fn success(&self) -> bool {
        self.0.is_success()
    }

    fn code(&self) -> &str {
        self.0.code()
    }

    fn message(&self) -> &str {
        ""
    }

    fn into_payload(self) -> Option<()> {
        Some(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DemMutations<T> {
    #[serde(
        alias = "createUri",
        alias = "updateUri",
        alias = "deleteUri",
        alias = "createWebsite",
        alias = "updateWebsite",
        alias = "deleteWebsite"
    )]
    pub result: T,
}

/// Check mutations are grouped under `dem`.
#[derive(Debug, Clone, Deserialize)]
pub struct DemMutationData<T> {
    pub dem: DemMutations<T>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityQueries {
    #[serde(default)]
    pub by_id: Option<Entity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetEntityData {
    pub entities: EntityQueries,
}

macro_rules! dem_mutation {
    ($name:ident, $op:literal, $field:literal, $input:literal, $vars:ty, $data:ty, $selection:literal) => {
        graphql_operation!(
            $name: Mutation $op,
            InputVariables<$vars> => DemMutationData<$data>,
            concat!(
                "mutation ", $op, "($input: ", $input, "!) {",
                " dem { ", $field, "(input: $input) { ", $selection, " } } }"
            ),
        );
    };
}

dem_mutation!(CreateUri, "createUriMutation", "createUri", "CreateUriInput",
    CreateUriInput, CreateEntityResponse, "id");
dem_mutation!(UpdateUri, "updateUriMutation", "updateUri", "UpdateUriInput",
    UpdateUriInput, EntityMutationResponse, "id");
dem_mutation!(DeleteUri, "deleteUriMutation", "deleteUri", "DeleteUriInput",
    IdInput, EntityMutationResponse, "id");
dem_mutation!(CreateWebsite, "createWebsiteMutation", "createWebsite", "CreateWebsiteInput",
    CreateWebsiteInput, CreateEntityResponse, "__typename ... on CreateWebsiteSuccess { id }");
dem_mutation!(UpdateWebsite, "updateWebsiteMutation", "updateWebsite", "UpdateWebsiteInput",
    UpdateWebsiteInput, EntityMutationResponse, "__typename ... on UpdateWebsiteSuccess { id }");
dem_mutation!(DeleteWebsite, "deleteWebsiteMutation", "deleteWebsite", "DeleteWebsiteInput",
    IdInput, EntityMutationResponse, "__typename ... on DeleteWebsiteSuccess { id }");

graphql_operation!(
    GetEntityById: Query "getEntityById",
    IdVariables => GetEntityData,
    concat!(
        "query getEntityById($id: ID!) { entities { byId(id: $id) { __typename id",
        " ... on Uri { name ipOrDomain",
        " testDefinitions { testIntervalInSeconds testFrom { type values } }",
        " options { isPingEnabled isTcpEnabled }",
        " tcpOptions { port stringToExpect stringToSend } }",
        " ... on Website { name url monitoring {",
        " availability { testIntervalInSeconds protocols testFrom { type values } checkForString }",
        " rum { spa apdexTimeInSeconds } } } } } }"
    ),
);
