//! Dedicated network connection API
//!
//! Dedicated connections are fixed-bandwidth links between a customer
//! access point and the platform backbone. Provisioning is asynchronous:
//! a create call returns an id whose status moves through the usual
//! building/established lifecycle.

use crate::client::Client;
use crate::error::Result;
use crate::http::query::page_limit;
use serde::{Deserialize, Serialize};

const CONNECT_PREFIX: &str = "/v1/dedicatedconn";

fn connection_uri(connection_id: &str) -> String {
    format!("{}/{}", CONNECT_PREFIX, connection_id)
}

/// A dedicated network connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DedicatedConnection {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Provisioning state, e.g. `"building"` or `"established"`.
    #[serde(default)]
    pub status: String,
    pub bandwidth_mbps: u32,
    #[serde(default)]
    pub access_point: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub create_time: String,
}

/// Arguments for [`create_connection`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConnectionArgs {
    pub name: String,
    pub bandwidth_mbps: u32,
    /// Access point the physical link lands on.
    pub access_point: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Id of a newly requested connection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConnectionResult {
    pub id: String,
}

/// Request a new dedicated connection.
///
/// `client_token` is forwarded opaquely for idempotency.
pub async fn create_connection(
    client: &Client,
    args: &CreateConnectionArgs,
    client_token: Option<&str>,
) -> Result<CreateConnectionResult> {
    client
        .post(CONNECT_PREFIX)
        .query_filter("clientToken", client_token)
        .json_body(args)
        .send_json()
        .await
}

/// Arguments for [`list_connections`].
#[derive(Debug, Clone, Default)]
pub struct ListConnectionsArgs {
    pub marker: String,
    pub max_keys: u32,
}

/// One page of dedicated connections.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListConnectionsResult {
    #[serde(default)]
    pub is_truncated: bool,
    #[serde(default)]
    pub next_marker: Option<String>,
    pub connections: Vec<DedicatedConnection>,
}

/// List one page of dedicated connections.
pub async fn list_connections(client: &Client, args: &ListConnectionsArgs) -> Result<ListConnectionsResult> {
    client
        .get(CONNECT_PREFIX)
        .query("maxKeys", page_limit(args.max_keys))
        .query_filter("marker", args.marker.as_str())
        .send_json()
        .await
}

/// Fields of [`update_connection`]; empty fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConnectionArgs {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Update a connection's name or description.
pub async fn update_connection(
    client: &Client,
    connection_id: &str,
    args: &UpdateConnectionArgs,
) -> Result<()> {
    client
        .put(&connection_uri(connection_id))
        .json_body(args)
        .send_unit()
        .await
}

/// Tear down a dedicated connection.
pub async fn delete_connection(client: &Client, connection_id: &str) -> Result<()> {
    client.delete(&connection_uri(connection_id)).send_unit().await
}
