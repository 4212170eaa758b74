//! Compute instance API
//!
//! Wrappers over the instance endpoints: list (with pagination), get,
//! create, lifecycle actions, and delete. Each function encodes its typed
//! arguments through the request builder and decodes the typed result.

use crate::client::Client;
use crate::error::Result;
use crate::http::query::page_limit;
use serde::{Deserialize, Serialize};

const INSTANCE_PREFIX: &str = "/v2/instance";

fn instance_uri(instance_id: &str) -> String {
    format!("{}/{}", INSTANCE_PREFIX, instance_id)
}

/// Lifecycle state reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstanceStatus {
    Starting,
    Running,
    Stopping,
    Stopped,
    Rebooting,
    Deleting,
    #[serde(other)]
    Unknown,
}

/// A compute instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub status: InstanceStatus,
    /// Machine spec, e.g. `"stratus.g1.medium"`.
    #[serde(default)]
    pub spec: String,
    #[serde(default)]
    pub zone_name: String,
    #[serde(default)]
    pub internal_ip: String,
    #[serde(default)]
    pub public_ip: String,
    #[serde(default)]
    pub create_time: String,
}

/// Arguments for [`list_instances`]. Unset fields are omitted from the
/// query string; `max_keys = 0` falls back to the default page limit.
#[derive(Debug, Clone, Default)]
pub struct ListInstancesArgs {
    pub marker: String,
    pub max_keys: u32,
    pub zone_name: String,
    pub internal_ip: String,
}

/// One page of instances.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListInstancesResult {
    #[serde(default)]
    pub marker: String,
    #[serde(default)]
    pub is_truncated: bool,
    #[serde(default)]
    pub next_marker: Option<String>,
    #[serde(default)]
    pub max_keys: u32,
    pub instances: Vec<Instance>,
}

/// List one page of instances.
pub async fn list_instances(client: &Client, args: &ListInstancesArgs) -> Result<ListInstancesResult> {
    client
        .get(INSTANCE_PREFIX)
        .query("maxKeys", page_limit(args.max_keys))
        .query_filter("marker", args.marker.as_str())
        .query_filter("zoneName", args.zone_name.as_str())
        .query_filter("internalIp", args.internal_ip.as_str())
        .send_json()
        .await
}

/// List all instances, following markers until the listing is exhausted.
pub async fn list_all_instances(client: &Client, args: &ListInstancesArgs) -> Result<Vec<Instance>> {
    let mut all_instances = Vec::new();
    let mut marker = args.marker.clone();

    loop {
        let page_args = ListInstancesArgs {
            marker: marker.clone(),
            ..args.clone()
        };
        let page = list_instances(client, &page_args).await?;
        all_instances.extend(page.instances);

        match page.next_marker {
            Some(next) if page.is_truncated && !next.is_empty() => marker = next,
            _ => break,
        }
    }

    Ok(all_instances)
}

/// Fetch a single instance by id.
pub async fn get_instance(client: &Client, instance_id: &str) -> Result<Instance> {
    client.get(&instance_uri(instance_id)).send_json().await
}

/// Arguments for [`create_instance`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstanceArgs {
    pub name: String,
    pub spec: String,
    pub image_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub zone_name: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub root_disk_size_gb: u32,
    /// Number of instances to create in one call.
    pub purchase_count: u32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub admin_pass: String,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

/// Ids of the instances a create call produced.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstanceResult {
    pub instance_ids: Vec<String>,
}

/// Create one or more instances.
///
/// `client_token` is forwarded opaquely for idempotency; mint one with
/// [`crate::client::new_client_token`] and reuse it when retrying.
pub async fn create_instance(
    client: &Client,
    args: &CreateInstanceArgs,
    client_token: Option<&str>,
) -> Result<CreateInstanceResult> {
    client
        .post(INSTANCE_PREFIX)
        .query_filter("clientToken", client_token)
        .json_body(args)
        .send_json()
        .await
}

/// Start a stopped instance.
pub async fn start_instance(client: &Client, instance_id: &str) -> Result<()> {
    client.put(&instance_uri(instance_id)).query("start", "").send_unit().await
}

/// Stop a running instance. `force` cuts power instead of signalling a
/// guest shutdown.
pub async fn stop_instance(client: &Client, instance_id: &str, force: bool) -> Result<()> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Body {
        force_stop: bool,
    }

    client
        .put(&instance_uri(instance_id))
        .query("stop", "")
        .json_body(&Body { force_stop: force })
        .send_unit()
        .await
}

/// Reboot an instance.
pub async fn reboot_instance(client: &Client, instance_id: &str, force: bool) -> Result<()> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Body {
        force_stop: bool,
    }

    client
        .put(&instance_uri(instance_id))
        .query("reboot", "")
        .json_body(&Body { force_stop: force })
        .send_unit()
        .await
}

/// Delete an instance. Irreversible.
pub async fn delete_instance(client: &Client, instance_id: &str) -> Result<()> {
    client.delete(&instance_uri(instance_id)).send_unit().await
}
