//! Log service API
//!
//! Log stores are named containers for ingested log records. The API is
//! name-addressed: create/get/update/delete by store name, plus a
//! paginated listing with a name-pattern filter.

use crate::client::Client;
use crate::error::Result;
use crate::http::query::page_limit;
use serde::{Deserialize, Serialize};

const LOGSTORE_PREFIX: &str = "/v1/logstore";

fn logstore_uri(name: &str) -> String {
    format!("{}/{}", LOGSTORE_PREFIX, name)
}

/// A log store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogStore {
    pub log_store_name: String,
    /// Days records are kept before expiry.
    pub retention_days: u32,
    #[serde(default)]
    pub creation_time: String,
    #[serde(default)]
    pub last_modified_time: String,
}

/// Arguments for [`create_log_store`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLogStoreArgs {
    pub log_store_name: String,
    pub retention_days: u32,
}

/// Create a log store.
pub async fn create_log_store(client: &Client, args: &CreateLogStoreArgs) -> Result<()> {
    client.post(LOGSTORE_PREFIX).json_body(args).send_unit().await
}

/// Fetch a log store by name.
pub async fn get_log_store(client: &Client, name: &str) -> Result<LogStore> {
    client.get(&logstore_uri(name)).send_json().await
}

/// Change a log store's retention.
pub async fn update_log_store(client: &Client, name: &str, retention_days: u32) -> Result<()> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Body {
        retention_days: u32,
    }

    client
        .put(&logstore_uri(name))
        .json_body(&Body { retention_days })
        .send_unit()
        .await
}

/// Delete a log store and every record in it.
pub async fn delete_log_store(client: &Client, name: &str) -> Result<()> {
    client.delete(&logstore_uri(name)).send_unit().await
}

/// Arguments for [`list_log_stores`].
#[derive(Debug, Clone, Default)]
pub struct ListLogStoresArgs {
    /// Substring filter on store names; empty matches everything.
    pub name_pattern: String,
    pub marker: String,
    pub max_keys: u32,
}

/// One page of log stores.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListLogStoresResult {
    #[serde(default)]
    pub is_truncated: bool,
    #[serde(default)]
    pub next_marker: Option<String>,
    pub log_stores: Vec<LogStore>,
}

/// List one page of log stores.
pub async fn list_log_stores(client: &Client, args: &ListLogStoresArgs) -> Result<ListLogStoresResult> {
    client
        .get(LOGSTORE_PREFIX)
        .query("maxKeys", page_limit(args.max_keys))
        .query_filter("namePattern", args.name_pattern.as_str())
        .query_filter("marker", args.marker.as_str())
        .send_json()
        .await
}
