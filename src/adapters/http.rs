use crate::domain::model::{MaintenanceItem, ReleaseMetadata};
use crate::domain::ports::{ItemSource, ReleaseSource};
use crate::utils::error::{Result, UpkeepError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Item store speaking JSON over HTTP (a Firebase-style REST export or any
/// endpoint returning the same shape).
pub struct HttpItemSource {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpItemSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            timeout,
        }
    }
}

#[async_trait]
impl ItemSource for HttpItemSource {
    async fn fetch_items(&self) -> Result<Vec<MaintenanceItem>> {
        tracing::debug!("Fetching items from: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;

        let body: serde_json::Value = response.json().await?;
        parse_items(body)
    }
}

/// The store serialises its item subtree either as a JSON array or as an
/// object keyed by store-assigned ids; deleted keys show up as nulls.
fn parse_items(body: serde_json::Value) -> Result<Vec<MaintenanceItem>> {
    let entries: Vec<serde_json::Value> = match body {
        serde_json::Value::Array(entries) => entries,
        serde_json::Value::Object(map) => map.into_iter().map(|(_, v)| v).collect(),
        serde_json::Value::Null => Vec::new(),
        other => {
            return Err(UpkeepError::ProcessingError {
                message: format!("Unexpected item store response shape: {}", kind_of(&other)),
            })
        }
    };

    let mut items = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.is_null() {
            continue;
        }
        items.push(serde_json::from_value(entry)?);
    }
    Ok(items)
}

fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Name of the release descriptor published next to the artifacts.
pub const METADATA_FILE: &str = "output-metadata.json";

/// Remote storage publishing release metadata and artifacts under one base
/// URL.
pub struct HttpReleaseSource {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpReleaseSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    fn url_for(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }
}

#[async_trait]
impl ReleaseSource for HttpReleaseSource {
    async fn fetch_metadata(&self) -> Result<ReleaseMetadata> {
        let url = self.url_for(METADATA_FILE);
        tracing::debug!("Fetching release metadata from: {}", url);
        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    async fn fetch_artifact(&self, name: &str) -> Result<Vec<u8>> {
        let url = self.url_for(name);
        tracing::debug!("Fetching release artifact from: {}", url);
        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.bytes().await?.to_vec())
    }
}
