//! jsDelivr CDN source
//!
//! Reads the `version` field of the package.json published under the
//! `latest` tag.
//! API endpoint: https://cdn.jsdelivr.net/npm/{package}@latest/package.json

use crate::error::RegistryError;
use crate::registry::{HttpClient, VersionSource};
use async_trait::async_trait;
use serde::Deserialize;

/// jsDelivr npm mirror base URL
pub const JSDELIVR_NPM_URL: &str = "https://cdn.jsdelivr.net/npm";

/// jsDelivr CDN source
pub struct JsDelivrCdn {
    client: HttpClient,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PackageDescriptor {
    version: Option<String>,
}

impl JsDelivrCdn {
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn build_url(&self, package: &str) -> String {
        format!("{}/{}@latest/package.json", self.base_url, package)
    }
}

#[async_trait]
impl VersionSource for JsDelivrCdn {
    fn registry_name(&self) -> &'static str {
        "jsDelivr"
    }

    async fn fetch_latest(&self, package: &str) -> Result<String, RegistryError> {
        let url = self.build_url(package);
        let descriptor: PackageDescriptor = self
            .client
            .get_json(&url, package, self.registry_name())
            .await?;

        descriptor
            .version
            .filter(|v| !v.is_empty())
            .ok_or_else(|| RegistryError::missing_version(package, self.registry_name()))
    }
}
