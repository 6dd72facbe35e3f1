//! npm Registry source
//!
//! Reads the `latest` dist-tag from the package document.
//! API endpoint: https://registry.npmjs.org/{package}

use crate::error::RegistryError;
use crate::registry::{HttpClient, VersionSource};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;

/// npm registry base URL
pub const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// npm Registry source
pub struct NpmRegistry {
    client: HttpClient,
    base_url: String,
}

/// npm package document, only the fields we need
#[derive(Debug, Deserialize)]
struct NpmPackageResponse {
    #[serde(rename = "dist-tags", default)]
    dist_tags: HashMap<String, String>,
}

impl NpmRegistry {
    /// Create a source against the registry at `base_url`
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build the URL for a package
    fn build_url(&self, package: &str) -> String {
        format!("{}/{}", self.base_url, package)
    }
}

#[async_trait]
impl VersionSource for NpmRegistry {
    fn registry_name(&self) -> &'static str {
        "npm"
    }

    async fn fetch_latest(&self, package: &str) -> Result<String, RegistryError> {
        let url = self.build_url(package);
        let response: NpmPackageResponse = self
            .client
            .get_json(&url, package, self.registry_name())
            .await?;

        response
            .dist_tags
            .get("latest")
            .filter(|v| !v.is_empty())
            .cloned()
            .ok_or_else(|| RegistryError::missing_version(package, self.registry_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn registry(base_url: &str) -> NpmRegistry {
        let client = HttpClient::with_timeout(Duration::from_secs(5)).unwrap();
        NpmRegistry::with_base_url(client, base_url)
    }

    #[test]
    fn test_npm_registry_name() {
        let source = registry(NPM_REGISTRY_URL);
        assert_eq!(source.registry_name(), "npm");
    }

    #[test]
    fn test_build_url() {
        let source = registry(NPM_REGISTRY_URL);
        assert_eq!(
            source.build_url("lodash"),
            "https://registry.npmjs.org/lodash"
        );
    }

    #[test]
    fn test_build_url_scoped_package() {
        let source = registry("http://localhost:4873/");
        assert_eq!(
            source.build_url("@types/node"),
            "http://localhost:4873/@types/node"
        );
    }

    #[tokio::test]
    async fn test_fetch_latest_dist_tag() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/left-pad")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"name": "left-pad", "dist-tags": {"latest": "1.3.0", "next": "2.0.0-rc.1"}}"#)
            .create_async()
            .await;

        let latest = registry(&server.url()).fetch_latest("left-pad").await.unwrap();
        assert_eq!(latest, "1.3.0");
    }

    #[tokio::test]
    async fn test_fetch_latest_without_dist_tags() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/unpublished")
            .with_status(200)
            .with_body(r#"{"name": "unpublished", "time": {"unpublished": {}}}"#)
            .create_async()
            .await;

        let err = registry(&server.url())
            .fetch_latest("unpublished")
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::MissingVersion { .. }));
    }

    #[tokio::test]
    async fn test_fetch_latest_empty_tag() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/blank")
            .with_status(200)
            .with_body(r#"{"dist-tags": {"latest": ""}}"#)
            .create_async()
            .await;

        assert!(registry(&server.url()).fetch_latest("blank").await.is_err());
    }
}
