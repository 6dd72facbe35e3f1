//! Registry sources for looking up the latest published version
//!
//! This module provides:
//! - HTTP client shared foundation
//! - npm Registry source (dist-tags.latest)
//! - jsDelivr CDN source (package.json version)
//! - A fallback chain trying one source after another

mod client;
mod jsdelivr;
mod npm;

pub use client::HttpClient;
pub use jsdelivr::{JsDelivrCdn, JSDELIVR_NPM_URL};
pub use npm::{NpmRegistry, NPM_REGISTRY_URL};

use crate::error::RegistryError;
use async_trait::async_trait;
use log::debug;

/// Trait for endpoints reporting a package's latest version
#[async_trait]
pub trait VersionSource: Send + Sync {
    /// Get the registry name
    fn registry_name(&self) -> &'static str;

    /// Fetch the latest published version of a package
    async fn fetch_latest(&self, package: &str) -> Result<String, RegistryError>;
}

/// Tries the primary source, then the fallback when the primary fails
pub struct FallbackSource {
    primary: Box<dyn VersionSource>,
    fallback: Box<dyn VersionSource>,
}

impl FallbackSource {
    pub fn new(primary: Box<dyn VersionSource>, fallback: Box<dyn VersionSource>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl VersionSource for FallbackSource {
    fn registry_name(&self) -> &'static str {
        self.primary.registry_name()
    }

    async fn fetch_latest(&self, package: &str) -> Result<String, RegistryError> {
        match self.primary.fetch_latest(package).await {
            Ok(version) => Ok(version),
            Err(e) => {
                debug!(
                    "{}: {}; trying {}",
                    package,
                    e,
                    self.fallback.registry_name()
                );
                self.fallback.fetch_latest(package).await
            }
        }
    }
}

/// Create the default npm registry → jsDelivr chain
pub fn create_source(client: HttpClient, registry_url: &str, fallback_url: &str) -> FallbackSource {
    FallbackSource::new(
        Box::new(NpmRegistry::with_base_url(client.clone(), registry_url)),
        Box::new(JsDelivrCdn::with_base_url(client, fallback_url)),
    )
}
