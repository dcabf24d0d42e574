//! Resource service implementation.
//!
//! The ResourceService reads file-backed resources through the resolver and
//! applies the configured schema validation at the boundary.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use serde_json::{Map, Value};
use tracing::{info, warn};

use super::error::ResourceError;
use super::registry::{ResourceEntry, find_resource, get_all_resources};
use super::resolver::ResourceResolver;
use crate::core::config::{ResourcesConfig, ValidationMode};
use crate::domains::schemas::{SchemaKind, validate_collection};

/// Service for listing and reading knowledge base resources.
#[derive(Debug, Clone)]
pub struct ResourceService {
    /// Resolver over the configured candidate directories.
    resolver: ResourceResolver,

    /// What to do with records that fail their schema.
    validation: ValidationMode,
}

impl ResourceService {
    /// Create a new ResourceService with the given configuration.
    pub fn new(config: ResourcesConfig) -> Self {
        info!(
            "Initializing ResourceService with {} candidate directories",
            config.data_dirs.len()
        );
        for (i, dir) in config.data_dirs.iter().enumerate() {
            info!("  {}. {}", i + 1, dir.display());
        }

        Self {
            resolver: ResourceResolver::new(config.data_dirs),
            validation: config.validation,
        }
    }

    /// The resolver backing this service.
    pub fn resolver(&self) -> &ResourceResolver {
        &self.resolver
    }

    /// List all registered resources.
    pub fn list_resources(&self) -> Vec<ResourceEntry> {
        get_all_resources()
    }

    /// Read a resource by its logical key.
    ///
    /// The payload is returned exactly as parsed. Validation never rewrites
    /// it; in `reject` mode a failing payload is turned into an error instead.
    pub async fn read(&self, key: &str) -> Result<Value, ResourceError> {
        let entry = find_resource(key).ok_or_else(|| ResourceError::unknown(key))?;
        let payload = self
            .resolver
            .resolve_file(entry.key, entry.file_name)
            .await?;

        if let Some(kind) = entry.schema {
            self.check(&entry, kind, &payload)?;
        }

        Ok(payload)
    }

    /// Read every data file of the first existing candidate directory.
    pub async fn read_all(&self) -> Result<Map<String, Value>, ResourceError> {
        self.resolver.scan_all().await
    }

    fn check(
        &self,
        entry: &ResourceEntry,
        kind: SchemaKind,
        payload: &Value,
    ) -> Result<(), ResourceError> {
        if self.validation == ValidationMode::Off {
            return Ok(());
        }

        let report = validate_collection(kind, payload);
        if report.is_clean() {
            return Ok(());
        }

        let failures = report.messages();
        for failure in &failures {
            warn!("{}: {}", entry.file_name, failure);
        }
        warn!(
            "{} of {} {} records in {} failed validation",
            failures.len(),
            report.checked,
            kind,
            entry.file_name
        );

        match self.validation {
            ValidationMode::Reject => Err(ResourceError::Validation {
                key: entry.key.to_string(),
                failures,
            }),
            _ => Ok(()),
        }
    }
}
