//! Knowledge base server and its request handlers.
//!
//! `KnowledgeBaseServer` is built once at startup and cloned into every
//! request. Each logical resource maps to one handler method; file-backed
//! resources go through the `ResourceService`, categories and updates come
//! from compile-time constants.

use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use super::transport::HttpTransport;
use crate::domains::catalog;
use crate::domains::resources::definitions::{
    AppointmentsResource, CallflowResource, InformationResource, InsuranceResource, StaffResource,
};
use crate::domains::resources::{ResourceDefinition, ResourceEntry, ResourceError, ResourceService};

/// The request handler set.
#[derive(Clone)]
pub struct KnowledgeBaseServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for reading file-backed resources.
    resource_service: Arc<ResourceService>,
}

impl KnowledgeBaseServer {
    /// Create a new server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let resource_service = Arc::new(ResourceService::new(config.resources.clone()));

        Self {
            config,
            resource_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Serve the HTTP API until a shutdown signal arrives.
    pub async fn serve(self) -> Result<()> {
        let transport = HttpTransport::new(self.config.http.clone());
        transport.run(self).await?;
        Ok(())
    }

    /// Candidate data directories, in search order.
    pub fn data_dirs(&self) -> &[PathBuf] {
        self.resource_service.resolver().candidate_dirs()
    }

    // ========================================================================
    // File-backed resources
    // ========================================================================

    /// Every data file of the first existing candidate directory, keyed by
    /// file stem.
    #[instrument(skip(self))]
    pub async fn get_all_data(&self) -> std::result::Result<Value, ResourceError> {
        info!("Loading all knowledge base data");
        self.resource_service.read_all().await.map(Value::Object)
    }

    /// Read a file-backed resource by logical key.
    #[instrument(skip(self))]
    pub async fn get_resource(&self, key: &str) -> std::result::Result<Value, ResourceError> {
        info!("Reading resource: {}", key);
        self.resource_service.read(key).await
    }

    /// Appointment guide.
    pub async fn get_appointments(&self) -> std::result::Result<Value, ResourceError> {
        self.get_resource(AppointmentsResource::KEY).await
    }

    /// General information (HIPAA, prescriptions, ...).
    pub async fn get_information(&self) -> std::result::Result<Value, ResourceError> {
        self.get_resource(InformationResource::KEY).await
    }

    /// Staff extensions.
    pub async fn get_staff(&self) -> std::result::Result<Value, ResourceError> {
        self.get_resource(StaffResource::KEY).await
    }

    /// Insurance portals.
    pub async fn get_insurance(&self) -> std::result::Result<Value, ResourceError> {
        self.get_resource(InsuranceResource::KEY).await
    }

    /// Call flow scripts.
    pub async fn get_callflow(&self) -> std::result::Result<Value, ResourceError> {
        self.get_resource(CallflowResource::KEY).await
    }

    /// Metadata for every registered resource.
    pub fn list_resources(&self) -> Vec<ResourceEntry> {
        self.resource_service.list_resources()
    }

    // ========================================================================
    // Static payloads
    // ========================================================================

    /// The fixed category list.
    pub fn get_categories(&self) -> Value {
        json!({ "categories": catalog::categories() })
    }

    /// The fixed updates feed.
    pub fn get_updates(&self) -> Value {
        json!({ "updates": catalog::updates() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ResourcesConfig;
    use crate::core::transport::TransportError;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn server_over(dirs: &[&Path]) -> KnowledgeBaseServer {
        let mut config = Config::default();
        config.resources = ResourcesConfig {
            data_dirs: dirs.iter().map(|d| d.to_path_buf()).collect(),
            ..Default::default()
        };
        KnowledgeBaseServer::new(config)
    }

    #[tokio::test]
    async fn test_each_handler_reads_its_own_file() {
        let dir = TempDir::new().unwrap();
        for (file, marker) in [
            ("appointment_guide.json", "appointments"),
            ("information.json", "information"),
            ("staff_extensions.json", "staff"),
            ("insurance_portals.json", "insurance"),
            ("callflow_corrected.json", "callflow"),
        ] {
            fs::write(dir.path().join(file), json!({ "marker": marker }).to_string()).unwrap();
        }

        let server = server_over(&[dir.path()]);

        assert_eq!(server.get_appointments().await.unwrap()["marker"], "appointments");
        assert_eq!(server.get_information().await.unwrap()["marker"], "information");
        assert_eq!(server.get_staff().await.unwrap()["marker"], "staff");
        assert_eq!(server.get_insurance().await.unwrap()["marker"], "insurance");
        assert_eq!(server.get_callflow().await.unwrap()["marker"], "callflow");
    }

    #[tokio::test]
    async fn test_missing_resources_do_not_fail_the_server() {
        let dir = TempDir::new().unwrap();
        let server = server_over(&[dir.path()]);

        assert!(server.get_staff().await.unwrap_err().is_missing());
        assert!(server.get_all_data().await.unwrap_err().is_missing());
        // Static payloads stay available.
        assert_eq!(server.get_categories()["categories"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_serve_reports_bind_failure() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = taken.local_addr().unwrap().port();

        let mut config = Config::default();
        config.http.host = "127.0.0.1".to_string();
        config.http.port = port;
        let server = KnowledgeBaseServer::new(config);

        match server.serve().await {
            Err(crate::core::Error::Transport(TransportError::BindError { address, .. })) => {
                assert_eq!(address, format!("127.0.0.1:{}", port))
            }
            other => panic!("Expected bind failure, got {:?}", other),
        }
    }

    #[test]
    fn test_categories_are_stable() {
        let dir = TempDir::new().unwrap();
        let server = server_over(&[dir.path()]);
        assert_eq!(server.get_categories(), server.get_categories());
    }

    #[test]
    fn test_updates_payload() {
        let dir = TempDir::new().unwrap();
        let server = server_over(&[dir.path()]);

        let updates = server.get_updates();
        let updates = updates["updates"].as_array().unwrap();
        assert_eq!(updates.len(), 3);
        assert_eq!(updates[0]["title"], "New HIPAA Guidelines");
        assert_eq!(updates[0]["priority"], "high");
    }
}
