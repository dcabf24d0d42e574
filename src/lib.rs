//! Clinic Knowledge Base Server Library
//!
//! A read-only HTTP API over a clinical office knowledge base. Curated JSON
//! files are looked up across an ordered list of candidate directories and
//! served verbatim, alongside a static category list and updates feed.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the request handler set and the
//!   HTTP transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **resources**: File-backed resources and their resolution
//!   - **schemas**: Record schemas and validation
//!   - **catalog**: Static dashboard payloads
//!
//! # Example
//!
//! ```rust,no_run
//! use clinic_kb_server::{Config, KnowledgeBaseServer};
//!
//! #[tokio::main]
//! async fn main() -> clinic_kb_server::Result<()> {
//!     KnowledgeBaseServer::new(Config::from_env()).serve().await
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, KnowledgeBaseServer, Result};
