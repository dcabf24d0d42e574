//! Resources domain module.
//!
//! This module handles the file-backed resources of the knowledge base.
//! Each resource is a JSON document looked up by a fixed file name across an
//! ordered list of candidate directories.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual resource definitions (one file per resource)
//! - `registry.rs` - Static table of logical keys and file names
//! - `resolver.rs` - First-match-wins lookup across candidate directories
//! - `service.rs` - Resource service for listing and reading
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file in `definitions/` (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs`
//!
//! **No need to modify `service.rs`!**

pub mod definitions;
mod error;
mod registry;
mod resolver;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::{ResourceEntry, find_resource, get_all_resources, resource_keys};
pub use resolver::{ResourceResolver, load_json_file};
pub use service::ResourceService;
