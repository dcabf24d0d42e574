//! Resource Registry - the static table of file-backed resources.
//!
//! Maps each logical resource key to exactly one expected file name.
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use serde::Serialize;

use super::definitions::{
    AppointmentsResource, CallflowResource, InformationResource, InsuranceResource,
    ResourceDefinition, StaffResource,
};
use crate::domains::schemas::SchemaKind;

/// An entry in the resource table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceEntry {
    /// Logical resource key.
    pub key: &'static str,

    /// File name searched for in the candidate directories.
    pub file_name: &'static str,

    /// Display name.
    pub name: &'static str,

    /// Description of the content.
    pub description: &'static str,

    /// Schema applied to the records of the resource, if any.
    pub schema: Option<SchemaKind>,
}

/// Helper function to create a registry entry from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    ResourceEntry {
        key: R::KEY,
        file_name: R::FILE_NAME,
        name: R::NAME,
        description: R::DESCRIPTION,
        schema: R::schema(),
    }
}

/// Get all registered resources, in category order.
///
/// This is the central place where all resources are registered.
/// When adding a new resource, add it here.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<AppointmentsResource>(),
        build_resource::<InformationResource>(),
        build_resource::<StaffResource>(),
        build_resource::<InsuranceResource>(),
        build_resource::<CallflowResource>(),
    ]
}

/// Look up a resource by its logical key.
pub fn find_resource(key: &str) -> Option<ResourceEntry> {
    get_all_resources().into_iter().find(|r| r.key == key)
}

/// Get the list of all resource keys.
pub fn resource_keys() -> Vec<&'static str> {
    vec![
        AppointmentsResource::KEY,
        InformationResource::KEY,
        StaffResource::KEY,
        InsuranceResource::KEY,
        CallflowResource::KEY,
    ]
}
