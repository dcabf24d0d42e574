//! Staff extensions resource definition.

use super::ResourceDefinition;
use crate::domains::schemas::SchemaKind;

/// Staff phone extensions.
pub struct StaffResource;

impl ResourceDefinition for StaffResource {
    const KEY: &'static str = "staff";
    const FILE_NAME: &'static str = "staff_extensions.json";
    const NAME: &'static str = "Staff Extensions";
    const DESCRIPTION: &'static str = "Phone extensions for every staff member";

    fn schema() -> Option<SchemaKind> {
        Some(SchemaKind::StaffMember)
    }
}
