//! General information resource definition.

use super::ResourceDefinition;

/// Office policies: HIPAA, prescriptions, records requests and the like.
///
/// The file is free-form, so no record schema is applied.
pub struct InformationResource;

impl ResourceDefinition for InformationResource {
    const KEY: &'static str = "information";
    const FILE_NAME: &'static str = "information.json";
    const NAME: &'static str = "General Information";
    const DESCRIPTION: &'static str = "General information including HIPAA and prescriptions";
}
