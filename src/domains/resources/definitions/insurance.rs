//! Insurance portals resource definition.

use super::ResourceDefinition;
use crate::domains::schemas::SchemaKind;

/// Insurance carriers, their provider portals and PCP change rules.
pub struct InsuranceResource;

impl ResourceDefinition for InsuranceResource {
    const KEY: &'static str = "insurance";
    const FILE_NAME: &'static str = "insurance_portals.json";
    const NAME: &'static str = "Insurance Portals";
    const DESCRIPTION: &'static str = "Insurance portals used for eligibility verification";

    fn schema() -> Option<SchemaKind> {
        Some(SchemaKind::Insurance)
    }
}
