//! Call flow resource definition.

use super::ResourceDefinition;

/// Scripts for routing inbound calls.
pub struct CallflowResource;

impl ResourceDefinition for CallflowResource {
    const KEY: &'static str = "callflow";
    const FILE_NAME: &'static str = "callflow_corrected.json";
    const NAME: &'static str = "Call Flow";
    const DESCRIPTION: &'static str = "Call routing scripts for the front desk";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callflow_has_no_schema() {
        assert_eq!(CallflowResource::FILE_NAME, "callflow_corrected.json");
        assert!(CallflowResource::schema().is_none());
    }
}
