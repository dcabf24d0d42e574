//! Appointment guide resource definition.

use super::ResourceDefinition;
use crate::domains::schemas::SchemaKind;

/// Visit types with their durations and scheduling rules.
pub struct AppointmentsResource;

impl ResourceDefinition for AppointmentsResource {
    const KEY: &'static str = "appointments";
    const FILE_NAME: &'static str = "appointment_guide.json";
    const NAME: &'static str = "Appointment Guide";
    const DESCRIPTION: &'static str = "Visit types, durations and scheduling rules";

    fn schema() -> Option<SchemaKind> {
        Some(SchemaKind::VisitType)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appointments_metadata() {
        assert_eq!(AppointmentsResource::KEY, "appointments");
        assert_eq!(AppointmentsResource::FILE_NAME, "appointment_guide.json");
        assert_eq!(AppointmentsResource::schema(), Some(SchemaKind::VisitType));
    }
}
