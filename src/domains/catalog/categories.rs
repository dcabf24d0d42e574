//! Knowledge base categories shown on the dashboard.

use serde::Serialize;

use crate::domains::resources::ResourceDefinition;
use crate::domains::resources::definitions::{
    AppointmentsResource, CallflowResource, InformationResource, InsuranceResource, StaffResource,
};

/// A dashboard category. The id is the logical key of the backing resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

/// The fixed category list, in display order.
pub const CATEGORIES: [Category; 5] = [
    Category {
        id: AppointmentsResource::KEY,
        name: AppointmentsResource::NAME,
        icon: "📅",
    },
    Category {
        id: InformationResource::KEY,
        name: InformationResource::NAME,
        icon: "ℹ️",
    },
    Category {
        id: StaffResource::KEY,
        name: StaffResource::NAME,
        icon: "👥",
    },
    Category {
        id: InsuranceResource::KEY,
        name: InsuranceResource::NAME,
        icon: "🏥",
    },
    Category {
        id: CallflowResource::KEY,
        name: CallflowResource::NAME,
        icon: "📞",
    },
];

/// The category list as an owned vector.
pub fn categories() -> Vec<Category> {
    CATEGORIES.to_vec()
}
