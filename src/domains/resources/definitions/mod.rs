//! Resource definitions module.
//!
//! Each file-backed resource is defined in its own file with:
//! - its logical key and the file name it maps to
//! - display metadata
//! - the schema its records follow, if any
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement the `ResourceDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod appointments;
mod callflow;
mod information;
mod insurance;
mod staff;

pub use appointments::AppointmentsResource;
pub use callflow::CallflowResource;
pub use information::InformationResource;
pub use insurance::InsuranceResource;
pub use staff::StaffResource;

use crate::domains::schemas::SchemaKind;

/// Trait for resource definitions.
///
/// Each resource must implement this trait to provide its metadata.
pub trait ResourceDefinition {
    /// The logical resource key (also the category id and API path segment).
    const KEY: &'static str;

    /// The file searched for in every candidate directory.
    const FILE_NAME: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// Schema applied to the records of this resource on read.
    fn schema() -> Option<SchemaKind> {
        None
    }
}
