//! Schemas domain module.
//!
//! Defines the expected shape of each knowledge base record and validates
//! decoded JSON against it. Nothing here performs I/O.
//!
//! ## Architecture
//!
//! - `records.rs` - Typed record structs
//! - `registry.rs` - `SchemaKind`, `validate()` and whole-payload reports
//! - `error.rs` - `ValidationError` and its field-level violations

mod error;
mod records;
mod registry;

pub use error::{FieldViolation, ValidationError};
pub use records::{Article, Insurance, StaffMember, TypedRecord, Update, VisitType};
pub use registry::{
    RecordFailure, SchemaKind, ValidationReport, validate, validate_article, validate_collection,
    validate_insurance, validate_staff_member, validate_update, validate_visit_type,
};
