//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents a specific area of functionality within the
//! knowledge base server.

pub mod catalog;
pub mod resources;
pub mod schemas;
