//! Catalog domain module.
//!
//! Static dashboard payloads that are compiled into the binary rather than
//! read from the data directories: the category list and the updates feed.

mod categories;
mod updates;

pub use categories::{CATEGORIES, Category, categories};
pub use updates::{UPDATES, updates};
