//! Typed knowledge base records.
//!
//! These mirror the curated JSON files. The system never builds them on its
//! own except for the static updates feed; everything else comes out of
//! [`validate`](super::validate).

use serde::{Deserialize, Serialize};

fn default_priority() -> Option<String> {
    Some("low".to_string())
}

/// Generic knowledge entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "default_priority")]
    pub priority: Option<String>,
}

/// One row of the appointment guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitType {
    pub visit_type: String,
    pub description: String,
    pub duration: String,
    #[serde(default)]
    pub extra_info: String,
    #[serde(default)]
    pub rules: String,
}

/// Staff directory entry. Field names are capitalised in the source files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    #[serde(rename = "Staff")]
    pub staff: String,
    #[serde(rename = "Ext")]
    pub ext: String,
}

/// Insurance portal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insurance {
    pub insurance_name: String,
    pub portal_name: String,
    pub website: String,
    pub pcp_change_required: bool,
    #[serde(default)]
    pub notes: String,
}

/// Dashboard notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    pub title: String,
    pub description: String,
    pub date: String,
    pub priority: String,
    pub category: String,
}

/// A record produced by a successful validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TypedRecord {
    Article(Article),
    VisitType(VisitType),
    StaffMember(StaffMember),
    Insurance(Insurance),
    Update(Update),
}
