//! Recent updates feed for the dashboard card.

use crate::domains::schemas::Update;

/// (title, description, date, priority, category)
pub const UPDATES: [(&str, &str, &str, &str, &str); 3] = [
    (
        "New HIPAA Guidelines",
        "Updated privacy and security policies effective immediately",
        "2025-01-20",
        "high",
        "compliance",
    ),
    (
        "Staff Extension Changes",
        "Several staff members have new extension numbers",
        "2025-01-18",
        "medium",
        "staff",
    ),
    (
        "New Insurance Portal",
        "Added Magnacare portal information for verification",
        "2025-01-15",
        "low",
        "insurance",
    ),
];

/// The updates feed, newest first.
pub fn updates() -> Vec<Update> {
    UPDATES
        .iter()
        .map(|&(title, description, date, priority, category)| Update {
            title: title.to_string(),
            description: description.to_string(),
            date: date.to_string(),
            priority: priority.to_string(),
            category: category.to_string(),
        })
        .collect()
}
