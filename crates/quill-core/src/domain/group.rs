use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Group entity - a named community posts can be published under.
///
/// The `slug` is the external lookup key for group-scoped requests; ids
/// never appear in URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
}

impl Group {
    pub fn new(title: String, slug: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            slug,
            description,
        }
    }
}
