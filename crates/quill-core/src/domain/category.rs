use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category entity - referenced by drafts and posts via a nullable foreign key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub title: String,
    /// Unique, lowercase kebab-case.
    pub slug: String,
    pub show_in_nav: bool,
    pub sort_order: i32,
}

impl Category {
    pub fn new(title: String, slug: String, show_in_nav: bool, sort_order: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            slug,
            show_in_nav,
            sort_order,
        }
    }
}
