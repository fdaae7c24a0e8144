use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Draft;

/// Post entity - the publicly visible record for a content unit.
///
/// A post exists only while the corresponding draft is published. Its `id`
/// is distinct from the draft's `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub category_id: Option<Uuid>,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub published: bool,
    pub published_at: DateTime<Utc>,
}

impl Post {
    /// Build the public post for a draft being published, copying the
    /// synchronized fields and stamping a fresh publication time.
    pub fn from_draft(draft: &Draft) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id: draft.author_id,
            category_id: draft.category_id,
            title: draft.title.clone(),
            slug: draft.slug.clone(),
            description: draft.description.clone(),
            content: draft.content.clone(),
            image: draft.image.clone(),
            published: true,
            published_at: Utc::now(),
        }
    }
}
