use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a content unit.
///
/// `Draft` is editable and not publicly visible; `Published` means a linked
/// `Post` row exists and `post_id` points at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Draft,
    Published,
}

impl ContentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl std::str::FromStr for ContentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            other => Err(format!("unknown content status: {other}")),
        }
    }
}

/// Draft entity - the author-owned, editable record for a content unit.
///
/// A draft always exists once a content unit is created. While published,
/// `post_id` is a back-reference to the live `Post` row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draft {
    pub id: Uuid,
    pub author_id: Uuid,
    pub category_id: Option<Uuid>,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    /// Serialized document tree (JSON) or legacy HTML/plain text.
    pub content: Option<String>,
    /// Cover image filename; the blob itself lives in the blob store.
    pub image: Option<String>,
    pub status: ContentStatus,
    pub post_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Draft {
    /// Create a new draft in the initial `Draft` state.
    pub fn new(author_id: Uuid, title: String, slug: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            category_id: None,
            title,
            slug,
            description: None,
            content: None,
            image: None,
            status: ContentStatus::Draft,
            post_id: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_published(&self) -> bool {
        self.status == ContentStatus::Published
    }
}
