//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to create a draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDraftRequest {
    pub title: String,
    pub slug: String,
    pub category_id: Option<Uuid>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

/// Request to save a draft. The path supplies the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDraftRequest {
    pub title: String,
    pub slug: String,
    pub category_id: Option<Uuid>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

/// Response for a successful publish: where to redirect the editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishResponse {
    pub post_slug: String,
}

/// Request to override a post's publication date. Admin only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishDateRequest {
    pub published_at: DateTime<Utc>,
}

/// A post as shown on the public reading surface.
///
/// `content_html` is produced by the document renderer; the raw content
/// field never leaves the editor surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub category_id: Option<Uuid>,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub content_html: String,
    pub image: Option<String>,
    pub published_at: DateTime<Utc>,
}

/// A post row in the public listing (no rendered body).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummaryResponse {
    pub id: Uuid,
    pub category_id: Option<Uuid>,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub published_at: DateTime<Utc>,
}

/// Request to create or update a category. Admin only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRequest {
    pub title: String,
    pub slug: String,
    #[serde(default = "default_show_in_nav")]
    pub show_in_nav: bool,
    #[serde(default)]
    pub sort_order: i32,
}

fn default_show_in_nav() -> bool {
    true
}
