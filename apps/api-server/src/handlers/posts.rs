//! Public reading surface: published posts.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::Post;
use quill_core::render::render_content;
use quill_shared::ApiResponse;
use quill_shared::dto::{PostResponse, PostSummaryResponse, PublishDateRequest};

use crate::middleware::auth::Authenticated;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_published().await?;
    let summaries: Vec<PostSummaryResponse> = posts.iter().map(summary).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(summaries)))
}

/// GET /api/posts/{slug}
///
/// The raw content field never leaves the server; the body is rendered
/// to sanitized HTML here.
pub async fn get_by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let post = state
        .posts
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post with slug {} not found", slug)))?;

    let response = PostResponse {
        id: post.id,
        category_id: post.category_id,
        title: post.title,
        slug: post.slug,
        description: post.description,
        content_html: render_content(post.content.as_deref()),
        image: post.image,
        published_at: post.published_at,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::ok(response)))
}

/// PATCH /api/posts/{id}/published-at - Admin only
pub async fn set_publish_date(
    auth: Authenticated,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<PublishDateRequest>,
) -> AppResult<HttpResponse> {
    state
        .publication
        .set_publish_date(&auth.0, path.into_inner(), body.published_at)
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

fn summary(post: &Post) -> PostSummaryResponse {
    PostSummaryResponse {
        id: post.id,
        category_id: post.category_id,
        title: post.title.clone(),
        slug: post.slug.clone(),
        description: post.description.clone(),
        image: post.image.clone(),
        published_at: post.published_at,
    }
}
