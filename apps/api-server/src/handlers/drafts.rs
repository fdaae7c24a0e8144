//! Editor surface: draft CRUD and the publish/unpublish transitions.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::service::{DraftUpdate, NewDraft};
use quill_shared::ApiResponse;
use quill_shared::dto::{CreateDraftRequest, PublishResponse, UpdateDraftRequest};

use crate::middleware::auth::Authenticated;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/drafts
pub async fn list(auth: Authenticated, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let drafts = state.publication.list_drafts(&auth.0).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(drafts)))
}

/// POST /api/drafts
pub async fn create(
    auth: Authenticated,
    state: web::Data<AppState>,
    body: web::Json<CreateDraftRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let draft = state
        .publication
        .create_draft(
            &auth.0,
            NewDraft {
                title: req.title,
                slug: req.slug,
                category_id: req.category_id,
                description: req.description,
                content: req.content,
                image: req.image,
            },
        )
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(draft)))
}

/// GET /api/drafts/{id}
pub async fn get(
    auth: Authenticated,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let draft = state.publication.get_draft(&auth.0, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(draft)))
}

/// PUT /api/drafts/{id}
pub async fn update(
    auth: Authenticated,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateDraftRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let draft = state
        .publication
        .update_draft(
            &auth.0,
            DraftUpdate {
                id: path.into_inner(),
                title: req.title,
                slug: req.slug,
                category_id: req.category_id,
                description: req.description,
                content: req.content,
                image: req.image,
            },
        )
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(draft)))
}

/// POST /api/drafts/{id}/publish
pub async fn publish(
    auth: Authenticated,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let post_slug = state.publication.publish(&auth.0, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(PublishResponse { post_slug })))
}

/// POST /api/drafts/{id}/unpublish
pub async fn unpublish(
    auth: Authenticated,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.publication.unpublish(&auth.0, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message((), "Draft unpublished")))
}

/// GET /api/drafts/{id}/sync
///
/// Reconciliation check between a published draft and its linked post.
pub async fn sync_status(
    auth: Authenticated,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let report = state
        .publication
        .check_sync(&auth.0, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(report)))
}
