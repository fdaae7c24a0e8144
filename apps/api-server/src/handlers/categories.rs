//! Category handlers: public listing, admin mutation.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::service::CategoryInput;
use quill_shared::ApiResponse;
use quill_shared::dto::CategoryRequest;

use crate::middleware::auth::Authenticated;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/categories
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state.categories.list().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(categories)))
}

/// POST /api/categories - Admin only
pub async fn create(
    auth: Authenticated,
    state: web::Data<AppState>,
    body: web::Json<CategoryRequest>,
) -> AppResult<HttpResponse> {
    let category = state
        .categories
        .create(&auth.0, input(body.into_inner()))
        .await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(category)))
}

/// PUT /api/categories/{id} - Admin only
pub async fn update(
    auth: Authenticated,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<CategoryRequest>,
) -> AppResult<HttpResponse> {
    let category = state
        .categories
        .update(&auth.0, path.into_inner(), input(body.into_inner()))
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(category)))
}

/// DELETE /api/categories/{id} - Admin only
pub async fn delete(
    auth: Authenticated,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.categories.delete(&auth.0, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

fn input(req: CategoryRequest) -> CategoryInput {
    CategoryInput {
        title: req.title,
        slug: req.slug,
        show_in_nav: req.show_in_nav,
        sort_order: req.sort_order,
    }
}
