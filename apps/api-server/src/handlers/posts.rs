//! Post handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::{PostDraft, PostUpdate};
use quill_shared::dto::{LikeRequest, OneOrMany};
use quill_shared::{MessageResponse, PostEnvelope, PostsEnvelope};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /posts - body is one draft or an array of drafts.
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<OneOrMany<PostDraft>>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.create(body.into_inner().into_vec()).await?;

    Ok(HttpResponse::Created().json(PostsEnvelope::ok(posts, "Posts created successfully")))
}

/// GET /posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /posts/{id}
pub async fn get(state: web::Data<AppState>, id: web::Path<String>) -> AppResult<HttpResponse> {
    let post = state.posts.get(&id).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// PUT /posts/{id}
pub async fn replace(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<PostUpdate>,
) -> AppResult<HttpResponse> {
    let post = state.posts.replace(&id, body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(PostEnvelope::ok_with_message(
        post,
        "Post updated successfully",
    )))
}

/// PATCH /posts/{id} - `{"inc": 1}` or `{"inc": -1}`
pub async fn increment_like(
    state: web::Data<AppState>,
    id: web::Path<String>,
    body: web::Json<LikeRequest>,
) -> AppResult<HttpResponse> {
    let post = state.posts.increment_like(&id, body.inc).await?;
    Ok(HttpResponse::Ok().json(PostEnvelope::ok(post)))
}

/// DELETE /posts/{id}
pub async fn delete(state: web::Data<AppState>, id: web::Path<String>) -> AppResult<HttpResponse> {
    let post = state.posts.delete(&id).await?;

    Ok(HttpResponse::Ok().json(PostEnvelope::ok_with_message(
        post,
        "Post deleted successfully",
    )))
}

/// DELETE /posts - removes every post.
pub async fn delete_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let removed = state.posts.delete_all().await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        success: true,
        message: format!("Deleted {} posts", removed),
        deleted: Some(removed),
    }))
}
