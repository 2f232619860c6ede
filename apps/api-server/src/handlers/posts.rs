//! Post handlers.

use actix_web::{HttpResponse, web};

use forum_core::DomainError;
use forum_core::domain::NewPost;
use forum_core::validation::{parse_id, validate_new_post};
use forum_shared::dto::CreatePostRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /v1/posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    tracing::info!("Handling GET /v1/posts");

    let posts = state.deadline().run(state.posts.list()).await?;
    tracing::debug!(count = posts.len(), "Posts retrieved");

    Ok(HttpResponse::Ok().json(posts))
}

/// POST /v1/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    tracing::info!("Handling POST /v1/posts");
    let req = body.into_inner();

    let candidate = NewPost::new(req.title, req.link, req.user_id);
    validate_new_post(&candidate)?;

    let post = state.deadline().run(state.posts.insert(candidate)).await?;
    tracing::info!(post_id = post.id, user_id = post.user_id, "Post created");

    Ok(HttpResponse::Created().json(post))
}

/// GET /v1/posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    tracing::info!(post_id = id, "Handling GET /v1/posts/{{id}}");

    let post = state
        .deadline()
        .run(state.posts.find_by_id(id))
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "Post",
            id,
        })?;

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /v1/posts/{id}
///
/// Idempotent: deleting a post that is already gone still answers 204.
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    tracing::info!(post_id = id, "Handling DELETE /v1/posts/{{id}}");

    let removed = state.deadline().run(state.posts.delete(id)).await?;
    if removed == 0 {
        tracing::debug!(post_id = id, "Post already absent");
    } else {
        tracing::info!(post_id = id, "Post deleted");
    }

    Ok(HttpResponse::NoContent().finish())
}
