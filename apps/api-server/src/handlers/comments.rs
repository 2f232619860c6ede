//! Comment handlers - scoped under a post.

use actix_web::{HttpResponse, web};

use forum_core::DomainError;
use forum_core::domain::{Comment, NewComment, Post};
use forum_core::validation::{parse_id, validate_new_comment, validate_text};
use forum_shared::dto::{CreateCommentRequest, UpdateTextRequest};

use crate::middleware::error::AppResult;
use crate::state::{AppState, Deadline};

/// Load the post a request is scoped to, or fail with 404.
pub(super) async fn require_post(
    state: &AppState,
    deadline: &Deadline,
    post_id: i32,
) -> AppResult<Post> {
    let post = deadline
        .run(state.posts.find_by_id(post_id))
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "Post",
            id: post_id,
        })?;
    Ok(post)
}

/// Load a comment and check it belongs to the post in the path, or fail with 404.
pub(super) async fn require_comment(
    state: &AppState,
    deadline: &Deadline,
    post_id: i32,
    comment_id: i32,
) -> AppResult<Comment> {
    let comment = deadline
        .run(state.comments.find_by_id(comment_id))
        .await?
        .filter(|c| c.post_id == post_id)
        .ok_or(DomainError::NotFound {
            entity_type: "Comment",
            id: comment_id,
        })?;
    Ok(comment)
}

/// GET /v1/posts/{id}/comments
pub async fn list(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let post_id = parse_id(&path)?;
    tracing::info!(post_id, "Handling GET /v1/posts/{{id}}/comments");

    let deadline = state.deadline();
    require_post(&state, &deadline, post_id).await?;
    let comments = deadline.run(state.comments.list_by_post(post_id)).await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// POST /v1/posts/{id}/comments
pub async fn create(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let post_id = parse_id(&path)?;
    tracing::info!(post_id, "Handling POST /v1/posts/{{id}}/comments");
    let req = body.into_inner();

    let candidate = NewComment::new(post_id, req.text, req.user_id);
    validate_new_comment(&candidate)?;

    let deadline = state.deadline();
    require_post(&state, &deadline, post_id).await?;
    let comment = deadline.run(state.comments.insert(candidate)).await?;
    tracing::info!(post_id, comment_id = comment.id, "Comment created");

    Ok(HttpResponse::Created().json(comment))
}

/// PUT /v1/posts/{id}/comments/{cid}
///
/// Replaces the comment text; every other field is kept.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    body: web::Json<UpdateTextRequest>,
) -> AppResult<HttpResponse> {
    let (raw_post_id, raw_comment_id) = path.into_inner();
    let post_id = parse_id(&raw_post_id)?;
    let comment_id = parse_id(&raw_comment_id)?;
    tracing::info!(post_id, comment_id, "Handling PUT /v1/posts/{{id}}/comments/{{cid}}");

    let text = body.into_inner().text;
    validate_text(&text)?;

    let deadline = state.deadline();
    require_comment(&state, &deadline, post_id, comment_id).await?;
    let comment = deadline
        .run(state.comments.update_text(comment_id, text))
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "Comment",
            id: comment_id,
        })?;

    Ok(HttpResponse::Ok().json(comment))
}
