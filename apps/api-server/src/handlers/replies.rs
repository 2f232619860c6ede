//! Reply handlers - scoped under a post's comment.

use actix_web::{HttpResponse, web};

use forum_core::DomainError;
use forum_core::domain::NewReply;
use forum_core::validation::{parse_id, validate_new_reply, validate_text};
use forum_shared::dto::{CreateReplyRequest, UpdateTextRequest};

use super::comments::require_comment;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /v1/posts/{id}/comments/{cid}/replies
pub async fn list(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (raw_post_id, raw_comment_id) = path.into_inner();
    let post_id = parse_id(&raw_post_id)?;
    let comment_id = parse_id(&raw_comment_id)?;
    tracing::info!(post_id, comment_id, "Handling GET replies");

    let deadline = state.deadline();
    require_comment(&state, &deadline, post_id, comment_id).await?;
    let replies = deadline
        .run(state.replies.list_by_comment(comment_id))
        .await?;

    Ok(HttpResponse::Ok().json(replies))
}

/// POST /v1/posts/{id}/comments/{cid}/replies
pub async fn create(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    body: web::Json<CreateReplyRequest>,
) -> AppResult<HttpResponse> {
    let (raw_post_id, raw_comment_id) = path.into_inner();
    let post_id = parse_id(&raw_post_id)?;
    let comment_id = parse_id(&raw_comment_id)?;
    tracing::info!(post_id, comment_id, "Handling POST replies");
    let req = body.into_inner();

    let candidate = NewReply::new(comment_id, req.text, req.user_id);
    validate_new_reply(&candidate)?;

    let deadline = state.deadline();
    require_comment(&state, &deadline, post_id, comment_id).await?;
    let reply = deadline.run(state.replies.insert(candidate)).await?;
    tracing::info!(comment_id, reply_id = reply.id, "Reply created");

    Ok(HttpResponse::Created().json(reply))
}

/// PUT /v1/posts/{id}/comments/{cid}/replies/{rid}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<(String, String, String)>,
    body: web::Json<UpdateTextRequest>,
) -> AppResult<HttpResponse> {
    let (raw_post_id, raw_comment_id, raw_reply_id) = path.into_inner();
    let post_id = parse_id(&raw_post_id)?;
    let comment_id = parse_id(&raw_comment_id)?;
    let reply_id = parse_id(&raw_reply_id)?;
    tracing::info!(post_id, comment_id, reply_id, "Handling PUT reply");

    let text = body.into_inner().text;
    validate_text(&text)?;

    let not_found = || DomainError::NotFound {
        entity_type: "Reply",
        id: reply_id,
    };

    let deadline = state.deadline();
    require_comment(&state, &deadline, post_id, comment_id).await?;
    deadline
        .run(state.replies.find_by_id(reply_id))
        .await?
        .filter(|r| r.comment_id == comment_id)
        .ok_or_else(not_found)?;
    let reply = deadline
        .run(state.replies.update_text(reply_id, text))
        .await?
        .ok_or_else(not_found)?;

    Ok(HttpResponse::Ok().json(reply))
}
