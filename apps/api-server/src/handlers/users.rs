//! User handlers.

use actix_web::{HttpRequest, HttpResponse, web};

use forum_core::domain::NewUser;
use forum_core::validation::validate_new_user;
use forum_shared::dto::CreateUserRequest;

use crate::middleware::error::AppResult;
use crate::observability::RequestId;
use crate::state::AppState;

/// POST /user
///
/// The caller's address is logged for audit and never stored.
pub async fn create(
    state: web::Data<AppState>,
    req: HttpRequest,
    request_id: RequestId,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let client = client_address(&req);
    tracing::info!(
        request_id = %request_id.as_str(),
        client = client.as_deref().unwrap_or("unknown"),
        "Handling POST /user"
    );

    let candidate = NewUser::new(body.into_inner().username);
    validate_new_user(&candidate)?;

    let user = state.deadline().run(state.users.insert(candidate)).await?;
    tracing::info!(user_id = user.id, "User created");

    Ok(HttpResponse::Created().json(user))
}

/// Originating client address: first `X-Forwarded-For` entry, else the peer IP.
pub(super) fn client_address(req: &HttpRequest) -> Option<String> {
    let forwarded = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from);

    forwarded.or_else(|| req.peer_addr().map(|addr| addr.ip().to_string()))
}
