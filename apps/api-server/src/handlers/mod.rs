//! HTTP handlers and route configuration.
//!
//! ```text
//! GET    /healthcheck
//! GET    /v1/posts
//! POST   /v1/posts
//! GET    /v1/posts/{id}
//! DELETE /v1/posts/{id}
//! GET    /v1/posts/{id}/comments
//! POST   /v1/posts/{id}/comments
//! PUT    /v1/posts/{id}/comments/{cid}
//! GET    /v1/posts/{id}/comments/{cid}/replies
//! POST   /v1/posts/{id}/comments/{cid}/replies
//! PUT    /v1/posts/{id}/comments/{cid}/replies/{rid}
//! POST   /user
//! ```

mod comments;
mod health;
mod posts;
mod replies;
mod users;


use actix_web::{HttpRequest, HttpResponse, web};

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
///
/// Each path is a resource; a method it does not register falls through to 405.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .service(
        web::resource("/healthcheck")
            .route(web::get().to(health::health_check))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::scope("/v1/posts")
            .service(
                web::resource("")
                    .route(web::get().to(posts::list))
                    .route(web::post().to(posts::create))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(posts::get))
                    .route(web::delete().to(posts::delete))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/{id}/comments")
                    .route(web::get().to(comments::list))
                    .route(web::post().to(comments::create))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/{id}/comments/{cid}")
                    .route(web::put().to(comments::update))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/{id}/comments/{cid}/replies")
                    .route(web::get().to(replies::list))
                    .route(web::post().to(replies::create))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/{id}/comments/{cid}/replies/{rid}")
                    .route(web::put().to(replies::update))
                    .default_service(web::to(method_not_allowed)),
            ),
    )
    .service(
        web::resource("/user")
            .route(web::post().to(users::create))
            .default_service(web::to(method_not_allowed)),
    );
}

/// Fallback for a known path requested with an unregistered method.
pub async fn method_not_allowed() -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed)
}

/// Fallback for paths no resource matches; installed as the app's default service.
pub async fn not_found(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::NotFound(format!("No route for {}", req.path())))
}
