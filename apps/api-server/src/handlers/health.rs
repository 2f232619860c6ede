//! Health check endpoint.

use actix_web::HttpResponse;

/// GET /healthcheck - 200 with an empty body while the process is serving.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
