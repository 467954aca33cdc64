use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;

/// GET /api/v1/health
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /api/v1/health/ready
/// Ready only when the database answers.
pub async fn readiness_check(pool: web::Data<PgPool>) -> impl Responder {
    match db_pool::health_check(pool.get_ref()).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({"status": "ready"})),
        Err(e) => {
            tracing::warn!("readiness check failed: {}", e);
            HttpResponse::ServiceUnavailable()
                .json(serde_json::json!({"status": "unavailable", "details": e.to_string()}))
        }
    }
}
