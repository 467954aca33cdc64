use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::follow_repo;
use crate::error::AppError;
use crate::handlers::PageQuery;
use crate::i18n::Language;
use crate::middleware::UserId;
use crate::services::follow::FollowService;

#[derive(Debug, Deserialize)]
pub struct FollowToggleQuery {
    #[serde(default)]
    pub lang: Option<String>,
}

/// POST /api/v1/users/{id}/follow/toggle
pub async fn toggle_follow(
    user: UserId,
    path: web::Path<String>,
    follow: web::Data<FollowService>,
    query: web::Query<FollowToggleQuery>,
) -> Result<HttpResponse, AppError> {
    let target_id = Uuid::parse_str(&path.into_inner())
        .map_err(|_| AppError::BadRequest("invalid user id".into()))?;

    let lang = query
        .lang
        .as_deref()
        .map(Language::from_str)
        .unwrap_or_default();

    let outcome = follow.toggle_follow(user.0, target_id, lang).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

/// GET /api/v1/users/{id}/followers
pub async fn get_followers(
    path: web::Path<String>,
    pool: web::Data<PgPool>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let id = Uuid::parse_str(&path.into_inner())
        .map_err(|_| AppError::BadRequest("invalid user id".into()))?;
    let (limit, offset) = query.clamped();

    let users = follow_repo::followers_of(pool.get_ref(), id, limit, offset).await?;
    let count = users.len();
    Ok(HttpResponse::Ok().json(serde_json::json!({"users": users, "count": count})))
}

/// GET /api/v1/users/{id}/following
pub async fn get_following(
    path: web::Path<String>,
    pool: web::Data<PgPool>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let id = Uuid::parse_str(&path.into_inner())
        .map_err(|_| AppError::BadRequest("invalid user id".into()))?;
    let (limit, offset) = query.clamped();

    let users = follow_repo::following_of(pool.get_ref(), id, limit, offset).await?;
    let count = users.len();
    Ok(HttpResponse::Ok().json(serde_json::json!({"users": users, "count": count})))
}
