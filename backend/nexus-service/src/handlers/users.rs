use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::db::{follow_repo, post_repo, user_repo};
use crate::error::AppError;
use crate::handlers::PageQuery;
use crate::middleware::UserId;
use crate::models::{PublicUser, UserProfile};

fn parse_user_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest("invalid user id".into()))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    path: web::Path<String>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let id = parse_user_id(&path.into_inner())?;

    let user = user_repo::find_by_id(pool.get_ref(), id)
        .await?
        .ok_or_else(|| AppError::NotFound("user not found".into()))?;

    let (follower_count, following_count) = follow_repo::graph_counts(pool.get_ref(), id).await?;
    let post_count = user_repo::post_count(pool.get_ref(), id).await?;

    Ok(HttpResponse::Ok().json(UserProfile {
        user: PublicUser::from(user),
        follower_count,
        following_count,
        post_count,
    }))
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 50))]
    pub nickname: Option<String>,

    #[validate(length(max = 300))]
    pub bio: Option<String>,

    #[validate(length(min = 1))]
    pub avatar_url: Option<String>,
}

/// PUT /api/v1/users/me
/// Partial save: absent fields keep their stored values.
pub async fn update_me(
    user: UserId,
    pool: web::Data<PgPool>,
    json: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    json.validate()?;

    let updated = user_repo::update_profile(
        pool.get_ref(),
        user.0,
        json.nickname.as_deref(),
        json.bio.as_deref(),
        json.avatar_url.as_deref(),
    )
    .await?
    .ok_or_else(|| AppError::NotFound("user not found".into()))?;

    Ok(HttpResponse::Ok().json(PublicUser::from(updated)))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_search_limit")]
    pub limit: i64,
}

fn default_search_limit() -> i64 {
    20
}

/// GET /api/v1/users/search?q=
/// Prefix match on name; an empty query returns nothing.
pub async fn search_users(
    pool: web::Data<PgPool>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, AppError> {
    let q = query.q.trim();
    if q.is_empty() {
        return Ok(HttpResponse::Ok().json(serde_json::json!({"users": [], "count": 0})));
    }

    let limit = query.limit.clamp(1, 50);
    let users = user_repo::search_by_prefix(pool.get_ref(), q, limit).await?;
    let count = users.len();

    Ok(HttpResponse::Ok().json(serde_json::json!({"users": users, "count": count})))
}

/// GET /api/v1/users/{id}/posts
pub async fn get_user_posts(
    viewer: UserId,
    path: web::Path<String>,
    pool: web::Data<PgPool>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let owner_id = parse_user_id(&path.into_inner())?;
    if !user_repo::exists(pool.get_ref(), owner_id).await? {
        return Err(AppError::NotFound("user not found".into()));
    }

    let (limit, offset) = query.clamped();
    let posts = post_repo::posts_of_user(pool.get_ref(), viewer.0, owner_id, limit, offset).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({"posts": posts})))
}
