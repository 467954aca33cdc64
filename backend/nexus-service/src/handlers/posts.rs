use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::db::{comment_repo, community_repo, like_repo, post_repo};
use crate::error::AppError;
use crate::handlers::PageQuery;
use crate::middleware::UserId;

fn parse_post_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest("invalid post id".into()))
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1))]
    pub content_url: String,

    #[serde(default = "default_content_type")]
    pub content_type: String,

    #[serde(default)]
    pub caption: String,

    #[serde(default)]
    pub community_id: Option<Uuid>,
}

fn default_content_type() -> String {
    "image".into()
}

/// POST /api/v1/posts
pub async fn create_post(
    user: UserId,
    pool: web::Data<PgPool>,
    json: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, AppError> {
    json.validate()?;

    if json.content_type != "image" && json.content_type != "video" {
        return Err(AppError::BadRequest(
            "content_type must be image or video".into(),
        ));
    }

    if let Some(community_id) = json.community_id {
        if !community_repo::exists(pool.get_ref(), community_id).await? {
            return Err(AppError::NotFound("community not found".into()));
        }
    }

    let post = post_repo::create_post(
        pool.get_ref(),
        user.0,
        &json.content_type,
        &json.content_url,
        &json.caption,
        json.community_id,
    )
    .await?;

    tracing::info!(post_id = %post.id, user_id = %user.0, "post created");

    // Return the resolved view so the client renders the same shape as the feed
    let view = post_repo::find_view(pool.get_ref(), user.0, post.id)
        .await?
        .ok_or_else(|| AppError::Internal("post vanished after insert".into()))?;
    Ok(HttpResponse::Created().json(view))
}

/// GET /api/v1/posts/{id}
pub async fn get_post(
    viewer: UserId,
    path: web::Path<String>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let post_id = parse_post_id(&path.into_inner())?;

    let view = post_repo::find_view(pool.get_ref(), viewer.0, post_id)
        .await?
        .ok_or_else(|| AppError::NotFound("post not found".into()))?;
    Ok(HttpResponse::Ok().json(view))
}

/// POST /api/v1/posts/{id}/like/toggle
/// Membership toggle: liking twice lands back where it started.
pub async fn toggle_like(
    user: UserId,
    path: web::Path<String>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let post_id = parse_post_id(&path.into_inner())?;

    if !post_repo::exists(pool.get_ref(), post_id).await? {
        return Err(AppError::NotFound("post not found".into()));
    }

    let liked = if like_repo::check_user_liked(pool.get_ref(), user.0, post_id).await? {
        like_repo::delete_like(pool.get_ref(), user.0, post_id).await?;
        false
    } else {
        like_repo::insert_like(pool.get_ref(), user.0, post_id).await?;
        true
    };

    let like_count = like_repo::like_count(pool.get_ref(), post_id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "liked": liked,
        "like_count": like_count,
    })))
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 1000))]
    pub text: String,
}

/// POST /api/v1/posts/{id}/comments
pub async fn create_comment(
    user: UserId,
    path: web::Path<String>,
    pool: web::Data<PgPool>,
    json: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse, AppError> {
    json.validate()?;
    let post_id = parse_post_id(&path.into_inner())?;

    if !post_repo::exists(pool.get_ref(), post_id).await? {
        return Err(AppError::NotFound("post not found".into()));
    }

    let comment = comment_repo::create_comment(pool.get_ref(), post_id, user.0, &json.text).await?;
    Ok(HttpResponse::Created().json(comment))
}

/// GET /api/v1/posts/{id}/comments
pub async fn get_comments(
    path: web::Path<String>,
    pool: web::Data<PgPool>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let post_id = parse_post_id(&path.into_inner())?;

    if !post_repo::exists(pool.get_ref(), post_id).await? {
        return Err(AppError::NotFound("post not found".into()));
    }

    let (limit, offset) = query.clamped();
    let comments = comment_repo::comments_of_post(pool.get_ref(), post_id, limit, offset).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({"comments": comments})))
}
