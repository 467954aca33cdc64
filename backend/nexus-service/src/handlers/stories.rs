use actix_web::{web, HttpResponse, Responder};
use chrono::{Duration, Utc};
use serde::Deserialize;
use sqlx::PgPool;

use crate::db::story_repo;
use crate::middleware::UserId;

/// Stories disappear from listings this long after creation.
const STORY_TTL_HOURS: i64 = 24;

#[derive(Debug, Deserialize)]
pub struct CreateStoryRequest {
    pub content_url: String,
    #[serde(default = "default_content_type")]
    pub content_type: String, // image | video
    #[serde(default = "default_duration_secs")]
    pub duration_secs: i32,
}

fn default_content_type() -> String {
    "image".into()
}
fn default_duration_secs() -> i32 {
    5
}

#[derive(Debug, Deserialize)]
pub struct StoriesQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}
fn default_limit() -> i64 {
    50
}

/// POST /api/v1/stories
pub async fn create_story(
    auth: UserId,
    pool: web::Data<PgPool>,
    json: web::Json<CreateStoryRequest>,
) -> impl Responder {
    if json.content_url.trim().is_empty() {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({"error": "content_url required"}));
    }
    if json.content_type != "image" && json.content_type != "video" {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({"error": "content_type must be image or video"}));
    }
    if json.duration_secs <= 0 {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({"error": "duration_secs must be positive"}));
    }

    let expires_at = Utc::now() + Duration::hours(STORY_TTL_HOURS);
    match story_repo::create_story(
        pool.get_ref(),
        auth.0,
        &json.content_type,
        &json.content_url,
        json.duration_secs,
        expires_at,
    )
    .await
    {
        Ok(story) => HttpResponse::Created().json(story),
        Err(e) => {
            tracing::error!("failed to create story: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({"error": e.to_string()}))
        }
    }
}

/// GET /api/v1/stories
/// Active stories from self + followed users; expired ones are filtered out.
pub async fn list_stories(
    auth: UserId,
    pool: web::Data<PgPool>,
    query: web::Query<StoriesQuery>,
) -> impl Responder {
    let limit = query.limit.clamp(1, 100);
    match story_repo::active_for_viewer(pool.get_ref(), auth.0, limit).await {
        Ok(stories) => HttpResponse::Ok().json(serde_json::json!({"stories": stories})),
        Err(e) => {
            tracing::error!("failed to list stories: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({"error": e.to_string()}))
        }
    }
}
