/// Story repository. Stories are ephemeral: expiry is enforced at read time
/// by filtering on expires_at, there is no background reaper.
use crate::models::{Story, StoryView};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Create a story with a precomputed expiry
pub async fn create_story(
    pool: &PgPool,
    user_id: Uuid,
    content_type: &str,
    content_url: &str,
    duration_secs: i32,
    expires_at: DateTime<Utc>,
) -> Result<Story, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Story>(
        r#"
        INSERT INTO stories (id, user_id, content_type, content_url, duration_secs, created_at, expires_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, user_id, content_type, content_url, duration_secs, created_at, expires_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(content_type)
    .bind(content_url)
    .bind(duration_secs)
    .bind(now)
    .bind(expires_at)
    .fetch_one(pool)
    .await
}

/// Unexpired stories visible to the viewer (own + followed users), newest first
pub async fn active_for_viewer(
    pool: &PgPool,
    viewer_id: Uuid,
    limit: i64,
) -> Result<Vec<StoryView>, sqlx::Error> {
    sqlx::query_as::<_, StoryView>(
        r#"
        SELECT s.id, s.user_id,
               u.name AS user_name, u.avatar_url AS user_avatar_url,
               s.content_type, s.content_url, s.duration_secs,
               s.created_at, s.expires_at
        FROM stories s
        JOIN users u ON u.id = s.user_id
        WHERE s.expires_at > NOW()
          AND (s.user_id = $1
               OR s.user_id IN (SELECT followee_id FROM follows WHERE follower_id = $1))
        ORDER BY s.created_at DESC
        LIMIT $2
        "#,
    )
    .bind(viewer_id)
    .bind(limit)
    .fetch_all(pool)
    .await
}
