/// Comment repository
use crate::models::{Comment, CommentView};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

/// Append a comment to a post
pub async fn create_comment(
    pool: &PgPool,
    post_id: Uuid,
    user_id: Uuid,
    text: &str,
) -> Result<Comment, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (id, post_id, user_id, text, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, post_id, user_id, text, created_at
        "#,
    )
    .bind(id)
    .bind(post_id)
    .bind(user_id)
    .bind(text)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Comments on a post with authors resolved, oldest first
pub async fn comments_of_post(
    pool: &PgPool,
    post_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<CommentView>, sqlx::Error> {
    sqlx::query_as::<_, CommentView>(
        r#"
        SELECT cm.id, cm.post_id, cm.user_id,
               u.name AS user_name, u.avatar_url AS user_avatar_url,
               cm.text, cm.created_at
        FROM comments cm
        JOIN users u ON u.id = cm.user_id
        WHERE cm.post_id = $1
        ORDER BY cm.created_at ASC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(post_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}
