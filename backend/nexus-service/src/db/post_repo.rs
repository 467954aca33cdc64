/// Post repository. Authors are referenced by id and resolved with a JOIN at
/// read time, so profile edits show up on previously created posts.
use crate::models::{Post, PostView};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

const POST_VIEW_COLUMNS: &str = r#"
    p.id,
    p.user_id,
    u.name AS user_name,
    u.avatar_url AS user_avatar_url,
    p.content_type,
    p.content_url,
    p.caption,
    p.community_id,
    c.name AS community_name,
    (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.id) AS like_count,
    (SELECT COUNT(*) FROM comments cm WHERE cm.post_id = p.id) AS comment_count,
    EXISTS(
        SELECT 1 FROM likes l WHERE l.post_id = p.id AND l.user_id = $1
    ) AS viewer_has_liked,
    p.created_at
"#;

/// Create a new post
pub async fn create_post(
    pool: &PgPool,
    user_id: Uuid,
    content_type: &str,
    content_url: &str,
    caption: &str,
    community_id: Option<Uuid>,
) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, user_id, content_type, content_url, caption, community_id, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, user_id, content_type, content_url, caption, community_id, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(content_type)
    .bind(content_url)
    .bind(caption)
    .bind(community_id)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Fetch a single post resolved for a viewer
pub async fn find_view(
    pool: &PgPool,
    viewer_id: Uuid,
    post_id: Uuid,
) -> Result<Option<PostView>, sqlx::Error> {
    let sql = format!(
        r#"
        SELECT {POST_VIEW_COLUMNS}
        FROM posts p
        JOIN users u ON u.id = p.user_id
        LEFT JOIN communities c ON c.id = p.community_id
        WHERE p.id = $2
        "#
    );

    sqlx::query_as::<_, PostView>(&sql)
        .bind(viewer_id)
        .bind(post_id)
        .fetch_optional(pool)
        .await
}

/// Home feed: posts whose owner is the viewer or someone the viewer follows,
/// newest first. Recomputed per request; no ranking.
pub async fn feed_for_viewer(
    pool: &PgPool,
    viewer_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<PostView>, sqlx::Error> {
    let sql = format!(
        r#"
        SELECT {POST_VIEW_COLUMNS}
        FROM posts p
        JOIN users u ON u.id = p.user_id
        LEFT JOIN communities c ON c.id = p.community_id
        WHERE p.user_id = $1
           OR p.user_id IN (SELECT followee_id FROM follows WHERE follower_id = $1)
        ORDER BY p.created_at DESC
        LIMIT $2 OFFSET $3
        "#
    );

    sqlx::query_as::<_, PostView>(&sql)
        .bind(viewer_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
}

/// Posts owned by one user (profile grid), newest first
pub async fn posts_of_user(
    pool: &PgPool,
    viewer_id: Uuid,
    owner_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<PostView>, sqlx::Error> {
    let sql = format!(
        r#"
        SELECT {POST_VIEW_COLUMNS}
        FROM posts p
        JOIN users u ON u.id = p.user_id
        LEFT JOIN communities c ON c.id = p.community_id
        WHERE p.user_id = $2
        ORDER BY p.created_at DESC
        LIMIT $3 OFFSET $4
        "#
    );

    sqlx::query_as::<_, PostView>(&sql)
        .bind(viewer_id)
        .bind(owner_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
}

/// Posts tagged with a community, newest first
pub async fn posts_of_community(
    pool: &PgPool,
    viewer_id: Uuid,
    community_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<PostView>, sqlx::Error> {
    let sql = format!(
        r#"
        SELECT {POST_VIEW_COLUMNS}
        FROM posts p
        JOIN users u ON u.id = p.user_id
        LEFT JOIN communities c ON c.id = p.community_id
        WHERE p.community_id = $2
        ORDER BY p.created_at DESC
        LIMIT $3 OFFSET $4
        "#
    );

    sqlx::query_as::<_, PostView>(&sql)
        .bind(viewer_id)
        .bind(community_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
}

/// Check a post exists
pub async fn exists(pool: &PgPool, post_id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)
        "#,
    )
    .bind(post_id)
    .fetch_one(pool)
    .await
}
