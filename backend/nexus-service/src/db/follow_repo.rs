/// Follow graph repository. The directed edge table is the single source of
/// truth for follower/following sets; writes that must pair with other
/// effects (conversation bootstrap) go through FollowService's transaction.
use crate::models::PublicUser;
use sqlx::PgPool;
use uuid::Uuid;

/// Check whether follower -> followee edge exists
pub async fn is_following(
    pool: &PgPool,
    follower_id: Uuid,
    followee_id: Uuid,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM follows
            WHERE follower_id = $1 AND followee_id = $2
        )
        "#,
    )
    .bind(follower_id)
    .bind(followee_id)
    .fetch_one(pool)
    .await
}

/// Users following the given user, newest edge first
pub async fn followers_of(
    pool: &PgPool,
    user_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<PublicUser>, sqlx::Error> {
    sqlx::query_as::<_, PublicUser>(
        r#"
        SELECT u.id, u.name, u.avatar_url, u.nickname, u.bio, u.created_at
        FROM follows f
        JOIN users u ON f.follower_id = u.id
        WHERE f.followee_id = $1
        ORDER BY f.created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

/// Users the given user follows, newest edge first
pub async fn following_of(
    pool: &PgPool,
    user_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<PublicUser>, sqlx::Error> {
    sqlx::query_as::<_, PublicUser>(
        r#"
        SELECT u.id, u.name, u.avatar_url, u.nickname, u.bio, u.created_at
        FROM follows f
        JOIN users u ON f.followee_id = u.id
        WHERE f.follower_id = $1
        ORDER BY f.created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

/// (follower_count, following_count) for a user
pub async fn graph_counts(pool: &PgPool, user_id: Uuid) -> Result<(i64, i64), sqlx::Error> {
    let counts: (i64, i64) = sqlx::query_as(
        r#"
        SELECT
            (SELECT COUNT(*) FROM follows WHERE followee_id = $1),
            (SELECT COUNT(*) FROM follows WHERE follower_id = $1)
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;
    Ok(counts)
}
