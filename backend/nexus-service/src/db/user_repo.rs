/// User repository - handles all database operations for users
use crate::models::{PublicUser, User};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new user in the database
pub async fn create_user(
    pool: &PgPool,
    name: &str,
    password_hash: &str,
    avatar_url: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, name, password_hash, avatar_url, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $5)
        RETURNING id, name, password_hash, avatar_url, nickname, bio, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(password_hash)
    .bind(avatar_url)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Find a user by ID
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, password_hash, avatar_url, nickname, bio, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Find a user by name (exact match, used by login)
pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, password_hash, avatar_url, nickname, bio, created_at, updated_at
        FROM users
        WHERE name = $1
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await
}

/// Check if a user name is already taken
pub async fn name_exists(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(SELECT 1 FROM users WHERE name = $1)
        "#,
    )
    .bind(name)
    .fetch_one(pool)
    .await
}

/// Check if a user exists by id
pub async fn exists(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await
}

/// Merge a partial profile update into the user row.
/// Absent fields keep their stored values.
pub async fn update_profile(
    pool: &PgPool,
    user_id: Uuid,
    nickname: Option<&str>,
    bio: Option<&str>,
    avatar_url: Option<&str>,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        UPDATE users
        SET nickname = COALESCE($2, nickname),
            bio = COALESCE($3, bio),
            avatar_url = COALESCE($4, avatar_url),
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, name, password_hash, avatar_url, nickname, bio, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(nickname)
    .bind(bio)
    .bind(avatar_url)
    .fetch_optional(pool)
    .await
}

/// Prefix search on name, case-insensitive.
/// ILIKE wildcards in the query string are escaped so user input stays literal.
pub async fn search_by_prefix(
    pool: &PgPool,
    prefix: &str,
    limit: i64,
) -> Result<Vec<PublicUser>, sqlx::Error> {
    let escaped = prefix.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");

    sqlx::query_as::<_, PublicUser>(
        r#"
        SELECT id, name, avatar_url, nickname, bio, created_at
        FROM users
        WHERE name ILIKE $1 || '%'
        ORDER BY name ASC
        LIMIT $2
        "#,
    )
    .bind(escaped)
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Count posts owned by a user
pub async fn post_count(pool: &PgPool, user_id: Uuid) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM posts WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
}
