/// Community repository. Member counts are derived from the membership
/// table, never stored.
use crate::models::CommunityView;
use sqlx::PgPool;
use uuid::Uuid;

const COMMUNITY_VIEW_COLUMNS: &str = r#"
    c.id,
    c.name,
    c.description,
    c.banner_url,
    (SELECT COUNT(*) FROM community_members m WHERE m.community_id = c.id) AS member_count,
    EXISTS(
        SELECT 1 FROM community_members m
        WHERE m.community_id = c.id AND m.user_id = $1
    ) AS viewer_is_member,
    c.created_at
"#;

/// All communities with membership resolved for the viewer
pub async fn list_for_viewer(
    pool: &PgPool,
    viewer_id: Uuid,
) -> Result<Vec<CommunityView>, sqlx::Error> {
    let sql = format!(
        r#"
        SELECT {COMMUNITY_VIEW_COLUMNS}
        FROM communities c
        ORDER BY c.name ASC
        "#
    );

    sqlx::query_as::<_, CommunityView>(&sql)
        .bind(viewer_id)
        .fetch_all(pool)
        .await
}

/// One community with membership resolved for the viewer
pub async fn find_view(
    pool: &PgPool,
    viewer_id: Uuid,
    community_id: Uuid,
) -> Result<Option<CommunityView>, sqlx::Error> {
    let sql = format!(
        r#"
        SELECT {COMMUNITY_VIEW_COLUMNS}
        FROM communities c
        WHERE c.id = $2
        "#
    );

    sqlx::query_as::<_, CommunityView>(&sql)
        .bind(viewer_id)
        .bind(community_id)
        .fetch_optional(pool)
        .await
}

/// Check a community exists
pub async fn exists(pool: &PgPool, community_id: Uuid) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(SELECT 1 FROM communities WHERE id = $1)
        "#,
    )
    .bind(community_id)
    .fetch_one(pool)
    .await
}

/// Join; idempotent. Returns true if a new membership row was inserted.
pub async fn insert_member(
    pool: &PgPool,
    community_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let inserted = sqlx::query(
        r#"
        INSERT INTO community_members (community_id, user_id)
        VALUES ($1, $2)
        ON CONFLICT (community_id, user_id) DO NOTHING
        "#,
    )
    .bind(community_id)
    .bind(user_id)
    .execute(pool)
    .await?
    .rows_affected();

    Ok(inserted > 0)
}

/// Leave; idempotent. Returns true if a membership row was removed.
pub async fn delete_member(
    pool: &PgPool,
    community_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let affected = sqlx::query(
        r#"
        DELETE FROM community_members
        WHERE community_id = $1 AND user_id = $2
        "#,
    )
    .bind(community_id)
    .bind(user_id)
    .execute(pool)
    .await?
    .rows_affected();

    Ok(affected > 0)
}

/// Check membership
pub async fn is_member(
    pool: &PgPool,
    community_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM community_members
            WHERE community_id = $1 AND user_id = $2
        )
        "#,
    )
    .bind(community_id)
    .bind(user_id)
    .fetch_one(pool)
    .await
}
