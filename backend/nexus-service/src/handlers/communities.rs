use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{community_repo, post_repo};
use crate::error::AppError;
use crate::handlers::PageQuery;
use crate::middleware::UserId;

fn parse_community_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest("invalid community id".into()))
}

/// GET /api/v1/communities
pub async fn list_communities(
    viewer: UserId,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let communities = community_repo::list_for_viewer(pool.get_ref(), viewer.0).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({"communities": communities})))
}

/// GET /api/v1/communities/{id}
/// Detail plus the posts tagged with the community.
pub async fn get_community(
    viewer: UserId,
    path: web::Path<String>,
    pool: web::Data<PgPool>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let community_id = parse_community_id(&path.into_inner())?;

    let community = community_repo::find_view(pool.get_ref(), viewer.0, community_id)
        .await?
        .ok_or_else(|| AppError::NotFound("community not found".into()))?;

    let (limit, offset) = query.clamped();
    let posts =
        post_repo::posts_of_community(pool.get_ref(), viewer.0, community_id, limit, offset)
            .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "community": community,
        "posts": posts,
    })))
}

/// POST /api/v1/communities/{id}/join/toggle
/// Membership toggle; joining twice lands back where it started.
pub async fn toggle_join(
    user: UserId,
    path: web::Path<String>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let community_id = parse_community_id(&path.into_inner())?;

    if !community_repo::exists(pool.get_ref(), community_id).await? {
        return Err(AppError::NotFound("community not found".into()));
    }

    let joined = if community_repo::is_member(pool.get_ref(), community_id, user.0).await? {
        community_repo::delete_member(pool.get_ref(), community_id, user.0).await?;
        false
    } else {
        community_repo::insert_member(pool.get_ref(), community_id, user.0).await?;
        true
    };

    let community = community_repo::find_view(pool.get_ref(), user.0, community_id)
        .await?
        .ok_or_else(|| AppError::NotFound("community not found".into()))?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "joined": joined,
        "member_count": community.member_count,
    })))
}
