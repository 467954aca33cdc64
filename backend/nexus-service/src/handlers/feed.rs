use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::handlers::PageQuery;
use crate::middleware::UserId;
use crate::services::feed::FeedService;

/// GET /api/v1/feed
/// Own posts plus posts from followed users, newest first.
pub async fn get_feed(
    user: UserId,
    feed: web::Data<FeedService>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let (limit, offset) = query.clamped();
    let posts = feed.home_feed(user.0, limit, offset).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "posts": posts,
        "limit": limit,
        "offset": offset,
    })))
}
