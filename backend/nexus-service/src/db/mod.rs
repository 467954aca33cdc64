pub mod chat_repo;
pub mod comment_repo;
pub mod community_repo;
pub mod follow_repo;
pub mod like_repo;
pub mod post_repo;
pub mod story_repo;
pub mod user_repo;

use sqlx::PgPool;

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../migrations").run(pool).await
}
