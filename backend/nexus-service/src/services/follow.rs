//! Follow toggle and conversation bootstrap.
//!
//! The original flow updated two follower/following arrays independently and
//! could leave the graph asymmetric on partial failure. Here the edge lives
//! in a single table and the toggle runs in one transaction, together with
//! the conversation bootstrap that fires on the not-following -> following
//! transition.

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::chat_repo;
use crate::error::AppError;
use crate::i18n::{self, Language};

#[derive(Debug, Serialize)]
pub struct FollowOutcome {
    /// State after the toggle
    pub following: bool,
    pub conversation_id: Option<Uuid>,
    /// True only when this toggle bootstrapped the conversation
    pub conversation_created: bool,
}

#[derive(Clone)]
pub struct FollowService {
    pool: PgPool,
}

impl FollowService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Toggle the follower -> followee edge. On the transition into
    /// "following", ensure a direct conversation exists for the pair and
    /// seed it with a localized placeholder message from the follower.
    pub async fn toggle_follow(
        &self,
        follower_id: Uuid,
        followee_id: Uuid,
        lang: Language,
    ) -> Result<FollowOutcome, AppError> {
        if follower_id == followee_id {
            return Err(AppError::BadRequest("cannot follow yourself".into()));
        }

        let followee_name: Option<String> =
            sqlx::query_scalar("SELECT name FROM users WHERE id = $1")
                .bind(followee_id)
                .fetch_optional(&self.pool)
                .await?;
        let followee_name =
            followee_name.ok_or_else(|| AppError::NotFound("user not found".into()))?;

        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query(
            r#"
            DELETE FROM follows
            WHERE follower_id = $1 AND followee_id = $2
            "#,
        )
        .bind(follower_id)
        .bind(followee_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if removed > 0 {
            tx.commit().await?;
            tracing::info!(%follower_id, %followee_id, "unfollowed");
            return Ok(FollowOutcome {
                following: false,
                conversation_id: None,
                conversation_created: false,
            });
        }

        sqlx::query(
            r#"
            INSERT INTO follows (follower_id, followee_id)
            VALUES ($1, $2)
            ON CONFLICT (follower_id, followee_id) DO NOTHING
            "#,
        )
        .bind(follower_id)
        .bind(followee_id)
        .execute(&mut *tx)
        .await?;

        let (user_a, user_b) = chat_repo::canonical_pair(follower_id, followee_id);
        let existing: Option<Uuid> = sqlx::query_scalar(
            r#"
            SELECT id FROM conversations
            WHERE user_a = $1 AND user_b = $2
            "#,
        )
        .bind(user_a)
        .bind(user_b)
        .fetch_optional(&mut *tx)
        .await?;

        let (conversation_id, created) = match existing {
            Some(id) => (id, false),
            None => {
                let id = chat_repo::insert_pair(&mut *tx, follower_id, followee_id).await?;
                let seed = i18n::start_conversation_prompt(lang, &followee_name);
                chat_repo::insert_message(&mut *tx, id, follower_id, &seed).await?;
                (id, true)
            }
        };

        tx.commit().await?;
        tracing::info!(%follower_id, %followee_id, conversation_created = created, "followed");

        Ok(FollowOutcome {
            following: true,
            conversation_id: Some(conversation_id),
            conversation_created: created,
        })
    }
}
