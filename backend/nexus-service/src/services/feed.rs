//! Feed derivation.
//!
//! A post is visible in the home feed iff its owner is the viewer or someone
//! the viewer follows. The rule is a pure predicate here; the SQL in
//! `post_repo::feed_for_viewer` mirrors it. Recomputed per request, no
//! ranking, no caching.

use std::collections::HashSet;

use sqlx::PgPool;
use uuid::Uuid;

use crate::db::post_repo;
use crate::error::AppError;
use crate::models::PostView;

/// Home-feed visibility rule.
pub fn post_visible_to(viewer_id: Uuid, owner_id: Uuid, following: &HashSet<Uuid>) -> bool {
    owner_id == viewer_id || following.contains(&owner_id)
}

#[derive(Clone)]
pub struct FeedService {
    pool: PgPool,
}

impl FeedService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn home_feed(
        &self,
        viewer_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PostView>, AppError> {
        let posts = post_repo::feed_for_viewer(&self.pool, viewer_id, limit, offset).await?;
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_posts_are_always_visible() {
        let viewer = Uuid::new_v4();
        assert!(post_visible_to(viewer, viewer, &HashSet::new()));
    }

    #[test]
    fn followed_owners_are_visible_unfollowed_are_not() {
        let viewer = Uuid::new_v4();
        let followed = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let following: HashSet<Uuid> = [followed].into_iter().collect();

        assert!(post_visible_to(viewer, followed, &following));
        assert!(!post_visible_to(viewer, stranger, &following));
    }

    // Worked example: viewer follows {B}; posts exist from {self, B, C}.
    // The feed contains posts from {self, B} only.
    #[test]
    fn feed_example_self_and_followed_only() {
        let viewer = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let following: HashSet<Uuid> = [b].into_iter().collect();

        let owners = vec![viewer, b, c];
        let visible: Vec<Uuid> = owners
            .into_iter()
            .filter(|owner| post_visible_to(viewer, *owner, &following))
            .collect();

        assert_eq!(visible, vec![viewer, b]);
    }
}
