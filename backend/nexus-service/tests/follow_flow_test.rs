//! Follow-toggle flow against a real database.
//!
//! Requires TEST_DATABASE_URL; each test skips when it is not set.

use sqlx::PgPool;
use uuid::Uuid;

use nexus_service::db::{chat_repo, follow_repo, user_repo};
use nexus_service::i18n::Language;
use nexus_service::services::follow::FollowService;

async fn test_pool() -> Option<PgPool> {
    let url = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("TEST_DATABASE_URL not set; skipping database test");
            return None;
        }
    };
    let pool = PgPool::connect(&url).await.expect("connect to test database");
    sqlx::migrate!("../migrations")
        .run(&pool)
        .await
        .expect("run migrations");
    Some(pool)
}

async fn create_user(pool: &PgPool, prefix: &str) -> Uuid {
    let name = format!("{}-{}", prefix, Uuid::new_v4().simple());
    let user = user_repo::create_user(pool, &name, "not-a-real-hash", "https://example.com/a.png")
        .await
        .expect("create user");
    user.id
}

#[tokio::test]
async fn toggle_twice_restores_the_edge_set() {
    let Some(pool) = test_pool().await else { return };
    let service = FollowService::new(pool.clone());

    let a = create_user(&pool, "alice").await;
    let b = create_user(&pool, "bob").await;

    assert!(!follow_repo::is_following(&pool, a, b).await.unwrap());

    let first = service.toggle_follow(a, b, Language::En).await.unwrap();
    assert!(first.following);
    assert!(follow_repo::is_following(&pool, a, b).await.unwrap());
    // The edge is directed: b does not follow a
    assert!(!follow_repo::is_following(&pool, b, a).await.unwrap());

    let second = service.toggle_follow(a, b, Language::En).await.unwrap();
    assert!(!second.following);
    assert!(!follow_repo::is_following(&pool, a, b).await.unwrap());
}

#[tokio::test]
async fn first_follow_bootstraps_exactly_one_conversation() {
    let Some(pool) = test_pool().await else { return };
    let service = FollowService::new(pool.clone());

    let a = create_user(&pool, "carol").await;
    let b = create_user(&pool, "dave").await;

    let first = service.toggle_follow(a, b, Language::En).await.unwrap();
    assert!(first.conversation_created);
    let conversation_id = first.conversation_id.unwrap();

    let conversation = chat_repo::find_by_pair(&pool, a, b)
        .await
        .unwrap()
        .expect("conversation exists after first follow");
    assert_eq!(conversation.id, conversation_id);

    // Seeded with the localized placeholder from the new follower
    let messages = chat_repo::messages_of_conversation(&pool, conversation_id, 10, 0)
        .await
        .unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender_id, a);

    // Unfollow + refollow must not create a second conversation
    service.toggle_follow(a, b, Language::En).await.unwrap();
    let third = service.toggle_follow(a, b, Language::En).await.unwrap();
    assert!(third.following);
    assert!(!third.conversation_created);
    assert_eq!(third.conversation_id, Some(conversation_id));

    // Nor does a follow in the other direction
    let reverse = service.toggle_follow(b, a, Language::En).await.unwrap();
    assert!(reverse.following);
    assert!(!reverse.conversation_created);
    assert_eq!(reverse.conversation_id, Some(conversation_id));
}

#[tokio::test]
async fn self_follow_is_rejected() {
    let Some(pool) = test_pool().await else { return };
    let service = FollowService::new(pool.clone());

    let a = create_user(&pool, "eve").await;
    let err = service.toggle_follow(a, a, Language::En).await;
    assert!(err.is_err());
    assert!(!follow_repo::is_following(&pool, a, a).await.unwrap());
}
