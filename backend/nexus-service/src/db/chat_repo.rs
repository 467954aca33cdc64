/// Conversation and message repository.
///
/// The pair columns are stored in canonical order (user_a < user_b); the
/// unique constraint on that pair is what makes conversation bootstrap
/// idempotent. Helpers that participate in a wider transaction take a
/// `PgConnection` so callers decide the transaction boundary.
use crate::models::{Conversation, ConversationView, Message};
use chrono::Utc;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

/// Order a pair of user ids canonically
pub fn canonical_pair(a: Uuid, b: Uuid) -> (Uuid, Uuid) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Find the direct conversation for a pair, if any
pub async fn find_by_pair(
    pool: &PgPool,
    a: Uuid,
    b: Uuid,
) -> Result<Option<Conversation>, sqlx::Error> {
    let (user_a, user_b) = canonical_pair(a, b);

    sqlx::query_as::<_, Conversation>(
        r#"
        SELECT id, user_a, user_b, created_at, last_message_at
        FROM conversations
        WHERE user_a = $1 AND user_b = $2
        "#,
    )
    .bind(user_a)
    .bind(user_b)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Conversation>, sqlx::Error> {
    sqlx::query_as::<_, Conversation>(
        r#"
        SELECT id, user_a, user_b, created_at, last_message_at
        FROM conversations
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Insert a conversation for the pair if none exists; returns the
/// conversation id either way.
pub async fn insert_pair(conn: &mut PgConnection, a: Uuid, b: Uuid) -> Result<Uuid, sqlx::Error> {
    let (user_a, user_b) = canonical_pair(a, b);

    let inserted = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO conversations (id, user_a, user_b)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_a, user_b) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_a)
    .bind(user_b)
    .fetch_optional(&mut *conn)
    .await?;

    match inserted {
        Some(id) => Ok(id),
        // Lost the race (or already existed): fetch the winner
        None => {
            sqlx::query_scalar::<_, Uuid>(
                r#"
                SELECT id FROM conversations
                WHERE user_a = $1 AND user_b = $2
                "#,
            )
            .bind(user_a)
            .bind(user_b)
            .fetch_one(&mut *conn)
            .await
        }
    }
}

/// Append a message and bump the conversation's last_message_at
pub async fn insert_message(
    conn: &mut PgConnection,
    conversation_id: Uuid,
    sender_id: Uuid,
    text: &str,
) -> Result<Message, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let message = sqlx::query_as::<_, Message>(
        r#"
        INSERT INTO messages (id, conversation_id, sender_id, text, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, conversation_id, sender_id, text, created_at
        "#,
    )
    .bind(id)
    .bind(conversation_id)
    .bind(sender_id)
    .bind(text)
    .bind(now)
    .fetch_one(&mut *conn)
    .await?;

    sqlx::query(
        r#"
        UPDATE conversations
        SET last_message_at = $2
        WHERE id = $1
        "#,
    )
    .bind(conversation_id)
    .bind(now)
    .execute(&mut *conn)
    .await?;

    Ok(message)
}

/// The viewer's conversations with counterpart and last message resolved,
/// most recently active first
pub async fn list_for_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<ConversationView>, sqlx::Error> {
    sqlx::query_as::<_, ConversationView>(
        r#"
        SELECT c.id,
               CASE WHEN c.user_a = $1 THEN c.user_b ELSE c.user_a END AS counterpart_id,
               u.name AS counterpart_name,
               u.avatar_url AS counterpart_avatar_url,
               (SELECT m.text FROM messages m
                WHERE m.conversation_id = c.id
                ORDER BY m.created_at DESC
                LIMIT 1) AS last_message,
               c.last_message_at
        FROM conversations c
        JOIN users u ON u.id = CASE WHEN c.user_a = $1 THEN c.user_b ELSE c.user_a END
        WHERE c.user_a = $1 OR c.user_b = $1
        ORDER BY c.last_message_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Messages in a conversation, oldest first
pub async fn messages_of_conversation(
    pool: &PgPool,
    conversation_id: Uuid,
    limit: i64,
    offset: i64,
) -> Result<Vec<Message>, sqlx::Error> {
    sqlx::query_as::<_, Message>(
        r#"
        SELECT id, conversation_id, sender_id, text, created_at
        FROM messages
        WHERE conversation_id = $1
        ORDER BY created_at ASC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(conversation_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_pair_orders_both_directions_the_same() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert_eq!(canonical_pair(a, b), canonical_pair(b, a));
        let (lo, hi) = canonical_pair(a, b);
        assert!(lo < hi);
    }
}
