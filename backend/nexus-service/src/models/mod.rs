use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub password_hash: String,
    pub avatar_url: String,
    pub nickname: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Follow edge - one row per directed follower -> followee relationship
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Follow {
    pub follower_id: Uuid,
    pub followee_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content_type: String,
    pub content_url: String,
    pub caption: String,
    pub community_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Like - membership row, one per (user, post)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Like {
    pub user_id: Uuid,
    pub post_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Story {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content_type: String,
    pub content_url: String,
    pub duration_secs: i32,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Community {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub banner_url: String,
    pub created_at: DateTime<Utc>,
}

/// Direct conversation; the pair is stored in canonical order (user_a < user_b)
/// so a unique constraint makes it one-per-pair.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Conversation {
    pub id: Uuid,
    pub user_a: Uuid,
    pub user_b: Uuid,
    pub created_at: DateTime<Utc>,
    pub last_message_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Message {
    pub id: Uuid,
    pub conversation_id: Uuid,
    pub sender_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Read-side views (authors resolved by JOIN at query time)
// ============================================================================

/// User payload safe to return to clients.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub avatar_url: String,
    pub nickname: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        PublicUser {
            id: u.id,
            name: u.name,
            avatar_url: u.avatar_url,
            nickname: u.nickname,
            bio: u.bio,
            created_at: u.created_at,
        }
    }
}

/// Profile page payload with derived graph counts.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    #[serde(flatten)]
    pub user: PublicUser,
    pub follower_count: i64,
    pub following_count: i64,
    pub post_count: i64,
}

/// Post with its author and engagement resolved for one viewer.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PostView {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_avatar_url: String,
    pub content_type: String,
    pub content_url: String,
    pub caption: String,
    pub community_id: Option<Uuid>,
    pub community_name: Option<String>,
    pub like_count: i64,
    pub comment_count: i64,
    pub viewer_has_liked: bool,
    pub created_at: DateTime<Utc>,
}

/// Comment with its author resolved.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CommentView {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_avatar_url: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Story with its author resolved.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StoryView {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_avatar_url: String,
    pub content_type: String,
    pub content_url: String,
    pub duration_secs: i32,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Community with derived membership data for one viewer.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CommunityView {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub banner_url: String,
    pub member_count: i64,
    pub viewer_is_member: bool,
    pub created_at: DateTime<Utc>,
}

/// Conversation list entry with the counterpart user and last message resolved.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ConversationView {
    pub id: Uuid,
    pub counterpart_id: Uuid,
    pub counterpart_name: String,
    pub counterpart_avatar_url: String,
    pub last_message: Option<String>,
    pub last_message_at: DateTime<Utc>,
}
