use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::db::{chat_repo, user_repo};
use crate::error::AppError;
use crate::handlers::PageQuery;
use crate::middleware::UserId;
use crate::models::Conversation;

fn parse_conversation_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest("invalid conversation id".into()))
}

/// Resolve the conversation and require the acting user to be in it.
async fn member_conversation(
    pool: &PgPool,
    conversation_id: Uuid,
    user_id: Uuid,
) -> Result<Conversation, AppError> {
    let conversation = chat_repo::find_by_id(pool, conversation_id)
        .await?
        .ok_or_else(|| AppError::NotFound("conversation not found".into()))?;

    if conversation.user_a != user_id && conversation.user_b != user_id {
        return Err(AppError::Authorization(
            "not a member of this conversation".into(),
        ));
    }
    Ok(conversation)
}

/// GET /api/v1/conversations
pub async fn list_conversations(
    user: UserId,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let conversations = chat_repo::list_for_user(pool.get_ref(), user.0).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({"conversations": conversations})))
}

#[derive(Debug, Deserialize)]
pub struct CreateConversationRequest {
    pub user_id: Uuid,
}

/// POST /api/v1/conversations
/// Idempotent per pair: returns the existing conversation when there is one.
pub async fn create_conversation(
    user: UserId,
    pool: web::Data<PgPool>,
    json: web::Json<CreateConversationRequest>,
) -> Result<HttpResponse, AppError> {
    if json.user_id == user.0 {
        return Err(AppError::BadRequest(
            "cannot start a conversation with yourself".into(),
        ));
    }
    if !user_repo::exists(pool.get_ref(), json.user_id).await? {
        return Err(AppError::NotFound("user not found".into()));
    }

    if let Some(existing) = chat_repo::find_by_pair(pool.get_ref(), user.0, json.user_id).await? {
        return Ok(HttpResponse::Ok().json(existing));
    }

    let mut tx = pool.get_ref().begin().await?;
    let id = chat_repo::insert_pair(&mut *tx, user.0, json.user_id).await?;
    tx.commit().await?;

    let conversation = chat_repo::find_by_id(pool.get_ref(), id)
        .await?
        .ok_or_else(|| AppError::Internal("conversation vanished after insert".into()))?;
    Ok(HttpResponse::Created().json(conversation))
}

/// GET /api/v1/conversations/{id}/messages
pub async fn get_messages(
    user: UserId,
    path: web::Path<String>,
    pool: web::Data<PgPool>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let conversation_id = parse_conversation_id(&path.into_inner())?;
    member_conversation(pool.get_ref(), conversation_id, user.0).await?;

    let (limit, offset) = query.clamped();
    let messages =
        chat_repo::messages_of_conversation(pool.get_ref(), conversation_id, limit, offset)
            .await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({"messages": messages})))
}

#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, max = 2000))]
    pub text: String,
}

/// POST /api/v1/conversations/{id}/messages
/// The message and the conversation's last_message_at move together.
pub async fn send_message(
    user: UserId,
    path: web::Path<String>,
    pool: web::Data<PgPool>,
    json: web::Json<SendMessageRequest>,
) -> Result<HttpResponse, AppError> {
    json.validate()?;
    let conversation_id = parse_conversation_id(&path.into_inner())?;
    member_conversation(pool.get_ref(), conversation_id, user.0).await?;

    let mut tx = pool.get_ref().begin().await?;
    let message = chat_repo::insert_message(&mut *tx, conversation_id, user.0, &json.text).await?;
    tx.commit().await?;

    Ok(HttpResponse::Created().json(message))
}
