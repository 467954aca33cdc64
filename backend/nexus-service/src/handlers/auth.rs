use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use validator::Validate;

use crate::db::user_repo;
use crate::error::AppError;
use crate::models::PublicUser;
use crate::security::password;

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 3, max = 50))]
    pub name: String,

    #[validate(length(min = 6))]
    pub password: String,

    #[validate(length(min = 1))]
    pub avatar_url: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    pub password: String,
}

/// POST /api/v1/auth/signup
pub async fn signup(
    pool: web::Data<PgPool>,
    json: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    json.validate()?;

    if user_repo::name_exists(pool.get_ref(), &json.name).await? {
        return Err(AppError::Conflict("username already taken".into()));
    }

    let password_hash = password::hash_password(&json.password)?;
    let user =
        user_repo::create_user(pool.get_ref(), &json.name, &password_hash, &json.avatar_url)
            .await?;

    tracing::info!(user_id = %user.id, "user signed up");
    Ok(HttpResponse::Created().json(PublicUser::from(user)))
}

/// POST /api/v1/auth/login
/// Unknown name and wrong password collapse into one error so the response
/// does not leak which names exist.
pub async fn login(
    pool: web::Data<PgPool>,
    json: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    json.validate()?;

    let user = user_repo::find_by_name(pool.get_ref(), &json.name)
        .await?
        .ok_or_else(|| AppError::Authentication("invalid credentials".into()))?;

    if !password::verify_password(&json.password, &user.password_hash)? {
        return Err(AppError::Authentication("invalid credentials".into()));
    }

    Ok(HttpResponse::Ok().json(PublicUser::from(user)))
}
