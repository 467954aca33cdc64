use actix_web::{web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use crate::error::AppError;
use crate::i18n::Language;
use crate::middleware::UserId;
use crate::services::media_gen::MediaGenClient;

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateBioRequest {
    #[validate(length(min = 1, max = 500))]
    pub interests: String,

    #[serde(default)]
    pub lang: Option<String>,
}

/// POST /api/v1/media/bio
/// Always answers with a bio string; upstream trouble degrades to a
/// localized fallback instead of an error.
pub async fn generate_bio(
    _user: UserId,
    media: web::Data<MediaGenClient>,
    json: web::Json<GenerateBioRequest>,
) -> Result<HttpResponse, AppError> {
    json.validate()?;

    let lang = json
        .lang
        .as_deref()
        .map(Language::from_str)
        .unwrap_or_default();

    let bio = media.generate_bio(&json.interests, lang).await;
    Ok(HttpResponse::Ok().json(serde_json::json!({"bio": bio})))
}

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateImageRequest {
    #[validate(length(min = 1, max = 2000))]
    pub prompt: String,
}

/// POST /api/v1/media/image
/// Returns a data URL; a missing credential or upstream failure is an error.
pub async fn generate_image(
    _user: UserId,
    media: web::Data<MediaGenClient>,
    json: web::Json<GenerateImageRequest>,
) -> Result<HttpResponse, AppError> {
    json.validate()?;

    let image = media.generate_image(&json.prompt).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({"image": image})))
}
