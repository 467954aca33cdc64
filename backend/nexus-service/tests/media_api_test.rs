//! Media generation endpoints without a configured credential: bio degrades
//! to the localized fallback, image generation refuses.

use actix_web::{http::StatusCode, test, web, App};
use uuid::Uuid;

use nexus_service::config::MediaConfig;
use nexus_service::handlers;
use nexus_service::i18n::{self, Language};
use nexus_service::services::media_gen::MediaGenClient;

fn media_client_without_key() -> MediaGenClient {
    MediaGenClient::new(MediaConfig {
        api_key: None,
        base_url: "http://localhost:0".into(),
        bio_model: "bio-model".into(),
        image_model: "image-model".into(),
        timeout_secs: 1,
    })
}

macro_rules! media_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(media_client_without_key()))
                .service(
                    web::scope("/api/v1/media")
                        .route("/bio", web::post().to(handlers::media::generate_bio))
                        .route("/image", web::post().to(handlers::media::generate_image)),
                ),
        )
        .await
    };
}

fn acting_user() -> (&'static str, String) {
    ("x-user-id", Uuid::new_v4().to_string())
}

#[actix_web::test]
async fn bio_falls_back_when_credential_is_missing() {
    let app = media_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/media/bio")
        .insert_header(acting_user())
        .set_json(serde_json::json!({"interests": "hiking, analog photography", "lang": "pt"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["bio"], i18n::bio_unavailable(Language::Pt));
}

#[actix_web::test]
async fn bio_defaults_to_english_fallback() {
    let app = media_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/media/bio")
        .insert_header(acting_user())
        .set_json(serde_json::json!({"interests": "climbing"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["bio"], i18n::bio_unavailable(Language::En));
}

#[actix_web::test]
async fn bio_with_empty_interests_is_a_validation_error() {
    let app = media_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/media/bio")
        .insert_header(acting_user())
        .set_json(serde_json::json!({"interests": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn image_errors_when_credential_is_missing() {
    let app = media_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/media/image")
        .insert_header(acting_user())
        .set_json(serde_json::json!({"prompt": "a red bicycle on a rooftop"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "MEDIA_GENERATION_ERROR");
}
