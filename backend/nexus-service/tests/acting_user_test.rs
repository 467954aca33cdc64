//! The acting-user extractor gates every authenticated route; exercise it
//! through a minimal echo handler.

use actix_web::{http::StatusCode, test, web, App, HttpResponse};
use uuid::Uuid;

use nexus_service::middleware::UserId;

async fn whoami(user: UserId) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"id": user.0}))
}

#[actix_web::test]
async fn valid_header_resolves_the_acting_user() {
    let app =
        test::init_service(App::new().route("/whoami", web::get().to(whoami))).await;
    let id = Uuid::new_v4();

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header(("x-user-id", id.to_string()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], serde_json::json!(id));
}

#[actix_web::test]
async fn missing_header_is_unauthorized() {
    let app =
        test::init_service(App::new().route("/whoami", web::get().to(whoami))).await;

    let req = test::TestRequest::get().uri("/whoami").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn malformed_header_is_unauthorized() {
    let app =
        test::init_service(App::new().route("/whoami", web::get().to(whoami))).await;

    let req = test::TestRequest::get()
        .uri("/whoami")
        .insert_header(("x-user-id", "not-a-uuid"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
