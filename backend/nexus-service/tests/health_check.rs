use actix_web::{test, web, App};

use nexus_service::handlers;

#[actix_web::test]
async fn health_endpoint_reports_ok_and_version() {
    let app = test::init_service(
        App::new().route(
            "/api/v1/health",
            web::get().to(handlers::health::health_check),
        ),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
}
