mod common;

use axum::routing::get;
use axum::Router;
use axum_test::TestServer;

use namegen::api::handlers::health::health_check;

#[tokio::test]
async fn test_health_reports_storage_ok_and_webhook_disabled() {
    let (state, _dir) = common::create_test_state(true).await;
    let app = Router::new()
        .route("/health", get(health_check))
        .with_state(state);
    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["storage"], "ok");
    assert_eq!(body["checks"]["webhook"], "disabled");
}
