mod common;

#[tokio::test]
async fn health_check_works() {
    let app = common::spawn_app().await;

    let response = reqwest::Client::new()
        .get(format!("{}/health_check", app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
}

#[tokio::test]
async fn ai_status_reports_configured_service() {
    let app = common::spawn_app().await;

    let body: serde_json::Value = reqwest::Client::new()
        .get(format!("{}/ai/status", app.address))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .expect("Failed to parse body.");

    assert_eq!(body["configured"], true);
    assert_eq!(body["available_services"][0]["enabled"], true);
}
