mod common;

use futures_util::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tokio_tungstenite::tungstenite::Message;

#[tokio::test]
async fn websocket_generation_emits_generating_then_completed() {
    let app = common::spawn_app().await;
    let ws_url = format!("{}/ws", app.address.replace("http://", "ws://"));

    let (mut socket, _) = tokio_tungstenite::connect_async(&ws_url)
        .await
        .expect("Failed to connect websocket.");

    let request = json!({
        "action": "generate_project",
        "description": "проект через сокет",
        "project_name": "Сокетный",
        "project_type": "html"
    });
    socket
        .send(Message::Text(request.to_string()))
        .await
        .expect("Failed to send request.");

    let mut statuses = Vec::new();
    let mut completed: Option<Value> = None;
    while completed.is_none() {
        let frame = tokio::time::timeout(std::time::Duration::from_secs(5), socket.next())
            .await
            .expect("Timed out waiting for status event.")
            .expect("Socket closed early.")
            .expect("Socket error.");

        // The actor pings periodically; only text frames carry events.
        let Message::Text(text) = frame else { continue };
        let event: Value = serde_json::from_str(&text).expect("Event is not JSON.");
        assert_eq!(event["event"], "project_status");

        let status = event["data"]["status"].as_str().unwrap().to_string();
        assert_ne!(status, "error", "unexpected error event: {}", text);
        if status == "completed" {
            completed = Some(event["data"].clone());
        }
        statuses.push(status);
    }

    assert_eq!(statuses.first().map(String::as_str), Some("generating"));
    assert_eq!(statuses.last().map(String::as_str), Some("completed"));

    let completed = completed.unwrap();
    let project_id = completed["project_id"].as_str().unwrap();
    assert_eq!(
        completed["download_url"].as_str().unwrap(),
        format!("/download/{}", project_id)
    );

    // The advertised archive really is retrievable over HTTP.
    let download = reqwest::Client::new()
        .get(format!("{}/download/{}", app.address, project_id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(download.status(), 200);
}

#[tokio::test]
async fn websocket_rejects_garbage_without_closing() {
    let app = common::spawn_app().await;
    let ws_url = format!("{}/ws", app.address.replace("http://", "ws://"));

    let (mut socket, _) = tokio_tungstenite::connect_async(&ws_url)
        .await
        .expect("Failed to connect websocket.");

    socket
        .send(Message::Text("not json".to_string()))
        .await
        .expect("Failed to send request.");

    let event: Value = loop {
        let frame = tokio::time::timeout(std::time::Duration::from_secs(5), socket.next())
            .await
            .expect("Timed out waiting for error event.")
            .expect("Socket closed early.")
            .expect("Socket error.");
        if let Message::Text(text) = frame {
            break serde_json::from_str(&text).expect("Event is not JSON.");
        }
    };
    assert_eq!(event["data"]["status"], "error");

    // Connection survives and still serves a valid request afterwards.
    let request = json!({
        "action": "generate_project",
        "description": "после ошибки",
        "project_name": "Живой",
        "project_type": "html"
    });
    socket
        .send(Message::Text(request.to_string()))
        .await
        .expect("Failed to send request.");

    let mut saw_completed = false;
    while !saw_completed {
        let frame = tokio::time::timeout(std::time::Duration::from_secs(5), socket.next())
            .await
            .expect("Timed out waiting for status event.")
            .expect("Socket closed early.")
            .expect("Socket error.");
        if let Message::Text(text) = frame {
            let event: Value = serde_json::from_str(&text).expect("Event is not JSON.");
            saw_completed = event["data"]["status"] == "completed";
        }
    }
}
