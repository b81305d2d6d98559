use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use countdown_label::{
    api::{create_router, responses::ApiResponse},
    state::{AppState, WidgetSnapshot},
    timer::{ActivationMode, Color, Phase},
    ui::{InlineDispatcher, Label},
    widgets::{ScreenTimer, TimerAttributes, TimerView},
};
use serde_json::Value;
use tower::ServiceExt;

fn app() -> (Router, Arc<AppState>) {
    let mut state = AppState::new(0, "127.0.0.1".to_string());

    let label = Label::new("screen");
    let screen = ScreenTimer::new("screen", label.clone(), Arc::new(InlineDispatcher)).unwrap();
    state.add_widget(Box::new(screen), label);

    let label = Label::new("view");
    let view = TimerView::new(
        "view",
        &TimerAttributes::default(),
        label.clone(),
        Arc::new(InlineDispatcher),
    )
    .unwrap();
    state.add_widget(Box::new(view), label);

    let state = Arc::new(state);
    (create_router(Arc::clone(&state)), state)
}

async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test(start_paused = true)]
async fn tap_starts_the_named_widget() {
    let (app, state) = app();

    let (status, body) = send(app, "POST", "/widgets/screen/tap").await;
    assert_eq!(status, StatusCode::OK);

    let response: ApiResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.status, Phase::Running);
    assert_eq!(response.widget.remaining_seconds, 10);
    assert_eq!(response.widget.mode, ActivationMode::Restart);

    let (last_action, at) = state.get_last_action();
    assert_eq!(last_action.as_deref(), Some("tap:screen"));
    assert!(at.is_some());
    state.shutdown_widgets();
}

#[tokio::test(start_paused = true)]
async fn widget_endpoint_reports_label_content() {
    let (app, _state) = app();

    let (status, body) = send(app, "GET", "/widgets/view").await;
    assert_eq!(status, StatusCode::OK);

    let snapshot: WidgetSnapshot = serde_json::from_slice(&body).unwrap();
    assert_eq!(snapshot.text, "Start");
    assert_eq!(snapshot.color, Color::BLACK);
    assert_eq!(snapshot.phase, Phase::Idle);
    assert_eq!(snapshot.total_seconds, 60);
}

#[tokio::test(start_paused = true)]
async fn second_tap_on_view_pauses_it() {
    let (app, state) = app();

    send(app.clone(), "POST", "/widgets/view/tap").await;
    tokio::time::sleep(std::time::Duration::from_millis(1500)).await;
    let (status, body) = send(app, "POST", "/widgets/view/tap").await;
    assert_eq!(status, StatusCode::OK);

    let response: ApiResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.status, Phase::Idle);
    assert_eq!(response.widget.remaining_seconds, 59);
    assert_eq!(response.widget.text, "0:59");
    assert!(response.message.contains("paused"));
    state.shutdown_widgets();
}

#[tokio::test(start_paused = true)]
async fn unknown_widget_is_not_found() {
    let (app, _state) = app();

    let (status, _) = send(app.clone(), "POST", "/widgets/nope/tap").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(app, "GET", "/widgets/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(start_paused = true)]
async fn status_lists_every_widget() {
    let (app, _state) = app();

    let (status, body) = send(app, "GET", "/status").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    let names: Vec<&str> = json["widgets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["screen", "view"]);
    assert!(json["last_action"].is_null());
}

#[tokio::test(start_paused = true)]
async fn health_reports_ok() {
    let (app, _state) = app();

    let (status, body) = send(app, "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
}
