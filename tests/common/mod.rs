#![allow(dead_code)]

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use sqlx::SqlitePool;
use tower::ServiceExt;

use chamados_backend::api::{create_router, AppState};
use chamados_backend::infrastructure::db;

pub async fn setup_test_db() -> SqlitePool {
    // A single connection keeps every query on the same in-memory database.
    let pool = db::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to create test database");

    db::sync_schema(&pool)
        .await
        .expect("Failed to create test schema");

    pool
}

pub async fn setup_app() -> (Router, SqlitePool) {
    let pool = setup_test_db().await;
    let app = create_router(AppState::new(Some(pool.clone())));
    (app, pool)
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_str = String::from_utf8(body.to_vec()).unwrap();

    (status, headers, body_str)
}

pub async fn make_request(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<String>,
    origin: Option<&str>,
) -> (StatusCode, String) {
    let mut request = Request::builder().uri(uri).method(method);

    if body.is_some() {
        request = request.header("content-type", "application/json");
    }

    if let Some(origin) = origin {
        request = request.header("origin", origin);
    }

    let request = request
        .body(Body::from(body.unwrap_or_default()))
        .unwrap();

    let (status, _, body) = send(app, request).await;
    (status, body)
}
