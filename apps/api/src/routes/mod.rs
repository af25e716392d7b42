pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::books::handlers as books;
use crate::career::handlers as career;
use crate::playlists::handlers as playlists;
use crate::report::handlers as report;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/career-path", post(career::handle_career_path))
        .route("/api/v1/career-path/steps", post(career::handle_steps))
        .route("/api/v1/learning-guide", post(career::handle_learning_guide))
        .route("/api/v1/books", get(books::handle_books))
        .route("/api/v1/playlists", get(playlists::handle_playlists))
        .route("/api/v1/reports", post(report::handle_report))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let config = test_config("http://127.0.0.1:9");
        build_router(AppState::new(reqwest::Client::new(), &config))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_steps_without_markers_is_unprocessable() {
        let request = Request::post("/api/v1/career-path/steps")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"document": "1. Learn Python"}"#))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "EXTRACTION_EMPTY");
    }

    #[tokio::test]
    async fn test_blank_goal_is_bad_request() {
        let request = Request::post("/api/v1/reports")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"goal": " "}"#))
            .unwrap();

        let response = test_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
