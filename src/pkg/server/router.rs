use axum::middleware::from_fn_with_state;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::middlewares::authn;
use super::state::AppState;

/// The frontend may be hosted on a different origin, so reads and
/// token-bearing mutations must both cross origins.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn build_routes(state: AppState) -> Router {
    let admin = Router::new()
        .route("/api/admin/me", get(handlers::admin::me))
        .route("/api/admin/change-password", put(handlers::admin::change_password))
        .route("/api/jobs", post(handlers::jobs::create))
        .route("/api/jobs/:id", put(handlers::jobs::update))
        .route("/api/jobs/:id", delete(handlers::jobs::remove))
        .route("/api/site-content", put(handlers::site_content::upsert))
        .route("/api/team-members", post(handlers::team_members::create))
        .route("/api/team-members/:id", put(handlers::team_members::update))
        .route("/api/team-members/:id", delete(handlers::team_members::remove))
        .route_layer(from_fn_with_state(state.clone(), authn::authenticate));

    let public = Router::new()
        .route("/api/admin/login", post(handlers::admin::login))
        .route("/api/admin/setup", post(handlers::admin::setup))
        .route("/api/jobs", get(handlers::jobs::list))
        .route("/api/site-content", get(handlers::site_content::list))
        .route("/api/team-members", get(handlers::team_members::list))
        .route("/api/enquiry", post(handlers::enquiry::submit))
        .route("/health", get(handlers::probes::health))
        .route("/livez", get(handlers::probes::livez));

    let static_dir = state.settings.static_dir.clone();
    admin
        .merge(public)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;
    use tracing_test::traced_test;

    use super::*;
    use crate::conf::Settings;

    fn test_state() -> AppState {
        let settings: Settings = serde_json::from_value(serde_json::json!({
            "database_url": "postgres://postgres@127.0.0.1:1/unreachable",
            "secret_key": "router-test-secret"
        }))
        .expect("settings should deserialize");
        AppState::new(settings).expect("lazy pool should build")
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body should collect")
            .to_bytes();
        serde_json::from_slice(&bytes).expect("body should be json")
    }

    #[traced_test]
    #[tokio::test]
    async fn test_mutating_route_without_token_is_unauthorized() {
        let app = build_routes(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/jobs")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .expect("request should build"),
            )
            .await
            .expect("router should respond");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert!(body.get("message").is_some());
    }

    #[traced_test]
    #[tokio::test]
    async fn test_garbage_token_is_forbidden() {
        let app = build_routes(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/jobs/1")
                    .header(header::AUTHORIZATION, "Bearer not-a-token")
                    .body(Body::empty())
                    .expect("request should build"),
            )
            .await
            .expect("router should respond");
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[traced_test]
    #[tokio::test]
    async fn test_site_content_put_requires_token() {
        let app = build_routes(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/site-content")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"section":"home","data":{}}"#))
                    .expect("request should build"),
            )
            .await
            .expect("router should respond");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[traced_test]
    #[tokio::test]
    async fn test_health_reports_degraded_when_store_is_down() {
        let app = build_routes(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request should build"),
            )
            .await
            .expect("router should respond");
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["db"], "disconnected");
    }

    #[traced_test]
    #[tokio::test]
    async fn test_livez_is_public() {
        let app = build_routes(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/livez")
                    .body(Body::empty())
                    .expect("request should build"),
            )
            .await
            .expect("router should respond");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
