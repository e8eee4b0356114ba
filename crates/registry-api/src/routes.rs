use axum::{
    http::Method,
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::handlers::{health, users};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route(
            "/users",
            get(users::get_users)
                .post(users::create_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .with_state(state);

    with_middleware(router)
}

/// Outermost first: access log, CORS, panic recovery. Recovered 500s still carry CORS headers.
pub fn with_middleware(router: Router) -> Router {
    router
        // Panic -> 500
        .layer(CatchPanicLayer::new())
        // CORS
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::PUT, Method::POST, Method::DELETE])
                .allow_headers(Any),
        )
        // Access log
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use registry_core::repositories::InMemoryUserRepository;
    use registry_core::services::UserService;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(repo: Arc<InMemoryUserRepository>) -> Router {
        build_router(AppState::new("registry-test", UserService::new(repo)))
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_any_origin() {
        let response = app(Arc::new(InMemoryUserRepository::new()))
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/users")
                    .header(header::ORIGIN, "http://example.com")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
        let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap()
            .to_string();
        for method in ["GET", "PUT", "POST", "DELETE"] {
            assert!(methods.contains(method), "missing {} in {}", method, methods);
        }
    }

    #[tokio::test]
    async fn test_panic_becomes_500_with_cors_headers() {
        async fn boom() -> &'static str {
            panic!("handler blew up")
        }

        let router = with_middleware(Router::new().route("/boom", get(boom)));
        let response = router
            .oneshot(
                Request::builder()
                    .uri("/boom")
                    .header(header::ORIGIN, "http://a.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_health_and_readiness() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let response = app(repo.clone())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "registry-test");

        let response = app(repo.clone())
            .oneshot(Request::builder().uri("/health/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        repo.set_offline(true);
        let response = app(repo)
            .oneshot(Request::builder().uri("/health/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
