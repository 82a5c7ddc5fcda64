//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the shared, lock-guarded ledger store
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and query parsing
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: Arc<AppServices>) -> Router {
    // Customer routes: the caller must resolve from the `cpf` header first.
    let customer = routes::customer_router().route_layer(axum::middleware::from_fn_with_state(
        services.clone(),
        middleware::resolve_customer,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::public_router())
        .merge(customer)
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::trace_request)))
}


#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn full_stack_serves_health_without_customer() {
        let app = build_app(Arc::new(AppServices::new()));

        let res = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn full_stack_renders_body_rejections_as_json_errors() {
        let app = build_app(Arc::new(AppServices::new()));

        let res = app
            .oneshot(
                Request::post("/account")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"cpf":"2"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].as_str().unwrap().contains("name"));
    }
}
