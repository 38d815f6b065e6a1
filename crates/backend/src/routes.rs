use axum::{http::Method, middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::{handlers, shared};

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Catalog listing, read by the category page
        .route("/Catalogs", get(handlers::a001_catalog::list_all))
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(shared::request_logger::request_logger))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_catalog::service;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use contracts::domain::a001_catalog::aggregate::Catalog;
    use std::path::Path;
    use tower::ServiceExt;

    fn init_store() {
        // Missing file: the embedded seed catalogs are served.
        service::initialize(Path::new("no/such/dir/db.json")).unwrap();
    }

    #[tokio::test]
    async fn test_health() {
        let response = configure_routes()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_list_catalogs() {
        init_store();

        let response = configure_routes()
            .oneshot(
                Request::builder()
                    .uri("/Catalogs")
                    .header(header::ORIGIN, "http://localhost:8080")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        let raw: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(raw[0]["slug"], "football-shoes");

        let catalogs: Vec<Catalog> = serde_json::from_slice(&body).unwrap();
        assert!(!catalogs.is_empty());
        assert!(catalogs.iter().any(|c| c.slug == "sportswear"));
    }
}
