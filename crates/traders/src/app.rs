use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::livez,
        traders::{create_trader, get_trader, get_traders_by_area},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/livez", get(livez))
        .route("/traders", post(create_trader))
        .route("/traders/{id}", get(get_trader))
        .route("/traders/area/{area}", get(get_traders_by_area))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use uuid::Uuid;

    use spazalink_core::storage::{RepositoryError, Result as RepoResult, TraderRepository};
    use spazalink_core::trader::Trader;

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn register(app: &Router, name: &str, area: &str) -> serde_json::Value {
        let payload = serde_json::json!({
            "businessName": name,
            "ownerName": "John Doe",
            "phoneNumber": "+27821234567",
            "area": area,
            "street": "Vilakazi St",
            "type": "SpazaShop",
            "productCategories": ["Groceries"]
        });

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/traders")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        body_json(response).await
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(AppState::in_memory());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/livez")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_register_then_get_by_id() {
        let app = create_app(AppState::in_memory());

        let created = register(&app, "Test Spaza", "Soweto").await;
        assert_eq!(created["status"], "PendingVerification");
        assert_eq!(created["tier"], "Bronze");
        assert_eq!(created["verified"], false);

        let id = created["id"].as_str().unwrap().to_string();
        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/traders/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let fetched = body_json(response).await;
        assert_eq!(fetched["businessName"], "Test Spaza");
        assert_eq!(fetched["area"], "Soweto");
    }

    #[tokio::test]
    async fn test_unknown_trader_is_404() {
        let app = create_app(AppState::in_memory());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/traders/550e8400-e29b-41d4-a716-446655440009")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_area_listing_is_scoped() {
        let app = create_app(AppState::in_memory());
        register(&app, "Spaza One", "Soweto").await;
        register(&app, "Spaza Two", "Soweto").await;
        register(&app, "Elsewhere", "Alexandra").await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/traders/area/Soweto")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let traders = body_json(response).await;
        let traders = traders.as_array().unwrap();
        assert_eq!(traders.len(), 2);
        assert!(traders.iter().all(|t| t["area"] == "Soweto"));
    }

    struct UnreachableStore;

    #[async_trait]
    impl TraderRepository for UnreachableStore {
        async fn create_trader(&self, _trader: &Trader) -> RepoResult<Trader> {
            Err(RepositoryError::ConnectionFailed(
                "store unreachable".to_string(),
            ))
        }

        async fn get_trader(&self, _id: Uuid) -> RepoResult<Option<Trader>> {
            Err(RepositoryError::ConnectionFailed(
                "store unreachable".to_string(),
            ))
        }

        async fn get_traders_by_area(&self, _area: &str) -> RepoResult<Vec<Trader>> {
            Err(RepositoryError::ConnectionFailed(
                "store unreachable".to_string(),
            ))
        }
    }

    #[tokio::test]
    async fn test_unreachable_store_maps_to_503() {
        let app = create_app(AppState::new(Arc::new(UnreachableStore)));

        for uri in [
            "/traders/550e8400-e29b-41d4-a716-446655440009",
            "/traders/area/Soweto",
        ] {
            let response = app
                .clone()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        }
    }

    #[tokio::test]
    async fn test_blank_area_is_rejected() {
        let app = create_app(AppState::in_memory());

        // An empty path segment never routes, so a blank area arrives
        // percent-encoded.
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/traders/area/%20")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
