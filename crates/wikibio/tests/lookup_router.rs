//! HTTP contract tests for the lookup router: status codes and JSON shapes
//! for every outcome in the lookup taxonomy.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;
    use wikibio::lookup::{lookup_router, ArticleSource, BiographyService, SourceError};

    #[derive(Default)]
    pub(super) struct StubArticleSource {
        pages: HashMap<String, String>,
        outage: bool,
        requested: Mutex<Vec<String>>,
    }

    impl StubArticleSource {
        pub(super) fn with_page(title: &str, content: &str) -> Self {
            let mut pages = HashMap::new();
            pages.insert(title.to_string(), content.to_string());
            Self {
                pages,
                ..Self::default()
            }
        }

        pub(super) fn failing() -> Self {
            Self {
                outage: true,
                ..Self::default()
            }
        }

        pub(super) fn requested_titles(&self) -> Vec<String> {
            self.requested.lock().expect("titles mutex").clone()
        }
    }

    #[async_trait]
    impl ArticleSource for StubArticleSource {
        async fn fetch_by_title(&self, title: &str) -> Result<Option<String>, SourceError> {
            self.requested
                .lock()
                .expect("titles mutex")
                .push(title.to_string());

            if self.outage {
                return Err(SourceError::Request("connect timeout".to_string()));
            }

            Ok(self.pages.get(title).cloned())
        }
    }

    pub(super) fn build_router(source: Arc<StubArticleSource>) -> axum::Router {
        lookup_router(Arc::new(BiographyService::new(source)))
    }

    pub(super) async fn get_json(router: axum::Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");

        let status = response.status();
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        (status, payload)
    }
}

mod lookup_endpoint {
    use super::common::*;
    use axum::http::StatusCode;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn success_returns_the_description_object() {
        let source = Arc::new(StubArticleSource::with_page(
            "Barack_Obama",
            "{{Short description|President of the United States from 2009 to 2017}}",
        ));
        let router = build_router(source);

        let (status, payload) =
            get_json(router, "/api/v1/short-description?name=Barack%20Obama").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            payload,
            json!({ "description": "President of the United States from 2009 to 2017" })
        );
    }

    #[tokio::test]
    async fn unknown_person_maps_to_not_found() {
        let router = build_router(Arc::new(StubArticleSource::default()));

        let (status, payload) = get_json(router, "/api/v1/short-description?name=Nobody").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            payload,
            json!({
                "statusCode": 404,
                "message": "Person not found on English Wikipedia",
            })
        );
    }

    #[tokio::test]
    async fn markerless_page_maps_to_bad_request_with_suggestions() {
        let source = Arc::new(StubArticleSource::with_page(
            "Barak_Obama",
            "#REDIRECT [[Barack Obama]] {{R from misspelling}}",
        ));
        let router = build_router(source);

        let (status, payload) =
            get_json(router, "/api/v1/short-description?name=Barak%20Obama").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload.get("statusCode"), Some(&json!(400)));
        let message = payload
            .get("message")
            .and_then(|message| message.as_str())
            .expect("message string");
        assert!(message.contains("Did you mean: Barack Obama?"));
    }

    #[tokio::test]
    async fn source_outage_maps_to_service_unavailable() {
        let router = build_router(Arc::new(StubArticleSource::failing()));

        let (status, payload) = get_json(router, "/api/v1/short-description?name=Anyone").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            payload,
            json!({
                "statusCode": 503,
                "message": "Service not available. Kindly try again another time",
            })
        );
    }

    #[tokio::test]
    async fn empty_name_is_rejected_before_any_fetch() {
        let source = Arc::new(StubArticleSource::default());
        let router = build_router(source.clone());

        let (status, payload) = get_json(router, "/api/v1/short-description?name=").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            payload.get("message"),
            Some(&serde_json::json!("name query parameter must not be empty"))
        );
        assert!(source.requested_titles().is_empty());
    }

    #[tokio::test]
    async fn missing_name_is_rejected_before_any_fetch() {
        let source = Arc::new(StubArticleSource::default());
        let router = build_router(source.clone());

        let (status, _payload) = get_json(router, "/api/v1/short-description").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(source.requested_titles().is_empty());
    }
}
