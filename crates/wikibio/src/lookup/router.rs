use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::service::{BiographyService, LookupError};
use super::source::ArticleSource;

/// Router exposing the name-lookup endpoint. Success responds
/// `{"description": ...}`; failures respond `{"statusCode", "message"}` with
/// 404 for missing people, 400 for pages without a description, and 503 for
/// content-source outages.
pub fn lookup_router<S>(service: Arc<BiographyService<S>>) -> Router
where
    S: ArticleSource + 'static,
{
    Router::new()
        .route(
            "/api/v1/short-description",
            get(short_description_handler::<S>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct LookupQuery {
    #[serde(default)]
    name: String,
}

pub(crate) async fn short_description_handler<S>(
    State(service): State<Arc<BiographyService<S>>>,
    Query(query): Query<LookupQuery>,
) -> Response
where
    S: ArticleSource + 'static,
{
    if query.name.is_empty() {
        return failure(
            StatusCode::BAD_REQUEST,
            "name query parameter must not be empty",
        );
    }

    match service.short_description(&query.name).await {
        Ok(description) => (StatusCode::OK, axum::Json(description)).into_response(),
        Err(err) => {
            let status = match &err {
                LookupError::PersonNotFound { .. } => StatusCode::NOT_FOUND,
                LookupError::NoDescription { .. } => StatusCode::BAD_REQUEST,
                LookupError::Source(_) => StatusCode::SERVICE_UNAVAILABLE,
            };
            failure(status, &err.to_string())
        }
    }
}

fn failure(status: StatusCode, message: &str) -> Response {
    let payload = json!({
        "statusCode": status.as_u16(),
        "message": message,
    });
    (status, axum::Json(payload)).into_response()
}
