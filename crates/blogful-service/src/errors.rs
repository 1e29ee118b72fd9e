use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Raw description of a server-side failure. Attached to 500 responses so an
/// outer layer can decide whether clients get to see it.
#[derive(Debug, Clone)]
pub struct ErrorDetail(pub String);

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    ValidationError(#[from] crate::validation::ValidationError),

    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    #[error("{}", .0.body_text())]
    InvalidPath(#[from] PathRejection),

    #[error("{0} does not exist")]
    NotFound(&'static str),

    #[error("Database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),

    #[error("Internal server error")]
    InternalError,
}

pub fn error_body(message: &str) -> Json<serde_json::Value> {
    Json(json!({
        "error": { "message": message }
    }))
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(ref rejection) => rejection.status(),
            ApiError::InvalidPath(ref rejection) => rejection.status(),
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::DatabaseError(_) | ApiError::InternalError => {
                error!(error = %self, "Request failed with a server error");

                let mut response =
                    (StatusCode::INTERNAL_SERVER_ERROR, error_body("Server error")).into_response();
                response
                    .extensions_mut()
                    .insert(ErrorDetail(self.to_string()));
                return response;
            }
        };

        (status, error_body(&self.to_string())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: ApiError) -> (StatusCode, Value, Option<ErrorDetail>) {
        let response = err.into_response();
        let status = response.status();
        let detail = response.extensions().get::<ErrorDetail>().cloned();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap(), detail)
    }

    #[tokio::test]
    async fn test_validation_error_is_bad_request() {
        let (status, body, detail) =
            render(ValidationError::MissingField("content").into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": {"message": "Missing 'content' in request body"}}));
        assert!(detail.is_none());
    }

    #[tokio::test]
    async fn test_not_found_names_resource() {
        let (status, body, _) = render(ApiError::NotFound("Article")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": {"message": "Article does not exist"}}));
    }

    #[tokio::test]
    async fn test_database_error_hides_detail_in_body() {
        let (status, body, detail) =
            render(ApiError::DatabaseError(diesel::result::Error::NotFound)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": {"message": "Server error"}}));
        assert_eq!(detail.unwrap().0, "Database error: Record not found");
    }
}
