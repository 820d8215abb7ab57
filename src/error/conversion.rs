/**
 * Error Conversion
 *
 * This module converts `AppError` values into HTTP responses so that
 * handlers can return them directly with `?`.
 *
 * # Response Format
 *
 * Every error renders as JSON:
 *
 * ```json
 * {
 *   "error": "sheet not found",
 *   "status": 404
 * }
 * ```
 *
 * Internal failures (the 500 class) are logged here with their full cause;
 * the response body only ever carries the fixed public message.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {self}");
        }

        let body = Json(serde_json::json!({
            "error": self.public_message(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_client_error_body() {
        let response = AppError::NotFound("sheet").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"], "sheet not found");
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn test_internal_error_body_is_generic() {
        let response = AppError::internal("secret detail").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "internal server error");
        assert_eq!(body["status"], 500);
    }
}
