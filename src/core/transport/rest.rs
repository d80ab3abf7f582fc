//! REST calculator endpoints.
//!
//! Each handler decodes a [`CalculationRequest`], evaluates it and returns
//! `{ "result": n }`. Calculation failures become `400 Bad Request` with a
//! `{ "error", "message" }` body.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domains::calculator::{
    CalculationError, CalculationRequest, CalculationResponse, Operation, evaluate_tag,
};
use crate::domains::resources::definitions::{OperationEntry, OperationsResource};

/// Errors surfaced by the REST endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The calculation itself failed.
    #[error(transparent)]
    Calculation(#[from] CalculationError),

    /// `/calculate` was called without an `operation` field.
    #[error("Missing operation")]
    MissingOperation,
}

/// JSON body of an error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ApiError {
    /// Machine-readable error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Calculation(e) => e.kind(),
            Self::MissingOperation => "missing_operation",
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.kind().to_string(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Build the calculator router, to be nested under the REST base path.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/calculate", post(calculate))
        .route("/add", post(add))
        .route("/subtract", post(subtract))
        .route("/multiply", post(multiply))
        .route("/divide", post(divide))
        .route("/operations", get(list_operations))
}

/// Evaluate the operation named in the request body.
async fn calculate(
    Json(request): Json<CalculationRequest>,
) -> ApiResult<Json<CalculationResponse>> {
    let tag = request
        .operation
        .as_deref()
        .ok_or(ApiError::MissingOperation)?;
    match evaluate_tag(tag, request.a, request.b) {
        Ok((operation, value)) => {
            debug!("{} {} {} = {}", request.a, operation, request.b, value);
            Ok(Json(CalculationResponse::new(value)))
        }
        Err(e) => {
            debug!("Rejected {} {:?} {}: {}", request.a, tag, request.b, e);
            Err(e.into())
        }
    }
}

async fn add(Json(request): Json<CalculationRequest>) -> ApiResult<Json<CalculationResponse>> {
    evaluate_as(Operation::Addition, &request)
}

async fn subtract(
    Json(request): Json<CalculationRequest>,
) -> ApiResult<Json<CalculationResponse>> {
    evaluate_as(Operation::Subtraction, &request)
}

async fn multiply(
    Json(request): Json<CalculationRequest>,
) -> ApiResult<Json<CalculationResponse>> {
    evaluate_as(Operation::Multiplication, &request)
}

async fn divide(Json(request): Json<CalculationRequest>) -> ApiResult<Json<CalculationResponse>> {
    evaluate_as(Operation::Division, &request)
}

/// List the operation registry.
async fn list_operations() -> Json<Vec<OperationEntry>> {
    Json(OperationsResource::entries())
}

fn evaluate_as(
    operation: Operation,
    request: &CalculationRequest,
) -> ApiResult<Json<CalculationResponse>> {
    match request.evaluate_as(operation) {
        Ok(response) => {
            debug!("{} {} {} = {}", request.a, operation, request.b, response.result);
            Ok(Json(response))
        }
        Err(e) => {
            debug!("Rejected {} {} {}: {}", request.a, operation, request.b, e);
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt as _;

    async fn post_json(uri: &str, body: &str) -> (StatusCode, Value) {
        let app: Router = router();
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_calculate_addition() {
        let (status, json) =
            post_json("/calculate", r#"{"operation":"ADDITION","a":5,"b":3}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "result": 8.0 }));
    }

    #[tokio::test]
    async fn test_calculate_division_by_zero() {
        let (status, json) =
            post_json("/calculate", r#"{"operation":"DIVISION","a":10,"b":0}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "division_by_zero");
        assert_eq!(json["message"], "Cannot divide by zero");
    }

    #[tokio::test]
    async fn test_calculate_exponential_unsupported() {
        let (status, json) =
            post_json("/calculate", r#"{"operation":"EXPONENTIAL","a":2,"b":8}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "unsupported_operation");
    }

    #[tokio::test]
    async fn test_calculate_unknown_operation() {
        let (status, json) =
            post_json("/calculate", r#"{"operation":"MODULO","a":2,"b":8}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "unsupported_operation");
        assert_eq!(json["message"], "Unsupported operation: MODULO");
    }

    #[tokio::test]
    async fn test_calculate_missing_operation() {
        let (status, json) = post_json("/calculate", r#"{"a":2,"b":8}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "missing_operation");
    }

    #[tokio::test]
    async fn test_individual_endpoints_ignore_operation() {
        let (status, json) =
            post_json("/subtract", r#"{"operation":"ADDITION","a":3,"b":10}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"], -7.0);

        let (_, json) = post_json("/add", r#"{"a":-5,"b":-3}"#).await;
        assert_eq!(json["result"], -8.0);

        let (_, json) = post_json("/multiply", r#"{"a":-5,"b":-3}"#).await;
        assert_eq!(json["result"], 15.0);

        let (_, json) = post_json("/divide", r#"{"a":-10,"b":2}"#).await;
        assert_eq!(json["result"], -5.0);
    }

    #[tokio::test]
    async fn test_divide_endpoint_rejects_zero() {
        let (status, json) = post_json("/divide", r#"{"a":1}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "division_by_zero");
    }

    #[tokio::test]
    async fn test_multiply_overflow_returns_infinity() {
        let (status, json) = post_json("/multiply", r#"{"a":1e308,"b":10}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({ "result": "Infinity" }));

        let response: CalculationResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.result, f64::INFINITY);

        let (_, json) =
            post_json("/calculate", r#"{"operation":"*","a":-1e308,"b":10}"#).await;
        assert_eq!(json["result"], "-Infinity");
    }

    #[tokio::test]
    async fn test_malformed_operand_is_rejected() {
        let (status, _) =
            post_json("/calculate", r#"{"operation":"ADDITION","a":"five","b":3}"#).await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn test_list_operations() {
        let app: Router = router();
        let request = Request::builder()
            .uri("/operations")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 5);
        assert_eq!(json[3]["symbol"], "/");
    }
}
