use crate::application::lending::LendingError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub struct ApiError(LendingError);

impl From<LendingError> for ApiError {
    fn from(err: LendingError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        let (status, code, message) = match self.0 {
            // 400 Bad Request - 不正引数（ストアに触れる前に検出される）
            LendingError::InvalidId(_) => (StatusCode::BAD_REQUEST, "INVALID_ID", message),
            LendingError::Validation(_) => (StatusCode::BAD_REQUEST, "INVALID_ENTITY", message),

            // 404 Not Found - リクエストされたリソースが存在しない
            LendingError::LoanNotFound(_) => (StatusCode::NOT_FOUND, "LOAN_NOT_FOUND", message),

            // 422 Unprocessable Entity - 状態競合（ビジネスルール違反）
            LendingError::MemberNotFound(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "MEMBER_NOT_FOUND", message)
            }
            LendingError::MemberInactive(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "MEMBER_INACTIVE", message)
            }
            LendingError::ItemNotFound(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "ITEM_NOT_FOUND", message)
            }
            LendingError::ItemUnavailable(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "ITEM_UNAVAILABLE", message)
            }
            LendingError::QuotaExceeded { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "QUOTA_EXCEEDED", message)
            }
            LendingError::LoanAlreadyReturned(_) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "LOAN_ALREADY_RETURNED",
                message,
            ),

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            LendingError::CatalogInconsistency { .. } => {
                tracing::error!("catalog inconsistency: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CATALOG_INCONSISTENCY",
                    "Internal invariant violated".to_string(),
                )
            }
            LendingError::DomainError(ref e) => {
                tracing::error!("domain error past orchestrator pre-checks: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DOMAIN_ERROR",
                    "Internal invariant violated".to_string(),
                )
            }
            LendingError::CatalogStoreError(ref e) => {
                tracing::error!("catalog store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CATALOG_STORE_ERROR",
                    "Failed to access catalog store".to_string(),
                )
            }
            LendingError::MemberStoreError(ref e) => {
                tracing::error!("member store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MEMBER_STORE_ERROR",
                    "Failed to access member store".to_string(),
                )
            }
            LendingError::LoanStoreError(ref e) => {
                tracing::error!("loan store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LOAN_STORE_ERROR",
                    "Failed to access loan store".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(code, message));
        (status, body).into_response()
    }
}
