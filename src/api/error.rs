use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::book::BookApplicationError;

use super::types::MessageResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub struct ApiError(BookApplicationError);

impl From<BookApplicationError> for ApiError {
    fn from(err: BookApplicationError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            // 404 Not Found - 対象の書籍が存在しない（固定メッセージ）
            BookApplicationError::BookNotFound => {
                (StatusCode::NOT_FOUND, "Libro no encontrado".to_string())
            }

            // 422 Unprocessable Entity - スキーマルール違反
            BookApplicationError::MissingField(name) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Falta el campo obligatorio: {}", name),
            ),
            BookApplicationError::DuplicateIsbn => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "El isbn ya está registrado".to_string(),
            ),

            // 500 Internal Server Error - ストレージ障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            BookApplicationError::RepositoryError(ref e) => {
                tracing::error!("Repository error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }
        };

        let body = Json(MessageResponse::new(message));
        (status, body).into_response()
    }
}
