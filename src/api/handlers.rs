use crate::application::book::{
    ServiceDependencies, create_book as execute_create_book, delete_book as execute_delete_book,
    get_book as execute_get_book, list_books as execute_list_books,
    update_book as execute_update_book,
};
use crate::domain::value_objects::BookId;
use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{
    error::ApiError,
    types::{BookResponse, CreateBookRequest, JsonOrForm, MessageResponse, UpdateBookRequest},
};

// ============================================================================
// State
// ============================================================================

/// ハンドラー間で共有されるアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub service_deps: ServiceDependencies,
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /books - 全書籍を取得
///
/// ストレージ既定の順序で全レコードを返す。
pub async fn list_books(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let books = execute_list_books(&state.service_deps).await?;

    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// GET /books/:id - IDで書籍を取得
///
/// 存在しない場合は404ではなくJSONの null を返す（存在チェックなし）。
pub async fn get_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Option<BookResponse>>, ApiError> {
    let book = execute_get_book(&state.service_deps, BookId::from_i64(id)).await?;

    Ok(Json(book.map(BookResponse::from)))
}

// ============================================================================
// Command handlers (POST / PUT / DELETE)
// ============================================================================

/// POST /books - 書籍を作成
///
/// 強制されるスキーマルール:
/// - autor と isbn は必須
/// - isbn は全書籍で一意
/// - スキーマ外のフィールドは無視される
pub async fn create_book(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<CreateBookRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = execute_create_book(&state.service_deps, req.to_draft()).await?;

    Ok(Json(BookResponse::from(book)))
}

/// PUT /books/:id - 書籍を部分更新
///
/// ペイロードに含まれるフィールドだけを上書きする。
/// 存在しない場合は404（固定メッセージ）を返す。
pub async fn update_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    JsonOrForm(req): JsonOrForm<UpdateBookRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    let book =
        execute_update_book(&state.service_deps, BookId::from_i64(id), req.to_patch()).await?;

    Ok(Json(BookResponse::from(book)))
}

/// DELETE /books/:id - 書籍を削除
///
/// 成功時は固定メッセージを返す。存在しない場合は404（固定メッセージ）。
pub async fn delete_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    execute_delete_book(&state.service_deps, BookId::from_i64(id)).await?;

    Ok(Json(MessageResponse::new("Libro eliminado")))
}
