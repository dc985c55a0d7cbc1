use axum::extract::{Form, FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::{Json, async_trait};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::book::{Book, BookDraft, BookPatch};

/// 書籍作成リクエスト（POST /books）
///
/// 必須チェックはドメイン層の記述子表で行うため、ここではすべて
/// オプションで受ける。スキーマ外のフィールドは無視される。
#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    pub autor: Option<String>,
    pub isbn: Option<i64>,
    pub editorial: Option<String>,
    pub paginas: Option<i64>,
}

impl CreateBookRequest {
    pub fn to_draft(self) -> BookDraft {
        BookDraft {
            autor: self.autor,
            isbn: self.isbn,
            editorial: self.editorial,
            paginas: self.paginas,
        }
    }
}

/// 書籍更新リクエスト（PUT /books/:id）
///
/// 含まれるフィールドだけが上書きされる。
#[derive(Debug, Deserialize)]
pub struct UpdateBookRequest {
    pub autor: Option<String>,
    pub isbn: Option<i64>,
    pub editorial: Option<String>,
    pub paginas: Option<i64>,
}

impl UpdateBookRequest {
    pub fn to_patch(self) -> BookPatch {
        BookPatch {
            autor: self.autor,
            isbn: self.isbn,
            editorial: self.editorial,
            paginas: self.paginas,
        }
    }
}

/// 書籍レスポンス（GET /books/:id、GET /books ほか全成功応答）
#[derive(Debug, Serialize, Deserialize)]
pub struct BookResponse {
    pub id: i64,
    pub autor: String,
    pub isbn: i64,
    pub editorial: Option<String>,
    pub paginas: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id.value(),
            autor: book.autor,
            isbn: book.isbn,
            editorial: book.editorial,
            paginas: book.paginas,
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}

/// 固定メッセージレスポンス（削除成功と各エラー）
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// JSONとURLエンコードの両方を受けるボディ抽出器
///
/// Content-Type が application/json ならJSONとして、それ以外は
/// フォームとしてデコードする。ボディなしのリクエストは空のフォームに
/// 相当し、全フィールド未設定のペイロードになる。
#[derive(Debug)]
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + 'static,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            let Json(payload) = Json::<T>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            return Ok(Self(payload));
        }

        let Form(payload) = Form::<T>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        Ok(Self(payload))
    }
}
