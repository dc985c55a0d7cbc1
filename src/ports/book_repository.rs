use async_trait::async_trait;
use thiserror::Error;

use crate::domain::book::{Book, BookFields};
use crate::domain::value_objects::BookId;

/// ストレージ境界のエラー
///
/// 一意制約違反はストレージ層で検出され、構造化された種別として
/// 呼び出し側に返る。その他のバックエンド障害は元のエラーを保持する。
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// 一意制約違反（対象の列名を保持）
    #[error("unique constraint violated on column {field}")]
    UniqueViolation { field: &'static str },

    /// ストレージバックエンドの障害
    #[error("storage backend error")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// ストレージ境界の Result型
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// 書籍リポジトリポート
///
/// 単一の books テーブルに対する行単位のCRUDを提供する。
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// 全書籍を取得する
    ///
    /// 順序はストレージ既定のまま。
    async fn find_all(&self) -> Result<Vec<Book>>;

    /// IDで書籍を取得する
    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>>;

    /// 書籍を挿入し、採番されたIDを返す
    ///
    /// isbn の一意制約違反は UniqueViolation として返る。
    async fn insert(&self, fields: BookFields) -> Result<BookId>;

    /// 書籍のフィールド一式を上書きする
    ///
    /// 部分マージはアプリケーション層で済ませた完全な値の組を受け取る。
    async fn update(&self, id: BookId, fields: BookFields) -> Result<()>;

    /// 書籍を削除する
    async fn delete(&self, id: BookId) -> Result<()>;
}
