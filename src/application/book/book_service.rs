use std::sync::Arc;

use crate::domain::book::{Book, BookDraft, BookPatch};
use crate::domain::value_objects::BookId;
use crate::ports::book_repository::BookRepository;

use super::errors::{BookApplicationError, Result};

/// サービスの依存関係
///
/// 依存をデータ構造として明示し、振る舞いは純粋な関数に渡す。
/// ストレージ接続はプロセス起動時に一度構築され、全リクエストで共有される。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub repository: Arc<dyn BookRepository>,
}

/// 全書籍を取得する
///
/// 順序はストレージ既定のまま返す。
pub async fn list_books(deps: &ServiceDependencies) -> Result<Vec<Book>> {
    Ok(deps.repository.find_all().await?)
}

/// IDで書籍を取得する
///
/// 存在しない場合は None を返す。存在の扱いは呼び出し側の責務。
pub async fn get_book(deps: &ServiceDependencies, id: BookId) -> Result<Option<Book>> {
    Ok(deps.repository.find_by_id(id).await?)
}

/// 書籍を作成する
///
/// 強制されるスキーマルール:
/// - autor と isbn は必須（記述子表による検証）
/// - isbn は全書籍で一意（ストレージ境界で強制）
pub async fn create_book(deps: &ServiceDependencies, draft: BookDraft) -> Result<Book> {
    let fields = draft.validate()?;

    let id = deps.repository.insert(fields).await?;

    // 採番されたIDとタイムスタンプを含む完全なレコードを取得して返す
    deps.repository
        .find_by_id(id)
        .await?
        .ok_or(BookApplicationError::BookNotFound)
}

/// 書籍を部分更新する
///
/// 既存レコードを読み、ペイロードに含まれるフィールドだけを上書きして
/// 永続化する。読み取りと書き込みはトランザクションで括らない。
pub async fn update_book(deps: &ServiceDependencies, id: BookId, patch: BookPatch) -> Result<Book> {
    let book = deps
        .repository
        .find_by_id(id)
        .await?
        .ok_or(BookApplicationError::BookNotFound)?;

    let fields = patch.apply_to(&book);
    deps.repository.update(id, fields).await?;

    // 更新後のレコードを取得して新しい内容を返す
    deps.repository
        .find_by_id(id)
        .await?
        .ok_or(BookApplicationError::BookNotFound)
}

/// 書籍を削除する
///
/// 存在しない場合は BookNotFound を返す。
pub async fn delete_book(deps: &ServiceDependencies, id: BookId) -> Result<()> {
    deps.repository
        .find_by_id(id)
        .await?
        .ok_or(BookApplicationError::BookNotFound)?;

    deps.repository.delete(id).await?;

    Ok(())
}
