use thiserror::Error;

use crate::domain::errors::ValidationError;
use crate::ports::book_repository::RepositoryError;

/// 書籍管理アプリケーション層のエラー
#[derive(Debug, Error)]
pub enum BookApplicationError {
    /// 書籍が見つからない
    #[error("Book not found")]
    BookNotFound,

    /// 必須フィールドが欠けている
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// isbn が既に登録されている
    #[error("Duplicate isbn")]
    DuplicateIsbn,

    /// リポジトリのエラー
    #[error("Repository error")]
    RepositoryError(#[source] RepositoryError),
}

impl From<ValidationError> for BookApplicationError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingField(name) => BookApplicationError::MissingField(name),
        }
    }
}

impl From<RepositoryError> for BookApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            // isbn は唯一の一意列なので、違反はすべて重複isbnに対応する
            RepositoryError::UniqueViolation { .. } => BookApplicationError::DuplicateIsbn,
            other => BookApplicationError::RepositoryError(other),
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, BookApplicationError>;
