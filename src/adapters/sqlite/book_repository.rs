use crate::domain::book::{BOOK_FIELDS, Book, BookFields, FieldKind};
use crate::domain::value_objects::BookId;
use crate::ports::book_repository::{
    BookRepository as BookRepositoryTrait, RepositoryError, Result,
};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

/// FieldKind をSQLiteの列型に対応づける
fn column_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "TEXT",
        FieldKind::Integer => "INTEGER",
    }
}

/// 記述子表から books テーブルのDDLを組み立てる
///
/// id と管理用タイムスタンプ以外の列定義はすべて記述子表に由来する。
fn create_table_sql() -> String {
    let mut columns = vec!["id INTEGER PRIMARY KEY AUTOINCREMENT".to_string()];

    for field in &BOOK_FIELDS {
        let mut column = format!("{} {}", field.name, column_type(field.kind));
        if field.required {
            column.push_str(" NOT NULL");
        }
        if field.unique {
            column.push_str(" UNIQUE");
        }
        columns.push(column);
    }

    columns.push("created_at TEXT NOT NULL".to_string());
    columns.push("updated_at TEXT NOT NULL".to_string());

    format!("CREATE TABLE IF NOT EXISTS books ({})", columns.join(", "))
}

/// SQLiteの行データをBookに変換する
fn map_row_to_book(row: &SqliteRow) -> Book {
    Book {
        id: BookId::from_i64(row.get("id")),
        autor: row.get("autor"),
        isbn: row.get("isbn"),
        editorial: row.get("editorial"),
        paginas: row.get("paginas"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// sqlxのエラーをストレージ境界のエラー種別に変換する
///
/// 一意制約違反は記述子表で unique と宣言された列（isbn）に対応づける。
fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            if let Some(field) = BOOK_FIELDS.iter().find(|f| f.unique) {
                return RepositoryError::UniqueViolation { field: field.name };
            }
        }
    }

    RepositoryError::Backend(Box::new(err))
}

/// BookRepositoryのSQLite実装
pub struct BookRepository {
    pool: SqlitePool,
}

impl BookRepository {
    /// SQLiteコネクションプールから新しいBookRepositoryを作成
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// books テーブルを同期する（存在しなければ作成）
    ///
    /// 起動時に一度呼ばれる。冪等で、既存のテーブルには手を付けない。
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(&create_table_sql())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn find_all(&self) -> Result<Vec<Book>> {
        let rows = sqlx::query(
            r#"
            SELECT id, autor, isbn, editorial, paginas, created_at, updated_at
            FROM books
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows.iter().map(map_row_to_book).collect())
    }

    async fn find_by_id(&self, id: BookId) -> Result<Option<Book>> {
        let row = sqlx::query(
            r#"
            SELECT id, autor, isbn, editorial, paginas, created_at, updated_at
            FROM books
            WHERE id = ?1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.as_ref().map(map_row_to_book))
    }

    async fn insert(&self, fields: BookFields) -> Result<BookId> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO books (autor, isbn, editorial, paginas, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&fields.autor)
        .bind(fields.isbn)
        .bind(&fields.editorial)
        .bind(fields.paginas)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(BookId::from_i64(result.last_insert_rowid()))
    }

    async fn update(&self, id: BookId, fields: BookFields) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE books
            SET autor = ?1, isbn = ?2, editorial = ?3, paginas = ?4, updated_at = ?5
            WHERE id = ?6
            "#,
        )
        .bind(&fields.autor)
        .bind(fields.isbn)
        .bind(&fields.editorial)
        .bind(fields.paginas)
        .bind(Utc::now())
        .bind(id.value())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete(&self, id: BookId) -> Result<()> {
        sqlx::query("DELETE FROM books WHERE id = ?1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }
}
