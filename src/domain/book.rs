use chrono::{DateTime, Utc};

use super::errors::ValidationError;
use super::value_objects::BookId;

/// フィールドの型種別
///
/// ストレージ層が列定義を組み立てる際に参照する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
}

/// 書籍スキーマのフィールド記述子
///
/// required / unique のフラグを明示的に持ち、ペイロード検証と
/// ストレージ層のテーブル定義の両方がこの表を参照する。
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub unique: bool,
}

/// 書籍スキーマ（id と管理用タイムスタンプを除く）
pub const BOOK_FIELDS: [FieldDescriptor; 4] = [
    FieldDescriptor {
        name: "autor",
        kind: FieldKind::Text,
        required: true,
        unique: false,
    },
    FieldDescriptor {
        name: "isbn",
        kind: FieldKind::Integer,
        required: true,
        unique: true,
    },
    FieldDescriptor {
        name: "editorial",
        kind: FieldKind::Text,
        required: false,
        unique: false,
    },
    FieldDescriptor {
        name: "paginas",
        kind: FieldKind::Integer,
        required: false,
        unique: false,
    },
];

/// 永続化済みの書籍レコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub autor: String,
    pub isbn: i64,
    pub editorial: Option<String>,
    pub paginas: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 検証済みのフィールド一式
///
/// 必須フィールドの存在が保証された、挿入・更新可能な値の組。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    pub autor: String,
    pub isbn: i64,
    pub editorial: Option<String>,
    pub paginas: Option<i64>,
}

/// 作成リクエストの生ペイロード
#[derive(Debug, Clone)]
pub struct BookDraft {
    pub autor: Option<String>,
    pub isbn: Option<i64>,
    pub editorial: Option<String>,
    pub paginas: Option<i64>,
}

impl BookDraft {
    /// フィールドが設定されているかを記述子名で引く
    fn is_set(&self, name: &str) -> bool {
        match name {
            "autor" => self.autor.is_some(),
            "isbn" => self.isbn.is_some(),
            "editorial" => self.editorial.is_some(),
            "paginas" => self.paginas.is_some(),
            _ => false,
        }
    }

    /// 記述子表に基づいて必須フィールドを検証する
    ///
    /// 最初に欠けていた必須フィールドの名前をエラーとして返す。
    /// 成功した場合は検証済みの値の組を返す。
    pub fn validate(self) -> Result<BookFields, ValidationError> {
        for field in BOOK_FIELDS.iter().filter(|f| f.required) {
            if !self.is_set(field.name) {
                return Err(ValidationError::MissingField(field.name));
            }
        }

        let autor = self.autor.ok_or(ValidationError::MissingField("autor"))?;
        let isbn = self.isbn.ok_or(ValidationError::MissingField("isbn"))?;

        Ok(BookFields {
            autor,
            isbn,
            editorial: self.editorial,
            paginas: self.paginas,
        })
    }
}

/// 更新リクエストの生ペイロード（部分更新）
#[derive(Debug, Clone)]
pub struct BookPatch {
    pub autor: Option<String>,
    pub isbn: Option<i64>,
    pub editorial: Option<String>,
    pub paginas: Option<i64>,
}

impl BookPatch {
    /// 既存レコードにパッチを重ねた完全なフィールド一式を返す
    ///
    /// ペイロードに含まれないフィールドは既存の値を保つ。
    pub fn apply_to(self, book: &Book) -> BookFields {
        BookFields {
            autor: self.autor.unwrap_or_else(|| book.autor.clone()),
            isbn: self.isbn.unwrap_or(book.isbn),
            editorial: self.editorial.or_else(|| book.editorial.clone()),
            paginas: self.paginas.or(book.paginas),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_draft() -> BookDraft {
        BookDraft {
            autor: Some("Gabriel García Márquez".to_string()),
            isbn: Some(111),
            editorial: Some("Sudamericana".to_string()),
            paginas: Some(471),
        }
    }

    fn sample_book() -> Book {
        Book {
            id: BookId::from_i64(1),
            autor: "Gabriel García Márquez".to_string(),
            isbn: 111,
            editorial: Some("Sudamericana".to_string()),
            paginas: Some(471),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    // BookDraft::validate のテスト
    #[test]
    fn test_validate_accepts_full_draft() {
        let fields = full_draft().validate().unwrap();

        assert_eq!(fields.autor, "Gabriel García Márquez");
        assert_eq!(fields.isbn, 111);
        assert_eq!(fields.editorial.as_deref(), Some("Sudamericana"));
        assert_eq!(fields.paginas, Some(471));
    }

    #[test]
    fn test_validate_accepts_missing_optional_fields() {
        let draft = BookDraft {
            editorial: None,
            paginas: None,
            ..full_draft()
        };

        let fields = draft.validate().unwrap();
        assert_eq!(fields.editorial, None);
        assert_eq!(fields.paginas, None);
    }

    #[test]
    fn test_validate_rejects_missing_autor() {
        let draft = BookDraft {
            autor: None,
            ..full_draft()
        };

        assert_eq!(
            draft.validate().unwrap_err(),
            ValidationError::MissingField("autor")
        );
    }

    #[test]
    fn test_validate_rejects_missing_isbn() {
        let draft = BookDraft {
            isbn: None,
            ..full_draft()
        };

        assert_eq!(
            draft.validate().unwrap_err(),
            ValidationError::MissingField("isbn")
        );
    }

    // BookPatch::apply_to のテスト
    #[test]
    fn test_apply_to_overwrites_provided_fields() {
        let patch = BookPatch {
            autor: Some("Julio Cortázar".to_string()),
            isbn: Some(222),
            editorial: None,
            paginas: None,
        };

        let fields = patch.apply_to(&sample_book());

        assert_eq!(fields.autor, "Julio Cortázar");
        assert_eq!(fields.isbn, 222);
    }

    #[test]
    fn test_apply_to_keeps_absent_fields() {
        let patch = BookPatch {
            autor: None,
            isbn: None,
            editorial: None,
            paginas: Some(600),
        };

        let fields = patch.apply_to(&sample_book());

        assert_eq!(fields.autor, "Gabriel García Márquez");
        assert_eq!(fields.isbn, 111);
        assert_eq!(fields.editorial.as_deref(), Some("Sudamericana"));
        assert_eq!(fields.paginas, Some(600));
    }

    // 記述子表のテスト
    #[test]
    fn test_descriptor_table_marks_isbn_unique() {
        let unique: Vec<_> = BOOK_FIELDS.iter().filter(|f| f.unique).collect();

        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].name, "isbn");
    }

    #[test]
    fn test_descriptor_table_marks_required_fields() {
        let required: Vec<_> = BOOK_FIELDS
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();

        assert_eq!(required, vec!["autor", "isbn"]);
    }
}
