use serde::{Deserialize, Serialize};

/// 書籍ID - ストレージ層が採番する整数の主キー
///
/// 不変条件：作成時に一度だけ採番され、以後変更も再利用もされない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(i64);

impl BookId {
    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
