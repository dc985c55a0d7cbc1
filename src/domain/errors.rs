use thiserror::Error;

/// 入力ペイロード検証のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 必須フィールドが欠けている
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}
