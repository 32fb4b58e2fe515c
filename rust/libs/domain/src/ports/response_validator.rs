use bytes::Bytes;
use thiserror::Error;

use crate::ports::ResponseMeta;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("ステータスコードが成功範囲外: {0}")]
    StatusCodeOutOfRange(u16),

    #[error("予期しないContent-Type: {actual:?} (期待値: {expected})")]
    UnexpectedContentType {
        expected: String,
        actual: Option<String>,
    },
}

/// ペイロードを変換せず、メタデータに基づいて通過させるか失敗させるかだけを決める。
pub trait ResponseValidator {
    fn validate(&self, payload: Bytes, meta: &ResponseMeta) -> Result<Bytes, ValidationError>;
}
