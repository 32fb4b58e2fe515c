use thiserror::Error;

use crate::ports::{DecodeError, TransportError, ValidationError};

/// 取得パイプラインの段階ごとのエラー。
/// 失敗した段階で一度だけラップし、元のエラーはそのまま保持する。
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("トランスポートでの取得に失敗")]
    Transport(#[source] TransportError),

    #[error("レスポンスの検証に失敗")]
    Validation(#[source] ValidationError),

    #[error("コンテンツのデコードに失敗")]
    Decode(#[source] DecodeError),
}
