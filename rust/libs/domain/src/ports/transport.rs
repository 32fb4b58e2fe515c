use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TransportError {
    #[error("リクエストの実行に失敗: {0}")]
    RequestError(String),
}

/// レスポンスに付随するメタデータ。
/// HTTPセマンティクスを持たないトランスポートはフィールドを省略してよい。
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponseMeta {
    pub status_code: Option<u16>,
    pub content_type: Option<String>,
}

#[async_trait]
pub trait Transport {
    async fn fetch(&self, url: &str) -> Result<(Bytes, ResponseMeta), TransportError>;
}
