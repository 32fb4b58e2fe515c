use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use domain::ports::{ResponseMeta, Transport, TransportError};
use reqwest::Client;
use tracing::error;

/// reqwestによる`Transport`ポートの実装。
/// ステータスやContent-Typeの判定はせず、受信したものをメタデータとして返す。
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn fetch(&self, url: &str) -> Result<(Bytes, ResponseMeta), TransportError> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("リクエストの実行に失敗: url={}, error={:?}", url, e);
                return Err(TransportError::RequestError(e.to_string()));
            }
        };

        let meta = ResponseMeta {
            status_code: Some(response.status().as_u16()),
            // "text/javascript; charset=utf-8" のようなパラメータ付きヘッダからMIMEタイプ部分だけを取り出す
            content_type: response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(|value| value.split(';').next().unwrap_or(value).trim().to_string()),
        };

        match response.bytes().await {
            Ok(payload) => Ok((payload, meta)),
            Err(e) => {
                error!("レスポンスボディの受信に失敗: url={}, error={:?}", url, e);
                Err(TransportError::RequestError(e.to_string()))
            }
        }
    }
}
