use tracing::{debug, error};

use crate::{
    error::FetchError,
    ports::{ContentDecoder, ResponseValidator, Transport},
};

/// トランスポート・バリデータ・デコーダを注入して組み立てる3段階の取得操作。
/// ある段階が失敗したら後続の段階は呼ばず、その段階のタグで一度だけラップして返す。
pub struct FetchOperation<T, V, D> {
    transport: T,
    validator: V,
    decoder: D,
}

impl<T, V, D> FetchOperation<T, V, D>
where
    T: Transport + Send + Sync,
    V: ResponseValidator + Send + Sync,
    D: ContentDecoder + Send + Sync,
{
    pub fn new(transport: T, validator: V, decoder: D) -> Self {
        Self {
            transport,
            validator,
            decoder,
        }
    }

    pub async fn run(&self, url: &str) -> Result<D::Output, FetchError> {
        debug!("取得を開始します: {}", url);

        let (payload, meta) = match self.transport.fetch(url).await {
            Ok(response) => response,
            Err(e) => {
                error!("トランスポートでの取得に失敗: url={}, error={:?}", url, e);
                return Err(FetchError::Transport(e));
            }
        };

        let payload = match self.validator.validate(payload, &meta) {
            Ok(payload) => payload,
            Err(e) => {
                error!("レスポンスの検証に失敗: url={}, error={:?}", url, e);
                return Err(FetchError::Validation(e));
            }
        };

        match self.decoder.decode(&payload) {
            Ok(decoded) => Ok(decoded),
            Err(e) => {
                error!("コンテンツのデコードに失敗: url={}, error={:?}", url, e);
                Err(FetchError::Decode(e))
            }
        }
    }
}
