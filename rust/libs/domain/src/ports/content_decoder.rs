use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("フィードJSONの解析に失敗")]
    Parse(#[source] serde_json::Error),

    #[error("画像コンテナを認識できません")]
    SourceCreation(#[source] Option<image::ImageError>),

    #[error("画像フレームのデコードに失敗")]
    FrameDecode(#[source] image::ImageError),
}

pub trait ContentDecoder {
    type Output;

    fn decode(&self, payload: &[u8]) -> Result<Self::Output, DecodeError>;
}
