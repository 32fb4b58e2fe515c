use serde_json::Value;

use crate::ports::{ContentDecoder, DecodeError};

/// フィードのペイロードを汎用のJSONツリーとして解析するデコーダ。
#[derive(Default)]
pub struct JsonContentDecoder;

impl ContentDecoder for JsonContentDecoder {
    type Output = Value;

    fn decode(&self, payload: &[u8]) -> Result<Value, DecodeError> {
        serde_json::from_slice(payload).map_err(DecodeError::Parse)
    }
}
