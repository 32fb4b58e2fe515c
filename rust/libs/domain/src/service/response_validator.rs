use bytes::Bytes;

use crate::ports::{ResponseMeta, ResponseValidator, ValidationError};

/// Content-Typeと成功ステータス範囲でレスポンスを門番するバリデータ。
/// Content-Typeの検査はステータスやペイロードの検査より先に行う。
pub struct HttpResponseValidator {
    expected_content_type: String,
}

impl HttpResponseValidator {
    pub fn new(expected_content_type: &str) -> Self {
        Self {
            expected_content_type: expected_content_type.to_string(),
        }
    }
}

impl ResponseValidator for HttpResponseValidator {
    fn validate(&self, payload: Bytes, meta: &ResponseMeta) -> Result<Bytes, ValidationError> {
        match &meta.content_type {
            Some(content_type)
                if content_type.eq_ignore_ascii_case(&self.expected_content_type) => {}
            actual => {
                return Err(ValidationError::UnexpectedContentType {
                    expected: self.expected_content_type.clone(),
                    actual: actual.clone(),
                });
            }
        }

        // ステータスメタデータを持たないトランスポートでは検査をスキップする
        if let Some(status_code) = meta.status_code {
            if !(200..=299).contains(&status_code) {
                return Err(ValidationError::StatusCodeOutOfRange(status_code));
            }
        }

        Ok(payload)
    }
}
