use std::io::Cursor;

use image::{DynamicImage, ImageReader};

use crate::ports::{ContentDecoder, DecodeError};

/// 受信したバイト列から先頭フレームだけをビットマップに起こすデコーダ。
/// コンテナの認識とフレームのデコードは別々の失敗として報告する。
#[derive(Default)]
pub struct ImageContentDecoder;

impl ContentDecoder for ImageContentDecoder {
    type Output = DynamicImage;

    fn decode(&self, payload: &[u8]) -> Result<DynamicImage, DecodeError> {
        let reader = ImageReader::new(Cursor::new(payload))
            .with_guessed_format()
            .map_err(|e| DecodeError::SourceCreation(Some(image::ImageError::IoError(e))))?;

        if reader.format().is_none() {
            return Err(DecodeError::SourceCreation(None));
        }

        reader.decode().map_err(DecodeError::FrameDecode)
    }
}
