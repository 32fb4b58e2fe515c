use async_trait::async_trait;
use image::{DynamicImage, GenericImageView};
use tokio::sync::watch;
use tracing::debug;

use crate::{
    error::FetchError,
    model::album::Album,
    ports::Transport,
    service::{HttpResponseValidator, ImageContentDecoder},
    usecase::FetchOperation,
};

const ARTWORK_CONTENT_TYPE: &str = "image/png";

#[async_trait]
pub trait AlbumArtworkUseCase {
    fn album(&self) -> &Album;

    /// デコード済みのアートワーク。取得に成功するまでは `None`。
    fn artwork(&self) -> Option<DynamicImage>;

    fn subscribe(&self) -> watch::Receiver<Option<DynamicImage>>;

    async fn load_artwork(&self) -> Result<(), FetchError>;
}

pub struct AlbumArtworkUseCaseImpl<T>
where
    T: Transport + Send + Sync,
{
    operation: FetchOperation<T, HttpResponseValidator, ImageContentDecoder>,
    album: Album,
    artwork: watch::Sender<Option<DynamicImage>>,
}

impl<T> AlbumArtworkUseCaseImpl<T>
where
    T: Transport + Send + Sync,
{
    pub fn new(transport: T, album: Album) -> Self {
        let operation = FetchOperation::new(
            transport,
            HttpResponseValidator::new(ARTWORK_CONTENT_TYPE),
            ImageContentDecoder,
        );
        let (artwork, _) = watch::channel(None);

        Self {
            operation,
            album,
            artwork,
        }
    }
}

#[async_trait]
impl<T> AlbumArtworkUseCase for AlbumArtworkUseCaseImpl<T>
where
    T: Transport + Send + Sync,
{
    fn album(&self) -> &Album {
        &self.album
    }

    fn artwork(&self) -> Option<DynamicImage> {
        self.artwork.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Option<DynamicImage>> {
        self.artwork.subscribe()
    }

    async fn load_artwork(&self) -> Result<(), FetchError> {
        // 失敗時はアートワークを未取得のまま残し、エラーをそのまま呼び出し元へ返す
        let image = self.operation.run(&self.album.image).await?;

        let (width, height) = image.dimensions();
        debug!(
            "アートワークを取得しました: {} ({}x{})",
            self.album.image, width, height
        );
        self.artwork.send_replace(Some(image));

        Ok(())
    }
}
