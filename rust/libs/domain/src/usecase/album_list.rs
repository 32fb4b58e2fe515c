use async_trait::async_trait;
use tokio::sync::watch;
use tracing::info;

use crate::{
    error::FetchError,
    model::album::Album,
    ports::Transport,
    service::{FeedMapper, HttpResponseValidator, JsonContentDecoder},
    usecase::FetchOperation,
};

pub const TOP_ALBUMS_FEED_URL: &str = "https://itunes.apple.com/us/rss/topalbums/limit=100/json";

const FEED_CONTENT_TYPE: &str = "text/javascript";

#[async_trait]
pub trait AlbumListUseCase {
    /// 最後に取得できたアルバム列。初期状態は空。
    fn albums(&self) -> Vec<Album>;

    fn subscribe(&self) -> watch::Receiver<Vec<Album>>;

    async fn refresh(&self) -> Result<(), FetchError>;
}

pub struct AlbumListUseCaseImpl<T>
where
    T: Transport + Send + Sync,
{
    operation: FetchOperation<T, HttpResponseValidator, JsonContentDecoder>,
    albums: watch::Sender<Vec<Album>>,
}

impl<T> AlbumListUseCaseImpl<T>
where
    T: Transport + Send + Sync,
{
    pub fn new(transport: T) -> Self {
        let operation = FetchOperation::new(
            transport,
            HttpResponseValidator::new(FEED_CONTENT_TYPE),
            JsonContentDecoder,
        );
        let (albums, _) = watch::channel(Vec::new());

        Self { operation, albums }
    }
}

#[async_trait]
impl<T> AlbumListUseCase for AlbumListUseCaseImpl<T>
where
    T: Transport + Send + Sync,
{
    fn albums(&self) -> Vec<Album> {
        self.albums.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Vec<Album>> {
        self.albums.subscribe()
    }

    async fn refresh(&self) -> Result<(), FetchError> {
        // 失敗時は保持中のアルバム列に触れず、エラーをそのまま呼び出し元へ返す
        let json = self.operation.run(TOP_ALBUMS_FEED_URL).await?;

        let albums = FeedMapper::albums(&json);
        info!("フィードから{}件のアルバムを取得しました", albums.len());
        self.albums.send_replace(albums);

        Ok(())
    }
}
