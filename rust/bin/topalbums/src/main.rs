use clap::Parser;
use domain::usecase::{
    AlbumArtworkUseCase, AlbumArtworkUseCaseImpl, AlbumListUseCase, AlbumListUseCaseImpl,
};
use futures::{StreamExt as _, stream};
use http::ReqwestTransport;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "topalbums", about = "iTunesトップアルバムフィードを取得して表示する")]
struct Args {
    /// アートワークを先読みするアルバム数
    #[arg(long, default_value_t = 10)]
    artworks: usize,

    /// アートワーク取得の同時実行数
    #[arg(long, default_value_t = 4)]
    concurrency: usize,

    /// アルバム一覧をJSONで出力する
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let args = Args::parse();

    let list = AlbumListUseCaseImpl::new(ReqwestTransport::default());
    if let Err(e) = list.refresh().await {
        error!("フィードの更新に失敗しました: {:?}", e);
        std::process::exit(1);
    }

    let albums = list.albums();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&albums).unwrap());
    } else {
        for (position, album) in albums.iter().enumerate() {
            println!("{:>3}. {} - {}", position + 1, album.artist, album.name);
        }
    }

    if args.artworks == 0 {
        return;
    }

    let transport = ReqwestTransport::default();
    let rows: Vec<_> = albums
        .into_iter()
        .take(args.artworks)
        .map(|album| AlbumArtworkUseCaseImpl::new(transport.clone(), album))
        .collect();

    let results = stream::iter(rows.iter())
        .map(|row| async move { (row.album().clone(), row.load_artwork().await) })
        .buffer_unordered(args.concurrency.max(1))
        .collect::<Vec<_>>()
        .await;

    let mut loaded = 0;
    for (album, result) in &results {
        match result {
            Ok(()) => loaded += 1,
            Err(e) => error!("アートワークの取得に失敗: album={}, error={:?}", album.name, e),
        }
    }
    info!("アートワークを{}/{}件取得しました", loaded, results.len());
}
