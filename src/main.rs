use clap::Parser;
use tracing_subscriber::EnvFilter;

use postboard::config::{Config, DEFAULT_CONFIG_PATH};
use postboard::posts::PostStore;
use postboard::{App, Server};

#[derive(Debug, Parser)]
#[command(version, about = "Server-rendered posts board")]
struct Args {
    /// Config file path, with or without the `.toml` extension.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cfg = Config::load_from(&args.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.logging.level)),
        )
        .init();

    let addr = cfg.listen_addr()?;
    let store = PostStore::seeded();
    tracing::info!(
        config = %args.config,
        assets = %cfg.assets.dir.display(),
        posts = store.len().await,
        "starting"
    );

    let router = App::new(store, cfg.assets.dir.clone()).into_router();

    Server::bind(addr)
        .max_body_bytes(cfg.server.max_body_bytes)
        .serve(router)
        .await?;
    Ok(())
}
