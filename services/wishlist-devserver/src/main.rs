use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::{info, warn};
use wishlist_devserver::{AppState, router};

const DEFAULT_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_STATIC_DIR: &str = "ui/wishlist-wasm/static";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let addr: SocketAddr = std::env::var("WISHLIST_DEV_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_owned())
        .parse()?;

    let static_dir = PathBuf::from(
        std::env::var("WISHLIST_STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_owned()),
    );
    let static_dir = if static_dir.is_dir() {
        info!("serving console assets from {}", static_dir.display());
        Some(static_dir)
    } else {
        warn!(
            "static directory {} not found; serving the API only",
            static_dir.display()
        );
        None
    };

    let app = router(AppState::default(), static_dir);

    info!("wishlist-devserver listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}
