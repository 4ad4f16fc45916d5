use daily_ratings::{
    date::local_today, router, ui::Page, AppState, Config, JsonFileStore, RatingsStore, Widget,
};
use tokio::fs;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    if let Some(parent) = config.data_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let page = Page::index();
    let store = RatingsStore::new(JsonFileStore::open(&config.data_path));
    let Some(widget) = Widget::setup(&page, store, local_today()) else {
        warn!("nothing to serve; exiting");
        return Ok(());
    };

    let app = router(AppState::new(page, widget));

    info!("ratings stored in {}", config.data_path.display());
    info!("listening on http://{}", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
