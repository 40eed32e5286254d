use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod browser;
mod config;
mod error;
mod export;
mod extract;
mod models;
mod pipeline;

use browser::BrowserSession;
use config::{load_config, Config};
use error::Result;
use export::CsvExporter;
use pipeline::CrawlPipeline;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Load configuration, falling back to defaults for a missing config.yml.
    let (config, config_error) = match load_config("config.yml").await {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Setup logging; RUST_LOG overrides the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("lolstat_scraper={}", config.logging.level))
        }))
        .init();

    if let Some(e) = config_error {
        warn!("failed to load config.yml: {}. Using defaults.", e);
    }

    // Graceful shutdown: Ctrl+C trips the token, the pipeline winds down
    // without further navigation and partial results are still written.
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if signal::ctrl_c().await.is_ok() {
                info!("received Ctrl+C, shutting down gracefully...");
                cancel.cancel();
            }
        });
    }

    let session = BrowserSession::launch(&config.crawl).await?;

    let crawl_result = {
        let pipeline = CrawlPipeline::new(&session, config.crawl.clone(), cancel.clone());
        pipeline.crawl_tournament().await
    };

    // The session is released on every exit path before the run's outcome is
    // decided.
    if let Err(e) = session.close().await {
        warn!("failed to release browser session: {}", e);
    }

    let matches = match crawl_result {
        Ok(matches) => matches,
        Err(e) => {
            error!("crawl aborted: {}", e);
            return Err(e);
        }
    };

    let exporter = CsvExporter::new(&config.output.directory, &config.output.filename);
    match exporter.export(&matches) {
        Ok(path) => info!("done, results at {}", path.display()),
        Err(e) => {
            error!("failed to persist results: {}", e);
            return Err(e);
        }
    }

    Ok(())
}
