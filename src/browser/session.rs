// src/browser/session.rs - Headless browser session behind the PageFetcher seam
use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::CrawlConfig;
use crate::error::{CrawlerError, Result};

/// Fetch a URL and return the serialized DOM of the fully rendered page.
///
/// This is the only operation the extraction pipeline needs from the outside
/// world, so it is the seam mocked in pipeline tests.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// One headless Chrome instance, shared by every fetch of a run. Pages are
/// navigated one at a time; the session must be released with [`close`] on
/// every exit path.
///
/// [`close`]: BrowserSession::close
pub struct BrowserSession {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

impl BrowserSession {
    pub async fn launch(config: &CrawlConfig) -> Result<Self> {
        let browser_config = BrowserConfig::builder()
            .request_timeout(Duration::from_secs(config.navigation_timeout_seconds))
            .build()
            .map_err(CrawlerError::Session)?;

        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| CrawlerError::Session(format!("failed to launch browser: {}", e)))?;

        // The CDP event loop has to be polled for the browser to make progress.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        debug!("browser session launched");
        Ok(Self {
            browser,
            handler_task,
        })
    }

    pub async fn close(mut self) -> Result<()> {
        self.browser
            .close()
            .await
            .map_err(|e| CrawlerError::Session(format!("failed to close browser: {}", e)))?;
        let _ = self.browser.wait().await;
        self.handler_task.abort();
        debug!("browser session closed");
        Ok(())
    }
}

#[async_trait]
impl PageFetcher for BrowserSession {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("fetching {}", url);

        let page = self
            .browser
            .new_page(url)
            .await
            .map_err(|e| CrawlerError::navigation(url, &e))?;
        page.wait_for_navigation()
            .await
            .map_err(|e| CrawlerError::navigation(url, &e))?;
        let html = page
            .content()
            .await
            .map_err(|e| CrawlerError::navigation(url, &e))?;
        if let Err(e) = page.close().await {
            debug!("failed to close page for {}: {}", url, e);
        }

        debug!("fetched {} bytes from {}", html.len(), url);
        Ok(html)
    }
}
