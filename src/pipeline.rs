// src/pipeline.rs - Orchestrates listing -> match -> game extraction
use std::time::Instant;

use scraper::Html;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::browser::PageFetcher;
use crate::config::CrawlConfig;
use crate::error::{CrawlerError, Result};
use crate::extract::{game, listing, match_page, FULL_STATS_MARKER, GAME_PAGE_MARKER};
use crate::models::{Game, Match};

/// Walks the tournament hierarchy over a shared page fetcher, isolating
/// failures per match and per game. Only the initial listing fetch can abort
/// the whole run.
pub struct CrawlPipeline<'a> {
    fetcher: &'a dyn PageFetcher,
    config: CrawlConfig,
    cancel: CancellationToken,
}

/// Companion statistics page of a game, derived from the game summary URL.
pub(crate) fn full_stats_url(game_url: &str) -> String {
    game_url.replace(GAME_PAGE_MARKER, FULL_STATS_MARKER)
}

impl<'a> CrawlPipeline<'a> {
    pub fn new(fetcher: &'a dyn PageFetcher, config: CrawlConfig, cancel: CancellationToken) -> Self {
        Self {
            fetcher,
            config,
            cancel,
        }
    }

    /// Crawl the configured tournament and return its matches in listing
    /// order. Cancellation mid-run stops navigating and returns whatever was
    /// collected so far.
    pub async fn crawl_tournament(&self) -> Result<Vec<Match>> {
        let started = Instant::now();
        let listing_url = self.config.listing_url()?;
        info!(
            "🕷️  crawling {} {} from {}",
            self.config.tournament, self.config.season, listing_url
        );

        let html = self.fetch(listing_url.as_str()).await?;
        let match_urls = {
            let doc = Html::parse_document(&html);
            listing::extract_match_urls(&doc, &self.config.base_url)
        };
        info!("found {} matches on the listing", match_urls.len());

        let mut matches = Vec::new();
        let mut skipped = 0usize;
        for url in &match_urls {
            if self.cancel.is_cancelled() {
                warn!("cancelled, stopping before {}", url);
                break;
            }
            match self.crawl_match(url).await {
                Ok(m) => matches.push(m),
                Err(CrawlerError::Cancelled) => {
                    warn!("cancelled while crawling {}", url);
                    break;
                }
                Err(e) => {
                    skipped += 1;
                    warn!("skipping match {}: {}", url, e);
                }
            }
        }

        let games: usize = matches.iter().map(|m| m.games.len()).sum();
        info!(
            "🎯 crawl complete: {} matches ({} skipped), {} games in {}ms",
            matches.len(),
            skipped,
            games,
            started.elapsed().as_millis()
        );
        Ok(matches)
    }

    async fn crawl_match(&self, url: &str) -> Result<Match> {
        let html = self.fetch(url).await?;
        let page = {
            let doc = Html::parse_document(&html);
            match_page::extract_match(&doc, &self.config.base_url)
        };
        debug!(
            "match {} vs {}: {} games",
            page.teams[0],
            page.teams[1],
            page.game_urls.len()
        );

        let mut games = Vec::new();
        for game_url in &page.game_urls {
            if self.cancel.is_cancelled() {
                break;
            }
            match self.crawl_game(game_url).await {
                Ok(game) => games.push(game),
                Err(CrawlerError::Cancelled) => break,
                Err(e) => warn!("skipping game {}: {}", game_url, e),
            }
        }

        Ok(Match {
            teams: page.teams,
            games,
        })
    }

    async fn crawl_game(&self, game_url: &str) -> Result<Game> {
        let summary_html = self.fetch(game_url).await?;
        let stats_html = self.fetch(&full_stats_url(game_url)).await?;

        let summary = Html::parse_document(&summary_html);
        let stats = Html::parse_document(&stats_html);
        game::extract_game(&summary, &stats)
    }

    /// Fetch raced against the cancellation token; the token wins ties so a
    /// cancelled run never starts another navigation.
    async fn fetch(&self, url: &str) -> Result<String> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(CrawlerError::Cancelled),
            result = self.fetcher.fetch(url) => result,
        }
    }
}
