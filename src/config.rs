use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CrawlerError, Result};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub crawl: CrawlConfig,
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CrawlConfig {
    /// Absolute site base, also used to rewrite the relative ".." hrefs
    /// found on fetched pages.
    pub base_url: String,
    pub tournament: String,
    pub season: String,
    pub navigation_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub directory: String,
    pub filename: String,
}

impl CrawlConfig {
    /// Tournament-listing URL for the configured tournament and season.
    /// The site expects the display name in the path, so spaces end up
    /// percent-encoded.
    pub fn listing_url(&self) -> Result<Url> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| CrawlerError::Config(format!("invalid base_url {}: {}", self.base_url, e)))?;
        base.join(&format!(
            "tournament/tournament-matchlist/{} {}/",
            self.tournament, self.season
        ))
        .map_err(|e| {
            CrawlerError::Config(format!(
                "cannot build listing url for {} {}: {}",
                self.tournament, self.season, e
            ))
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crawl: CrawlConfig {
                base_url: "https://gol.gg".to_string(),
                tournament: "LPL".to_string(),
                season: "Spring 2023".to_string(),
                navigation_timeout_seconds: 30,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            output: OutputConfig {
                directory: "output".to_string(),
                filename: "lplstat.csv".to_string(),
            },
        }
    }
}

pub async fn load_config(path: &str) -> Result<Config> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CrawlerError::Config(format!("failed to read {}: {}", path, e)))?;
    serde_yaml::from_str(&content)
        .map_err(|e| CrawlerError::Config(format!("failed to parse {}: {}", path, e)))
}
