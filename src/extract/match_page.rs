// src/extract/match_page.rs - Match summary page -> team names + game URLs
use scraper::{Html, Selector};

use crate::extract::{first_text, rewrite_relative, GAME_PAGE_MARKER};
use crate::models::UNAVAILABLE;

/// Fixed positions of the two team headlines, in listing order.
const HOME_TEAM: &str = "body > div > main > div:nth-child(4) > div > div.row.rowbreak.fond-main-cadre.p-4 > div > div.col-cadre.pb-4 > div.row.pb-3 > div:nth-child(1) > h1 > a";
const AWAY_TEAM: &str = "body > div > main > div:nth-child(4) > div > div.row.rowbreak.fond-main-cadre.p-4 > div > div.col-cadre.pb-4 > div.row.pb-3 > div:nth-child(3) > h1 > a";

/// Game links are not positionally restricted; any anchor on the page counts.
const ALL_ANCHORS: &str = "a[href]";

#[derive(Debug, Clone)]
pub struct MatchPage {
    pub teams: [String; 2],
    pub game_urls: Vec<String>,
}

/// Read both team names from their fixed positions (first match, no
/// fallback) and collect every game link on the page, in document order.
pub fn extract_match(doc: &Html, base_url: &str) -> MatchPage {
    let home = Selector::parse(HOME_TEAM).unwrap();
    let away = Selector::parse(AWAY_TEAM).unwrap();
    let anchors = Selector::parse(ALL_ANCHORS).unwrap();

    let teams = [
        first_text(doc, &home).unwrap_or_else(|| UNAVAILABLE.to_string()),
        first_text(doc, &away).unwrap_or_else(|| UNAVAILABLE.to_string()),
    ];

    let game_urls = doc
        .select(&anchors)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| href.contains(GAME_PAGE_MARKER))
        .map(|href| rewrite_relative(href, base_url))
        .collect();

    MatchPage { teams, game_urls }
}
