// src/extract/mod.rs - Shared pieces of the per-page extractors
pub mod game;
pub mod listing;
pub mod match_page;

use scraper::{Html, Selector};

/// Href marker of a match summary page on the tournament listing.
pub const MATCH_SUMMARY_MARKER: &str = "page-summary";
/// Href marker of a game summary page on a match page.
pub const GAME_PAGE_MARKER: &str = "page-game";
/// Marker of the companion per-player statistics page, reached by
/// substituting [`GAME_PAGE_MARKER`] in a game URL.
pub const FULL_STATS_MARKER: &str = "page-fullstats";

/// Rewrite the relative ".." prefix the site uses in hrefs to the absolute
/// site base. Anything else passes through untouched.
pub(crate) fn rewrite_relative(href: &str, base_url: &str) -> String {
    match href.strip_prefix("..") {
        Some(rest) => format!("{}{}", base_url.trim_end_matches('/'), rest),
        None => href.to_string(),
    }
}

/// Text of the first element matched by `selector`, if any.
pub(crate) fn first_text(doc: &Html, selector: &Selector) -> Option<String> {
    doc.select(selector)
        .next()
        .map(|el| el.text().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_relative_prefix_to_base() {
        assert_eq!(
            rewrite_relative("../game/stats/52001/page-game/", "https://gol.gg"),
            "https://gol.gg/game/stats/52001/page-game/"
        );
    }

    #[test]
    fn rewrite_tolerates_trailing_slash_on_base() {
        assert_eq!(
            rewrite_relative("../tournament/x/", "https://gol.gg/"),
            "https://gol.gg/tournament/x/"
        );
    }

    #[test]
    fn absolute_hrefs_pass_through() {
        assert_eq!(
            rewrite_relative("https://gol.gg/game/page-game/", "https://gol.gg"),
            "https://gol.gg/game/page-game/"
        );
    }
}
