// src/extract/listing.rs - Tournament listing page -> match summary URLs
use scraper::{Html, Selector};

use crate::extract::{rewrite_relative, MATCH_SUMMARY_MARKER};

/// Structural location of the match table's link cells on the listing page.
const MATCH_LINKS: &str = "body > div > main > div:nth-child(7) > div > div:nth-child(5) > div > section > div > div > table > tbody > tr > td > a";

/// All match summary URLs on the listing, in document order, rewritten to the
/// absolute site base. An empty listing is valid and yields an empty vec.
pub fn extract_match_urls(doc: &Html, base_url: &str) -> Vec<String> {
    let links = Selector::parse(MATCH_LINKS).unwrap();

    doc.select(&links)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| href.contains(MATCH_SUMMARY_MARKER))
        .map(|href| rewrite_relative(href, base_url))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::fixtures::listing_page;

    const BASE: &str = "https://gol.gg";

    #[test]
    fn collects_match_urls_in_document_order() {
        let html = listing_page(&[
            "../tournament/match/45001/page-summary/",
            "../tournament/match/45002/page-summary/",
        ]);
        let doc = Html::parse_document(&html);

        let urls = extract_match_urls(&doc, BASE);
        assert_eq!(
            urls,
            vec![
                "https://gol.gg/tournament/match/45001/page-summary/",
                "https://gol.gg/tournament/match/45002/page-summary/",
            ]
        );
    }

    #[test]
    fn drops_links_without_summary_marker() {
        let html = listing_page(&[
            "../tournament/match/45001/page-summary/",
            "../tournament/tournament-stats/LPL/",
        ]);
        let doc = Html::parse_document(&html);

        let urls = extract_match_urls(&doc, BASE);
        assert_eq!(urls.len(), 1);
        assert!(urls[0].contains(MATCH_SUMMARY_MARKER));
    }

    #[test]
    fn rewritten_urls_keep_no_relative_prefix() {
        let html = listing_page(&["../tournament/match/45001/page-summary/"]);
        let doc = Html::parse_document(&html);

        for url in extract_match_urls(&doc, BASE) {
            assert!(!url.contains(".."));
            assert!(url.starts_with(BASE));
        }
    }

    #[test]
    fn empty_listing_is_not_an_error() {
        let html = listing_page(&[]);
        let doc = Html::parse_document(&html);
        assert!(extract_match_urls(&doc, BASE).is_empty());
    }

    #[test]
    fn ignores_anchors_outside_the_match_table() {
        let html = r#"<html><body><div><main>
            <a href="../tournament/match/45009/page-summary/">stray</a>
        </main></div></body></html>"#;
        let doc = Html::parse_document(html);
        assert!(extract_match_urls(&doc, BASE).is_empty());
    }
}
