// src/extract/game.rs - Game summary + full-stats pages -> one Game record
use scraper::{Html, Selector};
use tracing::warn;

use crate::error::{CrawlerError, Result};
use crate::extract::first_text;
use crate::models::{Game, Player, PLAYERS_PER_GAME, UNAVAILABLE};

/// Fixed positions on the game summary page.
const GAME_TIME: &str = "body > div > main > div:nth-child(4) > div > div:nth-child(4) > div > div > div > div:nth-child(1) > div > div > div:nth-child(1) > div.col-6.text-center > h1";
const HOME_TEAM: &str = "body > div > main > div:nth-child(4) > div > div:nth-child(4) > div > div > div > div:nth-child(1) > div > div > div:nth-child(2) > div:nth-child(1) > div.row.rowbreak.pb-3 > div";
const AWAY_TEAM: &str = "body > div > main > div:nth-child(4) > div > div:nth-child(4) > div > div > div > div:nth-child(1) > div > div > div:nth-child(2) > div:nth-child(2) > div.row.rowbreak.pb-3 > div";

/// Champion icons in the full-stats header row, one per player column.
const CHAMPION_ICONS: &str = "table > thead > tr > th > img";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatField {
    Role,
    Kills,
    Deaths,
    Assists,
    Kda,
    Cs,
    Golds,
    TotalDamage,
    TotalDamageTaken,
}

/// Layout contract of the full-stats table: each stat lives on one fixed
/// 1-based row, with the label in the first cell and one value cell per
/// player column.
pub(crate) const STAT_ROWS: [(StatField, usize); 9] = [
    (StatField::Role, 2),
    (StatField::Kills, 4),
    (StatField::Deaths, 5),
    (StatField::Assists, 6),
    (StatField::Kda, 7),
    (StatField::Cs, 8),
    (StatField::Golds, 11),
    (StatField::TotalDamage, 25),
    (StatField::TotalDamageTaken, 51),
];

fn stat_slot<'a>(player: &'a mut Player, field: StatField) -> &'a mut String {
    match field {
        StatField::Role => &mut player.role,
        StatField::Kills => &mut player.kills,
        StatField::Deaths => &mut player.deaths,
        StatField::Assists => &mut player.assists,
        StatField::Kda => &mut player.kda,
        StatField::Cs => &mut player.cs,
        StatField::Golds => &mut player.golds,
        StatField::TotalDamage => &mut player.total_damage,
        StatField::TotalDamageTaken => &mut player.total_damage_taken,
    }
}

/// The site labels K'Sante's icon with a bare "K"; everything else passes
/// through unchanged.
pub(crate) fn normalize_champion(alt: &str) -> String {
    if alt == "K" {
        "KSante".to_string()
    } else {
        alt.to_string()
    }
}

/// Build one Game from the summary page and its companion full-stats page.
///
/// On success the record always carries exactly 10 players, columns 0-4 for
/// `teams[0]` and 5-9 for `teams[1]`. A stat row that is missing or has the
/// wrong number of value cells degrades to the unavailable marker; a header
/// row without exactly 10 champion columns breaks positional identity and
/// fails the whole game.
pub fn extract_game(summary: &Html, full_stats: &Html) -> Result<Game> {
    let time_sel = Selector::parse(GAME_TIME).unwrap();
    let home_sel = Selector::parse(HOME_TEAM).unwrap();
    let away_sel = Selector::parse(AWAY_TEAM).unwrap();

    let time = first_text(summary, &time_sel).unwrap_or_else(|| UNAVAILABLE.to_string());
    let teams = [
        first_text(summary, &home_sel)
            .map(|name| name.trim().to_string())
            .unwrap_or_else(|| UNAVAILABLE.to_string()),
        first_text(summary, &away_sel)
            .map(|name| name.trim().to_string())
            .unwrap_or_else(|| UNAVAILABLE.to_string()),
    ];

    let mut players: Vec<Player> = (0..PLAYERS_PER_GAME).map(|_| Player::default()).collect();

    let icons = Selector::parse(CHAMPION_ICONS).unwrap();
    let champions: Vec<&str> = full_stats
        .select(&icons)
        .filter_map(|img| img.value().attr("alt"))
        .collect();
    if champions.len() != PLAYERS_PER_GAME {
        return Err(CrawlerError::Extraction(format!(
            "expected {} champion columns, found {}",
            PLAYERS_PER_GAME,
            champions.len()
        )));
    }
    for (player, alt) in players.iter_mut().zip(champions) {
        player.champion = normalize_champion(alt);
    }

    for (field, row) in STAT_ROWS {
        let selector = Selector::parse(&format!("table > tbody > tr:nth-child({}) > td", row)).unwrap();
        // Skip the label cell; the rest are player columns in table order.
        let values: Vec<String> = full_stats
            .select(&selector)
            .skip(1)
            .map(|cell| cell.text().collect::<String>())
            .collect();

        if values.is_empty() {
            warn!("stat row {} ({:?}) missing, leaving it unavailable", row, field);
            continue;
        }
        if values.len() != PLAYERS_PER_GAME {
            warn!(
                "stat row {} ({:?}) has {} value cells instead of {}, leaving it unavailable",
                row,
                field,
                values.len(),
                PLAYERS_PER_GAME
            );
            continue;
        }

        for (player, value) in players.iter_mut().zip(values) {
            *stat_slot(player, field) = value;
        }
    }

    Ok(Game {
        teams,
        time,
        players,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::fixtures::{full_stats_page, game_summary_page, numbered_stat_rows};

    const CHAMPIONS: [&str; 10] = [
        "Gnar", "Maokai", "Ahri", "Zeri", "Lulu", "Jax", "Sejuani", "Syndra", "Varus", "Nautilus",
    ];

    fn parse(html: &str) -> Html {
        Html::parse_document(html)
    }

    #[test]
    fn stat_row_table_matches_the_page_layout() {
        let expected = [
            (StatField::Role, 2),
            (StatField::Kills, 4),
            (StatField::Deaths, 5),
            (StatField::Assists, 6),
            (StatField::Kda, 7),
            (StatField::Cs, 8),
            (StatField::Golds, 11),
            (StatField::TotalDamage, 25),
            (StatField::TotalDamageTaken, 51),
        ];
        assert_eq!(STAT_ROWS, expected);
    }

    #[test]
    fn champion_alias_expands_single_letter_k() {
        assert_eq!(normalize_champion("K"), "KSante");
        assert_eq!(normalize_champion("Kassadin"), "Kassadin");
        assert_eq!(normalize_champion("KSante"), "KSante");
        assert_eq!(normalize_champion(""), "");
    }

    #[test]
    fn extracts_a_complete_game() {
        let summary = parse(&game_summary_page("32:47", "\n  JDG  \n", "\n  EDG  \n"));
        let stats = parse(&full_stats_page(&CHAMPIONS, &numbered_stat_rows()));

        let game = extract_game(&summary, &stats).unwrap();
        assert_eq!(game.time, "32:47");
        assert_eq!(game.teams, ["JDG".to_string(), "EDG".to_string()]);
        assert_eq!(game.players.len(), PLAYERS_PER_GAME);

        // Positional binding: column i feeds player i.
        assert_eq!(game.players[0].champion, "Gnar");
        assert_eq!(game.players[9].champion, "Nautilus");
        assert_eq!(game.players[0].role, "role0");
        assert_eq!(game.players[3].kills, "kills3");
        assert_eq!(game.players[7].golds, "golds7");
        assert_eq!(game.players[9].total_damage_taken, "taken9");
    }

    #[test]
    fn missing_stat_row_degrades_to_unavailable() {
        let mut rows = numbered_stat_rows();
        rows.retain(|(row, _)| *row != 11); // drop golds

        let summary = parse(&game_summary_page("30:00", "JDG", "EDG"));
        let stats = parse(&full_stats_page(&CHAMPIONS, &rows));

        let game = extract_game(&summary, &stats).unwrap();
        assert_eq!(game.players.len(), PLAYERS_PER_GAME);
        for player in &game.players {
            assert_eq!(player.golds, UNAVAILABLE);
        }
        // Other stats are untouched.
        assert_eq!(game.players[2].kills, "kills2");
    }

    #[test]
    fn short_stat_row_degrades_to_unavailable() {
        let mut rows = numbered_stat_rows();
        if let Some(entry) = rows.iter_mut().find(|(row, _)| *row == 4) {
            entry.1.truncate(7); // kills row loses three columns
        }

        let summary = parse(&game_summary_page("30:00", "JDG", "EDG"));
        let stats = parse(&full_stats_page(&CHAMPIONS, &rows));

        let game = extract_game(&summary, &stats).unwrap();
        for player in &game.players {
            assert_eq!(player.kills, UNAVAILABLE);
        }
        assert_eq!(game.players[0].deaths, "deaths0");
    }

    #[test]
    fn wrong_champion_column_count_is_an_extraction_error() {
        let summary = parse(&game_summary_page("30:00", "JDG", "EDG"));
        let stats = parse(&full_stats_page(&CHAMPIONS[..7], &numbered_stat_rows()));

        assert!(matches!(
            extract_game(&summary, &stats),
            Err(CrawlerError::Extraction(_))
        ));
    }

    #[test]
    fn missing_summary_fields_are_marked_unavailable() {
        let summary = parse("<html><body><div><main></main></div></body></html>");
        let stats = parse(&full_stats_page(&CHAMPIONS, &numbered_stat_rows()));

        let game = extract_game(&summary, &stats).unwrap();
        assert_eq!(game.time, UNAVAILABLE);
        assert_eq!(game.teams, [UNAVAILABLE.to_string(), UNAVAILABLE.to_string()]);
        // Stats still bind normally.
        assert_eq!(game.players[5].champion, "Jax");
    }

    #[test]
    fn ksante_alias_applies_to_header_decoding() {
        let mut champions = CHAMPIONS;
        champions[0] = "K";

        let summary = parse(&game_summary_page("30:00", "JDG", "EDG"));
        let stats = parse(&full_stats_page(&champions, &numbered_stat_rows()));

        let game = extract_game(&summary, &stats).unwrap();
        assert_eq!(game.players[0].champion, "KSante");
        assert_eq!(game.players[1].champion, "Maokai");
    }
}
