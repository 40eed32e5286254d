// src/export/rows.rs - Flatten nested match records into output rows
use crate::models::{Match, Player, PLAYERS_PER_TEAM};

/// Flatten matches into output rows. Pure and deterministic: per match one
/// "A vs B" header row, then per game a ["Time", time] row followed by two
/// team blocks (team-name row, field-name header row, five player rows), and
/// a blank separator row after each match.
pub fn to_rows(matches: &[Match]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    for m in matches {
        rows.push(vec![format!("{} vs {}", m.teams[0], m.teams[1])]);

        for game in &m.games {
            rows.push(vec!["Time".to_string(), game.time.clone()]);

            for side in 0..2 {
                rows.push(vec![game.teams[side].clone()]);
                rows.push(Player::FIELDS.iter().map(|f| f.to_string()).collect());
                for player in game
                    .players
                    .iter()
                    .skip(side * PLAYERS_PER_TEAM)
                    .take(PLAYERS_PER_TEAM)
                {
                    rows.push(player.to_row());
                }
            }
        }

        rows.push(Vec::new());
    }

    rows
}
