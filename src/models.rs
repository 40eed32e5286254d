use serde::Serialize;

/// Marker written wherever the page did not yield a value, so partial data
/// stays visible in the output instead of collapsing into empty cells.
pub const UNAVAILABLE: &str = "N/A";

/// Players per game on the full-stats table: columns 0-4 are the first team,
/// 5-9 the second.
pub const PLAYERS_PER_GAME: usize = 10;
pub const PLAYERS_PER_TEAM: usize = 5;

/// One column of the full-stats table. The site mixes value formats
/// ("12.5k", "1,234"), so every field is kept as the rendered text.
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub role: String,
    pub champion: String,
    pub kills: String,
    pub deaths: String,
    pub assists: String,
    pub kda: String,
    pub cs: String,
    pub golds: String,
    pub total_damage: String,
    pub total_damage_taken: String,
}

impl Player {
    /// Column headers for serialized player rows, in field order.
    pub const FIELDS: [&'static str; 10] = [
        "Role",
        "Champion",
        "Kills",
        "Deaths",
        "Assists",
        "KDA",
        "CS",
        "Golds",
        "TotalDamage",
        "TotalDamageTaken",
    ];

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.role.clone(),
            self.champion.clone(),
            self.kills.clone(),
            self.deaths.clone(),
            self.assists.clone(),
            self.kda.clone(),
            self.cs.clone(),
            self.golds.clone(),
            self.total_damage.clone(),
            self.total_damage_taken.clone(),
        ]
    }
}

impl Default for Player {
    fn default() -> Self {
        Self {
            role: UNAVAILABLE.to_string(),
            champion: UNAVAILABLE.to_string(),
            kills: UNAVAILABLE.to_string(),
            deaths: UNAVAILABLE.to_string(),
            assists: UNAVAILABLE.to_string(),
            kda: UNAVAILABLE.to_string(),
            cs: UNAVAILABLE.to_string(),
            golds: UNAVAILABLE.to_string(),
            total_damage: UNAVAILABLE.to_string(),
            total_damage_taken: UNAVAILABLE.to_string(),
        }
    }
}

/// One game of a match. `players[0..5]` belong to `teams[0]`, `players[5..10]`
/// to `teams[1]`, matching the column order of the full-stats table.
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    pub teams: [String; 2],
    pub time: String,
    pub players: Vec<Player>,
}

/// A match as listed on the tournament page, with its games in the order the
/// game links appeared on the match summary page. Built once by the pipeline,
/// read-only afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Match {
    pub teams: [String; 2],
    pub games: Vec<Game>,
}
