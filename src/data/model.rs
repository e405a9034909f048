use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

use super::clean::clean_player_table;
use super::error::Result;
use super::teams::join_team_metrics;

/// Team code used for a traded player's combined season line.
pub const TOTAL_TEAM_CODE: &str = "TOT";

// ---------------------------------------------------------------------------
// PlayerSeasonRow – one row of the player table
// ---------------------------------------------------------------------------

/// One player-team-season line.
///
/// Required columns are `Player`, `Tm`, `MP`, `PTS`, `FG%` and `AST`; the rest
/// are optional and default to `None` when the column is absent or blank.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerSeasonRow {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Tm")]
    pub team: String,
    /// Minutes per game.
    #[serde(rename = "MP")]
    pub minutes: f64,
    #[serde(rename = "PTS")]
    pub points: f64,
    /// Blank for players without a field-goal attempt.
    #[serde(rename = "FG%", deserialize_with = "csv::invalid_option")]
    pub fg_pct: Option<f64>,
    #[serde(rename = "AST")]
    pub assists: f64,
    #[serde(rename = "Pos", default)]
    pub position: Option<String>,
    #[serde(rename = "Age", default, deserialize_with = "csv::invalid_option")]
    pub age: Option<u32>,
    #[serde(rename = "G", default, deserialize_with = "csv::invalid_option")]
    pub games: Option<u32>,
    #[serde(rename = "TRB", default, deserialize_with = "csv::invalid_option")]
    pub rebounds: Option<f64>,
    #[serde(rename = "STL", default, deserialize_with = "csv::invalid_option")]
    pub steals: Option<f64>,
    #[serde(rename = "BLK", default, deserialize_with = "csv::invalid_option")]
    pub blocks: Option<f64>,
}

impl PlayerSeasonRow {
    /// Whether this is an aggregated multi-team line.
    pub fn is_season_total(&self) -> bool {
        self.team == TOTAL_TEAM_CODE
    }
}

// ---------------------------------------------------------------------------
// Team tables
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Conference {
    #[serde(alias = "Eastern", alias = "E")]
    East,
    #[serde(alias = "Western", alias = "W")]
    West,
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conference::East => write!(f, "East"),
            Conference::West => write!(f, "West"),
        }
    }
}

/// Actual end-of-season team metrics.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamRecord {
    /// As found in the file; may carry padding.
    #[serde(rename = "TEAM")]
    pub team: String,
    #[serde(rename = "WIN%")]
    pub win_pct: f64,
    #[serde(rename = "CONF")]
    pub conference: Conference,
    #[serde(rename = "PACE")]
    pub pace: f64,
    #[serde(rename = "PPG")]
    pub points_per_game: f64,
    /// Points allowed per 100 possessions, lower is better.
    #[serde(rename = "dEFF")]
    pub defensive_rating: f64,
}

/// Preseason projection for one team.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamProjection {
    #[serde(rename = "TEAM_NAME")]
    pub team: String,
    #[serde(rename = "W_PCT")]
    pub win_pct: f64,
}

/// Actual and projected numbers for one team, joined by name.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamComparison {
    pub team: String,
    pub conference: Conference,
    pub actual_win_pct: f64,
    pub expected_win_pct: f64,
    pub pace: f64,
    pub points_per_game: f64,
    pub defensive_rating: f64,
}

impl TeamComparison {
    /// Positive when the team beat its projection.
    pub fn win_pct_delta(&self) -> f64 {
        self.actual_win_pct - self.expected_win_pct
    }
}

// ---------------------------------------------------------------------------
// SeasonDataset – everything the dashboard renders from
// ---------------------------------------------------------------------------

/// Prepared, read-only season data.
#[derive(Debug, Clone)]
pub struct SeasonDataset {
    /// Deduplicated player lines, one per player.
    pub players: Vec<PlayerSeasonRow>,
    /// Number of player lines before deduplication.
    pub raw_player_rows: usize,
    /// Distinct team codes of `players`, sorted (includes `TOT`).
    pub team_codes: BTreeSet<String>,
    pub teams: Vec<TeamComparison>,
}

impl SeasonDataset {
    /// Clean the player lines and join the two team tables.
    pub fn prepare(
        raw_players: Vec<PlayerSeasonRow>,
        actual: &[TeamRecord],
        expected: &[TeamProjection],
    ) -> Result<Self> {
        let raw_player_rows = raw_players.len();
        let players = clean_player_table(raw_players);
        let team_codes = players.iter().map(|p| p.team.clone()).collect();
        let teams = join_team_metrics(actual, expected)?;

        Ok(SeasonDataset {
            players,
            raw_player_rows,
            team_codes,
            teams,
        })
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether there are no players.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Lines dropped by deduplication.
    pub fn fragments_removed(&self) -> usize {
        self.raw_player_rows - self.players.len()
    }

    /// Min and max of a statistic over all players, ignoring missing values.
    pub fn player_stat_range(
        &self,
        stat: impl Fn(&PlayerSeasonRow) -> Option<f64>,
    ) -> Option<(f64, f64)> {
        self.players
            .iter()
            .filter_map(stat)
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

#[cfg(test)]
pub(crate) fn player(name: &str, team: &str, minutes: f64) -> PlayerSeasonRow {
    PlayerSeasonRow {
        player: name.to_string(),
        team: team.to_string(),
        minutes,
        points: minutes / 2.0,
        fg_pct: Some(0.45),
        assists: 2.0,
        position: None,
        age: None,
        games: None,
        rebounds: None,
        steals: None,
        blocks: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actual(team: &str, conf: Conference, win_pct: f64) -> TeamRecord {
        TeamRecord {
            team: team.to_string(),
            win_pct,
            conference: conf,
            pace: 99.0,
            points_per_game: 114.0,
            defensive_rating: 112.0,
        }
    }

    #[test]
    fn prepare_cleans_players_and_joins_teams() {
        let raw = vec![
            player("A", "TOT", 30.0),
            player("A", "LAL", 15.0),
            player("A", "BOS", 18.0),
            player("B", "NYK", 25.0),
        ];
        let teams = [actual("Boston Celtics ", Conference::East, 0.78)];
        let expected = [TeamProjection {
            team: "Boston Celtics".to_string(),
            win_pct: 0.66,
        }];

        let ds = SeasonDataset::prepare(raw, &teams, &expected).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.raw_player_rows, 4);
        assert_eq!(ds.fragments_removed(), 2);
        assert_eq!(
            ds.team_codes.iter().cloned().collect::<Vec<_>>(),
            vec!["NYK".to_string(), "TOT".to_string()]
        );
        assert_eq!(ds.teams.len(), 1);
        assert!((ds.teams[0].win_pct_delta() - 0.12).abs() < 1e-9);
    }

    #[test]
    fn stat_range_skips_missing_values() {
        let mut no_shots = player("C", "MIA", 3.0);
        no_shots.fg_pct = None;
        let ds = SeasonDataset::prepare(
            vec![player("A", "BOS", 30.0), no_shots, player("B", "NYK", 10.0)],
            &[],
            &[],
        )
        .unwrap();

        assert_eq!(ds.player_stat_range(|p| Some(p.minutes)), Some((10.0, 30.0)));
        assert_eq!(ds.player_stat_range(|p| p.fg_pct), Some((0.45, 0.45)));
        assert_eq!(
            SeasonDataset::prepare(vec![], &[], &[])
                .unwrap()
                .player_stat_range(|p| Some(p.points)),
            None
        );
    }
}
