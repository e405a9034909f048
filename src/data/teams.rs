use std::collections::HashMap;

use super::error::{DataError, Result};
use super::model::{TeamComparison, TeamProjection, TeamRecord};

/// Join actual and projected team tables on the trimmed team name.
///
/// Rows come out in the order of `actual`. Every team must appear exactly
/// once on each side; anything else is reported rather than paired up.
pub fn join_team_metrics(
    actual: &[TeamRecord],
    expected: &[TeamProjection],
) -> Result<Vec<TeamComparison>> {
    let mut projected: HashMap<&str, f64> = HashMap::with_capacity(expected.len());
    for row in expected {
        let name = row.team.trim();
        if projected.insert(name, row.win_pct).is_some() {
            return Err(DataError::DuplicateTeam {
                team: name.to_string(),
                table: "expected",
            });
        }
    }

    let mut joined = Vec::with_capacity(actual.len());
    let mut only_actual = Vec::new();
    for row in actual {
        let name = row.team.trim();
        if joined.iter().any(|c: &TeamComparison| c.team == name) {
            return Err(DataError::DuplicateTeam {
                team: name.to_string(),
                table: "actual",
            });
        }
        match projected.remove(name) {
            Some(expected_win_pct) => joined.push(TeamComparison {
                team: name.to_string(),
                conference: row.conference,
                actual_win_pct: row.win_pct,
                expected_win_pct,
                pace: row.pace,
                points_per_game: row.points_per_game,
                defensive_rating: row.defensive_rating,
            }),
            None => only_actual.push(name.to_string()),
        }
    }

    if !only_actual.is_empty() || !projected.is_empty() {
        let mut only_expected: Vec<String> = projected.into_keys().map(str::to_string).collect();
        only_expected.sort();
        return Err(DataError::TeamMismatch {
            only_actual,
            only_expected,
        });
    }

    Ok(joined)
}
