use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use super::model::PlayerSeasonRow;

/// Bounds of the minutes-per-game slider.
pub const MINUTES_RANGE: RangeInclusive<f64> = 0.0..=37.0;

/// Slider position when nothing else is configured.
pub const DEFAULT_MIN_MINUTES: f64 = 10.0;

// ---------------------------------------------------------------------------
// PlayerFilter – the user's current selection
// ---------------------------------------------------------------------------

/// Minutes threshold plus team selection.
/// An empty `teams` set means "all teams".
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerFilter {
    min_minutes: f64,
    pub teams: BTreeSet<String>,
}

impl Default for PlayerFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_MINUTES)
    }
}

impl PlayerFilter {
    pub fn new(min_minutes: f64) -> Self {
        let mut filter = PlayerFilter {
            min_minutes: DEFAULT_MIN_MINUTES,
            teams: BTreeSet::new(),
        };
        filter.set_min_minutes(min_minutes);
        filter
    }

    pub fn min_minutes(&self) -> f64 {
        self.min_minutes
    }

    /// Set the threshold, clamped to [`MINUTES_RANGE`]. NaN is ignored.
    pub fn set_min_minutes(&mut self, minutes: f64) {
        if minutes.is_nan() {
            return;
        }
        self.min_minutes = minutes.clamp(*MINUTES_RANGE.start(), *MINUTES_RANGE.end());
    }

    /// Add or remove one team code from the selection.
    pub fn toggle_team(&mut self, team: &str) {
        if !self.teams.remove(team) {
            self.teams.insert(team.to_string());
        }
    }

    pub fn clear_teams(&mut self) {
        self.teams.clear();
    }

    /// Whether a single row passes the filter.
    pub fn matches(&self, row: &PlayerSeasonRow) -> bool {
        row.minutes >= self.min_minutes && (self.teams.is_empty() || self.teams.contains(&row.team))
    }
}

// ---------------------------------------------------------------------------
// Applying the filter
// ---------------------------------------------------------------------------

/// Indices of rows passing `filter`, in input order.
pub fn filtered_indices(rows: &[PlayerSeasonRow], filter: &PlayerFilter) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| filter.matches(row))
        .map(|(i, _)| i)
        .collect()
}
