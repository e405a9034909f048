use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::color::{ColorMap, SequentialScale};
use crate::config::DashboardConfig;
use crate::data::cache::SeasonCache;
use crate::data::filter::{filtered_indices, PlayerFilter};
use crate::data::model::{Conference, PlayerSeasonRow, SeasonDataset};

/// Which chart the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartView {
    #[default]
    Players,
    WinsVsExpected,
    TeamStyle,
}

impl ChartView {
    pub const ALL: [ChartView; 3] = [ChartView::Players, ChartView::WinsVsExpected, ChartView::TeamStyle];

    pub fn label(self) -> &'static str {
        match self {
            ChartView::Players => "Player performance",
            ChartView::WinsVsExpected => "Wins vs. expectations",
            ChartView::TeamStyle => "Pace & scoring",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    cache: SeasonCache,

    /// Loaded season (None until the files load successfully).
    pub dataset: Option<Arc<SeasonDataset>>,

    /// Minutes threshold and team selection.
    pub filter: PlayerFilter,

    /// Indices into `dataset.players` passing the current filter (cached).
    pub visible_indices: Vec<usize>,

    pub view: ChartView,

    /// Field-goal percentage colour scale over the whole season.
    pub fg_scale: SequentialScale,

    /// Assists range used to size player markers.
    pub assist_range: (f64, f64),

    pub conference_colors: ColorMap<Conference>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            filter: PlayerFilter::new(config.default_min_minutes),
            config,
            cache: SeasonCache::default(),
            dataset: None,
            visible_indices: Vec::new(),
            view: ChartView::default(),
            fg_scale: SequentialScale::new(0.0, 1.0),
            assist_range: (0.0, 0.0),
            conference_colors: ColorMap::new(&[Conference::East, Conference::West]),
            status_message: None,
        }
    }

    /// Load (or reuse) the season for the configured data directory.
    /// Failures are kept in `status_message` and leave the old data in place.
    pub fn load(&mut self) {
        match self.try_load() {
            Ok(dataset) => {
                self.set_dataset(dataset);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to load season data: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    fn try_load(&mut self) -> Result<Arc<SeasonDataset>> {
        let paths = self.config.paths();
        self.cache
            .get_or_load(&paths)
            .with_context(|| format!("loading season data from {}", self.config.data_dir.display()))
    }

    /// Drop the cached season and read the files again.
    pub fn reload(&mut self) {
        self.cache.invalidate();
        self.load();
    }

    /// Point at another directory holding the three season files.
    pub fn set_data_dir(&mut self, dir: PathBuf) {
        log::info!("Switching data directory to {}", dir.display());
        self.config.data_dir = dir;
        self.load();
    }

    /// Ingest a newly loaded dataset, rebuild scales and refilter.
    pub fn set_dataset(&mut self, dataset: Arc<SeasonDataset>) {
        self.fg_scale = dataset
            .player_stat_range(|p| p.fg_pct)
            .map(|(lo, hi)| SequentialScale::new(lo, hi))
            .unwrap_or(SequentialScale::new(0.0, 1.0));
        self.assist_range = dataset.player_stat_range(|p| Some(p.assists)).unwrap_or((0.0, 0.0));
        self.conference_colors = ColorMap::new(dataset.teams.iter().map(|t| &t.conference));

        // Selected teams that no longer exist would hide every row.
        self.filter.teams.retain(|t| dataset.team_codes.contains(t));

        self.dataset = Some(dataset);
        self.refilter();
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        self.visible_indices = match &self.dataset {
            Some(ds) => filtered_indices(&ds.players, &self.filter),
            None => Vec::new(),
        };
    }

    pub fn set_min_minutes(&mut self, minutes: f64) {
        self.filter.set_min_minutes(minutes);
        self.refilter();
    }

    pub fn toggle_team(&mut self, team: &str) {
        self.filter.toggle_team(team);
        self.refilter();
    }

    /// Back to "all teams".
    pub fn clear_teams(&mut self) {
        self.filter.clear_teams();
        self.refilter();
    }

    /// Players passing the current filter.
    pub fn visible_players(&self) -> impl Iterator<Item = &PlayerSeasonRow> + '_ {
        let players = self.dataset.as_deref().map(|ds| ds.players.as_slice()).unwrap_or(&[]);
        self.visible_indices.iter().map(move |&i| &players[i])
    }
}
