use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::data::error::{DataError, Result};
use crate::data::filter::DEFAULT_MIN_MINUTES;

/// Optional config file looked up in the working directory.
pub const CONFIG_FILE: &str = "courtside.json";

// ---------------------------------------------------------------------------
// DashboardConfig
// ---------------------------------------------------------------------------

/// Where the season files live and the initial slider position.
///
/// ```json
/// {
///   "data_dir": "data/2023-24",
///   "players_file": "2023-2024 NBA Player Stats - Regular.csv",
///   "team_actual_file": "team_stats.csv",
///   "team_expected_file": "team_expected.csv",
///   "default_min_minutes": 10
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_dir: PathBuf,
    pub players_file: String,
    pub team_actual_file: String,
    pub team_expected_file: String,
    pub default_min_minutes: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            players_file: "2023-2024 NBA Player Stats - Regular.csv".to_string(),
            team_actual_file: "team_stats.csv".to_string(),
            team_expected_file: "team_expected.csv".to_string(),
            default_min_minutes: DEFAULT_MIN_MINUTES,
        }
    }
}

impl DashboardConfig {
    /// Read `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No {} found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(DataError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&text).map_err(|source| DataError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Full paths of the three input files.
    pub fn paths(&self) -> DataPaths {
        DataPaths {
            players: self.data_dir.join(&self.players_file),
            team_actual: self.data_dir.join(&self.team_actual_file),
            team_expected: self.data_dir.join(&self.team_expected_file),
        }
    }
}

/// Resolved input file locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub players: PathBuf,
    pub team_actual: PathBuf,
    pub team_expected: PathBuf,
}
