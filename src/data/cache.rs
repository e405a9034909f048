use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use super::error::{DataError, Result};
use super::loader::load_season;
use super::model::SeasonDataset;
use crate::config::DataPaths;

/// Identity of one input file at the time it was read.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FileStamp {
    path: PathBuf,
    len: u64,
    modified: Option<SystemTime>,
}

impl FileStamp {
    fn read(path: &Path) -> Result<Self> {
        let meta = std::fs::metadata(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(FileStamp {
            path: path.to_path_buf(),
            len: meta.len(),
            modified: meta.modified().ok(),
        })
    }
}

type CacheKey = [FileStamp; 3];

fn cache_key(paths: &DataPaths) -> Result<CacheKey> {
    Ok([
        FileStamp::read(&paths.players)?,
        FileStamp::read(&paths.team_actual)?,
        FileStamp::read(&paths.team_expected)?,
    ])
}

// ---------------------------------------------------------------------------
// SeasonCache
// ---------------------------------------------------------------------------

/// Loaded-once season data, reloaded only when the inputs change or the
/// cache is invalidated.
#[derive(Debug, Default)]
pub struct SeasonCache {
    entry: Option<(CacheKey, Arc<SeasonDataset>)>,
}

impl SeasonCache {
    /// Return the cached dataset for `paths`, loading it if the files differ
    /// from the last successful load.
    pub fn get_or_load(&mut self, paths: &DataPaths) -> Result<Arc<SeasonDataset>> {
        let key = cache_key(paths)?;
        if let Some((cached_key, dataset)) = &self.entry {
            if *cached_key == key {
                log::debug!("Season data unchanged, reusing cached copy");
                return Ok(Arc::clone(dataset));
            }
        }

        let dataset = Arc::new(load_season(paths)?);
        self.entry = Some((key, Arc::clone(&dataset)));
        Ok(dataset)
    }

    /// Forget the cached dataset so the next access reads the files again.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_inputs(dir: &Path, players: &str) -> DataPaths {
        let paths = DataPaths {
            players: dir.join("players.csv"),
            team_actual: dir.join("actual.csv"),
            team_expected: dir.join("expected.csv"),
        };
        std::fs::write(&paths.players, players).unwrap();
        std::fs::write(&paths.team_actual, "TEAM,WIN%,CONF,PACE,PPG,dEFF\nMiami Heat,0.561,East,96.4,110.1,111.5\n").unwrap();
        std::fs::write(&paths.team_expected, "TEAM_NAME,W_PCT\nMiami Heat,0.55\n").unwrap();
        paths
    }

    #[test]
    fn second_access_shares_the_same_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_inputs(dir.path(), "Player;Tm;MP;PTS;FG%;AST\nA;MIA;30;20;0.5;4\n");

        let mut cache = SeasonCache::default();
        assert!(cache.entry.is_none());
        let first = cache.get_or_load(&paths).unwrap();
        let second = cache.get_or_load(&paths).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn invalidate_forces_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_inputs(dir.path(), "Player;Tm;MP;PTS;FG%;AST\nA;MIA;30;20;0.5;4\n");

        let mut cache = SeasonCache::default();
        let first = cache.get_or_load(&paths).unwrap();
        cache.invalidate();
        assert!(cache.entry.is_none());
        let second = cache.get_or_load(&paths).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn changed_input_is_picked_up() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_inputs(dir.path(), "Player;Tm;MP;PTS;FG%;AST\nA;MIA;30;20;0.5;4\n");

        let mut cache = SeasonCache::default();
        assert_eq!(cache.get_or_load(&paths).unwrap().len(), 1);

        std::fs::write(
            &paths.players,
            "Player;Tm;MP;PTS;FG%;AST\nA;MIA;30;20;0.5;4\nB;MIA;12;6;0.41;1.5\n",
        )
        .unwrap();
        assert_eq!(cache.get_or_load(&paths).unwrap().len(), 2);
    }

    #[test]
    fn failed_load_keeps_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = write_inputs(dir.path(), "Player;Tm;MP;PTS;FG%;AST\nA;MIA;30;20;0.5;4\n");
        paths.team_expected = dir.path().join("missing.csv");

        let mut cache = SeasonCache::default();
        assert!(matches!(cache.get_or_load(&paths), Err(DataError::Io { .. })));
        assert!(cache.entry.is_none());
    }
}
