use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use super::error::{DataError, Result};
use super::model::{PlayerSeasonRow, SeasonDataset, TeamProjection, TeamRecord};
use crate::config::DataPaths;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load all three tables and prepare the season dataset.
pub fn load_season(paths: &DataPaths) -> Result<SeasonDataset> {
    let players = load_players(&paths.players)?;
    let actual = load_team_records(&paths.team_actual)?;
    let expected = load_team_projections(&paths.team_expected)?;

    let dataset = SeasonDataset::prepare(players, &actual, &expected)?;
    log::info!(
        "Loaded {} players ({} traded-player fragments dropped) and {} teams",
        dataset.len(),
        dataset.fragments_removed(),
        dataset.teams.len()
    );
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Player table: `;`-delimited, Latin-1
// ---------------------------------------------------------------------------

pub fn load_players(path: &Path) -> Result<Vec<PlayerSeasonRow>> {
    let bytes = std::fs::read(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode_latin1(&bytes);
    read_rows(text.as_bytes(), b';').map_err(|source| DataError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

/// Latin-1 maps every byte straight to the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

// ---------------------------------------------------------------------------
// Team tables: comma-delimited UTF-8
// ---------------------------------------------------------------------------

pub fn load_team_records(path: &Path) -> Result<Vec<TeamRecord>> {
    load_comma_separated(path)
}

pub fn load_team_projections(path: &Path) -> Result<Vec<TeamProjection>> {
    load_comma_separated(path)
}

fn load_comma_separated<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = std::fs::File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_rows(file, b',').map_err(|source| DataError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Shared CSV plumbing
// ---------------------------------------------------------------------------

/// Deserialize every record of a headed CSV stream.
/// Surrounding whitespace is trimmed from headers and fields.
fn read_rows<T: DeserializeOwned, R: Read>(
    reader: R,
    delimiter: u8,
) -> std::result::Result<Vec<T>, csv::Error> {
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .from_reader(reader)
        .into_deserialize()
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::model::Conference;

    fn write_file(dir: &Path, name: &str, contents: &[u8]) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents).unwrap();
        path
    }

    const PLAYERS: &[u8] = b"Rk;Player;Pos;Age;Tm;G;GS;MP;FG;FGA;FG%;AST;TRB;STL;BLK;PTS\n\
1;Precious Achiuwa;PF-C;24;TOT;74;18;21.9;3.2;6.3;0.501;1.1;6.6;0.6;0.9;7.6\n\
1;Precious Achiuwa;C;24;TOR;25;0;17.5;3.1;6.8;0.459;0.9;5.4;0.5;0.5;6.8\n\
1;Precious Achiuwa;PF;24;NYK;49;18;24.2;3.2;6.1;0.525;1.2;7.2;0.6;1.1;7.9\n\
2;J\xe9r\xe9mie Test;SG;22;BOS;3;0;2.0;0.0;0.0;;0.3;0.3;0.0;0.0;0.0\n";

    const ACTUAL: &str = "TEAM,WIN%,CONF,PACE,PPG,dEFF\n\
Boston Celtics ,0.780,East,98.5,120.6,110.6\n\
Denver Nuggets,0.695,West,97.1,114.9,112.3\n";

    const EXPECTED: &str = "TEAM_NAME,W_PCT\n\
Denver Nuggets,0.65\n\
Boston Celtics,0.66\n";

    #[test]
    fn player_table_decodes_latin1_and_blank_percentages() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "players.csv", PLAYERS);

        let rows = load_players(&path).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].player, "Precious Achiuwa");
        assert_eq!(rows[0].team, "TOT");
        assert_eq!(rows[0].minutes, 21.9);
        assert_eq!(rows[0].fg_pct, Some(0.501));
        assert_eq!(rows[0].position.as_deref(), Some("PF-C"));
        assert_eq!(rows[0].games, Some(74));
        assert_eq!(rows[0].rebounds, Some(6.6));

        assert_eq!(rows[3].player, "Jérémie Test");
        assert_eq!(rows[3].fg_pct, None);
    }

    #[test]
    fn optional_player_columns_may_be_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "players.csv",
            b"Player;Tm;MP;PTS;FG%;AST\nA;LAL;30.1;22.4;0.48;5.5\n",
        );

        let rows = load_players(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].age, None);
        assert_eq!(rows[0].position, None);
        assert_eq!(rows[0].assists, 5.5);
    }

    #[test]
    fn missing_required_column_is_a_csv_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "players.csv", b"Player;Tm;PTS\nA;LAL;22.4\n");
        assert!(matches!(load_players(&path), Err(DataError::Csv { .. })));
    }

    #[test]
    fn missing_file_is_an_io_error_naming_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        let err = load_team_records(&path).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
        assert!(err.to_string().contains("nope.csv"));
    }

    #[test]
    fn team_tables_are_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "teams.csv", ACTUAL.as_bytes());

        let teams = load_team_records(&path).unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].team, "Boston Celtics");
        assert_eq!(teams[0].conference, Conference::East);
        assert_eq!(teams[0].defensive_rating, 110.6);
        assert_eq!(teams[1].conference, Conference::West);
    }

    #[test]
    fn full_season_load() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths {
            players: write_file(dir.path(), "players.csv", PLAYERS),
            team_actual: write_file(dir.path(), "actual.csv", ACTUAL.as_bytes()),
            team_expected: write_file(dir.path(), "expected.csv", EXPECTED.as_bytes()),
        };

        let season = load_season(&paths).unwrap();
        assert_eq!(season.len(), 2);
        assert_eq!(season.fragments_removed(), 2);
        assert_eq!(season.players[0].team, "TOT");
        assert_eq!(season.teams[0].team, "Boston Celtics");
        assert_eq!(season.teams[0].expected_win_pct, 0.66);
        assert_eq!(season.teams[1].expected_win_pct, 0.65);
    }

    #[test]
    fn mismatched_team_files_fail_the_load() {
        let dir = tempfile::tempdir().unwrap();
        let paths = DataPaths {
            players: write_file(dir.path(), "players.csv", PLAYERS),
            team_actual: write_file(dir.path(), "actual.csv", ACTUAL.as_bytes()),
            team_expected: write_file(dir.path(), "expected.csv", b"TEAM_NAME,W_PCT\nBoston Celtics,0.66\n"),
        };
        assert!(matches!(load_season(&paths), Err(DataError::TeamMismatch { .. })));
    }
}
