use std::path::PathBuf;

/// Errors raised while loading or preparing season data.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(
        "team tables disagree: only in actual [{}], only in expected [{}]",
        .only_actual.join(", "),
        .only_expected.join(", ")
    )]
    TeamMismatch {
        only_actual: Vec<String>,
        only_expected: Vec<String>,
    },

    #[error("team '{team}' appears more than once in the {table} table")]
    DuplicateTeam { team: String, table: &'static str },
}

pub type Result<T> = std::result::Result<T, DataError>;
