/// Data layer: season tables, cleaning, joining and filtering.
///
/// Architecture:
/// ```text
///  players.csv (;  latin-1)   team_stats.csv   team_expected.csv
///        │                          │                 │
///        ▼                          ▼                 ▼
///   ┌──────────┐            ┌──────────────────────────────┐
///   │  loader   │            │  loader                      │
///   └──────────┘            └──────────────────────────────┘
///        │                          │
///        ▼                          ▼
///   ┌──────────┐            ┌──────────┐
///   │  clean    │ TOT dedup  │  teams    │ name-keyed join
///   └──────────┘            └──────────┘
///        └────────────┬─────────────┘
///                     ▼
///            ┌────────────────┐
///            │ SeasonDataset   │  held in `cache` as Arc
///            └────────────────┘
///                     │
///                     ▼
///               ┌──────────┐
///               │  filter   │  minutes + teams → visible indices
///               └──────────┘
/// ```

pub mod cache;
pub mod clean;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod teams;
