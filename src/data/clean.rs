use std::collections::HashSet;

use super::model::PlayerSeasonRow;

/// Collapse traded players to their `TOT` line.
///
/// A player listed with team `TOT` also has one partial line per team they
/// played for; those partial lines are dropped. Players without a `TOT` line
/// are kept as they are. Input order is preserved.
pub fn clean_player_table(rows: Vec<PlayerSeasonRow>) -> Vec<PlayerSeasonRow> {
    let traded: HashSet<String> = rows
        .iter()
        .filter(|r| r.is_season_total())
        .map(|r| r.player.clone())
        .collect();

    rows.into_iter()
        .filter(|r| r.is_season_total() || !traded.contains(&r.player))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::data::model::player;

    fn keys(rows: &[PlayerSeasonRow]) -> Vec<(&str, &str, f64)> {
        rows.iter()
            .map(|r| (r.player.as_str(), r.team.as_str(), r.minutes))
            .collect()
    }

    fn traded_pair() -> Vec<PlayerSeasonRow> {
        vec![
            player("A", "TOT", 30.0),
            player("A", "LAL", 15.0),
            player("A", "BOS", 18.0),
            player("B", "NYK", 25.0),
        ]
    }

    #[test]
    fn traded_player_keeps_only_total_line() {
        let clean = clean_player_table(traded_pair());
        assert_eq!(keys(&clean), vec![("A", "TOT", 30.0), ("B", "NYK", 25.0)]);
    }

    #[test]
    fn total_line_listed_after_fragments_still_wins() {
        let rows = vec![
            player("Dennis Schröder", "BRK", 27.0),
            player("Dennis Schröder", "TOR", 31.0),
            player("Dennis Schröder", "TOT", 29.6),
            player("Jalen Brunson", "NYK", 35.4),
        ];
        let clean = clean_player_table(rows);
        assert_eq!(
            keys(&clean),
            vec![("Dennis Schröder", "TOT", 29.6), ("Jalen Brunson", "NYK", 35.4)]
        );
    }

    #[test]
    fn lone_total_line_is_retained() {
        let clean = clean_player_table(vec![player("C", "TOT", 12.0)]);
        assert_eq!(keys(&clean), vec![("C", "TOT", 12.0)]);
    }

    #[test]
    fn one_line_per_player_and_never_a_fragment() {
        let rows = vec![
            player("P1", "MIL", 20.0),
            player("P2", "PHO", 8.0),
            player("P2", "TOT", 10.0),
            player("P2", "WAS", 12.0),
            player("P3", "DEN", 33.0),
            player("P4", "CHI", 5.0),
            player("P4", "TOT", 6.0),
            player("P4", "SAC", 7.0),
            player("P4", "UTA", 6.5),
        ];
        let distinct: BTreeMap<&str, usize> = rows.iter().fold(BTreeMap::new(), |mut m, r| {
            *m.entry(r.player.as_str()).or_default() += 1;
            m
        });

        let clean = clean_player_table(rows.clone());
        assert!(clean.len() <= rows.len());
        assert_eq!(clean.len(), distinct.len());
        for name in distinct.keys() {
            let hits: Vec<_> = clean.iter().filter(|r| r.player == *name).collect();
            assert_eq!(hits.len(), 1, "{name} should appear once");
            let has_total = rows.iter().any(|r| r.player == *name && r.is_season_total());
            if has_total {
                assert!(hits[0].is_season_total(), "{name} should use its TOT line");
            }
        }
    }

    #[test]
    fn empty_input() {
        assert!(clean_player_table(Vec::new()).is_empty());
    }
}
