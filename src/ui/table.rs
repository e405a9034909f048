use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::model::PlayerSeasonRow;
use crate::state::AppState;

const HEADERS: [&str; 12] = [
    "Player", "Team", "Pos", "Age", "G", "MP", "PTS", "FG%", "AST", "TRB", "STL", "BLK",
];

fn opt(v: Option<f64>) -> String {
    v.map(|v| format!("{v:.1}")).unwrap_or_default()
}

fn count(v: Option<u32>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

fn cells(p: &PlayerSeasonRow) -> [String; 12] {
    [
        p.player.clone(),
        p.team.clone(),
        p.position.clone().unwrap_or_default(),
        count(p.age),
        count(p.games),
        format!("{:.1}", p.minutes),
        format!("{:.1}", p.points),
        p.fg_pct.map(|v| format!("{:.1}%", v * 100.0)).unwrap_or_default(),
        format!("{:.1}", p.assists),
        opt(p.rebounds),
        opt(p.steals),
        opt(p.blocks),
    ]
}

/// Table of the players currently passing the filter.
pub fn player_table(ui: &mut Ui, state: &AppState) {
    let Some(ds) = &state.dataset else { return };
    let rows = &state.visible_indices;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::initial(180.0).at_least(100.0))
        .columns(Column::auto().at_least(40.0), HEADERS.len() - 1)
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let player = &ds.players[rows[row.index()]];
                for text in cells(player) {
                    row.col(|ui| {
                        ui.label(text);
                    });
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::player;

    #[test]
    fn missing_values_render_blank() {
        let mut p = player("A", "TOT", 21.94);
        p.fg_pct = None;
        let row = cells(&p);
        assert_eq!(row[0], "A");
        assert_eq!(row[2], "");
        assert_eq!(row[3], "");
        assert_eq!(row[5], "21.9");
        assert_eq!(row[7], "");
        assert_eq!(row[9], "");

        p.age = Some(24);
        p.rebounds = Some(6.64);
        p.fg_pct = Some(0.5012);
        let row = cells(&p);
        assert_eq!(row[3], "24");
        assert_eq!(row[7], "50.1%");
        assert_eq!(row[9], "6.6");
    }
}
