use std::f64::consts::PI;

use eframe::egui::{Color32, Ui};
use egui_plot::{Line, LineStyle, MarkerShape, Plot, PlotPoint, PlotPoints, Points};

use crate::data::model::{PlayerSeasonRow, TeamComparison};
use crate::state::AppState;

/// Marker area range in square points, smallest to largest value.
const PLAYER_MARKER_AREA: (f64, f64) = (50.0, 400.0);
const TEAM_MARKER_AREA: (f64, f64) = (80.0, 500.0);

/// Radius of a marker whose area scales linearly with `value` over `domain`.
pub fn marker_radius(value: f64, domain: (f64, f64), area: (f64, f64)) -> f32 {
    let (lo, hi) = domain;
    let t = if (hi - lo).abs() < f64::EPSILON || !value.is_finite() {
        0.5
    } else {
        ((value - lo) / (hi - lo)).clamp(0.0, 1.0)
    };
    let a = area.0 + t * (area.1 - area.0);
    (a / PI).sqrt() as f32
}

/// Hover text is carried in the item name.
fn hover_label(name: &str, _value: &PlotPoint) -> String {
    name.to_owned()
}

fn placeholder(ui: &mut Ui, state: &AppState) -> bool {
    if state.dataset.is_some() {
        return false;
    }
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading("No season loaded  (File → Open data folder…)");
    });
    true
}

// ---------------------------------------------------------------------------
// Player performance: minutes vs points
// ---------------------------------------------------------------------------

pub fn player_tooltip(p: &PlayerSeasonRow) -> String {
    let fg = p
        .fg_pct
        .map(|v| format!("{:.1}%", v * 100.0))
        .unwrap_or_else(|| "–".to_string());
    format!(
        "{}\nTeam: {}\nMinutes: {:.1}\nPoints: {:.1}\nFG%: {fg}\nAssists: {:.1}",
        p.player, p.team, p.minutes, p.points, p.assists
    )
}

pub fn player_scatter(ui: &mut Ui, state: &AppState) {
    if placeholder(ui, state) {
        return;
    }

    Plot::new("player_scatter")
        .x_axis_label("Minutes Played per Game")
        .y_axis_label("Points per Game")
        .label_formatter(hover_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for p in state.visible_players() {
                let color = p
                    .fg_pct
                    .map(|v| state.fg_scale.color_for(v))
                    .unwrap_or(Color32::GRAY);
                let points = Points::new(PlotPoints::new(vec![[p.minutes, p.points]]))
                    .name(player_tooltip(p))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .color(color.gamma_multiply(0.85))
                    .radius(marker_radius(p.assists, state.assist_range, PLAYER_MARKER_AREA));
                plot_ui.points(points);
            }
        });
}

// ---------------------------------------------------------------------------
// Team comparisons
// ---------------------------------------------------------------------------

fn team_tooltip(t: &TeamComparison) -> String {
    format!(
        "{} ({})\nWin%: {:.1}%\nExpected: {:.1}% ({:+.1})\nPace: {:.1}\nPPG: {:.1}\ndEFF: {:.1}",
        t.team,
        t.conference,
        t.actual_win_pct * 100.0,
        t.expected_win_pct * 100.0,
        t.win_pct_delta() * 100.0,
        t.pace,
        t.points_per_game,
        t.defensive_rating
    )
}

/// Expected win % on x, actual on y; points above the diagonal beat projections.
pub fn wins_vs_expected(ui: &mut Ui, state: &AppState) {
    if placeholder(ui, state) {
        return;
    }
    let Some(ds) = &state.dataset else { return };

    Plot::new("wins_vs_expected")
        .x_axis_label("Expected Win %")
        .y_axis_label("Actual Win %")
        .label_formatter(hover_label)
        .data_aspect(1.0)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::new(vec![[0.0, 0.0], [1.0, 1.0]]))
                    .name("As projected")
                    .color(Color32::DARK_GRAY)
                    .style(LineStyle::dashed_loose()),
            );
            for t in &ds.teams {
                plot_ui.points(
                    Points::new(PlotPoints::new(vec![[t.expected_win_pct, t.actual_win_pct]]))
                        .name(team_tooltip(t))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(7.0)
                        .color(state.conference_colors.color_for(&t.conference)),
                );
            }
        });
}

/// Pace on x, scoring on y, marker size by defensive quality.
pub fn team_style(ui: &mut Ui, state: &AppState) {
    if placeholder(ui, state) {
        return;
    }
    let Some(ds) = &state.dataset else { return };

    // Lower rating is better defence, so size by the negated rating.
    let quality = ds
        .teams
        .iter()
        .map(|t| -t.defensive_rating)
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((0.0, 0.0));

    Plot::new("team_style")
        .x_axis_label("Pace (possessions per 48 min)")
        .y_axis_label("Points per Game")
        .label_formatter(hover_label)
        .show(ui, |plot_ui| {
            for t in &ds.teams {
                plot_ui.points(
                    Points::new(PlotPoints::new(vec![[t.pace, t.points_per_game]]))
                        .name(team_tooltip(t))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(marker_radius(-t.defensive_rating, quality, TEAM_MARKER_AREA))
                        .color(state.conference_colors.color_for(&t.conference)),
                );
            }
        });
}
