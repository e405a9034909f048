use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::color::viridis;
use crate::data::filter::MINUTES_RANGE;
use crate::state::{AppState, ChartView};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = state.dataset.clone() else {
        ui.label("No season loaded.");
        return;
    };

    match state.view {
        ChartView::Players => {}
        ChartView::WinsVsExpected | ChartView::TeamStyle => {
            conference_legend(ui, state);
            return;
        }
    }

    ui.strong("Minimum minutes played per game");
    let mut minutes = state.filter.min_minutes();
    if ui
        .add(Slider::new(&mut minutes, MINUTES_RANGE).step_by(1.0).integer())
        .changed()
    {
        state.set_min_minutes(minutes);
    }
    ui.separator();

    fg_legend(ui, state);
    ui.separator();

    let n_selected = state.filter.teams.len();
    let header = if n_selected == 0 {
        "Teams  (all)".to_string()
    } else {
        format!("Teams  ({n_selected}/{})", dataset.team_codes.len())
    };
    ui.horizontal(|ui: &mut Ui| {
        ui.strong(header);
        if ui
            .add_enabled(n_selected > 0, egui::Button::new("All teams").small())
            .clicked()
        {
            state.clear_teams();
        }
    });

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for code in &dataset.team_codes {
                let mut checked = state.filter.teams.contains(code);
                if ui.checkbox(&mut checked, code.as_str()).changed() {
                    state.toggle_team(code);
                }
            }
        });
}

fn fg_legend(ui: &mut Ui, state: &AppState) {
    ui.strong("Field goal %");
    let scale = state.fg_scale;
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("{:.0}%", scale.min * 100.0));
        for step in 0..=8 {
            ui.label(RichText::new("■").color(viridis(step as f32 / 8.0)));
        }
        ui.label(format!("{:.0}%", scale.max * 100.0));
    });
    ui.small("Marker size: assists per game");
}

fn conference_legend(ui: &mut Ui, state: &AppState) {
    ui.strong("Conference");
    for (label, color) in state.conference_colors.legend_entries() {
        ui.label(RichText::new(format!("● {label}")).color(color));
    }
    if state.view == ChartView::TeamStyle {
        ui.add_space(4.0);
        ui.small("Marker size: defensive quality (lower dEFF is larger)");
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open data folder…").clicked() {
                open_folder_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload data").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        for view in ChartView::ALL {
            ui.selectable_value(&mut state.view, view, view.label());
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} players, {} visible, {} teams",
                ds.len(),
                state.visible_indices.len(),
                ds.teams.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn open_folder_dialog(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Open season data folder")
        .set_directory(&state.config.data_dir)
        .pick_folder();

    if let Some(dir) = folder {
        state.set_data_dir(dir);
    }
}
