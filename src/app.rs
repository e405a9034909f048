use std::path::Path;

use eframe::egui;

use crate::config::{DashboardConfig, CONFIG_FILE};
use crate::state::{AppState, ChartView};
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CourtsideApp {
    pub state: AppState,
}

impl CourtsideApp {
    /// Read the optional config file and load the season once up front.
    pub fn new() -> Self {
        let (config, config_error) = match DashboardConfig::load(Path::new(CONFIG_FILE)) {
            Ok(config) => (config, None),
            Err(e) => {
                log::warn!("Ignoring config: {e}");
                (DashboardConfig::default(), Some(format!("Config ignored: {e}")))
            }
        };

        let mut state = AppState::new(config);
        state.load();
        if state.status_message.is_none() {
            state.status_message = config_error;
        }
        Self { state }
    }
}

impl eframe::App for CourtsideApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: filtered players ----
        if self.state.view == ChartView::Players && self.state.dataset.is_some() {
            egui::TopBottomPanel::bottom("player_table")
                .resizable(true)
                .default_height(220.0)
                .show(ctx, |ui| {
                    table::player_table(ui, &self.state);
                });
        }

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            ChartView::Players => plot::player_scatter(ui, &self.state),
            ChartView::WinsVsExpected => plot::wins_vs_expected(ui, &self.state),
            ChartView::TeamStyle => plot::team_style(ui, &self.state),
        });
    }
}
