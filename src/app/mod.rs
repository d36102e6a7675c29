mod state;
pub mod theme;
pub mod ui;

pub use state::Dashboard;

/// eframe entry point around the dashboard state
pub struct DashboardApp {
    pub dashboard: Dashboard,
}

impl DashboardApp {
    pub fn new(dashboard: Dashboard) -> Self {
        Self { dashboard }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::draw_ui(&mut self.dashboard, ctx);
    }
}
