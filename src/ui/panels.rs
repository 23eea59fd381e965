use eframe::egui::{self, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("Edit", |ui: &mut Ui| {
            if ui.button("Clear").clicked() {
                log::debug!("Form cleared");
                state.clear();
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(RichText::new("String Calculator").strong());

        if let Some(outcome) = &state.outcome {
            ui.separator();
            ui.label(if outcome.is_error() { "last: error" } else { "last: ok" });
        }
    });
}
