use eframe::egui;

use crate::state::AppState;
use crate::ui::{form, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CalculatorApp {
    pub state: AppState,
}

impl CalculatorApp {
    /// Restore the last session's input, if eframe has one stored.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let state = cc
            .storage
            .and_then(|storage| eframe::get_value::<AppState>(storage, eframe::APP_KEY))
            .unwrap_or_default();
        if !state.input.is_empty() {
            log::debug!("Restored {} byte(s) of input", state.input.len());
        }
        Self { state }
    }
}

impl eframe::App for CalculatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: form ----
        egui::CentralPanel::default().show(ctx, |ui| {
            form::calculator_form(ui, &mut self.state);
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.state);
    }
}
