use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, Outcome};

const HINT: &str = "Examples:\n//;\\n1;2;3\n//[***]\\n1***2***3\n1,2\\n3\n1,2,3";

const OK_TEXT: Color32 = Color32::from_rgb(0x2e, 0x7d, 0x32);
const OK_FILL: Color32 = Color32::from_rgb(0xe8, 0xf5, 0xe8);
const ERR_TEXT: Color32 = Color32::from_rgb(0xd3, 0x2f, 0x2f);
const ERR_FILL: Color32 = Color32::from_rgb(0xff, 0xeb, 0xee);

// ---------------------------------------------------------------------------
// Calculator form (central panel)
// ---------------------------------------------------------------------------

/// Render the input form and the outcome of the last calculation.
pub fn calculator_form(ui: &mut Ui, state: &mut AppState) {
    ui.heading("String Calculator");
    ui.add_space(8.0);

    ui.label("Enter numbers (comma, newline, or custom delimiters):");
    ui.add(
        egui::TextEdit::multiline(&mut state.input)
            .hint_text(HINT)
            .desired_rows(5)
            .desired_width(f32::INFINITY)
            .code_editor(),
    );

    if ui.button("Calculate").clicked() {
        state.calculate();
    }

    ui.add_space(12.0);

    if let Some(outcome) = &state.outcome {
        outcome_frame(ui, outcome);
    }
}

fn outcome_frame(ui: &mut Ui, outcome: &Outcome) {
    let (text, fill) = match outcome {
        Outcome::Sum(_) => (OK_TEXT, OK_FILL),
        Outcome::Error(_) => (ERR_TEXT, ERR_FILL),
    };
    egui::Frame::default()
        .fill(fill)
        .inner_margin(10.0)
        .corner_radius(4.0)
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(outcome.to_string()).strong().color(text));
        });
}
