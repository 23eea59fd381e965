use eframe::egui;
use string_calculator::app::CalculatorApp;

const WINDOW_SIZE: [f32; 2] = [520.0, 420.0];
const MIN_WINDOW_SIZE: [f32; 2] = [360.0, 280.0];

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "String Calculator",
        options,
        Box::new(|cc| Ok(Box::new(CalculatorApp::new(cc)))),
    )
}
