use eframe::egui;
use flipdeck::gui::QuizApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([520.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Flashcard Quiz",
        options,
        Box::new(|cc| Ok(Box::new(QuizApp::new(cc)))),
    )
}
