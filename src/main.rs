use eframe::egui;
use photo_quest::QuestApp;
use photo_quest::app::layout::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MIN_HEIGHT, MIN_WIDTH};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([DEFAULT_WIDTH, DEFAULT_HEIGHT])
            .with_min_inner_size([MIN_WIDTH, MIN_HEIGHT])
            .with_resizable(true),
        ..Default::default()
    };
    eframe::run_native(
        "Photo Quest",
        options,
        Box::new(|_cc| Ok(Box::new(QuestApp::new()))),
    )
}
