use eframe::egui;
use mnemo::gui::MnemoApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Mnemo")
            .with_inner_size([540.0, 780.0])
            .with_min_inner_size([420.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native("Mnemo", options, Box::new(|cc| Ok(Box::new(MnemoApp::new(cc)))))
}
