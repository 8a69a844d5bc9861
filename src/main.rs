use eframe::egui;
use jidhr::gui::JidhrApp;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Quranic Arabic Roots")
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([420.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Quranic Arabic Roots",
        options,
        Box::new(|cc| Ok(Box::new(JidhrApp::new(cc)))),
    )
}
