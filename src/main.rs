mod app;
mod model;

fn main() -> eframe::Result<()> {
    env_logger::init();
    let project_id = std::env::args().nth(1).unwrap_or_else(|| "1".to_string());
    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "UIForge",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::CanvasApp::new(cc, project_id)))),
    )
}
