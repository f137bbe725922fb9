#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based iris classifier UI.

use eframe::egui;
use iriser::artifacts::ArtifactStore;
use iriser::egui_app::controller::AppController;
use iriser::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use iriser::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::Vec2 { x: 980.0, y: 680.0 })
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Iriser",
        native_options,
        Box::new(|_cc| {
            let controller = AppController::new(ArtifactStore::new());
            Ok(Box::new(EguiApp::new(controller)))
        }),
    )?;
    Ok(())
}
