mod app;
mod model;

use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("linkpad=info")),
        )
        .init();

    let settings = app::settings::load_or_default();
    tracing::info!("starting linkpad");

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "linkpad",
        native_options,
        Box::new(|cc| Ok(Box::new(app::DiagramApp::new(cc, settings)))),
    )
}
