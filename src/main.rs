use eframe::egui;
use idealgas::app::IdealGasApp;
use idealgas::{Result, SimulationParams};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let params = SimulationParams::from_env()?;

    let threads = num_cpus::get_physical();
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;
    info!(threads, box_size = params.box_size, seed = ?params.seed, "starting");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(params.window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Ideal Gas Simulator",
        native_options,
        Box::new(move |_cc| Ok(Box::new(IdealGasApp::new(params)))),
    )?;
    Ok(())
}
