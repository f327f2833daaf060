mod app;
mod config;

use clap::Parser;
use common::config::{ConfigManager, FileContentConfigProvider};
use common::games::SessionRng;
use common::{log, logger};
use eframe::egui;

use app::SnakeApp;
use config::ClientConfig;

#[derive(Parser)]
#[command(name = "snake_client")]
struct Args {
    /// Path to the YAML client config. Defaults are used and written
    /// back when the file does not exist yet.
    #[arg(long, default_value = "snake_client.yaml")]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager: ConfigManager<FileContentConfigProvider, ClientConfig> =
        ConfigManager::from_yaml_file(&args.config);
    let config = config_manager.get_config()?;
    config_manager.set_config(&config)?;
    log!(
        "Loaded config from {}: tick interval {} ms",
        args.config,
        config.tick_interval_ms
    );

    let rng = SessionRng::from_random();
    log!("Session seed: {}", rng.seed());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 540.0])
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(&config, rng)))),
    )?;

    Ok(())
}
