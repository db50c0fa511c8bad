mod app;
mod config;

use std::time::Duration;

use clap::Parser;
use eframe::egui;
use snake_engine::game::GameState;
use snake_engine::logger::init_logger;
use snake_engine::{board, log, SessionRng};

use app::SnakeApp;
use config::{get_config_manager, Config};

#[derive(Parser, Debug)]
#[command(about = "Grid snake desktop client")]
struct Args {
    #[arg(long, default_value = "snake_client.yaml")]
    config: String,

    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger();

    let config: Config = get_config_manager(&args.config).get_config()?;
    let tick_interval = Duration::from_millis(config.tick_interval_ms);

    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting game: seed {}, tick interval {} ms",
        rng.seed(),
        config.tick_interval_ms
    );

    let state = GameState::new(&mut rng);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                board::BOARD_WIDTH as f32 + 16.0,
                board::BOARD_HEIGHT as f32 + 56.0,
            ])
            .with_resizable(false)
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(state, rng, tick_interval)))),
    )?;

    Ok(())
}
