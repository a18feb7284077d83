//! Skill Gomoku GUI
//!
//! Play against the heuristic AI or another player on one board.

use std::path::Path;

use skill_gomoku::ui::SkillGomokuApp;
use skill_gomoku::AppConfig;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const CONFIG_PATH: &str = "skill-gomoku.toml";

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("skill_gomoku=info")),
        )
        .init();

    let config = AppConfig::load_or_default(Path::new(CONFIG_PATH)).unwrap_or_else(|err| {
        error!(%err, path = CONFIG_PATH, "bad config, using defaults");
        AppConfig::default()
    });
    info!(?config, "starting");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([760.0, 560.0])
            .with_title("Skill Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Skill Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(SkillGomokuApp::new(cc, &config)))),
    )
}
