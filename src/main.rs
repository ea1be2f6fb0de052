use anyhow::Result;
use log::info;

use roomview::{app::RoomViewApp, config::ViewerConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = ViewerConfig::from_env();
    if let Some(path) = std::env::args_os().nth(1) {
        config = config.with_model_path(path);
    }
    if let Some(path) = &config.model_path {
        info!("Imported mesh: {}", path.display());
    }

    RoomViewApp::new(config)?.run()
}
