//! Cubix: a main menu rendered with sprites and driven by a controller.

mod config;
mod main_menu;

use anyhow::Result;

use cubix_engine::device::GpuInit;
use cubix_engine::input::{ControllerChain, GamepadController, KeyboardController};
use cubix_engine::logging::{init_logging, LoggingConfig};
use cubix_engine::window::{Runtime, RuntimeConfig};

use crate::config::GameConfig;
use crate::main_menu::MainMenuApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = GameConfig::from_env();
    log::info!("Cubix starting (assets: {})", config.asset_dir.display());

    // A connected pad wins; the keyboard covers slot 0 otherwise.
    let mut controller = ControllerChain::new();
    if let Some(pads) = GamepadController::try_open() {
        controller = controller.with(pads);
    }
    let controller = controller.with(KeyboardController::default());

    Runtime::run(
        RuntimeConfig::default(),
        GpuInit::default(),
        controller,
        move |ctx| MainMenuApp::new(ctx, config),
    )
}
