//! Open world demo
//!
//! A square you steer around a large top-down map:
//! - Smoothed follow camera clamped to the world
//! - Static convex obstacles with SAT collision (obstacle variant)
//! - Grid, minimap, name label and health bar
//! - F5 saves, F9 loads, F2 cycles resolution, Esc saves and quits

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod game;
mod input;
mod render;
mod settings;
mod storage;
mod ui;
mod world;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use macroquad::prelude::*;
use tracing::{error, info};

use config::{GameConfig, Variant, ViewportSize};
use game::GameSession;
use input::{Action, InputQueue, InputState, KeyboardSource};
use render::MacroquadRenderer;
use settings::Resolution;
use storage::SaveSlot;

#[derive(Parser, Debug)]
#[command(name = "openworld", version, about = "Top-down open world demo")]
struct Cli {
    /// RON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Which world to play (overrides the config file)
    #[arg(long, value_enum)]
    variant: Option<Variant>,

    /// Where to save and load the player position
    #[arg(long)]
    save_path: Option<PathBuf>,
}

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Open World v{}", VERSION),
        window_width: 800,
        window_height: 600,
        window_resizable: true,
        ..Default::default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn read_config(path: &Path) -> anyhow::Result<GameConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    GameConfig::from_ron(&text).with_context(|| format!("parsing config {}", path.display()))
}

/// Config file (if any) with command-line overrides applied.
///
/// An unreadable file, or a config that `GameSession::check_config` rejects,
/// falls back to the defaults for the requested variant.
fn load_config(cli: &Cli) -> GameConfig {
    let mut config = match &cli.config {
        Some(path) => match read_config(path) {
            Ok(config) => config,
            Err(e) => {
                error!(error = %format!("{:#}", e), "config_rejected_using_defaults");
                GameConfig::for_variant(cli.variant.unwrap_or_default())
            }
        },
        None => GameConfig::for_variant(cli.variant.unwrap_or_default()),
    };

    if let Some(variant) = cli.variant {
        if variant != config.variant && cli.config.is_some() {
            info!(from = config.variant.label(), to = variant.label(), "variant_overridden");
        }
        config.variant = variant;
    }
    if let Some(path) = &cli.save_path {
        config.save_path = path.clone();
    }

    // Checked again after the overrides: the variant decides the world size and obstacles
    if let Err(e) = GameSession::check_config(&config) {
        error!(error = %e, "config_rejected_using_defaults");
        let mut fallback = GameConfig::for_variant(config.variant);
        fallback.save_path = config.save_path;
        return fallback;
    }
    config
}

fn current_viewport() -> ViewportSize {
    ViewportSize::new(screen_width(), screen_height())
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);
        init_tracing();
    }

    let cli = Cli::parse();
    let config = load_config(&cli);

    if config.viewport != ViewportSize::default() {
        request_new_screen_size(config.viewport.width, config.viewport.height);
    }

    let mut session = GameSession::new(&config);
    let slot = SaveSlot::at(&config.save_path);
    let mut renderer = MacroquadRenderer::new(config.minimap.clone());
    let mut keyboard = KeyboardSource::new();
    let mut queue = InputQueue::new();
    let mut input = InputState::new();

    // Esc and the window close button both go through Action::Quit so we can save first
    prevent_quit();

    let (world_width, world_height) = config.world_size();
    info!(
        version = VERSION,
        variant = config.variant.label(),
        policy = ?session.policy(),
        world_width,
        world_height,
        obstacles = session.world().obstacles().len(),
        save_path = %config.save_path.display(),
        "started"
    );

    let mut resolution = Resolution::new(config.viewport.width as u32, config.viewport.height as u32);

    'frames: loop {
        keyboard.poll(&mut queue);
        let viewport = current_viewport();

        for action in queue.drain_into(&mut input) {
            // Save and load failures are logged by the session
            match action {
                Action::Save => {
                    let _ = session.save(&slot);
                }
                Action::Load => {
                    let _ = session.load(&slot, viewport);
                }
                Action::CycleResolution => {
                    resolution = Resolution::next_preset(resolution);
                    request_new_screen_size(resolution.width as f32, resolution.height as f32);
                    info!(resolution = %resolution, "resolution_changed");
                }
                Action::Quit => {
                    let _ = session.save(&slot);
                    let position = session.player().position;
                    info!(ticks = session.tick_count(), x = position.x, y = position.y, "quit");
                    break 'frames;
                }
            }
        }

        session.frame(&input, viewport, &mut renderer);

        next_frame().await;
    }
}
