// Copyright 2025 the Handwriter Authors
// SPDX-License-Identifier: Apache-2.0

//! Handwriter: annotate hand-drawn letterforms and preview text set with
//! them, built with Xilem

use std::path::PathBuf;

use tracing_subscriber::filter::Directive;
use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use xilem::{EventLoopBuilder, WindowView, Xilem, window};

pub mod config;
pub mod editing;
pub mod model;
pub mod preview;
pub mod scene;
pub mod settings;
pub mod sort;

mod components;
mod data;
mod theme;
mod views;

use config::Settings;
use data::AppState;
use views::workbench;

/// Entry point for the Handwriter application
pub fn run(event_loop: EventLoopBuilder) -> Result<(), EventLoopError> {
    init_tracing();

    let settings_path = AppState::settings_path_from_env();
    let settings = data::load_settings(&settings_path).unwrap_or_else(|e| {
        tracing::warn!("{:#}, using defaults", e);
        Settings::default()
    });
    tracing::info!("Using settings file {}", settings_path.display());

    let mut initial_state = AppState::new(settings_path, settings);
    handle_command_line_args(&mut initial_state);

    let app = Xilem::new(initial_state, app_logic);
    app.run_in(event_loop)?;
    Ok(())
}

/// Logging controlled by `RUST_LOG`, `handwriter=info` by default
fn init_tracing() {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    for directive in ["handwriter=info", "wgpu=warn", "naga=warn"] {
        if let Ok(directive) = directive.parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Open a glyph or font passed on the command line
fn handle_command_line_args(initial_state: &mut AppState) {
    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        return;
    };

    if path.exists() {
        initial_state.open_path(path);
    } else {
        tracing::error!("Path does not exist: {}", path.display());
        tracing::error!("Usage: handwriter [path/to/glyph.glif|path/to/font.toml]");
    }
}

fn app_logic(state: &mut AppState) -> impl Iterator<Item = WindowView<AppState>> + use<> {
    let window_size = LogicalSize::new(1100.0, 900.0);
    let window_view = window(state.main_window_id, "Handwriter", workbench(state));
    let window_with_options = window_view.with_options(|options| {
        options
            .with_initial_inner_size(window_size)
            .on_close(|state: &mut AppState| state.running = false)
    });

    std::iter::once(window_with_options)
}
