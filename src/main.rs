#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod audio_device;
mod audio_engine;
mod audio_error;
mod audio_io;
mod controls;
mod dsp_components;
mod params;
mod settings;
mod ui;

use crate::app::TinnitusApp;
use crate::params::ParamStore;
use anyhow::Context;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    // Set RUST_LOG=debug to see every parameter change
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("Tinnitus Explorer starting up");

    let settings = settings::load_settings();
    let params = Arc::new(ParamStore::new());
    let xrun_count = Arc::new(AtomicUsize::new(0));

    // Without a working output stream there is nothing to explore.
    let audio = audio_io::init_and_run_stream(&settings, params.clone(), xrun_count.clone())
        .context("Failed to start audio output")?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([520.0, 560.0]),
        ..Default::default()
    };

    let run_result = eframe::run_native(
        "Tinnitus Explorer",
        native_options,
        Box::new(move |_cc| Ok(Box::new(TinnitusApp::new(params, audio, xrun_count)))),
    );

    if let Err(e) = run_result {
        return Err(anyhow::anyhow!("Eframe run error: {}", e));
    }

    log::info!("Tinnitus Explorer shutting down");
    Ok(())
}
