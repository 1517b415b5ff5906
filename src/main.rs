// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! StatCode - Main Entry Point
//!
//! A multi-language code playground: HTML, CSS, JavaScript and Markdown
//! editors with a live composed preview, named projects and a detachable
//! editor window. Built with Rust and egui.

mod app;
mod config;
mod document;
mod editor;
mod error;
mod export;
mod files;
mod i18n;
mod layout;
mod markdown;
mod preview;
mod project;
mod state;
mod storage;
mod sync;
mod theme;
mod timers;
mod ui;

use app::StatCodeApp;
use log::info;

/// Application name constant.
const APP_NAME: &str = "StatCode";

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting {}", APP_NAME);

    let viewport = eframe::egui::ViewportBuilder::default()
        .with_title(APP_NAME)
        .with_inner_size([1200.0, 800.0])
        .with_min_inner_size([600.0, 400.0]);

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        native_options,
        Box::new(|cc| Ok(Box::new(StatCodeApp::new(cc)))),
    )
}
