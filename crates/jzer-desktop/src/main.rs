//! Salon JZER Desktop
//!
//! The salon's marketing site and the video admin panel in one window.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod files;
mod loader;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use jzer_core::nav::page_title;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = "jzer=debug".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Salon JZER...");

    let window = WindowBuilder::new()
        .with_title(page_title("/"))
        .with_inner_size(LogicalSize::new(1280.0, 860.0));

    dioxus::LaunchBuilder::new()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);
}
