//! Coursekit Desktop Application
//!
//! Course authoring shell hosting the course attachment manager.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod config;
mod services;
mod state;
mod theme;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(
        "coursekit=debug"
            .parse()
            .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::INFO.into()),
    );
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Coursekit...");

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Coursekit")
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
