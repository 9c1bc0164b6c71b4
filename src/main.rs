#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("eminent-site")
    })
}

/// Eminent Global Logistics - marketing site desktop shell
#[derive(Parser, Debug)]
#[command(name = "eminent-desktop")]
#[command(about = "Eminent Global Logistics - Reliable. Scalable. Borderless.")]
struct Args {
    /// Data directory for preference storage
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("eminent-site")
    });

    let _ = DATA_DIR.set(data_dir.clone());

    tracing::info!("Starting Eminent Global Logistics with data dir: {:?}", data_dir);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Eminent Global Logistics")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
